/*
 * // Copyright (c) Radzivon Bartoshyk 9/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use criterion::measurement::WallTime;
use criterion::{BenchmarkGroup, Criterion, criterion_group, criterion_main};
use num_complex::Complex;
use rand::Rng;
use realfft::RealFftPlanner;
use stagefft::{DftPackFormat, RealDftPlan, multiply};
use std::time::Duration;

fn check_power_groupd(c: &mut BenchmarkGroup<WallTime>, n: usize, group: String) {
    let mut input_power = vec![f64::default(); n];
    for z in input_power.iter_mut() {
        *z = rand::rng().random();
    }

    c.bench_function(format!("realfft {group}d").as_str(), |b| {
        let plan = RealFftPlanner::<f64>::new().plan_fft_forward(n);
        let mut working = input_power.to_vec();
        let mut output = plan.make_output_vec();
        b.iter(|| {
            plan.process(&mut working, &mut output).unwrap();
        })
    });

    c.bench_function(format!("stagefft {group}d").as_str(), |b| {
        let plan = RealDftPlan::<f64>::new(n, DftPackFormat::Ccs).unwrap();
        let mut temp = plan.allocate_temp().unwrap();
        let mut output = vec![Complex::new(0.0, 0.0); plan.complex_length()];
        b.iter(|| {
            plan.execute_forward(&mut output, &input_power, &mut temp)
                .unwrap();
        })
    });
}

fn check_power_groups(c: &mut BenchmarkGroup<WallTime>, n: usize, group: String) {
    let input_power = (0..n)
        .map(|_| rand::rng().random::<f32>())
        .collect::<Vec<f32>>();

    c.bench_function(format!("stagefft {group}s").as_str(), |b| {
        let plan = RealDftPlan::<f32>::new(n, DftPackFormat::Perm).unwrap();
        let mut temp = plan.allocate_temp().unwrap();
        let mut output = vec![Complex::new(0.0, 0.0); plan.complex_length()];
        b.iter(|| {
            plan.execute_forward(&mut output, &input_power, &mut temp)
                .unwrap();
        })
    });
}

fn check_convolution(c: &mut BenchmarkGroup<WallTime>, n: usize) {
    let signal = (0..n)
        .map(|_| rand::rng().random::<f32>())
        .collect::<Vec<f32>>();
    let kernel = (0..n)
        .map(|_| rand::rng().random::<f32>())
        .collect::<Vec<f32>>();

    c.bench_function(format!("stagefft convolution {n}").as_str(), |b| {
        let plan = RealDftPlan::<f32>::new(n, DftPackFormat::Perm).unwrap();
        let mut temp = plan.allocate_temp().unwrap();
        let mut kernel_spectrum = vec![Complex::new(0.0, 0.0); plan.complex_length()];
        plan.execute_forward(&mut kernel_spectrum, &kernel, &mut temp)
            .unwrap();
        let mut spectrum = vec![Complex::new(0.0, 0.0); plan.complex_length()];
        let mut product = vec![Complex::new(0.0, 0.0); plan.complex_length()];
        let mut output = vec![0f32; n];
        b.iter(|| {
            plan.execute_forward(&mut spectrum, &signal, &mut temp)
                .unwrap();
            multiply(&mut product, &spectrum, &kernel_spectrum, DftPackFormat::Perm).unwrap();
            plan.execute_inverse(&mut output, &product, &mut temp)
                .unwrap();
        })
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rfft");
    let c = group
        .measurement_time(Duration::from_millis(750))
        .warm_up_time(Duration::from_millis(750));

    for n in [8usize, 16, 64, 256, 1024, 1800, 4096, 16384, 65536] {
        check_power_groupd(c, n, n.to_string());
        check_power_groups(c, n, n.to_string());
    }

    check_convolution(c, 4096);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
