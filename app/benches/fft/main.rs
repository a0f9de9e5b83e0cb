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
use rustfft::FftPlanner;
use stagefft::{Capability, DftPlan, FftDirection, PlanOptions};
use std::time::Duration;

fn check_power_group(c: &mut BenchmarkGroup<WallTime>, n: usize, group: String) {
    let mut input_power = vec![Complex::<f64>::default(); n];
    for z in input_power.iter_mut() {
        *z = Complex {
            re: rand::rng().random(),
            im: rand::rng().random(),
        };
    }

    c.bench_function(format!("rustfft {group}d").as_str(), |b| {
        let plan = FftPlanner::new().plan_fft_forward(input_power.len());
        let mut working = input_power.to_vec();
        b.iter(|| {
            plan.process(&mut working);
        })
    });

    c.bench_function(format!("stagefft {group}d").as_str(), |b| {
        let options = PlanOptions::default().with_capability(Capability::detect());
        let plan = DftPlan::<f64>::with_options(input_power.len(), options).unwrap();
        let mut temp = plan.allocate_temp().unwrap();
        let mut output = vec![Complex::default(); n];
        b.iter(|| {
            plan.execute(&mut output, &input_power, &mut temp, FftDirection::Forward)
                .unwrap();
        })
    });

    c.bench_function(format!("stagefft inplace {group}d").as_str(), |b| {
        let plan = DftPlan::<f64>::new(input_power.len()).unwrap();
        let mut temp = plan.allocate_temp().unwrap();
        let mut working = input_power.to_vec();
        b.iter(|| {
            plan.execute_inplace(&mut working, &mut temp, FftDirection::Forward)
                .unwrap();
        })
    });

    let s = input_power
        .iter()
        .map(|&x| Complex::new(x.re as f32, x.im as f32))
        .collect::<Vec<_>>();

    c.bench_function(format!("rustfft {group}s").as_str(), |b| {
        let plan = FftPlanner::new().plan_fft_forward(s.len());
        let mut working = s.to_vec();
        b.iter(|| {
            plan.process(&mut working);
        })
    });

    c.bench_function(format!("stagefft {group}s").as_str(), |b| {
        let options = PlanOptions::default().with_capability(Capability::detect());
        let plan = DftPlan::<f32>::with_options(s.len(), options).unwrap();
        let mut temp = plan.allocate_temp().unwrap();
        let mut output = vec![Complex::default(); n];
        b.iter(|| {
            plan.execute(&mut output, &s, &mut temp, FftDirection::Forward)
                .unwrap();
        })
    });
}

fn check_recursion_threshold(c: &mut BenchmarkGroup<WallTime>, n: usize) {
    let input = (0..n)
        .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
        .collect::<Vec<Complex<f64>>>();
    for threshold in [256usize, 1024, 4096, usize::MAX] {
        c.bench_function(format!("stagefft {n} threshold {threshold}").as_str(), |b| {
            let options = PlanOptions::default().with_recursion_threshold(threshold);
            let plan = DftPlan::<f64>::with_options(n, options).unwrap();
            let mut temp = plan.allocate_temp().unwrap();
            let mut output = vec![Complex::default(); n];
            b.iter(|| {
                plan.execute(&mut output, &input, &mut temp, FftDirection::Forward)
                    .unwrap();
            })
        });
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft");
    let c = group
        .measurement_time(Duration::from_millis(750))
        .warm_up_time(Duration::from_millis(750));

    check_power_group(c, 60, "60".to_string());
    check_power_group(c, 210, "210".to_string());
    check_power_group(c, 1000, "1000".to_string());
    check_power_group(c, 1024, "1024".to_string());
    check_power_group(c, 2187, "2187".to_string());
    check_power_group(c, 4096, "4096".to_string());
    check_power_group(c, 15625, "15625".to_string());
    check_power_group(c, 65536, "65536".to_string());

    check_recursion_threshold(c, 1 << 18);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
