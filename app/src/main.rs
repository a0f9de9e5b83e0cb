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
use num_complex::Complex;
use num_traits::Zero;
use rand::Rng;
use realfft::RealFftPlanner;
use rustfft::FftPlanner;
use stagefft::{Capability, DftPackFormat, DftPlan, FftDirection, PlanOptions, RealDftPlan};
use std::hint::black_box;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Stats {
    pub samples: usize,
    pub mean: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
}

fn measure<F: FnMut()>(samples: usize, mut f: F) -> Stats {
    let mut durations = Vec::with_capacity(samples);
    for _ in 0..samples {
        let start = Instant::now();
        f();
        durations.push(start.elapsed());
    }
    durations.sort_unstable();
    let total: Duration = durations.iter().sum();
    Stats {
        samples,
        mean: total / samples as u32,
        median: durations[samples / 2],
        min: durations[0],
        max: durations[samples - 1],
    }
}

fn max_error(a: &[Complex<f64>], b: &[Complex<f64>]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(a, b)| (a - b).norm())
        .fold(0f64, f64::max)
}

fn check_complex(n: usize, options: PlanOptions) {
    let input = (0..n)
        .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
        .collect::<Vec<Complex<f64>>>();

    let plan = DftPlan::<f64>::with_options(n, options).unwrap();
    print!("{plan}");
    let mut temp = plan.allocate_temp().unwrap();
    let mut out = vec![Complex::zero(); n];
    plan.execute(&mut out, &input, &mut temp, FftDirection::Forward)
        .unwrap();

    let mut reference = input.clone();
    FftPlanner::new().plan_fft_forward(n).process(&mut reference);
    println!("max error vs rustfft: {:e}", max_error(&out, &reference));

    let stats = measure(200, || {
        plan.execute(&mut out, &input, &mut temp, FftDirection::Forward)
            .unwrap();
        black_box(&out);
    });
    println!("stagefft {n}: {stats:?}");

    let rustfft_plan = FftPlanner::new().plan_fft_forward(n);
    let mut working = input.clone();
    let stats = measure(200, || {
        rustfft_plan.process(&mut working);
        black_box(&working);
    });
    println!("rustfft {n}: {stats:?}");
}

fn check_real(n: usize, options: PlanOptions) {
    let input = (0..n)
        .map(|_| rand::rng().random::<f64>())
        .collect::<Vec<f64>>();

    let plan = RealDftPlan::<f64>::with_options(n, DftPackFormat::Ccs, options).unwrap();
    let mut temp = plan.allocate_temp().unwrap();
    let mut out = vec![Complex::zero(); plan.complex_length()];
    plan.execute_forward(&mut out, &input, &mut temp).unwrap();

    let r2c = RealFftPlanner::<f64>::new().plan_fft_forward(n);
    let mut working = input.clone();
    let mut reference = r2c.make_output_vec();
    r2c.process(&mut working, &mut reference).unwrap();
    println!(
        "real {n}: max error vs realfft: {:e}",
        max_error(&out, &reference)
    );

    let mut restored = vec![0f64; n];
    plan.execute_inverse(&mut restored, &out, &mut temp).unwrap();
    let round_trip = restored
        .iter()
        .zip(input.iter())
        .map(|(a, b)| (a / n as f64 - b).abs())
        .fold(0f64, f64::max);
    println!("real {n}: round trip error: {round_trip:e}");
}

fn main() {
    let sizes = std::env::args()
        .skip(1)
        .filter_map(|x| x.parse::<usize>().ok())
        .collect::<Vec<_>>();
    let sizes = if sizes.is_empty() {
        vec![60, 1024, 2310, 4096, 6000, 65536]
    } else {
        sizes
    };

    let options = PlanOptions::default().with_capability(Capability::detect());
    println!("capability: {:?}", options.capability);

    for &n in sizes.iter() {
        check_complex(n, options);
        if n % 2 == 0 {
            check_real(n, options);
        }
    }
}
