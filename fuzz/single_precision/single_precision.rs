#![no_main]

use libfuzzer_sys::fuzz_target;
use num_complex::Complex;
use stagefft::{DftPlan, FftDirection, PlanOptions};

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    size: u16,
    threshold: u8,
    re: f32,
    im: f32,
}

fuzz_target!(|data: Target| {
    if data.size == 0 || data.size > 15100 {
        return;
    }
    let size = data.size as usize;
    let options = PlanOptions::default().with_recursion_threshold(data.threshold as usize);
    let plan = DftPlan::<f32>::with_options(size, options).unwrap();
    let mut temp = vec![Complex::default(); plan.temp_size()];
    let mut chunk = vec![Complex::new(data.re, data.im); size];
    plan.execute_inplace(&mut chunk, &mut temp, FftDirection::Forward)
        .unwrap();
    plan.execute_inplace(&mut chunk, &mut temp, FftDirection::Inverse)
        .unwrap();
    let mut test_target = vec![Complex::new(data.re, data.im); size];
    plan.execute(&mut test_target, &chunk, &mut temp, FftDirection::Forward)
        .unwrap();
});
