#![no_main]

use libfuzzer_sys::fuzz_target;
use num_complex::Complex;
use stagefft::{DftPlan, FftDirection, PlanOptions};

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    size: u16,
    threshold: u8,
    re: f64,
    im: f64,
}

fuzz_target!(|data: Target| {
    if data.size == 0 || data.size > 15100 {
        return;
    }
    let size = data.size as usize;
    let options = PlanOptions::default().with_recursion_threshold(data.threshold as usize);
    let plan = DftPlan::<f64>::with_options(size, options).unwrap();
    let mut temp = plan.allocate_temp().unwrap();
    let src = (0..size)
        .map(|i| Complex::new(data.re + i as f64, data.im - i as f64))
        .collect::<Vec<_>>();
    let mut out_of_place = vec![Complex::default(); size];
    plan.execute(&mut out_of_place, &src, &mut temp, FftDirection::Inverse)
        .unwrap();
    let mut in_place = src.clone();
    plan.execute_inplace(&mut in_place, &mut temp, FftDirection::Inverse)
        .unwrap();
    if out_of_place
        .iter()
        .all(|x| x.re.is_finite() && x.im.is_finite())
    {
        assert_eq!(out_of_place, in_place);
    }
});
