#![no_main]

use libfuzzer_sys::fuzz_target;
use num_complex::Complex;
use stagefft::{DftPackFormat, RealDftPlan};

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    size: u16,
    perm: bool,
    re: f32,
}

fuzz_target!(|data: Target| {
    if data.size == 0 || data.size > 10000 || data.size % 2 != 0 {
        return;
    }
    if !data.re.is_finite() || data.re > 10000. || data.re < 1e-10 {
        return;
    }
    let fmt = if data.perm {
        DftPackFormat::Perm
    } else {
        DftPackFormat::Ccs
    };
    let plan = RealDftPlan::<f32>::new(data.size as usize, fmt).unwrap();
    let mut temp = plan.allocate_temp().unwrap();
    let mut chunk = vec![data.re; data.size as usize];
    let mut complex = vec![Complex::new(0.0, 0.0); plan.complex_length()];
    for (i, chunk) in chunk.iter_mut().enumerate() {
        *chunk = data.re + i as f32 * 0.1;
    }
    plan.execute_forward(&mut complex, &chunk, &mut temp).unwrap();
    plan.execute_inverse(&mut chunk, &complex, &mut temp).unwrap();
});
