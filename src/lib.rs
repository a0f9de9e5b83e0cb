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
//! Staged mixed-radix DFT.
//!
//! A [`DftPlan`] decomposes its size into radices 4, 2, 3, 5 and any larger
//! prime, builds one decimation-in-frequency stage per radix and finishes with
//! a digit-reversal pass. All twiddles live in a single arena owned by the plan.
//! Large sizes run their first levels depth-first so inner blocks stay in cache.
//!
//! [`RealDftPlan`] handles even-length real signals through a complex plan of
//! half the size, with [`multiply`] and friends operating on its packed spectra.
#![cfg_attr(docsrs, feature(doc_cfg))]
mod butterflies;
mod complex_fma;
mod err;
mod factory;
mod mixed_radix;
mod plan;
mod prime_factors;
mod r2c;
mod reorder;
mod spectrum_arithmetic;
mod stage;
mod traits;
mod util;

pub use err::StageFftError;
pub use factory::{Capability, DEFAULT_RECURSION_THRESHOLD, DftOrder, PlanOptions};
pub use plan::{DftPlan, MAX_RECURSION_DEPTH};
pub use r2c::{DftPackFormat, RealDftPlan};
pub use spectrum_arithmetic::{multiply, multiply_accumulate, multiply_add};
pub use stage::StageInfo;
pub use traits::FftSample;

use std::fmt::{Display, Formatter};

/// Sign of the exponent: forward uses `exp(-2πi jk/N)`, inverse `exp(+2πi jk/N)`.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}

impl Display for FftDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FftDirection::Forward => f.write_str("FftDirection::Forward"),
            FftDirection::Inverse => f.write_str("FftDirection::Inverse"),
        }
    }
}
