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
use crate::stage::{StageInfo, StageKernel, StageSource};
use crate::{FftDirection, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Final permutation of a multi-level plan, moves digit-reversed DIF output to
/// natural order.
///
/// Position `Σ p_j * s_j` holds frequency `Σ p_j * w_j`, where `s_j` is the
/// column stride of level `j` and `w_j` the product of all preceding radices.
/// The target index is tracked with a mixed-radix counter, so no index table is kept.
/// Never runs in place.
#[derive(Debug, Clone)]
pub(crate) struct DigitReorder {
    radices: Vec<usize>,
    weights: Vec<usize>,
    size: usize,
}

impl DigitReorder {
    pub(crate) fn new(radices: &[usize], size: usize) -> DigitReorder {
        let mut weights = Vec::with_capacity(radices.len());
        let mut weight = 1usize;
        for &radix in radices {
            weights.push(weight);
            weight *= radix;
        }
        DigitReorder {
            radices: radices.to_vec(),
            weights,
            size,
        }
    }
}

impl StageKernel for DigitReorder {
    fn info(&self) -> StageInfo {
        StageInfo {
            name: "digit-reorder",
            radix: 0,
            stage_size: self.size,
            can_inplace: false,
            need_reorder: false,
            ..StageInfo::default()
        }
    }

    fn initialize<T: FftSample>(&self, _: &mut [Complex<T>])
    where
        f64: AsPrimitive<T>,
    {
    }

    fn execute<T: FftSample>(
        &self,
        _: FftDirection,
        _: &[Complex<T>],
        out: &mut [Complex<T>],
        source: StageSource<'_, T>,
        _: &mut [Complex<T>],
    ) {
        let StageSource::Buffer(input) = source else {
            unreachable!("digit reorder is always routed through distinct buffers");
        };

        let mut digits = [0usize; usize::BITS as usize];
        let digits = &mut digits[..self.radices.len()];
        let mut k = 0usize;

        for &value in input[..self.size].iter() {
            out[k] = value;
            // last digit runs fastest
            for ((digit, &radix), &weight) in digits
                .iter_mut()
                .zip(self.radices.iter())
                .zip(self.weights.iter())
                .rev()
            {
                *digit += 1;
                k += weight;
                if *digit < radix {
                    break;
                }
                *digit = 0;
                k -= radix * weight;
            }
        }
    }
}
