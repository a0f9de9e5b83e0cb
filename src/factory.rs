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
use crate::StageFftError;
use crate::complex_fma::{FmaMul, ScalarMul};
use crate::mixed_radix::DifStage;
use crate::prime_factors::radix_decomposition;
use crate::reorder::DigitReorder;
use crate::stage::{DftStage, StageKind};

/// Plans larger than this run their first levels depth-first.
pub const DEFAULT_RECURSION_THRESHOLD: usize = 4096;

/// Arithmetic flavour the stage kernels are compiled for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Capability {
    #[default]
    Scalar,
    /// Fused multiply-add complex products.
    Fma,
}

impl Capability {
    /// Whether the running CPU can execute kernels of this flavour.
    pub fn is_available(self) -> bool {
        match self {
            Capability::Scalar => true,
            Capability::Fma => {
                #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
                {
                    std::arch::is_x86_feature_detected!("fma")
                }
                #[cfg(target_arch = "aarch64")]
                {
                    true
                }
                #[cfg(not(any(
                    target_arch = "x86_64",
                    target_arch = "x86",
                    target_arch = "aarch64"
                )))]
                {
                    false
                }
            }
        }
    }

    /// Best flavour available at runtime.
    pub fn detect() -> Capability {
        if Capability::Fma.is_available() {
            Capability::Fma
        } else {
            Capability::Scalar
        }
    }
}

/// Requested output ordering. Output is produced in natural order either way.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum DftOrder {
    #[default]
    Normal,
    Internal,
}

/// Construction parameters of a plan.
///
/// ```
/// use stagefft::{Capability, PlanOptions};
/// let options = PlanOptions::default()
///     .with_capability(Capability::detect())
///     .with_recursion_threshold(1024);
/// assert_eq!(options.recursion_threshold, 1024);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PlanOptions {
    pub order: DftOrder,
    pub capability: Capability,
    pub recursion_threshold: usize,
}

impl Default for PlanOptions {
    fn default() -> Self {
        PlanOptions {
            order: DftOrder::Normal,
            capability: Capability::Scalar,
            recursion_threshold: DEFAULT_RECURSION_THRESHOLD,
        }
    }
}

impl PlanOptions {
    pub fn with_order(self, order: DftOrder) -> Self {
        PlanOptions { order, ..self }
    }

    pub fn with_capability(self, capability: Capability) -> Self {
        PlanOptions { capability, ..self }
    }

    pub fn with_recursion_threshold(self, recursion_threshold: usize) -> Self {
        PlanOptions {
            recursion_threshold,
            ..self
        }
    }
}

fn dif_stage(
    capability: Capability,
    radices: &[usize],
    block_len: usize,
    blocks: usize,
) -> DftStage {
    match capability {
        Capability::Scalar => DftStage::new(StageKind::Dif(DifStage::<ScalarMul>::new(
            radices, block_len, blocks,
        ))),
        Capability::Fma => DftStage::new(StageKind::DifFma(DifStage::<FmaMul>::new(
            radices, block_len, blocks,
        ))),
    }
}

/// Decomposes `size` into the stage sequence of a complex plan.
///
/// Sizes above the recursion threshold get one recursive stage per leading radix
/// while the block is still above the threshold, then a single recursive stage
/// finishing every remaining radix on its block. Smaller sizes get one
/// breadth-first stage per radix. Any plan with more than one radix ends with
/// a digit reorder.
pub(crate) fn make_stages(
    size: usize,
    options: &PlanOptions,
) -> Result<Vec<DftStage>, StageFftError> {
    if size == 0 {
        return Err(StageFftError::ZeroSizedFft);
    }
    if !options.capability.is_available() {
        return Err(StageFftError::UnsupportedCapability(options.capability));
    }

    let radices = radix_decomposition(size);
    let capability = options.capability;

    if radices.len() <= 1 {
        let mut stage = dif_stage(capability, &radices, size, 1);
        stage.info.need_reorder = false;
        return Ok(vec![stage]);
    }

    let mut stages = Vec::with_capacity(radices.len() + 1);

    if size > options.recursion_threshold {
        let mut len = size;
        let mut repeats = 1usize;
        for (level, &radix) in radices.iter().enumerate() {
            let is_last = level + 1 == radices.len();
            if len > options.recursion_threshold && !is_last {
                let mut stage = dif_stage(capability, &[radix], len, 1);
                stage.info.recursion = true;
                stage.info.repeats = repeats;
                stages.push(stage);
                repeats = radix;
                len /= radix;
            } else {
                let mut stage = dif_stage(capability, &radices[level..], len, 1);
                stage.info.recursion = true;
                stage.info.repeats = repeats;
                stage.info.out_offset = len;
                stages.push(stage);
                break;
            }
        }
    } else {
        let mut len = size;
        for &radix in radices.iter() {
            stages.push(dif_stage(capability, &[radix], len, size / len));
            len /= radix;
        }
    }

    stages.push(DftStage::new(StageKind::Reorder(DigitReorder::new(
        &radices, size,
    ))));

    Ok(stages)
}
