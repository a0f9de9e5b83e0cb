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
use crate::err::try_vec;
use crate::factory::{PlanOptions, make_stages};
use crate::stage::{DftStage, StageInfo, StageSource};
use crate::util::{validate_length, validate_scratch};
use crate::{Capability, DftOrder, FftDirection, FftSample, StageFftError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use std::fmt::{Display, Formatter};

/// Longest run of consecutive recursive stages a plan may hold.
pub const MAX_RECURSION_DEPTH: usize = 32;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Slot {
    Input,
    Output,
    Scratch,
}

/// Buffers of one execution.
struct Buffers<'a, T> {
    /// `None` when executing in place.
    input: Option<&'a [Complex<T>]>,
    out: &'a mut [Complex<T>],
    scratch: &'a mut [Complex<T>],
    temp: &'a mut [Complex<T>],
    in_scratch: bool,
}

/// Complex DFT of a fixed size.
///
/// A plan owns every twiddle and root table its stages use in a single arena
/// built once at construction. Execution is read-only on the plan and never
/// allocates, so a single plan can be shared between threads as long as each
/// thread brings its own temp buffer of [`DftPlan::temp_size`] elements.
///
/// Neither direction is normalized: `inverse(forward(x)) == size * x`.
///
/// Each prime factor above 5 is evaluated as a direct DFT of that size, so a
/// large prime size costs `O(size^2)`.
///
/// ```
/// use num_complex::Complex;
/// use stagefft::{DftPlan, FftDirection};
/// let plan = DftPlan::<f64>::new(12).unwrap();
/// let mut temp = plan.allocate_temp().unwrap();
/// let input = vec![Complex::new(1.0, 0.0); 12];
/// let mut out = vec![Complex::new(0.0, 0.0); 12];
/// plan.execute(&mut out, &input, &mut temp, FftDirection::Forward).unwrap();
/// assert!((out[0].re - 12.0).abs() < 1e-12);
/// ```
pub struct DftPlan<T> {
    size: usize,
    temp_size: usize,
    scratch_size: usize,
    order: DftOrder,
    capability: Capability,
    pub(crate) data: Vec<Complex<T>>,
    stages: Vec<DftStage>,
}

impl<T: FftSample> DftPlan<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(size: usize) -> Result<DftPlan<T>, StageFftError> {
        DftPlan::with_options(size, PlanOptions::default())
    }

    pub fn with_options(size: usize, options: PlanOptions) -> Result<DftPlan<T>, StageFftError> {
        let stages = make_stages(size, &options)?;
        DftPlan::assemble(size, stages, &options, None)
    }

    /// Lays out the coefficient arena for `stages` followed by `trailing`,
    /// initializes every stage and resolves buffer routing.
    pub(crate) fn assemble(
        size: usize,
        mut stages: Vec<DftStage>,
        options: &PlanOptions,
        trailing: Option<&mut DftStage>,
    ) -> Result<DftPlan<T>, StageFftError> {
        validate_recursion(&stages)?;

        let trailing_size = trailing.as_ref().map_or(0, |x| x.info.data_size);
        let data_size = stages.iter().map(|x| x.info.data_size).sum::<usize>() + trailing_size;
        let mut data = try_vec![Complex::zero(); data_size];

        let mut offset = 0usize;
        for stage in stages.iter_mut().chain(trailing) {
            stage.data = offset..offset + stage.info.data_size;
            stage.initialize(&mut data[stage.data.clone()]);
            offset = stage.data.end;
        }

        // Walking backwards: the last stage lands in the output, every stage
        // that cannot run in place flips the destination of its predecessor.
        let mut to_scratch = false;
        let mut scratch_needed = false;
        for stage in stages.iter_mut().rev() {
            stage.info.to_scratch = to_scratch;
            scratch_needed |= to_scratch;
            if !stage.info.can_inplace {
                to_scratch = !to_scratch;
            }
        }

        let first_inplace = stages.first().is_none_or(|x| x.info.can_inplace);
        let scratch_size = if scratch_needed || !first_inplace {
            size
        } else {
            0
        };
        let stage_temp = stages.iter().map(|x| x.info.temp_size).max().unwrap_or(0);

        Ok(DftPlan {
            size,
            temp_size: stage_temp + scratch_size,
            scratch_size,
            order: options.order,
            capability: options.capability,
            data,
            stages,
        })
    }
}

fn validate_recursion(stages: &[DftStage]) -> Result<(), StageFftError> {
    let mut run = 0usize;
    for stage in stages.iter() {
        if stage.info.recursion {
            run += 1;
            if run > MAX_RECURSION_DEPTH {
                return Err(StageFftError::RecursionTooDeep(
                    stages.iter().filter(|x| x.info.recursion).count(),
                    MAX_RECURSION_DEPTH,
                ));
            }
        } else {
            run = 0;
        }
    }
    Ok(())
}

impl<T: FftSample> DftPlan<T> {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Elements of temp storage every execution needs.
    pub fn temp_size(&self) -> usize {
        self.temp_size
    }

    pub fn order(&self) -> DftOrder {
        self.order
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// Descriptors of every stage, in execution order.
    pub fn stages(&self) -> impl Iterator<Item = &StageInfo> {
        self.stages.iter().map(|x| &x.info)
    }

    /// Zeroed temp buffer of [`DftPlan::temp_size`] elements.
    pub fn allocate_temp(&self) -> Result<Vec<Complex<T>>, StageFftError> {
        Ok(try_vec![Complex::zero(); self.temp_size])
    }

    /// Transforms the first [`DftPlan::size`] elements of `input` into `out`.
    pub fn execute(
        &self,
        out: &mut [Complex<T>],
        input: &[Complex<T>],
        temp: &mut [Complex<T>],
        direction: FftDirection,
    ) -> Result<(), StageFftError> {
        validate_length!(input, self.size, InvalidInputLength);
        validate_length!(out, self.size, InvalidOutputLength);
        let temp = validate_scratch!(temp, self.temp_size);
        self.execute_dft(direction, out, Some(input), temp);
        Ok(())
    }

    /// Transforms the first [`DftPlan::size`] elements of `buffer` in place.
    pub fn execute_inplace(
        &self,
        buffer: &mut [Complex<T>],
        temp: &mut [Complex<T>],
        direction: FftDirection,
    ) -> Result<(), StageFftError> {
        validate_length!(buffer, self.size, InvalidOutputLength);
        let temp = validate_scratch!(temp, self.temp_size);
        self.execute_dft(direction, buffer, None, temp);
        Ok(())
    }

    /// Runs the stage pipeline, `input == None` means `out` also holds the input.
    /// Buffer lengths are already validated.
    pub(crate) fn execute_dft(
        &self,
        direction: FftDirection,
        out: &mut [Complex<T>],
        input: Option<&[Complex<T>]>,
        temp: &mut [Complex<T>],
    ) {
        let out = &mut out[..self.size];
        let input = input.map(|x| &x[..self.size]);

        if let [stage] = self.stages.as_slice() {
            if stage.info.can_inplace || input.is_some() {
                let source = input.map_or(StageSource::InPlace, StageSource::Buffer);
                stage.execute(direction, &self.data, out, source, temp);
                return;
            }
        }

        let (temp, scratch) =
            temp[..self.temp_size].split_at_mut(self.temp_size - self.scratch_size);

        let first = &self.stages[0].info;
        let in_scratch = input.is_none() && !first.can_inplace && !first.to_scratch;
        if in_scratch {
            scratch.copy_from_slice(out);
        }

        let mut buffers = Buffers {
            input,
            out,
            scratch,
            temp,
            in_scratch,
        };

        let count = self.stages.len();
        let mut stack = [0usize; MAX_RECURSION_DEPTH];
        let mut depth = 0usize;
        while depth < count {
            if !self.stages[depth].info.recursion {
                self.run_stage(depth, 0, direction, &mut buffers);
                depth += 1;
                continue;
            }

            let mut offset = 0usize;
            let mut rdepth = depth;
            let mut max_depth = depth;
            loop {
                let info = &self.stages[rdepth].info;
                let level = rdepth - depth;
                if stack[level] == info.repeats {
                    stack[level] = 0;
                    rdepth -= 1;
                } else {
                    self.run_stage(rdepth, offset, direction, &mut buffers);
                    offset += info.out_offset;
                    stack[level] += 1;
                    if rdepth + 1 < count && self.stages[rdepth + 1].info.recursion {
                        rdepth += 1;
                    } else {
                        max_depth = rdepth;
                    }
                }
                if rdepth == depth {
                    break;
                }
            }
            stack[..=max_depth - depth].fill(0);
            depth = max_depth + 1;
        }
    }

    fn select_in(&self, index: usize, in_scratch: bool) -> Slot {
        if index == 0 {
            if in_scratch { Slot::Scratch } else { Slot::Input }
        } else if self.stages[index - 1].info.to_scratch {
            Slot::Scratch
        } else {
            Slot::Output
        }
    }

    fn run_stage(
        &self,
        index: usize,
        offset: usize,
        direction: FftDirection,
        buffers: &mut Buffers<'_, T>,
    ) {
        let stage = &self.stages[index];
        let data = self.data.as_slice();
        let slot_in = match (self.select_in(index, buffers.in_scratch), buffers.input) {
            (Slot::Input, None) => Slot::Output,
            (slot, _) => slot,
        };
        match (slot_in, stage.info.to_scratch) {
            (Slot::Input, false) => stage.execute(
                direction,
                data,
                &mut buffers.out[offset..],
                buffers
                    .input
                    .map_or(StageSource::InPlace, |x| StageSource::Buffer(&x[offset..])),
                buffers.temp,
            ),
            (Slot::Input, true) => stage.execute(
                direction,
                data,
                &mut buffers.scratch[offset..],
                buffers
                    .input
                    .map_or(StageSource::InPlace, |x| StageSource::Buffer(&x[offset..])),
                buffers.temp,
            ),
            (Slot::Output, false) => stage.execute(
                direction,
                data,
                &mut buffers.out[offset..],
                StageSource::InPlace,
                buffers.temp,
            ),
            (Slot::Output, true) => stage.execute(
                direction,
                data,
                &mut buffers.scratch[offset..],
                StageSource::Buffer(&buffers.out[offset..]),
                buffers.temp,
            ),
            (Slot::Scratch, false) => stage.execute(
                direction,
                data,
                &mut buffers.out[offset..],
                StageSource::Buffer(&buffers.scratch[offset..]),
                buffers.temp,
            ),
            (Slot::Scratch, true) => stage.execute(
                direction,
                data,
                &mut buffers.scratch[offset..],
                StageSource::InPlace,
                buffers.temp,
            ),
        }
    }
}

impl<T> Display for DftPlan<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "DftPlan size={} temp_size={} data_size={} capability={:?}\n",
            self.size,
            self.temp_size,
            self.data.len(),
            self.capability
        ))?;
        for stage in self.stages.iter() {
            f.write_fmt(format_args!("  {}\n", stage.info))?;
        }
        Ok(())
    }
}
