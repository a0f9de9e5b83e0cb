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
use crate::complex_fma::{FmaMul, ScalarMul};
use crate::mixed_radix::DifStage;
use crate::r2c::RealPackStage;
use crate::reorder::DigitReorder;
use crate::{FftDirection, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::fmt::{Display, Formatter};
use std::ops::Range;

/// Geometry and routing flags of one pipeline stage.
///
/// Sizes are counted in complex elements. Obtained from
/// [`DftPlan::stages`](crate::DftPlan::stages) for inspection only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StageInfo {
    pub name: &'static str,
    /// Butterfly size, `0` for stages that only move data.
    pub radix: usize,
    pub stage_size: usize,
    pub data_size: usize,
    pub temp_size: usize,
    pub repeats: usize,
    pub out_offset: usize,
    pub blocks: usize,
    pub recursion: bool,
    pub can_inplace: bool,
    pub to_scratch: bool,
    pub need_reorder: bool,
}

impl Default for StageInfo {
    fn default() -> Self {
        StageInfo {
            name: "unnamed",
            radix: 0,
            stage_size: 0,
            data_size: 0,
            temp_size: 0,
            repeats: 1,
            out_offset: 0,
            blocks: 1,
            recursion: false,
            can_inplace: true,
            to_scratch: false,
            need_reorder: true,
        }
    }
}

impl Display for StageInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{}: radix={} stage_size={} data_size={} temp_size={} repeats={} out_offset={} blocks={} recursion={} can_inplace={} to_scratch={} need_reorder={}",
            self.name,
            self.radix,
            self.stage_size,
            self.data_size,
            self.temp_size,
            self.repeats,
            self.out_offset,
            self.blocks,
            self.recursion,
            self.can_inplace,
            self.to_scratch,
            self.need_reorder
        ))
    }
}

/// Where a stage reads from.
#[derive(Copy, Clone)]
pub(crate) enum StageSource<'a, T> {
    /// Read from the output buffer itself.
    InPlace,
    Buffer(&'a [Complex<T>]),
}

impl<'a, T> StageSource<'a, T> {
    #[inline]
    pub(crate) fn as_option(self) -> Option<&'a [Complex<T>]> {
        match self {
            StageSource::InPlace => None,
            StageSource::Buffer(buffer) => Some(buffer),
        }
    }
}

/// Initialize-once / execute-many contract every kernel fulfils.
pub(crate) trait StageKernel {
    fn info(&self) -> StageInfo;

    /// Fills this stage's slice of the coefficient arena.
    fn initialize<T: FftSample>(&self, data: &mut [Complex<T>])
    where
        f64: AsPrimitive<T>;

    /// `data` is this stage's slice of the arena, `temp` holds at least
    /// `info().temp_size` elements.
    fn execute<T: FftSample>(
        &self,
        direction: FftDirection,
        data: &[Complex<T>],
        out: &mut [Complex<T>],
        source: StageSource<'_, T>,
        temp: &mut [Complex<T>],
    );
}

pub(crate) enum StageKind {
    Dif(DifStage<ScalarMul>),
    DifFma(DifStage<FmaMul>),
    Reorder(DigitReorder),
    RealPack(RealPackStage<ScalarMul>),
    RealPackFma(RealPackStage<FmaMul>),
}

macro_rules! dispatch_kind {
    ($kind: expr, $kernel: ident => $body: expr) => {
        match $kind {
            StageKind::Dif($kernel) => $body,
            StageKind::DifFma($kernel) => $body,
            StageKind::Reorder($kernel) => $body,
            StageKind::RealPack($kernel) => $body,
            StageKind::RealPackFma($kernel) => $body,
        }
    };
}

pub(crate) struct DftStage {
    pub(crate) info: StageInfo,
    /// Range of the owning plan's arena holding this stage's coefficients.
    pub(crate) data: Range<usize>,
    kind: StageKind,
}

impl DftStage {
    pub(crate) fn new(kind: StageKind) -> DftStage {
        let info = dispatch_kind!(&kind, kernel => kernel.info());
        DftStage {
            info,
            data: 0..0,
            kind,
        }
    }

    pub(crate) fn initialize<T: FftSample>(&self, data: &mut [Complex<T>])
    where
        f64: AsPrimitive<T>,
    {
        dispatch_kind!(&self.kind, kernel => kernel.initialize(data))
    }

    #[inline]
    pub(crate) fn execute<T: FftSample>(
        &self,
        direction: FftDirection,
        arena: &[Complex<T>],
        out: &mut [Complex<T>],
        source: StageSource<'_, T>,
        temp: &mut [Complex<T>],
    ) {
        let data = &arena[self.data.clone()];
        dispatch_kind!(&self.kind, kernel => kernel.execute(direction, data, out, source, temp))
    }
}
