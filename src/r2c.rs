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
use crate::complex_fma::{ComplexMul, FmaMul, ScalarMul};
use crate::err::try_vec;
use crate::factory::{PlanOptions, make_stages};
use crate::plan::DftPlan;
use crate::stage::{DftStage, StageInfo, StageKernel, StageKind, StageSource};
use crate::util::{compute_twiddle, validate_length, validate_scratch};
use crate::{Capability, FftDirection, FftSample, StageFftError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

/// Layout of a real signal's half spectrum.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum DftPackFormat {
    /// `N/2 + 1` bins, `X[0]` and `X[N/2]` with zero imaginary parts.
    #[default]
    Ccs,
    /// `N/2` bins, the real Nyquist value is stored in the imaginary part of bin 0.
    Perm,
}

impl DftPackFormat {
    /// Complex elements a spectrum of a real signal of length `size` occupies.
    pub fn complex_length(self, size: usize) -> usize {
        match self {
            DftPackFormat::Ccs => size / 2 + 1,
            DftPackFormat::Perm => size / 2,
        }
    }
}

#[inline(always)]
fn load<T: Copy>(out: &[Complex<T>], source: StageSource<'_, T>, index: usize) -> Complex<T> {
    match source {
        StageSource::InPlace => out[index],
        StageSource::Buffer(src) => src[index],
    }
}

#[inline(always)]
fn rotate_270<T: FftSample>(z: Complex<T>) -> Complex<T> {
    Complex { re: z.im, im: -z.re }
}

#[inline(always)]
fn rotate_90<T: FftSample>(z: Complex<T>) -> Complex<T> {
    Complex { re: -z.im, im: z.re }
}

/// Converts between the half-length complex transform of even/odd sample pairs
/// and the half spectrum of the real signal.
///
/// Holds `w^k = exp(-2πik/N)` for `k` in `0..=N/4`.
#[derive(Debug, Clone)]
pub(crate) struct RealPackStage<M> {
    size: usize,
    fmt: DftPackFormat,
    multiplier: PhantomData<M>,
}

impl<M: ComplexMul> RealPackStage<M> {
    pub(crate) fn new(size: usize, fmt: DftPackFormat) -> RealPackStage<M> {
        RealPackStage {
            size,
            fmt,
            multiplier: PhantomData,
        }
    }

    /// `Z` of length `N/2` in `out[..N/2]` or `source` into the packed spectrum.
    fn pack<T: FftSample>(
        &self,
        twiddles: &[Complex<T>],
        out: &mut [Complex<T>],
        source: StageSource<'_, T>,
    ) {
        let half = self.size / 2;
        let z0 = load(out, source, 0);

        for (k, &twiddle) in twiddles.iter().enumerate().take(half / 2 + 1).skip(1) {
            let j = half - k;
            let a = load(out, source, k);
            let b = load(out, source, j).conj();
            let even = (a + b).scale(T::HALF);
            let odd = (a - b).scale(T::HALF);
            let t = rotate_270(M::mul(odd, twiddle));
            out[k] = even + t;
            if j != k {
                out[j] = (even - t).conj();
            }
        }

        let dc = z0.re + z0.im;
        let nyquist = z0.re - z0.im;
        match self.fmt {
            DftPackFormat::Ccs => {
                out[0] = Complex::new(dc, T::zero());
                out[half] = Complex::new(nyquist, T::zero());
            }
            DftPackFormat::Perm => out[0] = Complex::new(dc, nyquist),
        }
    }

    /// Packed spectrum in `out` or `source` back into `Z`, scaled by 2.
    fn unpack<T: FftSample>(
        &self,
        twiddles: &[Complex<T>],
        out: &mut [Complex<T>],
        source: StageSource<'_, T>,
    ) {
        let half = self.size / 2;
        let x0 = load(out, source, 0);
        let (dc, nyquist) = match self.fmt {
            DftPackFormat::Ccs => (x0.re, load(out, source, half).re),
            DftPackFormat::Perm => (x0.re, x0.im),
        };

        for (k, &twiddle) in twiddles.iter().enumerate().take(half / 2 + 1).skip(1) {
            let j = half - k;
            let a = load(out, source, k);
            let b = load(out, source, j).conj();
            let even = a + b;
            let odd = a - b;
            let t = rotate_90(M::mul(odd, twiddle.conj()));
            out[k] = even + t;
            if j != k {
                out[j] = (even - t).conj();
            }
        }

        out[0] = Complex::new(dc + nyquist, dc - nyquist);
    }
}

impl<M: ComplexMul> StageKernel for RealPackStage<M> {
    fn info(&self) -> StageInfo {
        StageInfo {
            name: match self.fmt {
                DftPackFormat::Ccs => "real-pack-ccs",
                DftPackFormat::Perm => "real-pack-perm",
            },
            radix: 0,
            stage_size: self.size,
            data_size: self.size / 4 + 1,
            need_reorder: false,
            ..StageInfo::default()
        }
    }

    fn initialize<T: FftSample>(&self, data: &mut [Complex<T>])
    where
        f64: AsPrimitive<T>,
    {
        for (k, dst) in data.iter_mut().enumerate() {
            *dst = compute_twiddle(k, self.size, FftDirection::Forward);
        }
    }

    fn execute<T: FftSample>(
        &self,
        direction: FftDirection,
        data: &[Complex<T>],
        out: &mut [Complex<T>],
        source: StageSource<'_, T>,
        _: &mut [Complex<T>],
    ) {
        match direction {
            FftDirection::Forward => self.pack(data, out, source),
            FftDirection::Inverse => self.unpack(data, out, source),
        }
    }
}

/// Real-input DFT of an even size `N`, computed through a complex plan of `N/2`.
///
/// Forward maps `N` reals to a packed half spectrum, inverse maps it back.
/// Like [`DftPlan`] neither direction is normalized, so a round trip
/// multiplies by `N`.
///
/// ```
/// use num_complex::Complex;
/// use stagefft::{DftPackFormat, RealDftPlan};
/// let plan = RealDftPlan::<f32>::new(16, DftPackFormat::Ccs).unwrap();
/// let mut temp = plan.allocate_temp().unwrap();
/// let signal = vec![1.0f32; 16];
/// let mut spectrum = vec![Complex::new(0.0, 0.0); plan.complex_length()];
/// plan.execute_forward(&mut spectrum, &signal, &mut temp).unwrap();
/// assert!((spectrum[0].re - 16.0).abs() < 1e-5);
/// ```
pub struct RealDftPlan<T> {
    plan: DftPlan<T>,
    size: usize,
    fmt: DftPackFormat,
    fmt_stage: DftStage,
}

impl<T: FftSample> RealDftPlan<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(size: usize, fmt: DftPackFormat) -> Result<RealDftPlan<T>, StageFftError> {
        RealDftPlan::with_options(size, fmt, PlanOptions::default())
    }

    pub fn with_options(
        size: usize,
        fmt: DftPackFormat,
        options: PlanOptions,
    ) -> Result<RealDftPlan<T>, StageFftError> {
        if size == 0 {
            return Err(StageFftError::ZeroSizedFft);
        }
        if size % 2 != 0 {
            return Err(StageFftError::OddRealLength(size));
        }
        let stages = make_stages(size / 2, &options)?;
        let mut fmt_stage = match options.capability {
            Capability::Scalar => DftStage::new(StageKind::RealPack(
                RealPackStage::<ScalarMul>::new(size, fmt),
            )),
            Capability::Fma => DftStage::new(StageKind::RealPackFma(
                RealPackStage::<FmaMul>::new(size, fmt),
            )),
        };
        let plan = DftPlan::assemble(size / 2, stages, &options, Some(&mut fmt_stage))?;
        Ok(RealDftPlan {
            plan,
            size,
            fmt,
            fmt_stage,
        })
    }
}

impl<T: FftSample> RealDftPlan<T> {
    /// Number of real samples.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn format(&self) -> DftPackFormat {
        self.fmt
    }

    /// Number of complex bins of the packed spectrum.
    pub fn complex_length(&self) -> usize {
        self.fmt.complex_length(self.size)
    }

    /// Elements of temp storage both directions need.
    pub fn temp_size(&self) -> usize {
        self.plan.temp_size() + self.size / 2
    }

    /// Descriptors of the inner complex stages followed by the packing stage.
    pub fn stages(&self) -> impl Iterator<Item = &StageInfo> {
        self.plan.stages().chain(std::iter::once(&self.fmt_stage.info))
    }

    pub fn allocate_temp(&self) -> Result<Vec<Complex<T>>, StageFftError> {
        Ok(try_vec![Complex::zero(); self.temp_size()])
    }

    /// `size` reals of `input` into `complex_length` bins of `out`.
    pub fn execute_forward(
        &self,
        out: &mut [Complex<T>],
        input: &[T],
        temp: &mut [Complex<T>],
    ) -> Result<(), StageFftError> {
        validate_length!(input, self.size, InvalidInputLength);
        validate_length!(out, self.complex_length(), InvalidOutputLength);
        let temp = validate_scratch!(temp, self.temp_size());
        let half = self.size / 2;

        for (dst, pair) in out.iter_mut().zip(input.chunks_exact(2)).take(half) {
            *dst = Complex::new(pair[0], pair[1]);
        }

        self.plan
            .execute_dft(FftDirection::Forward, &mut out[..half], None, temp);
        self.fmt_stage.execute(
            FftDirection::Forward,
            &self.plan.data,
            out,
            StageSource::InPlace,
            &mut [],
        );
        Ok(())
    }

    /// `complex_length` bins of `input` into `size` reals of `out`.
    pub fn execute_inverse(
        &self,
        out: &mut [T],
        input: &[Complex<T>],
        temp: &mut [Complex<T>],
    ) -> Result<(), StageFftError> {
        validate_length!(input, self.complex_length(), InvalidInputLength);
        validate_length!(out, self.size, InvalidOutputLength);
        let temp = validate_scratch!(temp, self.temp_size());
        let half = self.size / 2;

        let (staging, temp) = temp.split_at_mut(half);
        self.fmt_stage.execute(
            FftDirection::Inverse,
            &self.plan.data,
            staging,
            StageSource::Buffer(input),
            &mut [],
        );
        self.plan
            .execute_dft(FftDirection::Inverse, staging, None, temp);

        for (pair, src) in out.chunks_exact_mut(2).zip(staging.iter()) {
            pair[0] = src.re;
            pair[1] = src.im;
        }
        Ok(())
    }
}

impl<T> Display for RealDftPlan<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "RealDftPlan size={} format={:?}\n",
            self.size, self.fmt
        ))?;
        self.plan.fmt(f)?;
        f.write_fmt(format_args!("  {}\n", self.fmt_stage.info))
    }
}
