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
use crate::complex_fma::{c_mul_add_fast, c_mul_fast};
use crate::{DftPackFormat, FftSample, StageFftError};
use num_complex::Complex;

fn validate_spectra<T>(
    dest: &[Complex<T>],
    others: &[&[Complex<T>]],
) -> Result<(), StageFftError> {
    for other in others.iter() {
        if other.len() != dest.len() {
            return Err(StageFftError::SpectrumLengthMismatch(
                dest.len(),
                other.len(),
            ));
        }
    }
    Ok(())
}

/// Bin 0 of a [`DftPackFormat::Perm`] spectrum holds two independent reals.
#[inline(always)]
fn perm_dc_mul<T: FftSample>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    Complex::new(a.re * b.re, a.im * b.im)
}

/// Pointwise product of two packed spectra, `dest = a * b`.
///
/// Multiplying the forward transforms of two signals and transforming the
/// product back yields their circular convolution scaled by `N`.
pub fn multiply<T: FftSample>(
    dest: &mut [Complex<T>],
    a: &[Complex<T>],
    b: &[Complex<T>],
    fmt: DftPackFormat,
) -> Result<(), StageFftError> {
    validate_spectra(dest, &[a, b])?;
    for ((dst, &a), &b) in dest.iter_mut().zip(a.iter()).zip(b.iter()) {
        *dst = c_mul_fast(a, b);
    }
    if fmt == DftPackFormat::Perm {
        if let (Some(dst), Some(&a), Some(&b)) = (dest.first_mut(), a.first(), b.first()) {
            *dst = perm_dc_mul(a, b);
        }
    }
    Ok(())
}

/// `dest += a * b`
pub fn multiply_accumulate<T: FftSample>(
    dest: &mut [Complex<T>],
    a: &[Complex<T>],
    b: &[Complex<T>],
    fmt: DftPackFormat,
) -> Result<(), StageFftError> {
    validate_spectra(dest, &[a, b])?;
    let dc = match (dest.first(), a.first(), b.first()) {
        (Some(&dst), Some(&a), Some(&b)) => dst + perm_dc_mul(a, b),
        _ => return Ok(()),
    };
    for ((dst, &a), &b) in dest.iter_mut().zip(a.iter()).zip(b.iter()) {
        *dst = c_mul_add_fast(a, b, *dst);
    }
    if fmt == DftPackFormat::Perm {
        dest[0] = dc;
    }
    Ok(())
}

/// `dest = src + a * b`
pub fn multiply_add<T: FftSample>(
    dest: &mut [Complex<T>],
    src: &[Complex<T>],
    a: &[Complex<T>],
    b: &[Complex<T>],
    fmt: DftPackFormat,
) -> Result<(), StageFftError> {
    validate_spectra(dest, &[src, a, b])?;
    for (((dst, &src), &a), &b) in dest.iter_mut().zip(src.iter()).zip(a.iter()).zip(b.iter()) {
        *dst = c_mul_add_fast(a, b, src);
    }
    if fmt == DftPackFormat::Perm {
        if let (Some(dst), Some(&src), Some(&a), Some(&b)) =
            (dest.first_mut(), src.first(), a.first(), b.first())
        {
            *dst = src + perm_dc_mul(a, b);
        }
    }
    Ok(())
}
