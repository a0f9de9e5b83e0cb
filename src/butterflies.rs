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
use crate::complex_fma::{ComplexMul, fmla};
use crate::util::oriented;
use crate::{FftDirection, FftSample};
use num_complex::Complex;

/// Multiplies by `i`.
#[inline(always)]
fn rotate_90<T: FftSample>(z: Complex<T>) -> Complex<T> {
    Complex { re: -z.im, im: z.re }
}

#[inline(always)]
fn gather<T: Copy, const R: usize>(
    buf: &[Complex<T>],
    column: usize,
    stride: usize,
) -> [Complex<T>; R] {
    std::array::from_fn(|q| buf[column + q * stride])
}

#[inline(always)]
pub(crate) fn butterfly2<T: FftSample>(x: [Complex<T>; 2]) -> [Complex<T>; 2] {
    [x[0] + x[1], x[0] - x[1]]
}

#[inline(always)]
pub(crate) fn butterfly3<T: FftSample>(x: [Complex<T>; 3], root: Complex<T>) -> [Complex<T>; 3] {
    let xp = x[1] + x[2];
    let xn = x[1] - x[2];
    let w = Complex {
        re: fmla(root.re, xp.re, x[0].re),
        im: fmla(root.re, xp.im, x[0].im),
    };
    let rot = Complex {
        re: -root.im * xn.im,
        im: root.im * xn.re,
    };
    [x[0] + xp, w + rot, w - rot]
}

#[inline(always)]
pub(crate) fn butterfly4<T: FftSample>(
    x: [Complex<T>; 4],
    direction: FftDirection,
) -> [Complex<T>; 4] {
    let a = x[0] + x[2];
    let b = x[0] - x[2];
    let c = x[1] + x[3];
    let d = rotate_90(x[1] - x[3]);
    match direction {
        FftDirection::Forward => [a + c, b - d, a - c, b + d],
        FftDirection::Inverse => [a + c, b + d, a - c, b - d],
    }
}

#[inline(always)]
pub(crate) fn butterfly5<T: FftSample>(
    x: [Complex<T>; 5],
    root1: Complex<T>,
    root2: Complex<T>,
) -> [Complex<T>; 5] {
    let a1 = x[1] + x[4];
    let b1 = x[1] - x[4];
    let a2 = x[2] + x[3];
    let b2 = x[2] - x[3];

    let t1 = x[0] + a1.scale(root1.re) + a2.scale(root2.re);
    let u1 = rotate_90(b1.scale(root1.im) + b2.scale(root2.im));
    let t2 = x[0] + a1.scale(root2.re) + a2.scale(root1.re);
    let u2 = rotate_90(b1.scale(root2.im) - b2.scale(root1.im));

    [x[0] + a1 + a2, t1 + u1, t2 + u2, t2 - u2, t1 - u1]
}

/// One decimation-in-frequency level over a block: radix-`R` butterflies on columns
/// `m, m + s, .., m + (R-1)s` with `s = block.len() / R`, output `p` of column `m`
/// scaled by `twiddles[m * (R - 1) + p - 1]`.
///
/// When `source` is `None` the block is read in place.
#[inline(always)]
pub(crate) fn dif_pass<T: FftSample, M: ComplexMul, const R: usize>(
    source: Option<&[Complex<T>]>,
    block: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    direction: FftDirection,
    butterfly: impl Fn([Complex<T>; R]) -> [Complex<T>; R],
) {
    let stride = block.len() / R;
    for (column, twiddles) in twiddles.chunks_exact(R - 1).take(stride).enumerate() {
        let x = match source {
            Some(source) => gather::<T, R>(source, column, stride),
            None => gather::<T, R>(block, column, stride),
        };
        let y = butterfly(x);
        block[column] = y[0];
        for (p, (&value, &twiddle)) in y.iter().skip(1).zip(twiddles.iter()).enumerate() {
            block[column + (p + 1) * stride] = M::mul(value, oriented(twiddle, direction));
        }
    }
}

/// Same as [`dif_pass`] for a radix only known at runtime, evaluated as a direct
/// DFT of size `roots.len()`. `temp` must hold at least `2 * roots.len()` elements.
pub(crate) fn dif_pass_generic<T: FftSample, M: ComplexMul>(
    source: Option<&[Complex<T>]>,
    block: &mut [Complex<T>],
    roots: &[Complex<T>],
    twiddles: &[Complex<T>],
    direction: FftDirection,
    temp: &mut [Complex<T>],
) {
    let radix = roots.len();
    let stride = block.len() / radix;
    let (x, y) = temp[..2 * radix].split_at_mut(radix);

    for (column, twiddles) in twiddles.chunks_exact(radix - 1).take(stride).enumerate() {
        match source {
            Some(source) => {
                for (q, dst) in x.iter_mut().enumerate() {
                    *dst = source[column + q * stride];
                }
            }
            None => {
                for (q, dst) in x.iter_mut().enumerate() {
                    *dst = block[column + q * stride];
                }
            }
        }

        for (p, dst) in y.iter_mut().enumerate() {
            let mut acc = x[0];
            let mut idx = 0usize;
            for &value in x.iter().skip(1) {
                idx += p;
                if idx >= radix {
                    idx -= radix;
                }
                acc = M::mul_add(value, oriented(roots[idx], direction), acc);
            }
            *dst = acc;
        }

        block[column] = y[0];
        for (p, (&value, &twiddle)) in y.iter().skip(1).zip(twiddles.iter()).enumerate() {
            block[column + (p + 1) * stride] = M::mul(value, oriented(twiddle, direction));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex_fma::ScalarMul;
    use crate::util::compute_twiddle;
    use rand::Rng;

    fn naive_dft(input: &[Complex<f64>], direction: FftDirection) -> Vec<Complex<f64>> {
        let n = input.len();
        (0..n)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .fold(Complex::new(0., 0.), |acc, (j, &x)| {
                        acc + x * compute_twiddle::<f64>(j * k, n, direction)
                    })
            })
            .collect()
    }

    fn random_vec(n: usize) -> Vec<Complex<f64>> {
        (0..n)
            .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
            .collect()
    }

    fn assert_close(a: &[Complex<f64>], b: &[Complex<f64>], radix: usize) {
        a.iter().zip(b.iter()).enumerate().for_each(|(idx, (a, b))| {
            assert!(
                (a.re - b.re).abs() < 1e-10,
                "a_re {} != b_re {} for radix {radix} at {idx}",
                a.re,
                b.re,
            );
            assert!(
                (a.im - b.im).abs() < 1e-10,
                "a_im {} != b_im {} for radix {radix} at {idx}",
                a.im,
                b.im,
            );
        });
    }

    #[test]
    fn test_butterflies_match_dft() {
        for direction in [FftDirection::Forward, FftDirection::Inverse] {
            let x = random_vec(2);
            assert_close(&butterfly2([x[0], x[1]]), &naive_dft(&x, direction), 2);

            let x = random_vec(3);
            let root = compute_twiddle(1, 3, direction);
            assert_close(
                &butterfly3([x[0], x[1], x[2]], root),
                &naive_dft(&x, direction),
                3,
            );

            let x = random_vec(4);
            assert_close(
                &butterfly4([x[0], x[1], x[2], x[3]], direction),
                &naive_dft(&x, direction),
                4,
            );

            let x = random_vec(5);
            let root1 = compute_twiddle(1, 5, direction);
            let root2 = compute_twiddle(2, 5, direction);
            assert_close(
                &butterfly5([x[0], x[1], x[2], x[3], x[4]], root1, root2),
                &naive_dft(&x, direction),
                5,
            );
        }
    }

    #[test]
    fn test_generic_pass_single_column() {
        for radix in [3usize, 7, 11, 13] {
            let x = random_vec(radix);
            let roots = (0..radix)
                .map(|k| compute_twiddle::<f64>(k, radix, FftDirection::Forward))
                .collect::<Vec<_>>();
            let twiddles = vec![Complex::new(1., 0.); radix - 1];
            let mut temp = vec![Complex::new(0., 0.); 2 * radix];
            for direction in [FftDirection::Forward, FftDirection::Inverse] {
                let mut block = vec![Complex::new(0., 0.); radix];
                dif_pass_generic::<f64, ScalarMul>(
                    Some(&x),
                    &mut block,
                    &roots,
                    &twiddles,
                    direction,
                    &mut temp,
                );
                assert_close(&block, &naive_dft(&x, direction), radix);
            }
        }
    }
}
