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
use crate::butterflies::{
    butterfly2, butterfly3, butterfly4, butterfly5, dif_pass, dif_pass_generic,
};
use crate::complex_fma::ComplexMul;
use crate::stage::{StageInfo, StageKernel, StageSource};
use crate::util::{compute_twiddle, oriented};
use crate::{FftDirection, FftSample};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::marker::PhantomData;

#[derive(Debug, Clone)]
struct DifLevel {
    radix: usize,
    len: usize,
    roots: usize,
    twiddles: usize,
}

impl DifLevel {
    fn twiddles_count(&self) -> usize {
        (self.len / self.radix) * (self.radix - 1)
    }
}

/// Radices 2 and 4 rotate by `±i` directly, the rest keep their `r` roots of unity.
fn roots_count(radix: usize) -> usize {
    match radix {
        2 | 4 => 0,
        r => r,
    }
}

/// Chain of decimation-in-frequency levels applied to `blocks` independent blocks
/// of `block_len` elements each.
///
/// The first level reads from the stage source, every following level works in
/// place on the output. Output of each block is in digit-reversed order.
/// A stage without levels copies its source.
#[derive(Debug, Clone)]
pub(crate) struct DifStage<M> {
    levels: Vec<DifLevel>,
    block_len: usize,
    blocks: usize,
    data_size: usize,
    temp_size: usize,
    multiplier: PhantomData<M>,
}

impl<M: ComplexMul> DifStage<M> {
    pub(crate) fn new(radices: &[usize], block_len: usize, blocks: usize) -> DifStage<M> {
        let mut levels = Vec::with_capacity(radices.len());
        let mut offset = 0usize;
        let mut temp_size = 0usize;
        let mut len = block_len;
        for &radix in radices {
            let roots = offset;
            offset += roots_count(radix);
            let level = DifLevel {
                radix,
                len,
                roots,
                twiddles: offset,
            };
            offset += level.twiddles_count();
            if radix > 5 {
                temp_size = temp_size.max(2 * radix);
            }
            levels.push(level);
            len /= radix;
        }
        DifStage {
            levels,
            block_len,
            blocks,
            data_size: offset,
            temp_size,
            multiplier: PhantomData,
        }
    }

    fn name(&self) -> &'static str {
        match self.levels.as_slice() {
            [] => "dif-copy",
            [level] => match level.radix {
                2 => "dif-radix2",
                3 => "dif-radix3",
                4 => "dif-radix4",
                5 => "dif-radix5",
                _ => "dif-generic",
            },
            _ => "dif-multi",
        }
    }

    #[inline]
    fn run_level<T: FftSample>(
        &self,
        level: &DifLevel,
        data: &[Complex<T>],
        source: Option<&[Complex<T>]>,
        chunk: &mut [Complex<T>],
        direction: FftDirection,
        temp: &mut [Complex<T>],
    ) {
        let twiddles = &data[level.twiddles..level.twiddles + level.twiddles_count()];
        match level.radix {
            2 => dif_pass::<T, M, 2>(source, chunk, twiddles, direction, butterfly2),
            3 => {
                let root = oriented(data[level.roots + 1], direction);
                dif_pass::<T, M, 3>(source, chunk, twiddles, direction, |x| {
                    butterfly3(x, root)
                })
            }
            4 => dif_pass::<T, M, 4>(source, chunk, twiddles, direction, |x| {
                butterfly4(x, direction)
            }),
            5 => {
                let root1 = oriented(data[level.roots + 1], direction);
                let root2 = oriented(data[level.roots + 2], direction);
                dif_pass::<T, M, 5>(source, chunk, twiddles, direction, |x| {
                    butterfly5(x, root1, root2)
                })
            }
            radix => dif_pass_generic::<T, M>(
                source,
                chunk,
                &data[level.roots..level.roots + radix],
                twiddles,
                direction,
                temp,
            ),
        }
    }
}

impl<M: ComplexMul> StageKernel for DifStage<M> {
    fn info(&self) -> StageInfo {
        StageInfo {
            name: self.name(),
            radix: self.levels.first().map_or(1, |x| x.radix),
            stage_size: self.block_len,
            data_size: self.data_size,
            temp_size: self.temp_size,
            blocks: self.blocks,
            ..StageInfo::default()
        }
    }

    fn initialize<T: FftSample>(&self, data: &mut [Complex<T>])
    where
        f64: AsPrimitive<T>,
    {
        for level in self.levels.iter() {
            let roots = &mut data[level.roots..level.roots + roots_count(level.radix)];
            for (k, dst) in roots.iter_mut().enumerate() {
                *dst = compute_twiddle(k, level.radix, FftDirection::Forward);
            }
            let twiddles = &mut data[level.twiddles..level.twiddles + level.twiddles_count()];
            for (m, column) in twiddles.chunks_exact_mut(level.radix - 1).enumerate() {
                for (p, dst) in column.iter_mut().enumerate() {
                    *dst = compute_twiddle(m * (p + 1), level.len, FftDirection::Forward);
                }
            }
        }
    }

    fn execute<T: FftSample>(
        &self,
        direction: FftDirection,
        data: &[Complex<T>],
        out: &mut [Complex<T>],
        source: StageSource<'_, T>,
        temp: &mut [Complex<T>],
    ) {
        let source = source.as_option();
        for (b, block) in out
            .chunks_exact_mut(self.block_len)
            .take(self.blocks)
            .enumerate()
        {
            let mut block_source =
                source.map(|x| &x[b * self.block_len..(b + 1) * self.block_len]);

            if self.levels.is_empty() {
                if let Some(src) = block_source {
                    block.copy_from_slice(src);
                }
                continue;
            }

            for level in self.levels.iter() {
                for (j, chunk) in block.chunks_exact_mut(level.len).enumerate() {
                    let chunk_source =
                        block_source.map(|x| &x[j * level.len..(j + 1) * level.len]);
                    self.run_level(level, data, chunk_source, chunk, direction, temp);
                }
                block_source = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex_fma::{FmaMul, ScalarMul};
    use num_traits::Zero;
    use rand::Rng;

    fn naive_dft(input: &[Complex<f64>], direction: FftDirection) -> Vec<Complex<f64>> {
        let n = input.len();
        (0..n)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .fold(Complex::zero(), |acc, (j, &x)| {
                        acc + x * compute_twiddle::<f64>(j * k, n, direction)
                    })
            })
            .collect()
    }

    /// Natural frequency index stored at `pos` after a chain of DIF levels.
    fn digit_reversed(mut pos: usize, radices: &[usize]) -> usize {
        let n = radices.iter().product::<usize>();
        let mut stride = n;
        let mut weight = 1;
        let mut k = 0;
        for &radix in radices {
            stride /= radix;
            k += (pos / stride) * weight;
            pos %= stride;
            weight *= radix;
        }
        k
    }

    fn run_stage<M: ComplexMul>(
        radices: &[usize],
        block_len: usize,
        blocks: usize,
        input: &[Complex<f64>],
        direction: FftDirection,
    ) -> Vec<Complex<f64>> {
        let stage = DifStage::<M>::new(radices, block_len, blocks);
        let info = stage.info();
        let mut data = vec![Complex::zero(); info.data_size];
        stage.initialize(&mut data);
        let mut temp = vec![Complex::zero(); info.temp_size];
        let mut out = vec![Complex::zero(); input.len()];
        stage.execute(
            direction,
            &data,
            &mut out,
            StageSource::Buffer(input),
            &mut temp,
        );
        out
    }

    #[test]
    fn test_dif_chain_is_digit_reversed_dft() {
        for radices in [vec![4, 3, 5], vec![2, 7], vec![4, 4, 2], vec![3, 11, 13]] {
            let n = radices.iter().product::<usize>();
            let input = (0..n)
                .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
                .collect::<Vec<Complex<f64>>>();
            for direction in [FftDirection::Forward, FftDirection::Inverse] {
                let reference = naive_dft(&input, direction);
                let scalar = run_stage::<ScalarMul>(&radices, n, 1, &input, direction);
                let fused = run_stage::<FmaMul>(&radices, n, 1, &input, direction);
                for pos in 0..n {
                    let k = digit_reversed(pos, &radices);
                    assert!(
                        (scalar[pos] - reference[k]).norm() < 1e-9,
                        "scalar mismatch at {pos} for {radices:?}"
                    );
                    assert!(
                        (fused[pos] - reference[k]).norm() < 1e-9,
                        "fma mismatch at {pos} for {radices:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_blocks_are_independent() {
        let input = (0..21)
            .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
            .collect::<Vec<Complex<f64>>>();
        let out = run_stage::<ScalarMul>(&[7], 7, 3, &input, FftDirection::Forward);
        for (src, dst) in input.chunks_exact(7).zip(out.chunks_exact(7)) {
            let reference = naive_dft(src, FftDirection::Forward);
            for (a, b) in dst.iter().zip(reference.iter()) {
                assert!((a - b).norm() < 1e-10, "{a} != {b}");
            }
        }
    }

    #[test]
    fn test_inplace_matches_buffered() {
        let input = (0..60)
            .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
            .collect::<Vec<Complex<f64>>>();
        let stage = DifStage::<ScalarMul>::new(&[4, 3, 5], 60, 1);
        let mut data = vec![Complex::zero(); stage.info().data_size];
        stage.initialize(&mut data);
        let buffered = run_stage::<ScalarMul>(&[4, 3, 5], 60, 1, &input, FftDirection::Forward);
        let mut inplace = input.clone();
        stage.execute(
            FftDirection::Forward,
            &data,
            &mut inplace,
            StageSource::InPlace,
            &mut [],
        );
        assert_eq!(buffered, inplace);
    }

    #[test]
    fn test_empty_stage_copies() {
        let input = vec![Complex::new(3.5f64, -1.0)];
        let out = run_stage::<ScalarMul>(&[], 1, 1, &input, FftDirection::Forward);
        assert_eq!(out, input);
    }
}
