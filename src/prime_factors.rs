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
use num_integer::{Integer, Roots};

/// Prime factors of `n` with multiplicity, ascending.
/// `prime_factors(360) -> [2, 2, 2, 3, 3, 5]`, empty for `n < 2`.
pub(crate) fn prime_factors(mut n: usize) -> Vec<usize> {
    let mut res = Vec::new();
    if n < 2 {
        return res;
    }

    while n.is_even() {
        res.push(2);
        n >>= 1;
    }

    let mut p = 3usize;
    let mut bound = n.sqrt();
    while p <= bound {
        loop {
            let (quotient, remainder) = n.div_rem(&p);
            if remainder != 0 {
                break;
            }
            res.push(p);
            n = quotient;
            bound = n.sqrt();
        }
        p += 2;
    }

    if n > 1 {
        res.push(n);
    }
    res
}

/// Ordered radices a transform of length `n` is decomposed into.
///
/// Pairs of twos are merged into radix 4, a single leftover two becomes radix 2,
/// then threes, fives and every remaining prime follow in ascending order.
/// The product of the returned radices is always `n`; `n <= 1` yields no radices.
pub(crate) fn radix_decomposition(n: usize) -> Vec<usize> {
    let factors = prime_factors(n);
    let twos = factors.iter().filter(|&&x| x == 2).count();

    let mut radices = Vec::with_capacity(factors.len());
    radices.extend(std::iter::repeat_n(4, twos / 2));
    if twos % 2 == 1 {
        radices.push(2);
    }
    radices.extend(factors.into_iter().filter(|&x| x != 2));
    radices
}
