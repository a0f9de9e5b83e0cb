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
use crate::Capability;
use std::error::Error;
use std::fmt::Formatter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageFftError {
    OutOfMemory(usize),
    ZeroSizedFft,
    UnsupportedCapability(Capability),
    RecursionTooDeep(usize, usize),
    OddRealLength(usize),
    InvalidInputLength(usize, usize),
    InvalidOutputLength(usize, usize),
    ScratchBufferIsTooSmall(usize, usize),
    SpectrumLengthMismatch(usize, usize),
}

impl StageFftError {
    /// Returns `true` when the error was raised while building a plan,
    /// `false` when a buffer handed to an already built plan or helper was rejected.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            StageFftError::OutOfMemory(_)
                | StageFftError::ZeroSizedFft
                | StageFftError::UnsupportedCapability(_)
                | StageFftError::RecursionTooDeep(_, _)
                | StageFftError::OddRealLength(_)
        )
    }
}

impl Error for StageFftError {}

impl std::fmt::Display for StageFftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StageFftError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} elements to vector",))
            }
            StageFftError::ZeroSizedFft => f.write_str("Cannot plan FFT of zero size"),
            StageFftError::UnsupportedCapability(capability) => f.write_fmt(format_args!(
                "Capability {capability:?} is not available on this CPU"
            )),
            StageFftError::RecursionTooDeep(levels, max) => f.write_fmt(format_args!(
                "Decomposition needs {levels} nested recursion levels, but at most {max} are supported"
            )),
            StageFftError::OddRealLength(length) => f.write_fmt(format_args!(
                "Real transform length must be even, but it was {length}"
            )),
            StageFftError::InvalidInputLength(expected, actual) => f.write_fmt(format_args!(
                "Input length expected to be at least {expected}, but it was {actual}"
            )),
            StageFftError::InvalidOutputLength(expected, actual) => f.write_fmt(format_args!(
                "Output length expected to be at least {expected}, but it was {actual}"
            )),
            StageFftError::ScratchBufferIsTooSmall(current, required) => f.write_fmt(format_args!(
                "Scratch buffer size must be at least {required} but it is {current}"
            )),
            StageFftError::SpectrumLengthMismatch(expected, actual) => f.write_fmt(format_args!(
                "All spectra must have length {expected}, but one of them has {actual}"
            )),
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::StageFftError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
