// Copyright 2015 The Ramp Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

//! Low-level operations on little-endian digit slices.
//!
//! Nothing in here knows about `BigInt`; the functions take the digits and the base separately and
//! assume the caller has already validated the base.

mod mul;

pub mod base;
pub mod digit;
use self::digit::Digit;

pub use self::mul::mul;

/**
 * Returns the length of `xp` with any most-significant zero digits removed. Returns 0 if every
 * digit is zero.
 */
#[inline]
pub fn normalized_len(xp: &[Digit]) -> usize {
    xp.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1)
}

/// Returns true if every digit in `xp` is zero. An empty slice is zero.
#[inline]
pub fn is_zero(xp: &[Digit]) -> bool {
    normalized_len(xp) == 0
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalized_len_cases() {
        let cases : [(&[Digit], usize); 5] = [
            (&[],           0),
            (&[0, 0],       0),
            (&[1],          1),
            (&[1, 0, 0],    1),
            (&[0, 4, 0, 2], 4),
        ];

        for &(digits, n) in cases.iter() {
            assert_eq!(n, normalized_len(digits));
            assert_eq!(n == 0, is_zero(digits));
        }
    }
}
