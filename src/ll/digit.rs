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

use num_integer::Integer;

/**
 * A single digit in some base `B`, where `2 <= B < 2^32`.
 *
 * Digits are always stored least-significant first.
 */
pub type Digit = u32;

/**
 * Accumulator type for the convolution sums.
 *
 * Position `i` of a product sums at most `min(p, q)` terms, each at most `(B-1)^2`, plus the
 * carry from position `i - 1`. The carry itself never exceeds `min(p, q) * (B-1)`, so the running
 * total stays below `min(p, q) * (B-1) * B`. With `B < 2^32` that is under `2^64 * min(p, q)`,
 * which can't leave 128 bits for any slice length addressable by a `usize`.
 */
pub type DoubleDigit = u128;

/// Splits a running total into `(carry, digit)` for base `base`.
#[inline(always)]
pub fn split(total: DoubleDigit, base: Digit) -> (DoubleDigit, Digit) {
    let (carry, digit) = total.div_rem(&DoubleDigit::from(base));
    (carry, digit as Digit)
}
