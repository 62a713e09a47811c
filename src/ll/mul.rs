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

use std::cmp;

use crate::ll::digit::{self, Digit, DoubleDigit};

/**
 * Multiplies `xp` by `yp` in base `base`, storing the result to `wp`.
 *
 * `wp` must be exactly `xp.len() + yp.len()` digits long. Every digit of `wp` is written, so its
 * previous contents don't matter. The top digit may end up zero; the result is not normalized.
 *
 * Each output position `i` is the convolution sum of `xp[i - j] * yp[j]` over every valid `j`,
 * folded into a single running total. The low digit of the total is stored and the rest is carried
 * into the next position, so no scratch space beyond `wp` is ever needed.
 */
pub fn mul(wp: &mut [Digit], xp: &[Digit], yp: &[Digit], base: Digit) {
    let (p, q) = (xp.len(), yp.len());
    debug_assert!(base >= 2);
    debug_assert_eq!(wp.len(), p + q);

    if wp.is_empty() { return; }

    let last = p + q - 1;
    let mut total : DoubleDigit = 0;

    for i in 0..last {
        // Only pairs where both `i - j` and `j` are in range
        let j_min = (i + 1).saturating_sub(p);
        let j_end = cmp::min(i + 1, q);

        for j in j_min..j_end {
            total += DoubleDigit::from(xp[i - j]) * DoubleDigit::from(yp[j]);
        }

        let (carry, d) = digit::split(total, base);
        wp[i] = d;
        total = carry;
    }

    // Whatever is left over always fits in the final position
    let (carry, d) = digit::split(total, base);
    debug_assert_eq!(carry, 0);
    wp[last] = d;
}
