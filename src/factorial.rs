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

//! Factorials by repeated multiplication.
//!
//! Both drivers fold `2, 3, ..., n` into a running product that starts at one, so `0!` and `1!`
//! come back as one without doing any work. Each step allocates a fresh product whose length is
//! the sum of its operands' lengths; nothing is normalized along the way.

use log::debug;

use crate::int::{BigInt, Error, DEFAULT_BASE};
use crate::ll::digit::Digit;

/**
 * Calculates `n!` in base 10.
 *
 * Every multiplicand is built from the decimal text of `i`, the same way any other caller would
 * construct a small `BigInt`.
 */
pub fn factorial(n: u64) -> Result<BigInt, Error> {
    debug!("computing {}! in base {}", n, DEFAULT_BASE);

    let mut acc = BigInt::one();
    for i in 2..=n {
        let y = BigInt::from_decimal_string(&i.to_string(), DEFAULT_BASE)?;
        acc = acc.multiply(&y)?;
    }

    debug!("{}! has {} digits ({} stored)", n, acc.digit_count(), acc.len());
    Ok(acc)
}

/**
 * Calculates `n!` in base `base`.
 *
 * Fails with `Error::InvalidBase` if `base <= 1`, even when `n` is small enough that no
 * multiplication happens.
 */
pub fn factorial_in_base(n: u64, base: Digit) -> Result<BigInt, Error> {
    debug!("computing {}! in base {}", n, base);

    let mut acc = BigInt::from_uint(1u8, base)?;
    for i in 2..=n {
        let y = BigInt::from_uint(i, base)?;
        acc = acc.multiply(&y)?;
    }

    debug!("{}! has {} digits ({} stored)", n, acc.digit_count(), acc.len());
    Ok(acc)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small_factorials() {
        let cases = [
            (0,  "1"),
            (1,  "1"),
            (2,  "2"),
            (5,  "120"),
            (10, "3628800"),
            (20, "2432902008176640000"),
            (25, "15511210043330985984000000"),
            (30, "265252859812191058636308480000000"),
        ];

        for &(n, s) in cases.iter() {
            let f = factorial(n).unwrap();
            assert_eq!(s, f.to_string());
            assert_eq!(DEFAULT_BASE, f.base());
        }
    }

    #[test]
    fn zero_and_one_are_untouched() {
        for &n in [0, 1].iter() {
            let f = factorial(n).unwrap();
            assert_eq!(&[1], f.digits());
        }
    }

    #[test]
    fn factorial_1000_digits() {
        let f = factorial(1000).unwrap();
        assert_eq!(2568, f.digit_count());
        assert_eq!(2568, f.to_string().len());
        assert!(f.to_string().starts_with("402387260077093773543702433923"));
        // 249 factors of five
        assert!(f.to_string().ends_with(&"0".repeat(249)));
        assert!(!f.to_string().ends_with(&"0".repeat(250)));
    }

    #[test]
    fn stored_length_is_sum_of_operand_lengths() {
        // 1 + 8 one-digit factors + 1 two-digit factor
        let f = factorial(10).unwrap();
        assert_eq!(1 + 8 + 2, f.len());
        assert_eq!(7, f.digit_count());
    }

    #[test]
    fn factorial_in_other_bases() {
        let cases = [
            (0,  2,  "1"),
            (5,  10, "120"),
            (5,  16, "78"),
            (5,  2,  "1111000"),
            (10, 16, "375f00"),
            (6,  7,  "2046"),
            (20, 36, "ihfbs9340000"),
        ];

        for &(n, base, s) in cases.iter() {
            let f = factorial_in_base(n, base).unwrap();
            assert_eq!(s, f.to_string());
            assert_eq!(base, f.base());
        }
    }

    #[test]
    fn factorial_in_base_10_agrees() {
        for n in 0..40 {
            assert_eq!(factorial(n).unwrap().to_string(),
                       factorial_in_base(n, 10).unwrap().to_string());
        }
    }

    #[test]
    fn factorial_in_invalid_base() {
        assert_eq!(Err(Error::InvalidBase(1)), factorial_in_base(0, 1).map(|_| ()));
        assert_eq!(Err(Error::InvalidBase(0)), factorial_in_base(5, 0).map(|_| ()));
    }
}
