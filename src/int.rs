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

use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use log::trace;
use num_traits::{CheckedMul, One};
use rand::Rng;
use thiserror::Error;

use crate::ll;
use crate::ll::digit::{self, Digit, DoubleDigit};

/// The base used by `FromStr`, `BigInt::one` and the factorial driver.
pub const DEFAULT_BASE : Digit = 10;

/**
 * A non-negative integer of arbitrary size, stored as a sequence of digits in a fixed base.
 *
 * The digits are held least-significant first, so `digits()[i]` is the coefficient of `base^i`.
 * Every digit is less than the base. The sequence is not kept normalized: a `BigInt` may carry
 * any number of most-significant zero digits, which are dropped when it is rendered.
 *
 * ## Creation
 *
 * - `BigInt::from_decimal_string` parses a string of decimal characters, producing one digit per
 *   character. Each character must also be a valid digit in the target base.
 *
 *   ```
 *   # use radixfact::BigInt;
 *   let i = BigInt::from_decimal_string("123", 10).unwrap();
 *   assert_eq!(&[3, 2, 1], i.digits());
 *   ```
 *
 * - `BigInt::from_uint` converts a native unsigned integer into any base.
 *
 * - `BigInt::from_digits` takes a raw little-endian digit vector, checking every digit.
 *
 * - `str::parse` is shorthand for `from_decimal_string` in base 10.
 *
 * ## Multiplication
 *
 * `multiply` is the only arithmetic operation. It never modifies its operands and fails if they
 * don't share a base. The `*` operator is also available; it panics on mismatched bases, so it
 * is best kept to values that are known to agree.
 *
 *   ```
 *   # use radixfact::BigInt;
 *   let a : BigInt = "99".parse().unwrap();
 *   let b : BigInt = "99".parse().unwrap();
 *   assert_eq!("9801", a.multiply(&b).unwrap().to_string());
 *   assert_eq!("9801", (&a * &b).to_string());
 *   ```
 *
 * ## Output
 *
 * `Display` writes the value in its own base with leading zeros removed; the zero value renders
 * as `"0"`. `digit_count` gives the length of that rendering without building it.
 */
#[derive(Clone, Debug)]
pub struct BigInt {
    digits: Vec<Digit>,
    base: Digit,
}

impl BigInt {
    /**
     * Creates a new BigInt from a string of decimal characters. The result has exactly one digit
     * per character, with the last character of `src` as the least-significant digit.
     *
     * Fails with `Error::InvalidBase` if `base <= 1`, and with `Error::InvalidDigit` if any
     * character is not a decimal digit that is also less than `base`. An empty string is zero.
     */
    pub fn from_decimal_string(src: &str, base: Digit) -> Result<BigInt, Error> {
        check_base(base)?;

        let mut digits = Vec::new();
        ll::base::from_decimal(src, base, &mut digits)
            .map_err(|c| Error::InvalidDigit(c, base))?;

        Ok(BigInt { digits, base })
    }

    /**
     * Creates a new BigInt from little-endian digits.
     *
     * Fails with `Error::InvalidBase` if `base <= 1`, and with `Error::DigitOutOfRange` if any
     * digit is not less than `base`.
     */
    pub fn from_digits(digits: Vec<Digit>, base: Digit) -> Result<BigInt, Error> {
        check_base(base)?;

        if let Some(&d) = digits.iter().find(|&&d| d >= base) {
            return Err(Error::DigitOutOfRange(d, base));
        }

        Ok(BigInt { digits, base })
    }

    /**
     * Converts `n` into base `base`. The result is normalized; zero has no digits at all.
     */
    pub fn from_uint<T: Into<DoubleDigit>>(n: T, base: Digit) -> Result<BigInt, Error> {
        check_base(base)?;

        let mut n = n.into();
        let mut digits = Vec::new();
        while n != 0 {
            let (q, d) = digit::split(n, base);
            digits.push(d);
            n = q;
        }

        Ok(BigInt { digits, base })
    }

    /// Returns one in base 10.
    pub fn one() -> BigInt {
        <BigInt as One>::one()
    }

    /// Returns zero in the given base.
    pub fn zero_in(base: Digit) -> Result<BigInt, Error> {
        BigInt::from_digits(Vec::new(), base)
    }

    /// The digits, least-significant first, including any leading zeros.
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    #[inline]
    pub fn base(&self) -> Digit {
        self.base
    }

    /// Number of stored digits, including any leading zeros.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        ll::is_zero(&self.digits)
    }

    /**
     * Returns the number of digits in the rendered form of `self`, i.e. the digit count once
     * leading zeros are dropped. Zero has one digit.
     */
    #[inline]
    pub fn digit_count(&self) -> usize {
        ll::base::num_base_digits(&self.digits)
    }

    /**
     * Multiplies `self` by `other`, returning a new BigInt of exactly `self.len() + other.len()`
     * digits in the shared base. The top digit of the result may be zero.
     *
     * Fails with `Error::MismatchedBase` if the two bases differ.
     */
    pub fn multiply(&self, other: &BigInt) -> Result<BigInt, Error> {
        if self.base != other.base {
            return Err(Error::MismatchedBase(self.base, other.base));
        }

        trace!("multiply {} by {} digits in base {}", self.len(), other.len(), self.base);

        let mut digits = vec![0; self.len() + other.len()];
        ll::mul(&mut digits, &self.digits, &other.digits, self.base);

        Ok(BigInt { digits, base: self.base })
    }
}

fn check_base(base: Digit) -> Result<(), Error> {
    if base <= 1 {
        Err(Error::InvalidBase(base))
    } else {
        Ok(())
    }
}

impl One for BigInt {
    fn one() -> BigInt {
        BigInt { digits: vec![1], base: DEFAULT_BASE }
    }
}

impl CheckedMul for BigInt {
    fn checked_mul(&self, other: &BigInt) -> Option<BigInt> {
        self.multiply(other).ok()
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: &'b BigInt) -> BigInt {
        match self.multiply(other) {
            Ok(prod) => prod,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a> Mul<&'a BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, other: &'a BigInt) -> BigInt {
        &self * other
    }
}

impl<'a> Mul<BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, other: BigInt) -> BigInt {
        self * &other
    }
}

impl Mul<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, other: BigInt) -> BigInt {
        &self * &other
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = String::with_capacity(self.digit_count());
        ll::base::to_base(&mut s, &self.digits, self.base)?;
        f.pad_integral(true, "", &s)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(src: &str) -> Result<BigInt, Error> {
        BigInt::from_decimal_string(src, DEFAULT_BASE)
    }
}

// Errors

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid base {0}, must be greater than 1")]
    InvalidBase(Digit),
    #[error("invalid digit {0:?} for base {1}")]
    InvalidDigit(char, Digit),
    #[error("digit {0} out of range for base {1}")]
    DigitOutOfRange(Digit, Digit),
    #[error("bases of x and y are not the same: {0}, {1}")]
    MismatchedBase(Digit, Digit),
}

/// Trait for generating random `BigInt`s.
///
/// # Example
///
/// Generate a random 40-digit decimal `BigInt`:
///
/// ```
/// # extern crate rand;
/// # extern crate radixfact;
/// use radixfact::RandomBigInt;
///
/// fn main() {
///     let mut rng = rand::thread_rng();
///     let big_i = rng.gen_bigint(40, 10).unwrap();
///     assert_eq!(40, big_i.len());
/// }
/// ```
pub trait RandomBigInt {
    /// Generate a `BigInt` of exactly `len` uniformly random digits in base `base`. The top
    /// digits may be zero. Fails when the base is invalid.
    fn gen_bigint(&mut self, len: usize, base: Digit) -> Result<BigInt, Error>;
}

impl<R: Rng> RandomBigInt for R {
    fn gen_bigint(&mut self, len: usize, base: Digit) -> Result<BigInt, Error> {
        check_base(base)?;

        let digits = (0..len).map(|_| self.gen_range(0..base)).collect();
        Ok(BigInt { digits, base })
    }
}
