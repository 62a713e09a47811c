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

use crate::ll;
use crate::ll::digit::Digit;

/// Largest base whose digits each render as a single character, `0-9` then `a-z`.
pub const MAX_CHAR_BASE : Digit = 36;

/// Separator between digits when rendering bases above `MAX_CHAR_BASE`.
pub const WIDE_SEPARATOR : char = ':';

/**
 * Converts the decimal characters in `src` into digits in base `base`, pushing them to `out`
 * least-significant first. One digit is produced per character, leading zeros included.
 *
 * On failure, returns the first character (scanning from the least-significant end) that is not
 * a decimal digit less than `base`. `out` may hold a partial result in that case.
 */
pub fn from_decimal(src: &str, base: Digit, out: &mut Vec<Digit>) -> Result<(), char> {
    debug_assert!(base >= 2);

    out.reserve(src.len());
    for c in src.chars().rev() {
        match c.to_digit(10) {
            Some(d) if d < base => out.push(d),
            _ => return Err(c),
        }
    }

    Ok(())
}

/**
 * Returns the number of digits in `xp` once leading (most-significant) zeros are dropped. Zero
 * still counts as a single digit.
 */
#[inline]
pub fn num_base_digits(xp: &[Digit]) -> usize {
    let n = ll::normalized_len(xp);
    if n == 0 { 1 } else { n }
}

/**
 * Writes `xp` in base `base` to `w`, from most-significant digit to least, skipping leading zeros.
 * A zero value is written as `"0"`.
 *
 * Bases up to `MAX_CHAR_BASE` use one character per digit. Larger bases write the decimal value of
 * each digit, separated by `WIDE_SEPARATOR`.
 */
pub fn to_base<W: fmt::Write>(w: &mut W, xp: &[Digit], base: Digit) -> fmt::Result {
    debug_assert!(base >= 2);

    let n = ll::normalized_len(xp);
    if n == 0 {
        return w.write_char('0');
    }

    let digits = xp[..n].iter().rev();
    if base <= MAX_CHAR_BASE {
        for &d in digits {
            debug_assert!(d < base);
            // Can't fail, d < base <= 36
            let c = std::char::from_digit(d, base).unwrap_or('?');
            w.write_char(c)?;
        }
    } else {
        for (i, &d) in digits.enumerate() {
            if i > 0 {
                w.write_char(WIDE_SEPARATOR)?;
            }
            write!(w, "{}", d)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn render(xp: &[Digit], base: Digit) -> String {
        let mut s = String::new();
        to_base(&mut s, xp, base).unwrap();
        s
    }

    #[test]
    fn from_decimal_10() {
        let cases : [(&str, &[Digit]); 5] = [
            ("123",   &[3, 2, 1]),
            ("0",     &[0]),
            ("00120", &[0, 2, 1, 0, 0]),
            ("9",     &[9]),
            ("",      &[]),
        ];

        for &(s, digits) in cases.iter() {
            let mut out = Vec::new();
            assert_eq!(Ok(()), from_decimal(s, 10, &mut out));
            assert_eq!(digits, &out[..]);
        }
    }

    #[test]
    fn from_decimal_invalid() {
        let cases = [
            ("12a",  10, 'a'),
            ("1-2",  10, '-'),
            ("+12",  10, '+'),
            ("128",  8,  '8'),
            ("102",  2,  '2'),
            ("١٢",   10, '٢'),
        ];

        for &(s, base, c) in cases.iter() {
            let mut out = Vec::new();
            assert_eq!(Err(c), from_decimal(s, base, &mut out));
        }
    }

    #[test]
    fn to_base_strips_leading_zeros() {
        let cases : [(&[Digit], Digit, &str); 7] = [
            (&[3, 2, 1],       10, "123"),
            (&[3, 2, 1, 0, 0], 10, "123"),
            (&[0, 0, 0],       10, "0"),
            (&[],              10, "0"),
            (&[15, 14],        16, "ef"),
            (&[1, 0, 1, 1],    2,  "1101"),
            (&[35, 0],         36, "z"),
        ];

        for &(digits, base, s) in cases.iter() {
            assert_eq!(s, render(digits, base));
        }
    }

    #[test]
    fn to_base_wide() {
        assert_eq!("1:0:255", render(&[255, 0, 1, 0], 256));
        assert_eq!("36", render(&[36], 37));
        assert_eq!("0", render(&[0, 0], 1000));
    }

    #[test]
    fn count_digits() {
        let cases : [(&[Digit], usize); 5] = [
            (&[],           1),
            (&[0],          1),
            (&[0, 0, 0],    1),
            (&[1, 0, 8, 9], 4),
            (&[0, 0, 1, 0], 3),
        ];

        for &(digits, n) in cases.iter() {
            assert_eq!(n, num_base_digits(digits));
        }
    }
}
