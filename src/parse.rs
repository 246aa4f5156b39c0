//! Decimal literal scanning and top-level parse dispatch.

use crate::{
    binary::compute_float,
    common::{is_8digits, read_u64, ByteSlice, EIGHT_ZEROS},
    float::RawFloat,
    number::Number,
    Parsed,
};

/// Consumes a run of ASCII digits, eight at a time where possible.
/// Returns the remaining input, how many digits were consumed, and
/// whether any was non-zero.
#[inline]
fn skip_digits(mut s: &[u8]) -> (&[u8], i64, bool) {
    let mut count = 0i64;
    let mut any_nonzero = false;
    while s.len() >= 8 {
        let w = read_u64(s);
        if !is_8digits(w) {
            break;
        }
        count += 8;
        any_nonzero |= w != EIGHT_ZEROS;
        s = &s[8..];
    }
    while let Some(&c) = s.first() {
        if !c.is_ascii_digit() {
            break;
        }
        count += 1;
        any_nonzero |= c != b'0';
        s = &s[1..];
    }
    (s, count, any_nonzero)
}

/// Scans an unsigned decimal literal (`digits [. digits] [e digits]`),
/// keeping at most `F::SIG_DIGITS` significant digits of mantissa.
///
/// Digits past the window are folded into the mantissa by a single
/// round-to-nearest-even step over the first dropped digit and the
/// sticky OR of the rest. Returns the record and the consumed length,
/// or `None` if no digit was found.
pub(crate) fn parse_number<F: RawFloat>(s: &[u8]) -> Option<(Number, usize)> {
    let start = s;
    let mut s = s;
    let mut mantissa = 0u64;
    let mut exponent = 0i64;
    let mut sig = 0usize;
    let mut any_digits = false;
    let mut dropped = false;
    let mut dropped_first = 0u8;
    let mut dropped_tail = false;

    // Leading zeros carry no information; skip them so they cannot
    // exhaust the significand window.
    while let [b'0', rest @ ..] = s {
        any_digits = true;
        s = rest;
    }
    while let Some(&c) = s.first() {
        let d = c.wrapping_sub(b'0');
        if d > 9 {
            break;
        }
        any_digits = true;
        if sig < F::SIG_DIGITS {
            mantissa = mantissa * 10 + u64::from(d);
            sig += 1;
            s = &s[1..];
            continue;
        }
        // Window full: this digit and the rest of the run affect only
        // the scale and the sticky state.
        dropped = true;
        dropped_first = d;
        exponent += 1;
        let (rest, n, nonzero) = skip_digits(&s[1..]);
        s = rest;
        exponent += n;
        dropped_tail |= nonzero;
        break;
    }

    if let Some((b'.', rest)) = s.split_first() {
        s = rest;
        if sig == 0 {
            // Zeros before the first significant digit adjust only the
            // scale.
            while let [b'0', rest @ ..] = s {
                any_digits = true;
                exponent -= 1;
                s = rest;
            }
        }
        while let Some(&c) = s.first() {
            let d = c.wrapping_sub(b'0');
            if d > 9 {
                break;
            }
            any_digits = true;
            if sig < F::SIG_DIGITS {
                mantissa = mantissa * 10 + u64::from(d);
                sig += 1;
                exponent -= 1;
                s = &s[1..];
                continue;
            }
            // Dropped fractional digits leave `mantissa * 10^exponent`
            // unchanged; only the sticky state grows.
            if !dropped {
                dropped = true;
                dropped_first = d;
            } else {
                dropped_tail |= d != 0;
            }
            let (rest, _, nonzero) = skip_digits(&s[1..]);
            s = rest;
            dropped_tail |= nonzero;
            break;
        }
    }

    if !any_digits {
        return None;
    }

    if let Some(&c) = s.first() {
        if c == b'e' || c == b'E' {
            let before = s;
            s = &s[1..];
            let mut negative_exp = false;
            if let Some(&sign) = s.first() {
                if sign == b'+' || sign == b'-' {
                    negative_exp = sign == b'-';
                    s = &s[1..];
                }
            }
            match s.first() {
                Some(c) if c.is_ascii_digit() => {
                    let mut exp = 0i64;
                    while let Some(&c) = s.first() {
                        let d = c.wrapping_sub(b'0');
                        if d > 9 {
                            break;
                        }
                        // The clamp keeps absurd exponents finite; the
                        // range guard rejects them either way.
                        if exp < 10_000 {
                            exp = exp * 10 + i64::from(d);
                        }
                        s = &s[1..];
                    }
                    exponent += if negative_exp { -exp } else { exp };
                }
                // An `e` with no digits is not an exponent; give it back.
                _ => s = before,
            }
        }
    }

    if dropped && (dropped_first > 5 || (dropped_first == 5 && (dropped_tail || mantissa & 1 == 1)))
    {
        mantissa += 1;
        if mantissa == F::MANTISSA_LIMIT {
            mantissa = F::MANTISSA_LIMIT / 10;
            exponent += 1;
        }
    }

    let number = Number {
        mantissa,
        exponent,
        negative: false,
        exact: !dropped,
    };
    Some((number, s.offset_from(start)))
}

/// Matches the case-insensitive special tokens `nan`, `inf`, `infinity`.
pub(crate) fn parse_inf_nan<F: RawFloat>(s: &[u8], negative: bool) -> Option<(F, usize)> {
    if s.len() >= 3 {
        if s[..3].eq_ignore_ascii_case(b"nan") {
            return Some((signed(F::quiet_nan(), negative), 3));
        }
        if s[..3].eq_ignore_ascii_case(b"inf") {
            if s.len() >= 8 && s[3..8].eq_ignore_ascii_case(b"inity") {
                return Some((signed(F::infinity(), negative), 8));
            }
            return Some((signed(F::infinity(), negative), 3));
        }
    }
    None
}

#[inline]
fn signed<F: RawFloat>(value: F, negative: bool) -> F {
    if negative {
        -value
    } else {
        value
    }
}

/// Converts the longest decimal-float prefix of `s`.
///
/// `None` means no valid prefix (nothing consumed). Out-of-range
/// magnitudes come back clamped to signed infinity or signed zero with
/// `out_of_range` set and the digits consumed.
pub(crate) fn dec2flt<F: RawFloat>(s: &[u8]) -> Option<Parsed<F>> {
    let start = s;
    let mut s = s;
    let c = *s.first()?;
    let negative = c == b'-';
    if negative || c == b'+' {
        s = &s[1..];
    }

    if let Some((value, len)) = parse_inf_nan::<F>(s, negative) {
        return Some(Parsed {
            value,
            len: len + s.offset_from(start),
            out_of_range: false,
        });
    }

    let (mut number, len) = parse_number::<F>(s)?;
    number.negative = negative;
    let len = len + s.offset_from(start);

    if let Some(value) = number.try_fast_path::<F>() {
        return Some(Parsed {
            value,
            len,
            out_of_range: false,
        });
    }

    if number.mantissa == 0 {
        return Some(Parsed {
            value: signed(F::from_u64_bits(0), negative),
            len,
            out_of_range: false,
        });
    }

    if number.exponent > F::MAX_EXPONENT_10 {
        return Some(Parsed {
            value: signed(F::infinity(), negative),
            len,
            out_of_range: true,
        });
    }
    if number.exponent < F::MIN_EXPONENT_10 {
        return Some(Parsed {
            value: signed(F::from_u64_bits(0), negative),
            len,
            out_of_range: true,
        });
    }

    let fp = compute_float::<F>(number.exponent as i32, number.mantissa);
    Some(Parsed {
        value: signed(F::from_biased(fp), negative),
        len,
        out_of_range: false,
    })
}
