use super::*;

fn leading_str() -> String {
    (if fastrand::bool() {
        "+".to_owned()
    } else {
        String::new()
    }) + &"0".repeat(fastrand::u8(..) as usize)
}

// Asserts that `$a` and `$b` have performed equivalent operations.
macro_rules! assert_float_op_eq {
    ($a:expr, $b:expr $(, $($tt:tt)*)?) => {{
        // See also:
        // - https://github.com/rust-lang/unsafe-code-guidelines/issues/237.
        // - https://github.com/rust-lang/portable-simd/issues/39.
        let a = $a;
        let b = $b;
        if a.is_nan() && b.is_nan() // don't check sign of NaN: https://github.com/rust-lang/rust/issues/55131
            || a.is_infinite()
                && b.is_infinite()
                && a.is_sign_positive() == b.is_sign_positive()
                && a.is_sign_negative() == b.is_sign_negative()
        {
            // ok
        } else {
            assert_eq!(a, b $(, $($tt)*)?);
        }
    }};
}

macro_rules! quickcheck_float {
    ($name:ident, $ty:ident) => {
        mod $name {
            use super::*;
            ::quickcheck::quickcheck! {
                fn parse_str(x: String) -> bool {
                    match ($ty::parse(x.as_bytes()), x.parse::<$ty>().ok()) {
                        (Some(a), Some(b)) => assert_float_op_eq!(a, b, "{x}"),
                        (a, b) => assert_eq!(a, b, "{x}"),
                    }
                    true
                }
                fn parse_valid(x: $ty) -> bool {
                    assert_float_op_eq!(
                        $ty::parse(x.to_string().as_bytes()).unwrap(),
                        x
                    );
                    if !x.is_nan() && !x.is_infinite() && !x.is_sign_negative() {
                        assert_float_op_eq!(
                            $ty::parse((leading_str() + &x.to_string()).as_bytes()).unwrap(),
                            x
                        );
                    }
                    true
                }
            }
        }
    };
}

quickcheck_float!(quickcheck_f64, f64);
quickcheck_float!(quickcheck_f32, f32);

#[track_caller]
fn check64(s: &str, bits: u64, len: usize, out_of_range: bool) {
    let p = parse_partial::<f64>(s.as_bytes()).unwrap();
    assert_eq!(p.value.to_bits(), bits, "value of {s:?}");
    assert_eq!(p.len, len, "len of {s:?}");
    assert_eq!(p.out_of_range, out_of_range, "range of {s:?}");
}

#[track_caller]
fn check32(s: &str, bits: u32, len: usize, out_of_range: bool) {
    let p = parse_partial::<f32>(s.as_bytes()).unwrap();
    assert_eq!(p.value.to_bits(), bits, "value of {s:?}");
    assert_eq!(p.len, len, "len of {s:?}");
    assert_eq!(p.out_of_range, out_of_range, "range of {s:?}");
}

#[test]
fn f64_values() {
    check64("0", 0x0000000000000000, 1, false);
    check64("-0", 0x8000000000000000, 2, false);
    check64("+0", 0x0000000000000000, 2, false);
    check64("3.141592653589793", 0x400921FB54442D18, 17, false);
    check64("0.1", 0x3FB999999999999A, 3, false);
    check64(".5", 0x3FE0000000000000, 2, false);
    check64("1.", 0x3FF0000000000000, 2, false);
    check64("1e22", 0x4480F0CF064DD592, 4, false);
    check64("1e23", 0x44B52D02C7E14AF6, 4, false);
    check64("123.456e-67", 0x3274CD6331F78360, 11, false);
    check64("1e-62", 0x3310747DDDDF22A8, 5, false);
    check64("1e307", 0x7FAC7B1F3CAC7433, 5, false);
    check64("1e308", 0x7FE1CCF385EBC8A0, 5, false);
    check64("9999999999999999999", 0x43E158E460913D00, 19, false);
    check64("12345678901234567890123456789", 0x45C3F20D99235F65, 29, false);
}

#[test]
fn f64_extremes() {
    check64("1.7976931348623157e308", 0x7FEFFFFFFFFFFFFF, 22, false);
    // Overflows during the final carry, not at the range guard.
    check64("1.7976931348623159e308", 0x7FF0000000000000, 22, false);
    check64("2.2250738585072014e-308", 0x0010000000000000, 23, false);
    check64("2.2250738585072011e-308", 0x000FFFFFFFFFFFFF, 23, false);
    check64("4.9406564584124654e-324", 0x0000000000000001, 23, false);
    check64("5e-324", 0x0000000000000001, 6, false);
    check64("2.5e-324", 0x0000000000000001, 8, false);
    // Below half the smallest subnormal, but inside the guarded exponent
    // range: rounds to zero without the out-of-range flag.
    check64("2e-324", 0x0000000000000000, 6, false);
}

#[test]
fn f64_range() {
    check64("1e9999", 0x7FF0000000000000, 6, true);
    check64("-1e9999", 0xFFF0000000000000, 7, true);
    check64("1e-400", 0x0000000000000000, 6, true);
    check64("-1e-400", 0x8000000000000000, 7, true);
    check64("1e309", 0x7FF0000000000000, 5, true);
    check64("1e-343", 0x0000000000000000, 6, true);
    let huge = format!("1{}", "0".repeat(400));
    check64(&huge, 0x7FF0000000000000, 401, true);
    let tiny = format!("0.{}1", "0".repeat(400));
    check64(&tiny, 0x0000000000000000, 403, true);
    // A zero mantissa never goes out of range, whatever the exponent.
    check64("0e99999", 0x0000000000000000, 7, false);
    check64("00000000000000000000e5", 0x0000000000000000, 22, false);
}

#[test]
fn f64_halfway() {
    // Values exactly between two representables must tie to even.
    check64("9007199254740993", 0x4340000000000000, 16, false);
    check64("9007199254740995", 0x4340000000000002, 16, false);
    check64("5338034974597118.5", 0x4332F6EA1E759FFE, 18, false);
    check64("2839171535513298.75", 0x43242C6C45A94DA6, 19, false);
    check64("2062524024794164.625", 0x431D4F6B2F5AB0D2, 20, false);
    check64("1096686775150607.8125", 0x430F2B724D4D407E, 21, false);
    check64("20927405323348302", 0x4352965750179A54, 17, false);
    check64("1396417186695736448", 0x43B3611208633FEC, 19, false);
}

#[test]
fn f64_grammar() {
    check64("1..0", 0x3FF0000000000000, 2, false);
    check64("1.5e2xyz", 0x4062C00000000000, 5, false);
    // A bare `e` (or `e` with only a sign) is handed back.
    check64("1e", 0x3FF0000000000000, 1, false);
    check64("1e+", 0x3FF0000000000000, 1, false);
    check64("1.ex", 0x3FF0000000000000, 2, false);
    check64("000000000000000000000000001234", 0x4093480000000000, 30, false);
    check64("0.0000000000000000000000000000000000001", 0x3841039D428A8B8F, 39, false);

    for s in ["", "abc", "+", "-", ".", "e5", "+e5", "-.e5", "..1", "in", "na"] {
        assert_eq!(parse_partial::<f64>(s.as_bytes()), None, "{s:?}");
        assert_eq!(parse_partial::<f32>(s.as_bytes()), None, "{s:?}");
    }
}

#[test]
fn f64_specials() {
    check64("inf", 0x7FF0000000000000, 3, false);
    check64("-inf", 0xFFF0000000000000, 4, false);
    check64("Infinity", 0x7FF0000000000000, 8, false);
    check64("-INFINITY", 0xFFF0000000000000, 9, false);
    // "infinite" matches the short token and leaves the rest.
    check64("infinite", 0x7FF0000000000000, 3, false);
    check64("NaN", 0x7FF8000000000000, 3, false);
    check64("-nan", 0xFFF8000000000000, 4, false);
    check64("+nanabc", 0x7FF8000000000000, 4, false);

    let v = parse::<f64>(b"-nan").unwrap();
    assert!(v.is_nan() && v.is_sign_negative());
    let v = parse::<f32>(b"-nan").unwrap();
    assert!(v.is_nan() && v.is_sign_negative());
}

#[test]
fn f32_values() {
    check32("0", 0x00000000, 1, false);
    check32("-0", 0x80000000, 2, false);
    check32("0.1", 0x3DCCCCCD, 3, false);
    check32("1234.5678", 0x449A522B, 9, false);
    check32("1e38", 0x7E967699, 4, false);
    check32("3.4028235e38", 0x7F7FFFFF, 12, false);
    check32("3.4028236e38", 0x7F800000, 12, false);
    check32("1e-45", 0x00000001, 5, false);
    check32("0.000000000000000000000000000000000000011754944", 0x00800000, 47, false);
    // The exact fast path can overflow on its own; the value is still
    // the correct rounding, with no range report.
    check32("9999999999e38", 0x7F800000, 13, false);
    check32("1e-64", 0x00000000, 5, false);
    check32("nan", 0x7FC00000, 3, false);
    check32("-inf", 0xFF800000, 4, false);
}

#[test]
fn f32_range() {
    check32("1e39", 0x7F800000, 4, true);
    check32("-1e39", 0xFF800000, 5, true);
    check32("1e-65", 0x00000000, 5, true);
    check32("-1e-65", 0x80000000, 6, true);
}

#[test]
fn f32_halfway() {
    check32("16777217", 0x4B800000, 8, false);
    check32("33554435", 0x4C000001, 8, false);
    check32("4304765.25", 0x4A835EFA, 10, false);
    check32("952965.15625", 0x4968A852, 12, false);
    check32("54884.373046875", 0x47566460, 15, false);
    check32("65044082", 0x4C781F9C, 8, false);
    check32("1630700352", 0x4EC26506, 10, false);
}

#[test]
fn whitespace_variants() {
    let p = parse_partial_ws::<f32>(b" \t\n-12.5").unwrap();
    assert_eq!(p.value, -12.5);
    assert_eq!(p.len, 8);
    assert_eq!(parse_ws::<f64>(b"  1e3"), Some(1000.0));
    assert_eq!(parse_ws::<f64>(b"  1e3 "), None);
    assert_eq!(parse_partial_ws::<f64>(b"   "), None);
    // No skipping on the plain entry points.
    assert_eq!(parse_partial::<f64>(b" 1"), None);
}

// Random inputs within the significand window, checked bit-for-bit
// against the standard library.
#[test]
fn oracle_f64() {
    for _ in 0..100_000 {
        let s = random_decimal(19, -330, 330);
        let ours = parse::<f64>(s.as_bytes()).unwrap();
        let std = s.parse::<f64>().unwrap();
        assert_eq!(ours.to_bits(), std.to_bits(), "{s:?}");
    }
}

#[test]
fn oracle_f32() {
    for _ in 0..100_000 {
        let s = random_decimal(10, -50, 42);
        let ours = parse::<f32>(s.as_bytes()).unwrap();
        let std = s.parse::<f32>().unwrap();
        assert_eq!(ours.to_bits(), std.to_bits(), "{s:?}");
    }
}

// Shortest decimal representations must round-trip exactly.
#[test]
fn roundtrip_f64() {
    for _ in 0..100_000 {
        let x = f64::from_bits(fastrand::u64(..));
        if x.is_nan() {
            continue;
        }
        let s = x.to_string();
        assert_float_op_eq!(parse::<f64>(s.as_bytes()).unwrap(), x, "{s:?}");
    }
}

#[test]
fn roundtrip_f32() {
    for _ in 0..100_000 {
        let x = f32::from_bits(fastrand::u32(..));
        if x.is_nan() {
            continue;
        }
        let s = x.to_string();
        assert_float_op_eq!(parse::<f32>(s.as_bytes()).unwrap(), x, "{s:?}");
    }
}

fn random_decimal(max_sig: usize, min_exp: i32, max_exp: i32) -> String {
    let mut s = String::new();
    if fastrand::bool() {
        s.push(if fastrand::bool() { '+' } else { '-' });
    }
    let sig = fastrand::usize(1..=max_sig);
    let int_digits = fastrand::usize(0..=sig);
    for i in 0..sig {
        if i == int_digits {
            s.push('.');
        }
        s.push(fastrand::char('0'..='9'));
    }
    if fastrand::bool() {
        s.push(if fastrand::bool() { 'e' } else { 'E' });
        let exp = fastrand::i32(min_exp..=max_exp);
        s.push_str(&exp.to_string());
    }
    s
}
