use decfloat::{int, parse, parse_partial, parse_partial_ws, parse_ws, Parsed};

#[test]
fn full_parse() {
    assert_eq!(parse::<f64>(b"12300"), Some(12300.0));
    assert_eq!(parse::<f64>(b"1.23e4"), Some(12300.0));
    assert_eq!(parse::<f32>(b"-2.5"), Some(-2.5));
    assert_eq!(parse::<f64>(b"1.23e4 "), None);
    assert_eq!(parse::<f64>(b""), None);
    // Whole-input parses clamp out-of-range magnitudes like `str::parse`.
    assert_eq!(parse::<f64>(b"1e9999"), Some(f64::INFINITY));
    assert_eq!(parse::<f64>(b"-1e9999"), Some(f64::NEG_INFINITY));
}

#[test]
fn partial_parse() {
    assert_eq!(
        parse_partial::<f64>(b"1.5e2xyz"),
        Some(Parsed {
            value: 150.0,
            len: 5,
            out_of_range: false,
        })
    );
    let p = parse_partial::<f64>(b"-1e-400,").unwrap();
    assert_eq!(p.value, -0.0);
    assert!(p.value.is_sign_negative());
    assert_eq!(p.len, 7);
    assert!(p.out_of_range);
}

#[test]
fn whitespace() {
    assert_eq!(parse_ws::<f32>(b" \t-12.5"), Some(-12.5));
    let p = parse_partial_ws::<f64>(b"\n 1e3 4").unwrap();
    assert_eq!((p.value, p.len), (1000.0, 5));
}

#[test]
fn integers() {
    assert_eq!(int::parse::<i64>(b"-123"), Some(-123));
    assert_eq!(int::parse_partial::<u32>(b"42 "), Some((42, 2)));
    assert_eq!(int::parse_radix::<u32>(b"ff", 16), Some(255));
    assert_eq!(int::parse::<i32>(b"2147483648"), None);
}
