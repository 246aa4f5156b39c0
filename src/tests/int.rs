use super::*;

fn leading_str() -> String {
    (if fastrand::bool() {
        "+".to_owned()
    } else {
        String::new()
    }) + &"0".repeat(fastrand::u8(..) as usize)
}

#[test]
fn uint() {
    assert_eq!(
        u64::parse_partial(u64::MAX.to_string().as_bytes())
            .unwrap()
            .0,
        u64::MAX
    );
    assert_eq!(
        u64::parse_partial(b"10000000000000000000").unwrap().0,
        10000000000000000000
    );
    assert_eq!(
        u64::parse_partial((leading_str() + "10000000000000000000").as_bytes())
            .unwrap()
            .0,
        10000000000000000000
    );
    assert_eq!(
        u64::parse_partial(b"9999999999999999999").unwrap().0,
        9999999999999999999
    );
    // One past MAX.
    assert_eq!(u64::parse(b"18446744073709551616"), None);
    assert_eq!(
        u32::parse_partial(u32::MAX.to_string().as_bytes())
            .unwrap()
            .0,
        u32::MAX
    );
    assert_eq!(u32::parse(b"4294967296"), None);
    assert_eq!(u16::parse(b"65535"), Some(u16::MAX));
    assert_eq!(u16::parse(b"65536"), None);
    assert_eq!(u8::parse_partial(b"0").unwrap().0, 0);
    assert_eq!(
        u8::parse_partial((leading_str() + "0").as_bytes())
            .unwrap()
            .0,
        0
    );
    assert_eq!(u8::parse(b"308"), None);
    assert_eq!(u8::parse(b"-1"), None);
    assert_eq!(u8::parse(b"+55"), Some(55));
}

#[test]
fn int() {
    assert_eq!(i64::parse(b"9223372036854775807"), Some(i64::MAX));
    assert_eq!(i64::parse(b"-9223372036854775808"), Some(i64::MIN));
    assert_eq!(i64::parse(b"9223372036854775808"), None);
    assert_eq!(i64::parse(b"-9223372036854775809"), None);
    assert_eq!(i32::parse(b"-2147483648"), Some(i32::MIN));
    assert_eq!(i32::parse(b"2147483648"), None);
    assert_eq!(i8::parse(b"-128"), Some(i8::MIN));
    assert_eq!(i8::parse(b"-129"), None);
    assert_eq!(i8::parse(b"+127"), Some(i8::MAX));
}

#[test]
fn partial() {
    assert_eq!(u32::parse_partial(b"123abc"), Some((123, 3)));
    assert_eq!(i32::parse_partial(b"-45.6"), Some((-45, 3)));
    assert_eq!(u32::parse_partial(b"abc"), None);
    assert_eq!(u32::parse_partial(b""), None);
    assert_eq!(u32::parse_partial(b"+"), None);
    assert_eq!(i32::parse_partial(b"-"), None);
    // A full parse rejects trailing bytes.
    assert_eq!(u32::parse(b"123abc"), None);
}

#[test]
fn radix() {
    assert_eq!(u32::parse_radix(b"ff", 16), Some(255));
    assert_eq!(u32::parse_radix(b"FF", 16), Some(255));
    assert_eq!(u8::parse_radix(b"100", 16), None);
    assert_eq!(i8::parse_radix(b"-80", 16), Some(i8::MIN));
    assert_eq!(u32::parse_radix(b"z", 36), Some(35));
    assert_eq!(u32::parse_radix(b"102", 2), None);
    assert_eq!(u32::parse_partial_radix(b"102", 2), Some((2, 2)));
    assert_eq!(u64::parse_radix(b"1111111111111111111111111111111111111111111111111111111111111111", 2), Some(u64::MAX));
    // `0x` is not special.
    assert_eq!(u32::parse_partial_radix(b"0x1f", 16), Some((0, 1)));
}

#[test]
#[should_panic(expected = "radix must be in 2..=36")]
fn radix_out_of_range() {
    let _ = u32::parse_radix(b"1", 37);
}

macro_rules! quickcheck_uint {
    ($name:ident, $ty:ident) => {
        mod $name {
            use super::*;
            ::quickcheck::quickcheck! {
                fn parse_str(x: String) -> bool {
                    assert_eq!($ty::parse(x.as_bytes()), x.parse::<$ty>().ok(), "{x}");
                    true
                }
                fn parse_valid(x: $ty) -> bool {
                    assert_eq!(
                        $ty::parse(x.to_string().as_bytes()).unwrap(),
                        x
                    );
                    assert_eq!(
                        $ty::parse((leading_str() + &x.to_string()).as_bytes()).unwrap(),
                        x
                    );
                    true
                }
                fn parse_radix(x: $ty) -> bool {
                    for radix in [2, 8, 16, 36] {
                        let s = match radix {
                            2 => format!("{x:b}"),
                            8 => format!("{x:o}"),
                            16 => format!("{x:x}"),
                            _ => to_radix_36(x as u64),
                        };
                        assert_eq!($ty::parse_radix(s.as_bytes(), radix), Some(x), "{s} (radix {radix})");
                    }
                    true
                }
            }
        }
    };
}
macro_rules! quickcheck_int {
    ($name:ident, $ty:ident) => {
        mod $name {
            use super::*;
            ::quickcheck::quickcheck! {
                fn parse_str(x: String) -> bool {
                    assert_eq!($ty::parse(x.as_bytes()), x.parse::<$ty>().ok(), "{x}");
                    true
                }
                fn parse_valid(x: $ty) -> bool {
                    assert_eq!(
                        $ty::parse(x.to_string().as_bytes()).unwrap(),
                        x
                    );
                    if !x.is_negative() {
                        assert_eq!(
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

fn to_radix_36(mut v: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut out = Vec::new();
    loop {
        out.push(DIGITS[(v % 36) as usize]);
        v /= 36;
        if v == 0 {
            break;
        }
    }
    out.reverse();
    String::from_utf8(out).unwrap()
}

quickcheck_uint!(quickcheck_u64, u64);
quickcheck_uint!(quickcheck_u32, u32);
quickcheck_uint!(quickcheck_u16, u16);
quickcheck_uint!(quickcheck_u8, u8);

quickcheck_int!(quickcheck_i64, i64);
quickcheck_int!(quickcheck_i32, i32);
quickcheck_int!(quickcheck_i16, i16);
quickcheck_int!(quickcheck_i8, i8);
