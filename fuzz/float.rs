/*
Run with libFuzzer:

```sh
cargo fuzz run --release --features libfuzzer float
```

Run with AFL++:

```sh
cd fuzz
cargo afl build --release --features afl
cargo afl fuzz -i seeds/float -o out target/release/float
```
*/

#![cfg_attr(feature = "libfuzzer", no_main)]

#[cfg(any(
    not(any(feature = "libfuzzer", feature = "afl")),
    all(feature = "libfuzzer", feature = "afl"),
))]
compile_error!("exactly one of 'libfuzzer' or 'afl' feature must be enabled");

#[cfg(feature = "libfuzzer")]
libfuzzer_sys::fuzz_target!(|bytes: &[u8]| {
    run(bytes);
});

#[cfg(feature = "afl")]
fn main() {
    afl::fuzz!(|bytes: &[u8]| {
        run(bytes);
    });
}

fn run(bytes: &[u8]) {
    let _result = decfloat::parse_partial::<f64>(bytes);
    let _result = decfloat::parse_partial::<f32>(bytes);

    // Whole-input parses of window-sized literals must agree with the
    // standard library bit for bit; longer mantissas may legitimately
    // differ by one ulp.
    if let Ok(s) = std::str::from_utf8(bytes) {
        let digits = s.bytes().filter(u8::is_ascii_digit).count();
        if digits <= 19 {
            check_against_std::<f64>(s);
        }
        if digits <= 10 {
            check_against_std::<f32>(s);
        }
    }
}

fn check_against_std<T: decfloat::Float + std::str::FromStr + Copy>(s: &str)
where
    T: PartialEq + std::fmt::Debug,
{
    let ours = decfloat::parse::<T>(s.as_bytes());
    let std = s.parse::<T>().ok();
    match (ours, std) {
        (Some(a), Some(b)) => assert!(a == b || (a != a && b != b), "{s:?}: {a:?} != {b:?}"),
        (a, b) => assert_eq!(a.is_some(), b.is_some(), "{s:?}"),
    }
}
