/*
Run with libFuzzer:

```sh
cargo fuzz run --release --features libfuzzer int
```

Run with AFL++:

```sh
cd fuzz
cargo afl build --release --features afl
cargo afl fuzz -i seeds/int -o out target/release/int
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
    let _result = decfloat::int::parse_partial::<u64>(bytes);
    let _result = decfloat::int::parse_partial::<i32>(bytes);
    let radix = 2 + (bytes.first().copied().unwrap_or(0) % 35) as u32;
    let _result = decfloat::int::parse_partial_radix::<u64>(&bytes[1.min(bytes.len())..], radix);

    if let Ok(s) = std::str::from_utf8(bytes) {
        assert_eq!(decfloat::int::parse::<u64>(bytes), s.parse::<u64>().ok(), "{s:?}");
        assert_eq!(decfloat::int::parse::<i64>(bytes), s.parse::<i64>().ok(), "{s:?}");
    }
}
