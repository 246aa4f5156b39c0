#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    single_use_lifetimes,
    clippy::impl_trait_in_params
)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::must_use_candidate
)]

mod binary;
mod common;
mod float;
mod number;
mod parse;
mod table;

pub mod int;

use crate::parse::dec2flt;

/// A successfully parsed float together with how it was obtained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parsed<T> {
    /// The parsed value. Clamped to signed infinity or signed zero when
    /// the decimal magnitude is outside the representable range.
    pub value: T,
    /// Bytes consumed from the start of the input.
    pub len: usize,
    /// True if the magnitude fell outside the representable range and
    /// `value` was clamped.
    pub out_of_range: bool,
}

/// Parses `bytes` as a decimal float, requiring the whole input to match.
///
/// Out-of-range magnitudes yield the clamped value (`±inf`/`±0`), the same
/// as [`str::parse`]. Returns `None` if `bytes` is not entirely a float
/// literal.
#[inline]
pub fn parse<T: Float>(bytes: &[u8]) -> Option<T> {
    T::parse(bytes)
}

/// Parses the longest float-literal prefix of `bytes`.
///
/// The accepted grammar is an optional sign, then either a C-style decimal
/// literal or one of the case-insensitive specials `nan`, `inf`,
/// `infinity`. Trailing bytes are not an error. Returns `None` when no
/// prefix matches (in which case nothing was consumed).
#[inline]
pub fn parse_partial<T: Float>(bytes: &[u8]) -> Option<Parsed<T>> {
    T::parse_partial(bytes)
}

/// Like [`parse`], after skipping leading ASCII whitespace.
#[inline]
pub fn parse_ws<T: Float>(bytes: &[u8]) -> Option<T> {
    let n = skip_ascii_whitespace(bytes);
    match T::parse_partial(&bytes[n..]) {
        Some(p) if n + p.len == bytes.len() => Some(p.value),
        _ => None,
    }
}

/// Like [`parse_partial`], after skipping leading ASCII whitespace.
/// The reported length includes the skipped bytes.
#[inline]
pub fn parse_partial_ws<T: Float>(bytes: &[u8]) -> Option<Parsed<T>> {
    let n = skip_ascii_whitespace(bytes);
    let p = T::parse_partial(&bytes[n..])?;
    Some(Parsed {
        len: p.len + n,
        ..p
    })
}

#[inline]
fn skip_ascii_whitespace(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .take_while(|&&c| matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c))
        .count()
}

/// A floating-point type this crate can parse. Implemented for `f32` and
/// `f64`; sealed.
pub trait Float: float::RawFloat {
    /// See [`parse`](crate::parse).
    #[inline]
    fn parse(bytes: &[u8]) -> Option<Self> {
        match Self::parse_partial(bytes) {
            Some(p) if p.len == bytes.len() => Some(p.value),
            _ => None,
        }
    }

    /// See [`parse_partial`](crate::parse_partial).
    #[inline]
    fn parse_partial(bytes: &[u8]) -> Option<Parsed<Self>> {
        dec2flt(bytes)
    }
}

impl Float for f32 {}
impl Float for f64 {}

#[cfg(test)]
#[path = "tests/float.rs"]
mod tests;
