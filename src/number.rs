//! The scanner's output record.

use crate::float::RawFloat;

/// A decimal significand and power-of-ten scale produced by the scanner.
/// The represented value is `(-1)^negative * mantissa * 10^exponent`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Number {
    pub(crate) mantissa: u64,
    pub(crate) exponent: i64,
    pub(crate) negative: bool,
    /// False if digits beyond the significand window were discarded
    /// (the scanner has already folded them into `mantissa` by rounding).
    pub(crate) exact: bool,
}

impl Number {
    /// Converts using IEEE arithmetic alone, when that is provably
    /// correctly rounded for this mantissa/exponent combination.
    #[inline]
    pub(crate) fn try_fast_path<F: RawFloat>(&self) -> Option<F> {
        if !self.exact {
            return None;
        }
        let value = F::fast_path(self.mantissa, self.exponent)?;
        Some(if self.negative { -value } else { value })
    }
}
