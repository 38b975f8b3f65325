//! Fixed exchange rate between the two assets of a pair.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::RouterError;

/// A pool's exchange rate expressed as a ratio of quote units per base
/// unit: `quote = base · numerator / denominator`.
///
/// This is the minimal pricing model the bundled pools quote against.  The
/// router itself never touches it — pricing stays behind the pool boundary,
/// and routing logic only interprets the resulting deltas.
///
/// Conversions round explicitly: delivered outputs round down, owed inputs
/// round up, so precision loss always favors the pool.
///
/// # Examples
///
/// ```
/// use meander::domain::{Amount, ExchangeRate, Rounding};
///
/// // 95 quote units per 100 base units.
/// let rate = ExchangeRate::new(95, 100).expect("non-zero terms");
/// let out = rate.base_to_quote(Amount::new(100), Rounding::Down).expect("no overflow");
/// assert_eq!(out, Amount::new(95));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExchangeRate {
    numerator: u128,
    denominator: u128,
}

impl ExchangeRate {
    /// Creates a new rate from its ratio terms.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] if either term is
    /// zero.
    pub const fn new(numerator: u128, denominator: u128) -> crate::error::Result<Self> {
        if numerator == 0 || denominator == 0 {
            return Err(RouterError::InvalidConfiguration(
                "exchange rate terms must be non-zero",
            ));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Returns the numerator (quote-side term).
    #[must_use]
    pub const fn numerator(&self) -> u128 {
        self.numerator
    }

    /// Returns the denominator (base-side term).
    #[must_use]
    pub const fn denominator(&self) -> u128 {
        self.denominator
    }

    /// Converts a base-asset amount into its quote-asset counterpart.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] if the intermediate
    /// multiplication overflows.
    pub fn base_to_quote(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        self.scale(amount, self.numerator, self.denominator, rounding)
    }

    /// Converts a quote-asset amount into its base-asset counterpart.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] if the intermediate
    /// multiplication overflows.
    pub fn quote_to_base(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        self.scale(amount, self.denominator, self.numerator, rounding)
    }

    fn scale(
        &self,
        amount: Amount,
        mul: u128,
        div: u128,
        rounding: Rounding,
    ) -> crate::error::Result<Amount> {
        let scaled = amount
            .checked_mul(&Amount::new(mul))
            .ok_or(RouterError::Overflow("rate conversion overflow"))?;
        // div is non-zero by construction.
        scaled
            .checked_div(&Amount::new(div), rounding)
            .ok_or(RouterError::Overflow("rate conversion divisor is zero"))
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn rate(num: u128, den: u128) -> ExchangeRate {
        let Ok(r) = ExchangeRate::new(num, den) else {
            panic!("valid rate in test: {num}/{den}");
        };
        r
    }

    // -- Construction --------------------------------------------------------

    #[test]
    fn rejects_zero_numerator() {
        assert!(ExchangeRate::new(0, 1).is_err());
    }

    #[test]
    fn rejects_zero_denominator() {
        assert!(ExchangeRate::new(1, 0).is_err());
    }

    #[test]
    fn accessors() {
        let r = rate(95, 100);
        assert_eq!(r.numerator(), 95);
        assert_eq!(r.denominator(), 100);
    }

    // -- Conversions ---------------------------------------------------------

    #[test]
    fn base_to_quote_rounds_down() {
        // 99 · 95 / 100 = 94.05
        assert_eq!(
            rate(95, 100).base_to_quote(Amount::new(99), Rounding::Down),
            Ok(Amount::new(94))
        );
    }

    #[test]
    fn quote_to_base_rounds_up() {
        // 79 · 100 / 95 = 83.15…
        assert_eq!(
            rate(95, 100).quote_to_base(Amount::new(79), Rounding::Up),
            Ok(Amount::new(84))
        );
    }

    #[test]
    fn conversions_invert_exactly_on_multiples() {
        let r = rate(95, 100);
        let Ok(quote) = r.base_to_quote(Amount::new(100), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(quote, Amount::new(95));
        assert_eq!(r.quote_to_base(quote, Rounding::Up), Ok(Amount::new(100)));
    }

    #[test]
    fn unit_rate_is_identity() {
        let r = rate(1, 1);
        assert_eq!(r.base_to_quote(Amount::new(500), Rounding::Down), Ok(Amount::new(500)));
        assert_eq!(r.quote_to_base(Amount::new(500), Rounding::Up), Ok(Amount::new(500)));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            rate(2, 1).base_to_quote(Amount::MAX, Rounding::Down),
            Err(RouterError::Overflow("rate conversion overflow"))
        );
    }

    // -- Display --------------------------------------------------------------

    #[test]
    fn display_shows_ratio() {
        assert_eq!(format!("{}", rate(95, 100)), "95/100");
    }
}
