//! Raw asset amount with checked arithmetic.

use core::fmt;

use super::Rounding;

/// A raw asset amount in the smallest unit of its asset.
///
/// `Amount` never interprets denominations — it is a plain magnitude.
/// All `u128` values are valid amounts.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking.
///
/// # Examples
///
/// ```
/// use meander::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with explicit rounding direction.
    ///
    /// - [`Rounding::Down`]: floor division (round towards zero).
    /// - [`Rounding::Up`]: ceiling division — `(n + d - 1) / d`.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        match rounding {
            Rounding::Down => Some(Self(self.0 / divisor.0)),
            Rounding::Up => {
                // divisor > 0 guarantees (divisor.0 - 1) does not underflow.
                let numerator = match self.0.checked_add(divisor.0 - 1) {
                    Some(v) => v,
                    None => {
                        // (n + d - 1) overflowed; compute the ceiling as
                        //   floor(n / d) + (n % d != 0)
                        let q = self.0 / divisor.0;
                        let r = self.0 % divisor.0;
                        if r != 0 {
                            // q + 1 cannot overflow: r != 0 rules out
                            // n == u128::MAX with d == 1.
                            return Some(Self(q + 1));
                        }
                        return Some(Self(q));
                    }
                };
                Some(Self(numerator / divisor.0))
            }
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn new_and_get() {
        let a = Amount::new(42);
        assert_eq!(a.get(), 42);
    }

    #[test]
    fn constants() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u128::MAX);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn is_zero() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    // -- Checked arithmetic --------------------------------------------------

    #[test]
    fn add_in_range() {
        assert_eq!(
            Amount::new(1).checked_add(&Amount::new(2)),
            Some(Amount::new(3))
        );
    }

    #[test]
    fn add_overflow_is_none() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn sub_in_range() {
        assert_eq!(
            Amount::new(5).checked_sub(&Amount::new(2)),
            Some(Amount::new(3))
        );
    }

    #[test]
    fn sub_underflow_is_none() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
    }

    #[test]
    fn mul_in_range() {
        assert_eq!(
            Amount::new(6).checked_mul(&Amount::new(7)),
            Some(Amount::new(42))
        );
    }

    #[test]
    fn mul_overflow_is_none() {
        assert_eq!(Amount::MAX.checked_mul(&Amount::new(2)), None);
    }

    // -- Division & rounding -------------------------------------------------

    #[test]
    fn div_down_floors() {
        assert_eq!(
            Amount::new(7).checked_div(&Amount::new(2), Rounding::Down),
            Some(Amount::new(3))
        );
    }

    #[test]
    fn div_up_ceils() {
        assert_eq!(
            Amount::new(7).checked_div(&Amount::new(2), Rounding::Up),
            Some(Amount::new(4))
        );
    }

    #[test]
    fn div_exact_ignores_rounding() {
        assert_eq!(
            Amount::new(8).checked_div(&Amount::new(2), Rounding::Up),
            Some(Amount::new(4))
        );
        assert_eq!(
            Amount::new(8).checked_div(&Amount::new(2), Rounding::Down),
            Some(Amount::new(4))
        );
    }

    #[test]
    fn div_by_zero_is_none() {
        assert_eq!(Amount::new(8).checked_div(&Amount::ZERO, Rounding::Down), None);
    }

    #[test]
    fn div_up_near_max_does_not_overflow() {
        // (n + d - 1) overflows internally; the fallback path must still
        // produce the correct ceiling.
        assert_eq!(
            Amount::MAX.checked_div(&Amount::new(3), Rounding::Up),
            Some(Amount::new(u128::MAX.div_ceil(3)))
        );
    }

    // -- Ordering & Display --------------------------------------------------

    #[test]
    fn ordering_follows_value() {
        assert!(Amount::new(1) < Amount::new(2));
    }

    #[test]
    fn min_picks_smaller() {
        assert_eq!(Amount::new(80).min(Amount::new(79)), Amount::new(79));
    }

    #[test]
    fn display_is_plain_value() {
        assert_eq!(format!("{}", Amount::new(1234)), "1234");
    }
}
