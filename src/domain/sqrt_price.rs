//! Square-root price marker and protocol bounds.

use core::fmt;

/// A pool's price position expressed as the square root of the quote/base
/// price ratio, in an opaque fixed-point encoding.
///
/// The router never computes with this value — it only compares it.  Pools
/// carry a `SqrtPrice` marker, and callers may bound how far a swap is
/// allowed to move it.  A caller that accepts any resulting price passes no
/// limit, in which case the adapter substitutes the protocol-wide
/// [`unbounded`](Self::unbounded) bound for the swap's direction.
///
/// # Examples
///
/// ```
/// use meander::domain::SqrtPrice;
///
/// let price = SqrtPrice::new(1 << 64);
/// assert!(price > SqrtPrice::MIN);
/// assert!(price < SqrtPrice::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct SqrtPrice(u128);

impl SqrtPrice {
    /// Protocol-wide minimum price.  No pool may sit at or below this
    /// value, so `MIN + 1` is a valid "accept anything" lower bound.
    pub const MIN: Self = Self(1);

    /// Protocol-wide maximum price.  No pool may sit at or above this
    /// value, so `MAX - 1` is a valid "accept anything" upper bound.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a `SqrtPrice` from its raw encoding.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw encoded value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns the accept-any-price bound for a swap direction.
    ///
    /// Selling the base asset moves the price down, so the bound is just
    /// above [`MIN`](Self::MIN); selling the quote asset moves it up, so
    /// the bound is just below [`MAX`](Self::MAX).
    pub const fn unbounded(zero_for_one: bool) -> Self {
        if zero_for_one {
            Self(Self::MIN.0 + 1)
        } else {
            Self(Self::MAX.0 - 1)
        }
    }

    /// Returns `true` if this price lies strictly inside the protocol
    /// bounds.
    #[must_use]
    pub const fn is_within_bounds(&self) -> bool {
        self.0 > Self::MIN.0 && self.0 < Self::MAX.0
    }
}

impl fmt::Display for SqrtPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(SqrtPrice::new(77).get(), 77);
    }

    #[test]
    fn bounds_order() {
        assert!(SqrtPrice::MIN < SqrtPrice::MAX);
    }

    #[test]
    fn unbounded_down_is_just_above_min() {
        assert_eq!(SqrtPrice::unbounded(true).get(), SqrtPrice::MIN.get() + 1);
    }

    #[test]
    fn unbounded_up_is_just_below_max() {
        assert_eq!(SqrtPrice::unbounded(false).get(), SqrtPrice::MAX.get() - 1);
    }

    #[test]
    fn within_bounds_excludes_the_bounds() {
        assert!(!SqrtPrice::MIN.is_within_bounds());
        assert!(!SqrtPrice::MAX.is_within_bounds());
        assert!(SqrtPrice::new(1 << 64).is_within_bounds());
    }

    #[test]
    fn display_is_raw_value() {
        assert_eq!(format!("{}", SqrtPrice::new(42)), "42");
    }
}
