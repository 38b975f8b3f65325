//! Ordered pair of distinct assets.

use super::AssetId;
use crate::error::RouterError;

/// An ordered pair of distinct assets, canonically sorted by identifier.
///
/// The canonical ordering guarantees `base() < quote()` under the fixed
/// total order on [`AssetId`], preventing duplicate pairs such as `(A, B)`
/// and `(B, A)`.  Swap direction is expressed against this ordering:
/// `zero_for_one` means selling the base asset for the quote asset.
///
/// # Examples
///
/// ```
/// use meander::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 20]);
/// let b = AssetId::from_bytes([2u8; 20]);
///
/// // Order is enforced automatically:
/// let pair = AssetPair::new(b, a).expect("distinct assets");
/// assert_eq!(pair.base(), a);
/// assert_eq!(pair.quote(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    base: AssetId,
    quote: AssetId,
}

impl AssetPair {
    /// Creates a new canonically-ordered `AssetPair`.
    ///
    /// The two assets are automatically sorted so that `base < quote`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidAsset`] if both assets are identical.
    pub fn new(asset1: AssetId, asset2: AssetId) -> crate::error::Result<Self> {
        if asset1 == asset2 {
            return Err(RouterError::InvalidAsset(
                "asset pair requires two distinct identifiers",
            ));
        }

        let (base, quote) = if asset1 < asset2 {
            (asset1, asset2)
        } else {
            (asset2, asset1)
        };

        Ok(Self { base, quote })
    }

    /// Returns the base asset (lower identifier).
    #[must_use]
    pub const fn base(&self) -> AssetId {
        self.base
    }

    /// Returns the quote asset (higher identifier).
    #[must_use]
    pub const fn quote(&self) -> AssetId {
        self.quote
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.base == *asset || self.quote == *asset
    }

    /// Returns the `(input, output)` assets of a swap in the given
    /// direction.
    ///
    /// `zero_for_one` sells the base asset for the quote asset; the
    /// opposite direction sells the quote asset for the base asset.
    #[must_use]
    pub const fn oriented(&self, zero_for_one: bool) -> (AssetId, AssetId) {
        if zero_for_one {
            (self.base, self.quote)
        } else {
            (self.quote, self.base)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 20])
    }

    #[test]
    fn valid_pair_preserves_order() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.base(), asset(1));
        assert_eq!(pair.quote(), asset(2));
    }

    #[test]
    fn auto_sorts_reversed_input() {
        let Ok(pair) = AssetPair::new(asset(2), asset(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.base(), asset(1));
        assert_eq!(pair.quote(), asset(2));
    }

    #[test]
    fn rejects_identical_assets() {
        let Err(e) = AssetPair::new(asset(1), asset(1)) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            RouterError::InvalidAsset("asset pair requires two distinct identifiers")
        );
    }

    #[test]
    fn contains_both_members() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert!(pair.contains(&asset(1)));
        assert!(pair.contains(&asset(2)));
        assert!(!pair.contains(&asset(3)));
    }

    #[test]
    fn oriented_zero_for_one_sells_base() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.oriented(true), (asset(1), asset(2)));
        assert_eq!(pair.oriented(false), (asset(2), asset(1)));
    }

    #[test]
    fn equality_ignores_argument_order() {
        let (Ok(p1), Ok(p2)) = (
            AssetPair::new(asset(1), asset(2)),
            AssetPair::new(asset(2), asset(1)),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(p1, p2);
    }
}
