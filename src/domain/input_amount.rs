//! Exact-input amount specification.

use core::fmt;

use super::Amount;

/// The input side of an exact-input request.
///
/// `EntireBalance` is the "spend whatever the router currently holds"
/// sentinel: it resolves, at execution time, to the router's present
/// balance of the path's first asset, with the router itself as the
/// first-hop payer.  It exists so that a preceding operation can deposit
/// funds into router custody and have the swap consume all of them without
/// the caller quoting an exact figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAmount {
    /// Spend exactly this amount, debited from the caller.
    Exact(Amount),
    /// Spend the router's entire current balance of the input asset.
    EntireBalance,
}

impl InputAmount {
    /// Returns `true` if this is the entire-balance sentinel.
    #[must_use]
    pub const fn is_entire_balance(&self) -> bool {
        matches!(self, Self::EntireBalance)
    }
}

impl fmt::Display for InputAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(amount) => write!(f, "{amount}"),
            Self::EntireBalance => write!(f, "entire-balance"),
        }
    }
}
