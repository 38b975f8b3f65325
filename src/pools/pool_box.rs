//! Enum dispatch wrapper for both pool protocols.
//!
//! [`PoolBox`] wraps the two concrete pool implementations behind a
//! single enum, enabling heterogeneous registry storage and zero-cost
//! static dispatch.  The two protocols settle too differently for a
//! shared `swap` signature — one defers through a callback, the other is
//! synchronous — so the adapter matches on the variant at its single
//! dispatch site and only the protocol-independent accessors are
//! delegated here.

use super::concentrated::ConcentratedPool;
use super::stable::StablePool;
use crate::domain::{AssetPair, Selector};

/// The settlement protocol a pool speaks.
///
/// Constant-product pools are serviced outside this engine and therefore
/// have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolProtocol {
    /// Deferred-callback settlement; participates in exact-output
    /// recursion and accepts price limits.
    ConcentratedLiquidity,
    /// Synchronous settlement; both legs transfer within one call.
    StableSwap,
}

impl core::fmt::Display for PoolProtocol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ConcentratedLiquidity => write!(f, "ConcentratedLiquidity"),
            Self::StableSwap => write!(f, "StableSwap"),
        }
    }
}

/// Zero-cost dispatch enum wrapping both concrete pool implementations.
///
/// # Advantages
///
/// - **Zero-overhead dispatch**: no vtable, no dynamic allocation at
///   call time.
/// - **Exhaustive matching**: the compiler ensures both protocols are
///   handled at every dispatch site.
/// - **Closed type set**: pool protocols are fixed at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum PoolBox {
    /// Concentrated-liquidity pool (deferred-callback settlement).
    Concentrated(Box<ConcentratedPool>),
    /// Stable-swap pool (synchronous settlement).
    Stable(Box<StablePool>),
}

/// Helper macro to delegate a method call to every `PoolBox` variant.
macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            PoolBox::Concentrated(p) => p.$method($($arg),*),
            PoolBox::Stable(p) => p.$method($($arg),*),
        }
    };
}

impl PoolBox {
    /// Returns the asset pair managed by the pool.
    #[must_use]
    pub fn pair(&self) -> &AssetPair {
        delegate!(self, pair())
    }

    /// Returns the pool's selector.
    #[must_use]
    pub fn selector(&self) -> Selector {
        delegate!(self, selector())
    }

    /// Returns the settlement protocol the pool speaks.
    #[must_use]
    pub const fn protocol(&self) -> PoolProtocol {
        match self {
            Self::Concentrated(_) => PoolProtocol::ConcentratedLiquidity,
            Self::Stable(_) => PoolProtocol::StableSwap,
        }
    }
}
