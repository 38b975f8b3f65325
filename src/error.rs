//! Unified error types for the meander router library.
//!
//! All fallible operations across the crate return [`RouterError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//!
//! # Failure Semantics
//!
//! Every error is a whole-call-aborting failure: nothing in this crate
//! retries or locally recovers.  A failure anywhere in a nested settlement
//! chain unwinds the entire top-level operation.  The surrounding execution
//! environment is responsible for discarding partial effects (transfers
//! already issued to pools); this crate assumes that guarantee but does not
//! implement it.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, RouterError>;

/// Unified error enum for all router, pool, and market operations.
///
/// Variants that benefit from context carry a `&'static str` payload
/// describing the violated invariant.  All variants are `Copy`, so errors
/// can be matched and compared freely in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RouterError {
    /// A hop path holds fewer bytes than one full hop, or its length does
    /// not align to hop boundaries.
    #[error("hop path too short or malformed")]
    PathTooShort,

    /// A settlement callback reported no positive delta in either
    /// direction — the swap touched no liquidity.
    #[error("swap touched no liquidity in either direction")]
    ZeroLiquiditySwap,

    /// The caller of the settlement callback is not the pool derived for
    /// the hop being settled.
    #[error("callback caller is not the derived pool for this hop")]
    UnauthorizedCallback,

    /// An exact-input swap produced less output than the caller's minimum.
    #[error("swap output below the caller's minimum")]
    InsufficientOutput,

    /// An exact-output swap consumed more input than the caller's maximum.
    #[error("swap input above the caller's maximum")]
    ExcessiveInput,

    /// An exact-output swap under-delivered with no price limit supplied
    /// to tolerate a partial fill.
    #[error("pool under-delivered the requested output")]
    OutputMismatch,

    /// A guarded entry point was invoked while another guarded call was
    /// already in flight.
    #[error("entry point re-entered while a swap is in flight")]
    Reentrant,

    /// No pool is registered under the derived identity for a hop.
    #[error("no pool registered for the requested hop")]
    UnknownPool,

    /// A pool already exists for the given pair and selector.
    #[error("a pool already exists for this pair and selector")]
    PoolAlreadyExists,

    /// The debited account's balance cannot cover a transfer.
    #[error("account balance cannot cover the transfer")]
    InsufficientBalance,

    /// A pool did not receive the input it was owed by the end of its
    /// settlement callback.
    #[error("pool did not receive its owed input")]
    InsufficientPayment,

    /// A pool cannot serve any of the requested output.
    #[error("pool cannot serve the requested output")]
    InsufficientLiquidity,

    /// A price limit lies on the wrong side of the pool's current price.
    #[error("price limit is on the wrong side of the pool price")]
    InvalidPriceLimit,

    /// A quantity violates a local invariant (zero amount, wrong-signed
    /// delta, and similar).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A pool configuration violates a construction invariant.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// An asset identifier is invalid in its context (duplicate pair
    /// member, asset not part of a pair, and similar).
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// Intermediate arithmetic overflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),
}
