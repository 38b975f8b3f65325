//! Settlement callback seam between pools and the router.
//!
//! A concentrated-liquidity pool defers payment collection: it computes
//! its deltas, optimistically delivers the output, then synchronously
//! re-enters its caller through [`SwapCallback`] to collect the input it
//! is owed — all before its own `swap` returns.  "Suspension" here is a
//! re-entrant call-stack pattern, not concurrency: control returns to the
//! pool's caller only after settlement for the hop (and any hops the
//! callback recursed into) has completed.
//!
//! The trait keeps pools ignorant of the router's concrete type while
//! letting the router recurse into further hops from inside the callback.

use crate::domain::{AccountId, SignedAmount};
use crate::error::RouterError;
use crate::market::Market;
use crate::router::CallbackContext;

/// Receiver of deferred settlement callbacks from concentrated pools.
///
/// # Contract
///
/// Implementations must, within the callback:
///
/// 1. reject settlements in which neither delta is strictly positive;
/// 2. authenticate `caller` against the identity derived for the hop
///    being settled — derivation is the **sole** defense against a forged
///    callback;
/// 3. pay the calling pool its owed input (directly, or by recursing into
///    the next hop of an exact-output chain so that the next pool pays).
///
/// The callback is not an external entry point: it executes inside the
/// dynamic extent of an already-guarded top-level call and must not pass
/// through the re-entrancy guard again.
pub trait SwapCallback {
    /// Settles one concentrated-pool hop.
    ///
    /// # Arguments
    ///
    /// - `market` — ledger and pool registry, with the calling pool
    ///   temporarily removed for the duration of its swap.
    /// - `caller` — the account identity of the invoking pool.
    /// - `delta0` / `delta1` — the pool's base- and quote-side deltas.
    /// - `context` — the settlement context handed to the pool verbatim
    ///   at swap time.
    ///
    /// # Errors
    ///
    /// - [`RouterError::ZeroLiquiditySwap`] if neither delta is positive.
    /// - [`RouterError::UnauthorizedCallback`] if `caller` is not the
    ///   derived pool for the context's leading hop.
    /// - Any error from paying or from recursing into further hops.
    fn concentrated_swap_callback(
        &mut self,
        market: &mut Market,
        caller: AccountId,
        delta0: SignedAmount,
        delta1: SignedAmount,
        context: CallbackContext,
    ) -> Result<(), RouterError>;
}
