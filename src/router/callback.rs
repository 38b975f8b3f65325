//! Deferred settlement: the callback side of the concentrated protocol.
//!
//! A concentrated pool invokes this handler synchronously, mid-swap,
//! after delivering its output optimistically.  The handler either pays
//! the pool directly or — for an exact-output chain with hops remaining —
//! recurses into the next hop so that the *next* pool's settlement pays
//! this one, unwinding back through the call chain until the path is
//! exhausted.

use tracing::trace;

use crate::domain::{AccountId, SignedAmount};
use crate::error::RouterError;
use crate::market::Market;
use crate::router::{CallbackContext, Router};
use crate::traits::SwapCallback;

impl SwapCallback for Router {
    /// Settles one concentrated-pool hop.
    ///
    /// # Steps
    ///
    /// 1. Reject settlements in which neither delta is strictly positive:
    ///    a swap touching no liquidity in either direction is never
    ///    valid.
    /// 2. Decode the context's leading hop.
    /// 3. Recompute the canonical pool identity for the hop and require
    ///    it equals `caller` — the sole defense against a forged
    ///    callback.
    /// 4. Classify the settling leg: the positive delta names the asset
    ///    owed, and comparing it against the hop's asset order tells an
    ///    exact-input leg from an exact-output one.
    /// 5. Exact-input leg: pay the hop's input asset from the payer to
    ///    the pool.  Terminal for this hop.
    /// 6. Exact-output leg: with hops remaining, drop the settled hop and
    ///    recurse into the next; otherwise record the owed amount in the
    ///    cached-input slot and pay — the hop's second asset, which for a
    ///    reverse-authored chain is its true first input.
    fn concentrated_swap_callback(
        &mut self,
        market: &mut Market,
        caller: AccountId,
        delta0: SignedAmount,
        delta1: SignedAmount,
        context: CallbackContext,
    ) -> Result<(), RouterError> {
        if !delta0.is_positive() && !delta1.is_positive() {
            return Err(RouterError::ZeroLiquiditySwap);
        }

        let (asset_in, asset_out, selector) = context.path().decode_first_hop()?;
        let expected = market.registry().derive(asset_in, asset_out, selector);
        if caller != expected {
            return Err(RouterError::UnauthorizedCallback);
        }

        let (is_exact_input, amount_owed) = if delta0.is_positive() {
            (asset_in < asset_out, delta0.magnitude())
        } else {
            (asset_out < asset_in, delta1.magnitude())
        };

        trace!(
            pool = %caller,
            owed = %amount_owed,
            exact_input = is_exact_input,
            "settling hop"
        );

        if is_exact_input {
            market
                .ledger_mut()
                .pay(asset_in, context.payer(), caller, amount_owed)
        } else if context.path().has_multiple_hops() {
            let payer = context.payer();
            let next = context.path().skip_token()?;
            // The calling pool becomes the recipient of the next hop: its
            // owed input arrives as that hop's output.
            self.exact_output_internal(
                market,
                amount_owed,
                caller,
                None,
                CallbackContext::new(next, payer),
            )?;
            Ok(())
        } else {
            // Terminal hop of the chain.  Reverse authoring makes the
            // decoded second asset the chain's true first input.
            self.cached_input.set(amount_owed);
            market
                .ledger_mut()
                .pay(asset_out, context.payer(), caller, amount_owed)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AssetId, Selector};
    use crate::path::HopPath;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 20])
    }

    fn account(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 20])
    }

    fn selector() -> Selector {
        let Ok(s) = Selector::from_u32(3_000) else {
            panic!("valid selector");
        };
        s
    }

    fn single_hop_context(payer: AccountId) -> CallbackContext {
        CallbackContext::new(
            HopPath::encode_single_hop(asset(1), selector(), asset(2)),
            payer,
        )
    }

    #[test]
    fn no_positive_delta_rejected() {
        let mut router = Router::new(account(0xbb));
        let mut market = Market::new(account(0xdd));

        let result = router.concentrated_swap_callback(
            &mut market,
            account(0xaa),
            SignedAmount::new(-1),
            SignedAmount::ZERO,
            single_hop_context(account(0x01)),
        );
        assert_eq!(result, Err(RouterError::ZeroLiquiditySwap));
    }

    #[test]
    fn zero_check_precedes_authentication() {
        let mut router = Router::new(account(0xbb));
        let mut market = Market::new(account(0xdd));

        // Even a forged caller is reported as a zero-liquidity swap when
        // no delta is positive: validation order is fixed.
        let result = router.concentrated_swap_callback(
            &mut market,
            account(0x66),
            SignedAmount::ZERO,
            SignedAmount::ZERO,
            single_hop_context(account(0x01)),
        );
        assert_eq!(result, Err(RouterError::ZeroLiquiditySwap));
    }

    #[test]
    fn forged_caller_rejected() {
        let mut router = Router::new(account(0xbb));
        let mut market = Market::new(account(0xdd));

        let result = router.concentrated_swap_callback(
            &mut market,
            account(0x66),
            SignedAmount::new(100),
            SignedAmount::new(-95),
            single_hop_context(account(0x01)),
        );
        assert_eq!(result, Err(RouterError::UnauthorizedCallback));
    }

    #[test]
    fn derived_caller_accepted_and_paid() {
        let mut router = Router::new(account(0xbb));
        let mut market = Market::new(account(0xdd));
        let payer = account(0x01);
        let Ok(()) = market
            .ledger_mut()
            .mint(payer, asset(1), crate::domain::Amount::new(1_000))
        else {
            panic!("mint failed");
        };

        let pool = market.registry().derive(asset(1), asset(2), selector());
        let Ok(()) = router.concentrated_swap_callback(
            &mut market,
            pool,
            SignedAmount::new(100),
            SignedAmount::new(-95),
            single_hop_context(payer),
        ) else {
            panic!("settlement should succeed");
        };

        assert_eq!(
            market.ledger().balance_of(pool, asset(1)),
            crate::domain::Amount::new(100)
        );
    }

    #[test]
    fn malformed_context_path_rejected() {
        let mut router = Router::new(account(0xbb));
        let mut market = Market::new(account(0xdd));

        let result = router.concentrated_swap_callback(
            &mut market,
            account(0xaa),
            SignedAmount::new(100),
            SignedAmount::new(-95),
            CallbackContext::new(HopPath::from_bytes(vec![0u8; 10]), account(0x01)),
        );
        assert_eq!(result, Err(RouterError::PathTooShort));
    }
}
