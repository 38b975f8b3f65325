//! Exact-output execution: fixed output, computed input.
//!
//! Exact-output paths are authored **output-to-input** and evaluated in
//! economic reverse: the drivers here issue exactly one top-level pool
//! invocation, and every further hop is driven by the settlement
//! callback's recursion, not by a loop.  The chain's true total input
//! surfaces either as the direct return value (single hop) or through the
//! cached-input slot (multi-hop), which is taken unconditionally on every
//! exit path so no later call can observe a stale value.

use tracing::debug;

use crate::domain::{AccountId, Amount, SignedAmount, SqrtPrice};
use crate::error::RouterError;
use crate::market::Market;
use crate::path::HopPath;
use crate::router::{CallbackContext, ExactOutputRequest, ExactOutputSingleRequest, Router};

impl Router {
    /// Swaps as little as possible of one asset for an exact output of
    /// another, through a single pool.
    ///
    /// With no price limit the pool must deliver the requested output
    /// exactly; with one, a partial fill under adverse pricing is
    /// tolerated and the call returns the input actually consumed.
    ///
    /// Returns the input amount consumed.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Reentrant`] if another guarded call is in flight.
    /// - [`RouterError::OutputMismatch`] on under-delivery with no price
    ///   limit supplied.
    /// - [`RouterError::ExcessiveInput`] if the input exceeds
    ///   `amount_in_maximum`.
    /// - Any error from the pool or from settlement.
    pub fn exact_output_single(
        &mut self,
        market: &mut Market,
        caller: AccountId,
        request: ExactOutputSingleRequest,
    ) -> crate::error::Result<Amount> {
        self.with_guard(|router| {
            // Single-hop call shapes share the multi-hop convention: the
            // packed path is authored output-to-input.
            let path =
                HopPath::encode_single_hop(request.asset_out, request.selector, request.asset_in);
            let recipient = request.recipient.resolve(caller, router.address);

            let result = router.exact_output_internal(
                market,
                request.amount_out,
                recipient,
                request.price_limit,
                CallbackContext::new(path, caller),
            );
            // The terminal settlement records even a single-hop input in
            // the cached slot; discard it unconditionally — the direct
            // return value is authoritative here.
            let _ = router.cached_input.take();

            let (amount_in, _) = result?;
            if amount_in > request.amount_in_maximum {
                return Err(RouterError::ExcessiveInput);
            }
            Ok(amount_in)
        })
    }

    /// Swaps as little as possible along a multi-hop path for an exact
    /// final output.
    ///
    /// The path is authored output-to-input.  One pool invocation is
    /// issued for the leading (output-side) hop; the settlement callback
    /// recursively works backwards through the remaining hops, and the
    /// chain's total input is read from the cached-input slot once the
    /// top invocation returns.
    ///
    /// Returns the total input amount consumed.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Reentrant`] if another guarded call is in flight.
    /// - [`RouterError::OutputMismatch`] on under-delivery anywhere in
    ///   the chain.
    /// - [`RouterError::ExcessiveInput`] if the total input exceeds
    ///   `amount_in_maximum`.
    /// - Any error from path decoding, the pools, or settlement.
    pub fn exact_output(
        &mut self,
        market: &mut Market,
        caller: AccountId,
        request: ExactOutputRequest,
    ) -> crate::error::Result<Amount> {
        self.with_guard(|router| {
            let multi_hop = request.path.has_multiple_hops();
            let recipient = request.recipient.resolve(caller, router.address);

            debug!(
                hops = request.path.hop_count(),
                amount_out = %request.amount_out,
                "exact output swap"
            );

            let result = router.exact_output_internal(
                market,
                request.amount_out,
                recipient,
                None,
                CallbackContext::new(request.path, caller),
            );
            // Unconditional reset, success or failure: nothing may leak
            // into a later top-level call.
            let cached = router.cached_input.take();

            let (direct_in, _) = result?;
            let amount_in = if multi_hop {
                cached.ok_or(RouterError::InvalidQuantity(
                    "multi-hop chain recorded no input",
                ))?
            } else {
                direct_in
            };

            if amount_in > request.amount_in_maximum {
                return Err(RouterError::ExcessiveInput);
            }
            Ok(amount_in)
        })
    }

    /// Executes one exact-output hop.
    ///
    /// Returns `(amount_in, amount_out_received)` for the hop.  Callable
    /// both from the drivers above and from the settlement callback's
    /// recursion.
    pub(crate) fn exact_output_internal(
        &mut self,
        market: &mut Market,
        amount_out: Amount,
        recipient: AccountId,
        price_limit: Option<SqrtPrice>,
        context: CallbackContext,
    ) -> crate::error::Result<(Amount, Amount)> {
        // The path head reads (asset_out, asset_in, selector): exact-output
        // paths are authored output-to-input.
        let (asset_out, asset_in, selector) = context.path().decode_first_hop()?;
        let zero_for_one = asset_in < asset_out;

        let (delta0, delta1) = self.pool_swap(
            market,
            asset_in,
            asset_out,
            selector,
            recipient,
            zero_for_one,
            SignedAmount::exact_output(amount_out)?,
            price_limit,
            context,
        )?;

        let (amount_in, amount_received) = if zero_for_one {
            (delta0.owed_to_pool()?, delta1.paid_by_pool()?)
        } else {
            (delta1.owed_to_pool()?, delta0.paid_by_pool()?)
        };

        // Under-delivery is only tolerable when the caller bounded the
        // price and thereby accepted a partial fill.
        if price_limit.is_none() && amount_received != amount_out {
            return Err(RouterError::OutputMismatch);
        }

        Ok((amount_in, amount_received))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::{ConcentratedConfig, PoolConfig};
    use crate::domain::{AssetId, AssetPair, ExchangeRate, Recipient, Selector, SqrtPrice};

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

    /// Market with one concentrated A/B pool at rate 95/100 and a funded
    /// caller.
    fn make_market(caller: AccountId) -> Market {
        let mut market = Market::new(account(0xdd));
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("valid pair");
        };
        let Ok(rate) = ExchangeRate::new(95, 100) else {
            panic!("valid rate");
        };
        let Ok(cfg) = ConcentratedConfig::new(
            pair,
            selector(),
            rate,
            SqrtPrice::new(1 << 64),
            Amount::new(1_000_000),
            Amount::new(1_000_000),
        ) else {
            panic!("valid config");
        };
        let Ok(_) = market.deploy(&PoolConfig::Concentrated(cfg)) else {
            panic!("deploy failed");
        };
        let Ok(()) = market.ledger_mut().mint(caller, asset(1), Amount::new(10_000)) else {
            panic!("mint failed");
        };
        market
    }

    // The cached slot must read as unset before any next top-level call,
    // whether the previous one succeeded or failed.

    #[test]
    fn cache_is_sentinel_after_success() {
        let caller = account(0x01);
        let mut market = make_market(caller);
        let mut router = Router::new(account(0xbb));

        let Ok(amount_in) = router.exact_output_single(
            &mut market,
            caller,
            ExactOutputSingleRequest {
                asset_in: asset(1),
                asset_out: asset(2),
                selector: selector(),
                recipient: Recipient::Caller,
                amount_out: Amount::new(95),
                amount_in_maximum: Amount::new(100),
                price_limit: None,
            },
        ) else {
            panic!("swap should succeed");
        };
        assert_eq!(amount_in, Amount::new(100));
        assert!(!router.cached_input.is_set());
    }

    #[test]
    fn cache_is_sentinel_after_failure() {
        let caller = account(0x01);
        let mut market = make_market(caller);
        let mut router = Router::new(account(0xbb));

        let result = router.exact_output_single(
            &mut market,
            caller,
            ExactOutputSingleRequest {
                asset_in: asset(1),
                asset_out: asset(2),
                selector: selector(),
                recipient: Recipient::Caller,
                amount_out: Amount::new(95),
                amount_in_maximum: Amount::new(99),
                price_limit: None,
            },
        );
        assert_eq!(result.map(|_| ()), Err(RouterError::ExcessiveInput));
        assert!(!router.cached_input.is_set());
    }
}
