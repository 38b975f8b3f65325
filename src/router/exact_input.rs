//! Exact-input execution: fixed input, computed output.

use tracing::debug;

use crate::domain::{AccountId, Amount, InputAmount, SignedAmount, SqrtPrice};
use crate::error::RouterError;
use crate::market::Market;
use crate::path::HopPath;
use crate::router::{CallbackContext, ExactInputRequest, ExactInputSingleRequest, Router};

impl Router {
    /// Swaps an exact input of one asset for as much as possible of
    /// another, through a single pool.
    ///
    /// Returns the output amount delivered to the recipient.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Reentrant`] if another guarded call is in flight.
    /// - [`RouterError::InsufficientOutput`] if the output falls below
    ///   `amount_out_minimum`.
    /// - Any error from the pool or from settlement.
    pub fn exact_input_single(
        &mut self,
        market: &mut Market,
        caller: AccountId,
        request: ExactInputSingleRequest,
    ) -> crate::error::Result<Amount> {
        self.with_guard(|router| {
            let path =
                HopPath::encode_single_hop(request.asset_in, request.selector, request.asset_out);
            let (amount_in, payer) = router.resolve_input(market, &path, request.amount_in, caller)?;
            let recipient = request.recipient.resolve(caller, router.address);

            let amount_out = router.exact_input_internal(
                market,
                amount_in,
                recipient,
                request.price_limit,
                CallbackContext::new(path, payer),
            )?;
            if amount_out < request.amount_out_minimum {
                return Err(RouterError::InsufficientOutput);
            }
            Ok(amount_out)
        })
    }

    /// Swaps an exact input along a multi-hop path, delivering the final
    /// output to the recipient.
    ///
    /// Every hop after the first delivers to the router's own custody and
    /// is paid from it, since the router — not the original caller —
    /// holds the intermediate asset once the previous hop settles.  Only
    /// the final hop pays out to the requested recipient.
    ///
    /// Returns the final output amount.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Reentrant`] if another guarded call is in flight.
    /// - [`RouterError::InsufficientOutput`] if the final output falls
    ///   below `amount_out_minimum`.
    /// - Any error from path decoding, the pools, or settlement.
    pub fn exact_input(
        &mut self,
        market: &mut Market,
        caller: AccountId,
        request: ExactInputRequest,
    ) -> crate::error::Result<Amount> {
        self.with_guard(|router| {
            let (mut amount, mut payer) =
                router.resolve_input(market, &request.path, request.amount_in, caller)?;
            let mut path = request.path;

            debug!(hops = path.hop_count(), amount_in = %amount, "exact input swap");

            loop {
                let has_more = path.has_multiple_hops();
                // Mid-chain output goes to router custody; the final hop
                // pays the requested recipient, resolved here at its
                // point of first use.
                let recipient = if has_more {
                    router.address
                } else {
                    request.recipient.resolve(caller, router.address)
                };

                amount = router.exact_input_internal(
                    market,
                    amount,
                    recipient,
                    None,
                    CallbackContext::new(path.first_hop()?, payer),
                )?;

                if has_more {
                    payer = router.address;
                    path = path.skip_token()?;
                } else {
                    break;
                }
            }

            if amount < request.amount_out_minimum {
                return Err(RouterError::InsufficientOutput);
            }
            Ok(amount)
        })
    }

    /// Executes one exact-input hop and returns the output delivered.
    fn exact_input_internal(
        &mut self,
        market: &mut Market,
        amount_in: Amount,
        recipient: AccountId,
        price_limit: Option<SqrtPrice>,
        context: CallbackContext,
    ) -> crate::error::Result<Amount> {
        let (asset_in, asset_out, selector) = context.path().decode_first_hop()?;
        let zero_for_one = asset_in < asset_out;

        let (delta0, delta1) = self.pool_swap(
            market,
            asset_in,
            asset_out,
            selector,
            recipient,
            zero_for_one,
            SignedAmount::exact_input(amount_in)?,
            price_limit,
            context,
        )?;

        let output = if zero_for_one { delta1 } else { delta0 };
        output.paid_by_pool()
    }

    /// Resolves the input side of an exact-input request: an exact amount
    /// debited from the caller, or — for the entire-balance sentinel —
    /// the router's present balance of the path's first asset, with the
    /// router itself as payer.
    fn resolve_input(
        &self,
        market: &Market,
        path: &HopPath,
        amount_in: InputAmount,
        caller: AccountId,
    ) -> crate::error::Result<(Amount, AccountId)> {
        match amount_in {
            InputAmount::Exact(amount) => Ok((amount, caller)),
            InputAmount::EntireBalance => {
                let first = path.first_asset()?;
                Ok((
                    market.ledger().balance_of(self.address, first),
                    self.address,
                ))
            }
        }
    }
}
