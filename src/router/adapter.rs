//! Uniform pool invocation over both settlement protocols.
//!
//! The adapter is the single dispatch site between the engines and the
//! pools.  It derives the target pool from the hop's assets and selector,
//! substitutes the accept-any-price bound when the caller supplied no
//! limit, removes the pool from the registry for the duration of the
//! nested call (restoring it on every path), and matches on the protocol:
//! the concentrated variant settles through the deferred callback, the
//! stable variant synchronously.

use tracing::trace;

use crate::domain::{AccountId, AssetId, Selector, SignedAmount, SqrtPrice};
use crate::market::Market;
use crate::pools::PoolBox;
use crate::router::{CallbackContext, Router};

impl Router {
    /// Invokes the pool servicing one hop and returns its
    /// `(delta0, delta1)` pair.
    ///
    /// `zero_for_one` is derived by the engine from the fixed total order
    /// on asset identifiers: the lower-ordered asset is the pool's base.
    /// For the concentrated protocol this call is synchronous but
    /// re-enters the settlement callback before returning — control comes
    /// back here only once the hop (and every hop its settlement recursed
    /// into) is fully settled.
    ///
    /// For the stable protocol, when the settled hop is the path's final
    /// hop of an exact-output request, the consumed input is recorded in
    /// the cached-input slot — the synchronous analogue of the terminal
    /// write the callback performs for concentrated chains.
    ///
    /// # Errors
    ///
    /// - [`RouterError::UnknownPool`](crate::error::RouterError::UnknownPool)
    ///   if no pool is registered for the hop — including a pool revisited
    ///   while its own swap is still settling.
    /// - Any error surfaced by the pool or by nested settlement.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn pool_swap(
        &mut self,
        market: &mut Market,
        asset_in: AssetId,
        asset_out: AssetId,
        selector: Selector,
        recipient: AccountId,
        zero_for_one: bool,
        amount: SignedAmount,
        price_limit: Option<SqrtPrice>,
        context: CallbackContext,
    ) -> crate::error::Result<(SignedAmount, SignedAmount)> {
        let pool_id = market.registry().derive(asset_in, asset_out, selector);
        let mut pool = market.registry_mut().take(pool_id)?;

        let is_stable = matches!(pool, PoolBox::Stable(_));
        let records_chain_input = amount.is_negative() && !context.path().has_multiple_hops();
        let payer = context.payer();

        trace!(
            pool = %pool_id,
            protocol = %pool.protocol(),
            zero_for_one,
            %amount,
            "invoking pool"
        );

        let result = match &mut pool {
            PoolBox::Concentrated(p) => {
                let limit = price_limit.unwrap_or_else(|| SqrtPrice::unbounded(zero_for_one));
                p.swap(
                    market,
                    self,
                    pool_id,
                    recipient,
                    zero_for_one,
                    amount,
                    limit,
                    context,
                )
            }
            PoolBox::Stable(p) => p.swap(
                market.ledger_mut(),
                pool_id,
                payer,
                recipient,
                zero_for_one,
                amount,
            ),
        };

        market.registry_mut().restore(pool_id, pool);
        let (delta0, delta1) = result?;

        if is_stable && records_chain_input {
            // Terminal stable hop of an exact-output path: the consumed
            // input cannot travel back through outer pool frames, so it is
            // recorded the same way the callback records it for
            // concentrated chains.
            let owed = if zero_for_one { delta0 } else { delta1 };
            self.cached_input.set(owed.owed_to_pool()?);
        }

        Ok((delta0, delta1))
    }
}
