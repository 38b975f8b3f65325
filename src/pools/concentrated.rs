//! Concentrated-liquidity pool with deferred-callback settlement.
//!
//! The defining trait of this protocol is its settlement timing: the pool
//! computes its deltas, **optimistically delivers the output**, then
//! synchronously re-enters its caller through
//! [`SwapCallback`](crate::traits::SwapCallback) to collect the input it
//! is owed — all before its own `swap` returns.  The pool trusts nobody:
//! it records its input-asset balance before the callback and verifies
//! afterwards that the owed amount actually arrived.
//!
//! # Pricing
//!
//! Quoting is a fixed [`ExchangeRate`] plus available-depth capping; the
//! router never sees any of it, only the resulting deltas.  The
//! [`SqrtPrice`] marker exists so price limits keep their protocol
//! meaning: a limit must lie strictly between the protocol bound and the
//! pool's current price on the side the swap moves towards.
//!
//! # Partial Fills
//!
//! A swap the pool cannot fully serve is filled to available depth.
//! Whether a partial fill is acceptable is the *router's* decision (it
//! tolerates one only when the caller supplied an explicit price limit);
//! the pool just reports what it did through its deltas.

use tracing::trace;

use crate::config::ConcentratedConfig;
use crate::domain::{
    AccountId, Amount, AssetPair, ExchangeRate, Rounding, Selector, SignedAmount, SqrtPrice,
};
use crate::error::RouterError;
use crate::market::Market;
use crate::router::CallbackContext;
use crate::traits::{FromConfig, SwapCallback};

/// A pool settling through the deferred callback protocol.
///
/// Created from a [`ConcentratedConfig`] via [`FromConfig`].  The pool
/// holds pricing state only; its reserves live in the market ledger under
/// the pool's derived account, which is also how depth is measured.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentratedPool {
    pair: AssetPair,
    selector: Selector,
    rate: ExchangeRate,
    sqrt_price: SqrtPrice,
}

impl ConcentratedPool {
    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the pool selector.
    #[must_use]
    pub const fn selector(&self) -> Selector {
        self.selector
    }

    /// Returns the current sqrt-price marker.
    pub const fn sqrt_price(&self) -> SqrtPrice {
        self.sqrt_price
    }

    /// Executes a swap against this pool.
    ///
    /// A positive `amount` fixes the input side (exact-input); a negative
    /// one fixes the output side (exact-output).  Returns the pool's
    /// `(delta0, delta1)` pair: positive deltas are owed to the pool,
    /// negative deltas were paid out by it.
    ///
    /// The call is synchronous but re-enters `callback` before returning;
    /// the caller regains control only after settlement for this hop (and
    /// all nested hops the callback triggers) completes.
    ///
    /// # Arguments
    ///
    /// - `market` — environment with this pool already taken out of the
    ///   registry.
    /// - `callback` — receiver of the deferred settlement invocation.
    /// - `self_address` — this pool's derived account identity.
    /// - `recipient` — account credited with the output.
    /// - `zero_for_one` — direction: `true` sells the pair's base asset.
    /// - `price_limit` — bound on price movement; the adapter substitutes
    ///   the accept-anything bound when the caller supplied none.
    /// - `context` — opaque settlement context handed back to `callback`
    ///   verbatim.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidQuantity`] if `amount` is zero.
    /// - [`RouterError::InvalidPriceLimit`] if the limit is on the wrong
    ///   side of the pool price.
    /// - [`RouterError::InsufficientLiquidity`] if the pool cannot
    ///   deliver any output at all.
    /// - [`RouterError::InsufficientPayment`] if the owed input did not
    ///   arrive by the time the callback returned.
    /// - Any error surfaced by the callback itself.
    #[allow(clippy::too_many_arguments)]
    pub fn swap(
        &mut self,
        market: &mut Market,
        callback: &mut dyn SwapCallback,
        self_address: AccountId,
        recipient: AccountId,
        zero_for_one: bool,
        amount: SignedAmount,
        price_limit: SqrtPrice,
        context: CallbackContext,
    ) -> crate::error::Result<(SignedAmount, SignedAmount)> {
        if amount.is_zero() {
            return Err(RouterError::InvalidQuantity("swap amount must be non-zero"));
        }
        self.check_price_limit(zero_for_one, price_limit)?;

        let (asset_in, asset_out) = self.pair.oriented(zero_for_one);
        let available = market.ledger().balance_of(self_address, asset_out);

        let (amount_in, amount_out) = if amount.is_positive() {
            // Exact input: quote the output, fill to available depth.
            let quoted = self.quote_out(amount.magnitude(), zero_for_one)?;
            if quoted > available {
                (self.quote_in(available, zero_for_one)?, available)
            } else {
                (amount.magnitude(), quoted)
            }
        } else {
            // Exact output: deliver up to available depth.
            let delivered = amount.magnitude().min(available);
            (self.quote_in(delivered, zero_for_one)?, delivered)
        };

        if amount_out.is_zero() {
            return Err(RouterError::InsufficientLiquidity);
        }

        let input_delta = SignedAmount::exact_input(amount_in)?;
        let output_delta = SignedAmount::exact_output(amount_out)?;
        let (delta0, delta1) = if zero_for_one {
            (input_delta, output_delta)
        } else {
            (output_delta, input_delta)
        };

        trace!(
            pool = %self_address,
            %delta0,
            %delta1,
            "deferring settlement to callback"
        );

        // Optimistic output delivery; the input is collected through the
        // callback and verified below.
        market
            .ledger_mut()
            .pay(asset_out, self_address, recipient, amount_out)?;
        let balance_before = market.ledger().balance_of(self_address, asset_in);

        callback.concentrated_swap_callback(market, self_address, delta0, delta1, context)?;

        let owed = balance_before
            .checked_add(&amount_in)
            .ok_or(RouterError::Overflow("owed balance overflow"))?;
        if market.ledger().balance_of(self_address, asset_in) < owed {
            return Err(RouterError::InsufficientPayment);
        }

        Ok((delta0, delta1))
    }

    /// Output quoted for an input, rounding in the pool's favor.
    fn quote_out(&self, amount_in: Amount, zero_for_one: bool) -> crate::error::Result<Amount> {
        if zero_for_one {
            self.rate.base_to_quote(amount_in, Rounding::Down)
        } else {
            self.rate.quote_to_base(amount_in, Rounding::Down)
        }
    }

    /// Input required for an output, rounding in the pool's favor.
    fn quote_in(&self, amount_out: Amount, zero_for_one: bool) -> crate::error::Result<Amount> {
        if zero_for_one {
            self.rate.quote_to_base(amount_out, Rounding::Up)
        } else {
            self.rate.base_to_quote(amount_out, Rounding::Up)
        }
    }

    /// A limit must lie strictly between the protocol bound and the
    /// current price, on the side the swap moves towards.
    fn check_price_limit(
        &self,
        zero_for_one: bool,
        limit: SqrtPrice,
    ) -> crate::error::Result<()> {
        let valid = if zero_for_one {
            limit < self.sqrt_price && limit > SqrtPrice::MIN
        } else {
            limit > self.sqrt_price && limit < SqrtPrice::MAX
        };
        if !valid {
            return Err(RouterError::InvalidPriceLimit);
        }
        Ok(())
    }
}

impl FromConfig<ConcentratedConfig> for ConcentratedPool {
    fn from_config(config: &ConcentratedConfig) -> Result<Self, RouterError> {
        config.validate()?;
        Ok(Self {
            pair: *config.pair(),
            selector: config.selector(),
            rate: config.rate(),
            sqrt_price: config.sqrt_price(),
        })
    }
}
