//! Stable-swap pool with synchronous settlement.
//!
//! The counterpart to the deferred-callback protocol: a stable pool
//! quotes and transfers both legs within one call.  There is no callback,
//! no re-entry into the router, and no partial fill — a swap the pool
//! cannot fully serve fails outright.  Price limits do not apply to this
//! protocol.

use tracing::trace;

use crate::config::StableConfig;
use crate::domain::{
    AccountId, Amount, AssetPair, ExchangeRate, Rounding, Selector, SignedAmount,
};
use crate::error::RouterError;
use crate::market::Ledger;
use crate::traits::FromConfig;

/// A pool settling synchronously, quoted against a near-peg rate.
///
/// Created from a [`StableConfig`] via [`FromConfig`].  Like its
/// deferred-settlement counterpart, the pool holds pricing state only;
/// reserves live in the market ledger under the pool's derived account.
#[derive(Debug, Clone, PartialEq)]
pub struct StablePool {
    pair: AssetPair,
    selector: Selector,
    rate: ExchangeRate,
}

impl StablePool {
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

    /// Executes a swap against this pool, settling both legs before
    /// returning.
    ///
    /// A positive `amount` fixes the input side (exact-input); a negative
    /// one fixes the output side (exact-output).  Returns the pool's
    /// `(delta0, delta1)` pair under the same sign convention as the
    /// deferred protocol: positive deltas were collected by the pool,
    /// negative deltas were paid out by it.
    ///
    /// # Arguments
    ///
    /// - `ledger` — balance ledger holding the pool's reserves.
    /// - `self_address` — this pool's derived account identity.
    /// - `payer` — account debited for the input leg.
    /// - `recipient` — account credited with the output leg.
    /// - `zero_for_one` — direction: `true` sells the pair's base asset.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidQuantity`] if `amount` is zero.
    /// - [`RouterError::InsufficientLiquidity`] if the pool cannot fully
    ///   serve the swap.
    /// - [`RouterError::InsufficientBalance`] if `payer` cannot cover the
    ///   input leg.
    pub fn swap(
        &mut self,
        ledger: &mut Ledger,
        self_address: AccountId,
        payer: AccountId,
        recipient: AccountId,
        zero_for_one: bool,
        amount: SignedAmount,
    ) -> crate::error::Result<(SignedAmount, SignedAmount)> {
        if amount.is_zero() {
            return Err(RouterError::InvalidQuantity("swap amount must be non-zero"));
        }

        let (asset_in, asset_out) = self.pair.oriented(zero_for_one);

        let (amount_in, amount_out) = if amount.is_positive() {
            let out = self.quote_out(amount.magnitude(), zero_for_one)?;
            (amount.magnitude(), out)
        } else {
            let requested = amount.magnitude();
            (self.quote_in(requested, zero_for_one)?, requested)
        };

        if amount_out.is_zero()
            || amount_out > ledger.balance_of(self_address, asset_out)
        {
            return Err(RouterError::InsufficientLiquidity);
        }

        trace!(
            pool = %self_address,
            in_leg = %amount_in,
            out_leg = %amount_out,
            "settling synchronously"
        );

        ledger.pay(asset_in, payer, self_address, amount_in)?;
        ledger.pay(asset_out, self_address, recipient, amount_out)?;

        let input_delta = SignedAmount::exact_input(amount_in)?;
        let output_delta = SignedAmount::exact_output(amount_out)?;
        Ok(if zero_for_one {
            (input_delta, output_delta)
        } else {
            (output_delta, input_delta)
        })
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
}

impl FromConfig<StableConfig> for StablePool {
    fn from_config(config: &StableConfig) -> Result<Self, RouterError> {
        config.validate()?;
        Ok(Self {
            pair: *config.pair(),
            selector: config.selector(),
            rate: config.rate(),
        })
    }
}
