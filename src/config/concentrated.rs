//! Configuration for concentrated-liquidity pools.

use crate::domain::{Amount, AssetPair, ExchangeRate, Selector, SqrtPrice};
use crate::error::RouterError;

/// Configuration for a concentrated-liquidity pool.
///
/// Defines the immutable parameters of a pool that settles through the
/// deferred callback protocol: asset pair, selector, quoting rate, initial
/// price marker, and initial reserves.
///
/// # Validation
///
/// - Both reserves must be non-zero.
/// - The initial sqrt price must lie strictly inside the protocol bounds.
/// - The asset pair and rate are validated at their own construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentratedConfig {
    pair: AssetPair,
    selector: Selector,
    rate: ExchangeRate,
    sqrt_price: SqrtPrice,
    reserve_base: Amount,
    reserve_quote: Amount,
}

impl ConcentratedConfig {
    /// Creates a new `ConcentratedConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] if either reserve is
    /// zero or the sqrt price sits on or outside the protocol bounds.
    pub fn new(
        pair: AssetPair,
        selector: Selector,
        rate: ExchangeRate,
        sqrt_price: SqrtPrice,
        reserve_base: Amount,
        reserve_quote: Amount,
    ) -> Result<Self, RouterError> {
        let config = Self {
            pair,
            selector,
            rate,
            sqrt_price,
            reserve_base,
            reserve_quote,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] on any violation.
    pub fn validate(&self) -> Result<(), RouterError> {
        if self.reserve_base.is_zero() || self.reserve_quote.is_zero() {
            return Err(RouterError::InvalidConfiguration(
                "initial reserves must be non-zero",
            ));
        }
        if !self.sqrt_price.is_within_bounds() {
            return Err(RouterError::InvalidConfiguration(
                "initial sqrt price outside protocol bounds",
            ));
        }
        Ok(())
    }

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

    /// Returns the quoting rate.
    #[must_use]
    pub const fn rate(&self) -> ExchangeRate {
        self.rate
    }

    /// Returns the initial sqrt-price marker.
    pub const fn sqrt_price(&self) -> SqrtPrice {
        self.sqrt_price
    }

    /// Returns the initial base-asset reserve.
    pub const fn reserve_base(&self) -> Amount {
        self.reserve_base
    }

    /// Returns the initial quote-asset reserve.
    pub const fn reserve_quote(&self) -> Amount {
        self.reserve_quote
    }
}
