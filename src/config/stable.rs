//! Configuration for stable-swap pools.

use crate::domain::{Amount, AssetPair, ExchangeRate, Selector};
use crate::error::RouterError;

/// Configuration for a stable-swap pool.
///
/// Defines the immutable parameters of a pool that settles synchronously:
/// asset pair, selector, quoting rate (typically near peg), and initial
/// reserves.  Stable pools carry no price marker — they accept no price
/// limit and never partially fill.
///
/// # Validation
///
/// - Both reserves must be non-zero.
/// - The asset pair and rate are validated at their own construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct StableConfig {
    pair: AssetPair,
    selector: Selector,
    rate: ExchangeRate,
    reserve_base: Amount,
    reserve_quote: Amount,
}

impl StableConfig {
    /// Creates a new `StableConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfiguration`] if either reserve is
    /// zero.
    pub fn new(
        pair: AssetPair,
        selector: Selector,
        rate: ExchangeRate,
        reserve_base: Amount,
        reserve_quote: Amount,
    ) -> Result<Self, RouterError> {
        let config = Self {
            pair,
            selector,
            rate,
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
    /// Returns [`RouterError::InvalidConfiguration`] if either reserve is
    /// zero.
    pub fn validate(&self) -> Result<(), RouterError> {
        if self.reserve_base.is_zero() || self.reserve_quote.is_zero() {
            return Err(RouterError::InvalidConfiguration(
                "initial reserves must be non-zero",
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

    /// Returns the initial base-asset reserve.
    pub const fn reserve_base(&self) -> Amount {
        self.reserve_base
    }

    /// Returns the initial quote-asset reserve.
    pub const fn reserve_quote(&self) -> Amount {
        self.reserve_quote
    }
}
