//! Generic construction trait for pool instantiation from configuration.
//!
//! [`FromConfig`] provides a uniform interface for creating pool instances
//! from their respective configuration structs.  Each pool type implements
//! `FromConfig<C>` for its own config variant, enabling the market's
//! deploy path to dispatch construction without `dyn` trait objects.
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction.  A successfully constructed pool is guaranteed to be in a
//! valid initial state.  Common validations include:
//!
//! - Asset pair has two distinct identifiers
//! - Exchange-rate terms are non-zero
//! - Initial reserves are non-zero
//! - Protocol-specific parameters are valid (e.g. the initial sqrt price
//!   of a concentrated pool lies strictly inside the protocol bounds)
//!
//! # No Generic Blanket Implementation
//!
//! There is no `impl<T> FromConfig<T>` blanket — each pool must explicitly
//! implement the trait for its specific config type.  This ensures that
//! every pool-config pairing is intentional and that validation logic is
//! protocol-specific.

use crate::error::RouterError;

/// Generic construction trait for building a pool from a configuration.
///
/// # Type Parameters
///
/// - `C` — the configuration type that fully describes the pool's
///   immutable parameters (asset pair, selector, rate, initial reserves).
///
/// # Implementors
///
/// - `impl FromConfig<ConcentratedConfig> for ConcentratedPool`
/// - `impl FromConfig<StableConfig> for StablePool`
///
/// # Errors
///
/// Returns [`RouterError::InvalidConfiguration`] (or a more specific
/// variant) if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new pool instance from the given configuration.
    ///
    /// The configuration is taken by reference because it may be reused
    /// (e.g. for logging or retry by the deploying caller).
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidConfiguration`] if any pool parameter is
    ///   out of range or inconsistent.
    /// - [`RouterError::InvalidAsset`] if the asset pair is invalid.
    fn from_config(config: &C) -> Result<Self, RouterError>
    where
        Self: Sized;
}
