//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use meander::prelude::*;
//! ```
//!
//! This re-exports the most frequently used domain types, the path codec,
//! the market environment, the router with its request types, and the
//! error types, so that consumers don't need to import from individual
//! submodules.

// Re-export domain types
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, ExchangeRate, InputAmount, Recipient, Selector,
    SignedAmount, SqrtPrice,
};

// Re-export the path codec
pub use crate::path::HopPath;

// Re-export configuration
pub use crate::config::{ConcentratedConfig, PoolConfig, StableConfig};

// Re-export the execution environment
pub use crate::market::{Ledger, Market, PoolRegistry};

// Re-export the router and request types
pub use crate::router::{
    ExactInputRequest, ExactInputSingleRequest, ExactOutputRequest, ExactOutputSingleRequest,
    Router,
};

// Re-export core traits
pub use crate::traits::{FromConfig, SwapCallback};

// Re-export error types
pub use crate::error::{Result, RouterError};
