//! Core trait abstractions for pool construction and settlement.
//!
//! This module defines the two seams of the crate: [`FromConfig`] for
//! configuration-driven pool construction and [`SwapCallback`] for the
//! deferred settlement protocol between concentrated pools and the
//! router.

mod from_config;
mod swap_callback;

pub use from_config::FromConfig;
pub use swap_callback::SwapCallback;
