//! Pool protocol implementations and the [`PoolBox`] dispatch enum.
//!
//! The two in-scope protocols differ in exactly one structural way —
//! settlement timing:
//!
//! | Pool | Settlement |
//! |------|------------|
//! | [`ConcentratedPool`] | Deferred: output first, input collected via callback |
//! | [`StablePool`] | Synchronous: both legs transfer within one call |
//!
//! Constant-product pools are serviced outside this engine.

mod concentrated;
mod pool_box;
mod stable;

pub use concentrated::ConcentratedPool;
pub use pool_box::{PoolBox, PoolProtocol};
pub use stable::StablePool;
