//! Multi-hop routing and settlement engine.
//!
//! [`Router`] owns the call-scoped state of one top-level swap — the
//! re-entrancy guard and the cached input slot — and exposes the four
//! externally reachable entry points plus the settlement callback:
//!
//! | Entry point | Mode | Hops |
//! |-------------|------|------|
//! | [`exact_input_single`](Router::exact_input_single) | exact-input | 1 |
//! | [`exact_input`](Router::exact_input) | exact-input | n |
//! | [`exact_output_single`](Router::exact_output_single) | exact-output | 1 |
//! | [`exact_output`](Router::exact_output) | exact-output | n |
//!
//! Every entry point runs under the [`ExecutionGuard`]; the settlement
//! callback (the [`SwapCallback`](crate::traits::SwapCallback) impl) does
//! not, since it executes only inside an already-guarded call.
//!
//! Execution is single-threaded and call-scoped: a top-level request runs
//! to completion or aborts entirely.  Nested pool invocations re-enter
//! the router synchronously through the callback — a call-stack pattern,
//! not concurrency.

mod adapter;
mod cache;
mod callback;
mod context;
mod exact_input;
mod exact_output;
mod guard;
mod request;

pub use cache::CachedInput;
pub use context::CallbackContext;
pub use guard::ExecutionGuard;
pub use request::{
    ExactInputRequest, ExactInputSingleRequest, ExactOutputRequest, ExactOutputSingleRequest,
};

use crate::domain::AccountId;

/// The multi-hop swap router.
///
/// Holds no balances of its own beyond ledger custody under its account
/// identity, and no per-pool state: pools are resolved per hop through
/// the market registry's deterministic derivation.
///
/// See the crate-level documentation for an end-to-end example.
#[derive(Debug, Clone, PartialEq)]
pub struct Router {
    address: AccountId,
    guard: ExecutionGuard,
    cached_input: CachedInput,
}

impl Router {
    /// Creates a router operating under the given account identity.
    #[must_use]
    pub const fn new(address: AccountId) -> Self {
        Self {
            address,
            guard: ExecutionGuard::new(),
            cached_input: CachedInput::new(),
        }
    }

    /// Returns the router's own account identity.
    #[must_use]
    pub const fn address(&self) -> AccountId {
        self.address
    }

    /// Runs `operation` under the re-entrancy guard, releasing it on
    /// every exit path.
    fn with_guard<T>(
        &mut self,
        operation: impl FnOnce(&mut Self) -> crate::error::Result<T>,
    ) -> crate::error::Result<T> {
        self.guard.acquire()?;
        let outcome = operation(self);
        self.guard.release();
        outcome
    }
}
