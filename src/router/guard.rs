//! Single-flight re-entrancy guard.

use crate::error::RouterError;

/// Binary guarded/unguarded state covering the router's externally
/// reachable entry points.
///
/// Every entry point acquires the guard on entry and releases it on every
/// exit path; acquiring while already held fails with
/// [`RouterError::Reentrant`].  The internal settlement callback is
/// deliberately exempt — it only ever executes inside the dynamic extent
/// of an already-guarded call, and legitimate multi-hop exact-output
/// recursion must pass through it.
///
/// Without the guard, a hostile collaborator reached mid-swap could
/// re-enter a driver and observe the transaction-scoped cached input, or
/// trigger fund movement from partially-settled custody.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionGuard {
    engaged: bool,
}

impl ExecutionGuard {
    /// Creates a released guard.
    #[must_use]
    pub const fn new() -> Self {
        Self { engaged: false }
    }

    /// Acquires the guard.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Reentrant`] if the guard is already held.
    pub fn acquire(&mut self) -> crate::error::Result<()> {
        if self.engaged {
            return Err(RouterError::Reentrant);
        }
        self.engaged = true;
        Ok(())
    }

    /// Releases the guard.
    pub fn release(&mut self) {
        self.engaged = false;
    }

    /// Returns `true` while a guarded call is in flight.
    #[must_use]
    pub const fn is_engaged(&self) -> bool {
        self.engaged
    }
}
