//! Transaction-scoped cached input amount.

use crate::domain::Amount;

/// A single call-scoped slot holding the computed input of a multi-hop
/// exact-output chain.
///
/// Exact-output chains are evaluated in economic reverse, so the chain's
/// true required input is only known once the *last* hop settles — deep
/// inside the nested call stack, where no return value can carry it back
/// past the intervening pool frames.  The terminal settlement writes the
/// amount here; the top-level exact-output driver takes it.
///
/// The slot must never outlive one top-level call: drivers take it
/// unconditionally on every exit path, success or failure, so no call can
/// observe a value left behind by a prior one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CachedInput(Option<Amount>);

impl CachedInput {
    /// Creates an unset slot.
    #[must_use]
    pub const fn new() -> Self {
        Self(None)
    }

    /// Records the chain's computed input amount.
    pub fn set(&mut self, amount: Amount) {
        self.0 = Some(amount);
    }

    /// Takes the recorded amount, resetting the slot to the unset
    /// sentinel.
    pub fn take(&mut self) -> Option<Amount> {
        self.0.take()
    }

    /// Returns `true` if an amount is currently recorded.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.0.is_some()
    }
}
