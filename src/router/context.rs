//! Ephemeral settlement context.

use crate::domain::AccountId;
use crate::path::HopPath;

/// The value threaded through one pool invocation and handed back
/// verbatim to the settlement callback.
///
/// Carries exactly what settlement needs: the remaining path (whose
/// leading hop is the one being settled) and the identity to debit for
/// the input leg.  The context exists only for the duration of one nested
/// call — it is never persisted, and each recursion step builds a fresh
/// one with the settled hop dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackContext {
    path: HopPath,
    payer: AccountId,
}

impl CallbackContext {
    /// Creates a context for one pool invocation.
    #[must_use]
    pub const fn new(path: HopPath, payer: AccountId) -> Self {
        Self { path, payer }
    }

    /// Returns the remaining path; its leading hop is being settled.
    #[must_use]
    pub const fn path(&self) -> &HopPath {
        &self.path
    }

    /// Returns the identity debited for the input leg.
    #[must_use]
    pub const fn payer(&self) -> AccountId {
        self.payer
    }
}
