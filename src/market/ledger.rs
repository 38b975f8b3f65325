//! Balance ledger and payment primitive.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::RouterError;

/// Account balances for every asset, with an atomic payment primitive.
///
/// The ledger is the router's single collaborator for moving value: a
/// transfer either fully succeeds or fails the call with no balance
/// mutated.  Whole-call atomicity across *multiple* transfers is supplied
/// by the surrounding environment (tests snapshot the market by cloning),
/// not by the ledger itself.
///
/// # Examples
///
/// ```
/// use meander::domain::{AccountId, Amount, AssetId};
/// use meander::market::Ledger;
///
/// let asset = AssetId::from_bytes([1u8; 20]);
/// let alice = AccountId::from_bytes([10u8; 20]);
/// let bob = AccountId::from_bytes([11u8; 20]);
///
/// let mut ledger = Ledger::new();
/// ledger.mint(alice, asset, Amount::new(100)).expect("no overflow");
/// ledger.pay(asset, alice, bob, Amount::new(40)).expect("sufficient balance");
/// assert_eq!(ledger.balance_of(alice, asset), Amount::new(60));
/// assert_eq!(ledger.balance_of(bob, asset), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    balances: BTreeMap<(AccountId, AssetId), Amount>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            balances: BTreeMap::new(),
        }
    }

    /// Returns `account`'s balance of `asset`; zero if never credited.
    #[must_use]
    pub fn balance_of(&self, account: AccountId, asset: AssetId) -> Amount {
        self.balances
            .get(&(account, asset))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Credits `amount` of `asset` to `account` out of thin air.
    ///
    /// Bootstrap primitive for seeding pool reserves and trader balances;
    /// nothing in the settlement paths mints.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Overflow`] if the credited balance would
    /// overflow.
    pub fn mint(
        &mut self,
        account: AccountId,
        asset: AssetId,
        amount: Amount,
    ) -> crate::error::Result<()> {
        let credited = self
            .balance_of(account, asset)
            .checked_add(&amount)
            .ok_or(RouterError::Overflow("minted balance overflow"))?;
        self.balances.insert((account, asset), credited);
        Ok(())
    }

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// A zero-amount transfer is a no-op.  Both balance updates are
    /// computed before either is written, so a failing transfer leaves the
    /// ledger untouched.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InsufficientBalance`] if `from` cannot cover the
    ///   transfer.
    /// - [`RouterError::Overflow`] if `to`'s balance would overflow.
    pub fn pay(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> crate::error::Result<()> {
        if amount.is_zero() {
            return Ok(());
        }

        let debited = self
            .balance_of(from, asset)
            .checked_sub(&amount)
            .ok_or(RouterError::InsufficientBalance)?;

        if from == to {
            return Ok(());
        }

        let credited = self
            .balance_of(to, asset)
            .checked_add(&amount)
            .ok_or(RouterError::Overflow("credited balance overflow"))?;

        self.balances.insert((from, asset), debited);
        self.balances.insert((to, asset), credited);
        Ok(())
    }
}
