//! Pool registry with deterministic identity derivation.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

use crate::domain::{AccountId, AssetId, Selector};
use crate::error::RouterError;
use crate::pools::PoolBox;

/// Domain separator for pool identity derivation.
const DERIVATION_TAG: &[u8] = b"meander/pool/v1";

/// Registered pools keyed by their derived account identity.
///
/// Pool identities are not chosen — they are computed from the deployer
/// identity, the canonically ordered asset pair, and the selector.  The
/// same derivation is used twice: to target a hop's swap call, and to
/// authenticate the caller of a settlement callback.  That double use is
/// what makes a forged callback detectable.
///
/// During a swap the executing pool is [taken](Self::take) out of the
/// registry and [restored](Self::restore) once its settlement (including
/// any nested hops) completes, so a path that revisits a pool mid-chain
/// fails with [`RouterError::UnknownPool`] instead of observing the pool
/// in a partially-settled state.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolRegistry {
    deployer: AccountId,
    pools: BTreeMap<AccountId, PoolBox>,
}

impl PoolRegistry {
    /// Creates an empty registry owned by `deployer`.
    #[must_use]
    pub const fn new(deployer: AccountId) -> Self {
        Self {
            deployer,
            pools: BTreeMap::new(),
        }
    }

    /// Returns the deployer identity baked into every derivation.
    #[must_use]
    pub const fn deployer(&self) -> AccountId {
        self.deployer
    }

    /// Derives the canonical pool identity for a pair and selector.
    ///
    /// The two assets may be passed in either order; derivation sorts them
    /// under the fixed total order first, so `(A, B)` and `(B, A)` derive
    /// the same identity.
    #[must_use]
    pub fn derive(&self, asset_a: AssetId, asset_b: AssetId, selector: Selector) -> AccountId {
        let (lo, hi) = if asset_a < asset_b {
            (asset_a, asset_b)
        } else {
            (asset_b, asset_a)
        };

        let mut hasher = Sha256::new();
        hasher.update(DERIVATION_TAG);
        hasher.update(self.deployer.as_bytes());
        hasher.update(lo.as_bytes());
        hasher.update(hi.as_bytes());
        hasher.update(selector.as_bytes());
        let digest = hasher.finalize();

        let mut id = [0u8; 20];
        id.copy_from_slice(&digest[..20]);
        AccountId::from_bytes(id)
    }

    /// Returns `true` if a pool is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: AccountId) -> bool {
        self.pools.contains_key(&id)
    }

    /// Returns the number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pools are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Registers a pool under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::PoolAlreadyExists`] if `id` is taken.
    pub fn insert(&mut self, id: AccountId, pool: PoolBox) -> crate::error::Result<()> {
        if self.pools.contains_key(&id) {
            return Err(RouterError::PoolAlreadyExists);
        }
        self.pools.insert(id, pool);
        Ok(())
    }

    /// Removes and returns the pool registered under `id` for the
    /// duration of a swap.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::UnknownPool`] if no pool is registered
    /// under `id` — including a pool currently mid-swap.
    pub fn take(&mut self, id: AccountId) -> crate::error::Result<PoolBox> {
        self.pools.remove(&id).ok_or(RouterError::UnknownPool)
    }

    /// Puts a previously [taken](Self::take) pool back.
    pub fn restore(&mut self, id: AccountId, pool: PoolBox) {
        self.pools.insert(id, pool);
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::StableConfig;
    use crate::domain::{Amount, AssetPair, ExchangeRate};
    use crate::pools::StablePool;
    use crate::traits::FromConfig;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 20])
    }

    fn deployer() -> AccountId {
        AccountId::from_bytes([0xddu8; 20])
    }

    fn selector(value: u32) -> Selector {
        let Ok(s) = Selector::from_u32(value) else {
            panic!("valid selector");
        };
        s
    }

    fn make_pool() -> PoolBox {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("valid pair");
        };
        let Ok(rate) = ExchangeRate::new(1, 1) else {
            panic!("valid rate");
        };
        let Ok(cfg) = StableConfig::new(pair, selector(500), rate, Amount::new(1), Amount::new(1))
        else {
            panic!("valid config");
        };
        let Ok(pool) = StablePool::from_config(&cfg) else {
            panic!("valid pool");
        };
        PoolBox::Stable(Box::new(pool))
    }

    // -- Derivation -----------------------------------------------------------

    #[test]
    fn derive_is_deterministic() {
        let registry = PoolRegistry::new(deployer());
        let a = registry.derive(asset(1), asset(2), selector(500));
        let b = registry.derive(asset(1), asset(2), selector(500));
        assert_eq!(a, b);
    }

    #[test]
    fn derive_ignores_argument_order() {
        let registry = PoolRegistry::new(deployer());
        assert_eq!(
            registry.derive(asset(1), asset(2), selector(500)),
            registry.derive(asset(2), asset(1), selector(500))
        );
    }

    #[test]
    fn derive_distinguishes_selectors() {
        let registry = PoolRegistry::new(deployer());
        assert_ne!(
            registry.derive(asset(1), asset(2), selector(500)),
            registry.derive(asset(1), asset(2), selector(3_000))
        );
    }

    #[test]
    fn derive_distinguishes_deployers() {
        let registry_a = PoolRegistry::new(deployer());
        let registry_b = PoolRegistry::new(AccountId::from_bytes([0xeeu8; 20]));
        assert_ne!(
            registry_a.derive(asset(1), asset(2), selector(500)),
            registry_b.derive(asset(1), asset(2), selector(500))
        );
    }

    // -- Insert / take / restore ------------------------------------------------

    #[test]
    fn insert_then_contains() {
        let mut registry = PoolRegistry::new(deployer());
        let id = registry.derive(asset(1), asset(2), selector(500));
        let Ok(()) = registry.insert(id, make_pool()) else {
            panic!("expected Ok");
        };
        assert!(registry.contains(id));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn double_insert_rejected() {
        let mut registry = PoolRegistry::new(deployer());
        let id = registry.derive(asset(1), asset(2), selector(500));
        let Ok(()) = registry.insert(id, make_pool()) else {
            panic!("expected Ok");
        };
        assert_eq!(
            registry.insert(id, make_pool()),
            Err(RouterError::PoolAlreadyExists)
        );
    }

    #[test]
    fn take_removes_and_restore_returns() {
        let mut registry = PoolRegistry::new(deployer());
        let id = registry.derive(asset(1), asset(2), selector(500));
        let Ok(()) = registry.insert(id, make_pool()) else {
            panic!("expected Ok");
        };

        let Ok(pool) = registry.take(id) else {
            panic!("expected Ok");
        };
        assert!(!registry.contains(id));
        // A second take mid-swap observes no pool.
        assert_eq!(registry.take(id).map(|_| ()), Err(RouterError::UnknownPool));

        registry.restore(id, pool);
        assert!(registry.contains(id));
    }

    #[test]
    fn take_unknown_rejected() {
        let mut registry = PoolRegistry::new(deployer());
        let id = registry.derive(asset(1), asset(2), selector(500));
        assert_eq!(registry.take(id).map(|_| ()), Err(RouterError::UnknownPool));
    }
}
