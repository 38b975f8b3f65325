//! Execution environment: balances and deployed pools.
//!
//! [`Market`] bundles the two collaborators every swap call runs against:
//! the [`Ledger`] holding account balances and the [`PoolRegistry`]
//! holding deployed pools behind derived identities.  It also owns the
//! deploy path that turns a validated [`PoolConfig`](crate::config) into
//! a registered, reserve-funded pool.
//!
//! The market provides no transactional rollback: whole-call atomicity on
//! failure is assumed from the surrounding environment.  Tests model it by
//! cloning the market before a call and discarding the mutated clone when
//! the call fails.

mod ledger;
mod registry;

pub use ledger::Ledger;
pub use registry::PoolRegistry;

use tracing::debug;

use crate::config::PoolConfig;
use crate::domain::AccountId;
use crate::error::RouterError;
use crate::pools::{ConcentratedPool, PoolBox, StablePool};
use crate::traits::FromConfig;

/// The environment a router call executes against.
///
/// # Examples
///
/// ```
/// use meander::config::{PoolConfig, StableConfig};
/// use meander::domain::{AccountId, Amount, AssetId, AssetPair, ExchangeRate, Selector};
/// use meander::market::Market;
///
/// let deployer = AccountId::from_bytes([0xddu8; 20]);
/// let mut market = Market::new(deployer);
///
/// let pair = AssetPair::new(
///     AssetId::from_bytes([1u8; 20]),
///     AssetId::from_bytes([2u8; 20]),
/// ).expect("distinct assets");
/// let config = PoolConfig::Stable(StableConfig::new(
///     pair,
///     Selector::from_u32(500).expect("fits"),
///     ExchangeRate::new(1, 1).expect("non-zero"),
///     Amount::new(1_000_000),
///     Amount::new(1_000_000),
/// ).expect("valid config"));
///
/// let pool = market.deploy(&config).expect("deployed");
/// assert_eq!(market.ledger().balance_of(pool, pair.base()), Amount::new(1_000_000));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Market {
    ledger: Ledger,
    registry: PoolRegistry,
}

impl Market {
    /// Creates an empty market whose pools will be derived from
    /// `deployer`.
    #[must_use]
    pub const fn new(deployer: AccountId) -> Self {
        Self {
            ledger: Ledger::new(),
            registry: PoolRegistry::new(deployer),
        }
    }

    /// Returns the ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the ledger mutably.
    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Returns the pool registry.
    #[must_use]
    pub const fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    /// Returns the pool registry mutably.
    pub fn registry_mut(&mut self) -> &mut PoolRegistry {
        &mut self.registry
    }

    /// Deploys a pool from its configuration.
    ///
    /// # Flow
    ///
    /// 1. Validate the configuration via [`PoolConfig::validate`].
    /// 2. Derive the pool identity from the pair and selector.
    /// 3. Construct the pool via its [`FromConfig`] implementation.
    /// 4. Mint the configured reserves to the pool account.
    /// 5. Register the pool under the derived identity.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidConfiguration`] if the configuration is
    ///   invalid.
    /// - [`RouterError::PoolAlreadyExists`] if a pool is already
    ///   registered for the pair and selector.
    /// - [`RouterError::Overflow`] if minting a reserve overflows.
    pub fn deploy(&mut self, config: &PoolConfig) -> crate::error::Result<AccountId> {
        config.validate()?;

        let pair = *config.pair();
        let address = self
            .registry
            .derive(pair.base(), pair.quote(), config.selector());
        if self.registry.contains(address) {
            return Err(RouterError::PoolAlreadyExists);
        }

        let (pool, reserve_base, reserve_quote) = match config {
            PoolConfig::Concentrated(cfg) => (
                PoolBox::Concentrated(Box::new(ConcentratedPool::from_config(cfg)?)),
                cfg.reserve_base(),
                cfg.reserve_quote(),
            ),
            PoolConfig::Stable(cfg) => (
                PoolBox::Stable(Box::new(StablePool::from_config(cfg)?)),
                cfg.reserve_base(),
                cfg.reserve_quote(),
            ),
        };

        self.ledger.mint(address, pair.base(), reserve_base)?;
        self.ledger.mint(address, pair.quote(), reserve_quote)?;
        self.registry.insert(address, pool)?;

        debug!(pool = %address, protocol = %config, "pool deployed");
        Ok(address)
    }
}
