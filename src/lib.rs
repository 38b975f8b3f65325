//! # Meander
//!
//! Multi-hop AMM swap router: atomic exact-input and exact-output routing
//! across concentrated-liquidity and stable-swap pools.
//!
//! This crate provides the routing and settlement engine that walks a
//! packed hop path through chains of liquidity pools in a single atomic
//! operation.  It supports two trading modes across two pool settlement
//! protocols:
//!
//! - **Exact input** — the supplied amount is fixed; the engine walks the
//!   path head to tail and checks the final output against a minimum.
//! - **Exact output** — the received amount is fixed; the path is
//!   authored output-to-input and evaluated in economic reverse through
//!   the settlement callback's recursion, since the input of hop *k* is
//!   only known after hop *k + 1* settles.
//!
//! The router never computes prices.  Pools quote and settle; the engine
//! orchestrates their invocation and interprets the returned deltas.
//!
//! # Settlement Protocols
//!
//! | Protocol | Timing |
//! |----------|--------|
//! | Concentrated liquidity | Deferred: the pool delivers output optimistically, then re-enters the router's callback to collect its input before returning |
//! | Stable swap | Synchronous: both legs quoted and transferred within one call |
//!
//! Constant-product pools are serviced outside this engine.
//!
//! # Quick Start
//!
//! ```rust
//! use meander::config::{ConcentratedConfig, PoolConfig};
//! use meander::domain::{
//!     AccountId, Amount, AssetId, AssetPair, ExchangeRate, InputAmount, Recipient,
//!     Selector, SqrtPrice,
//! };
//! use meander::market::Market;
//! use meander::router::{ExactInputSingleRequest, Router};
//!
//! // 1. Identities
//! let deployer = AccountId::from_bytes([0xdd; 20]);
//! let trader = AccountId::from_bytes([0x01; 20]);
//! let usdc = AssetId::from_bytes([1u8; 20]);
//! let weth = AssetId::from_bytes([2u8; 20]);
//!
//! // 2. Deploy a concentrated pool quoting 95 WETH units per 100 USDC units
//! let mut market = Market::new(deployer);
//! let pair = AssetPair::new(usdc, weth).expect("distinct assets");
//! let config = PoolConfig::Concentrated(
//!     ConcentratedConfig::new(
//!         pair,
//!         Selector::from_u32(3_000).expect("fits 24 bits"),
//!         ExchangeRate::new(95, 100).expect("non-zero terms"),
//!         SqrtPrice::new(1 << 64),
//!         Amount::new(1_000_000),
//!         Amount::new(1_000_000),
//!     )
//!     .expect("valid config"),
//! );
//! market.deploy(&config).expect("pool deployed");
//!
//! // 3. Fund the trader and swap
//! market
//!     .ledger_mut()
//!     .mint(trader, usdc, Amount::new(1_000))
//!     .expect("minted");
//! let mut router = Router::new(AccountId::from_bytes([0xbb; 20]));
//! let amount_out = router
//!     .exact_input_single(
//!         &mut market,
//!         trader,
//!         ExactInputSingleRequest {
//!             asset_in: usdc,
//!             asset_out: weth,
//!             selector: Selector::from_u32(3_000).expect("fits 24 bits"),
//!             recipient: Recipient::Caller,
//!             amount_in: InputAmount::Exact(Amount::new(1_000)),
//!             amount_out_minimum: Amount::new(1),
//!             price_limit: None,
//!         },
//!     )
//!     .expect("swap succeeded");
//!
//! assert_eq!(amount_out, Amount::new(950));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  authors a request + packed hop path
//! └──────┬───────┘
//!        │ exact_input / exact_output (guarded)
//!        ▼
//! ┌──────────────┐
//! │    Router     │  engines walk the path, adapter dispatches per hop
//! └──────┬───────┘
//!        │ swap                        ▲ settlement callback
//!        ▼                             │ (concentrated protocol only)
//! ┌──────────────┐                     │
//! │    Pools      │  Concentrated ─────┘   Stable (synchronous)
//! └──────┬───────┘
//!        │ pay / balance_of
//!        ▼
//! ┌──────────────┐
//! │    Market     │  Ledger + PoolRegistry (derived identities)
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`AssetId`](domain::AssetId), [`SignedAmount`](domain::SignedAmount), etc. |
//! | [`path`] | Packed hop-path codec: [`HopPath`](path::HopPath) |
//! | [`traits`] | Seams: [`FromConfig`](traits::FromConfig), [`SwapCallback`](traits::SwapCallback) |
//! | [`config`] | Declarative pool blueprints: [`PoolConfig`](config::PoolConfig) and per-protocol config structs |
//! | [`pools`] | Protocol implementations and [`PoolBox`](pools::PoolBox) dispatch enum |
//! | [`market`] | Execution environment: [`Ledger`](market::Ledger), [`PoolRegistry`](market::PoolRegistry), deploy path |
//! | [`router`] | Entry points, engines, guard, cached input, settlement callback |
//! | [`error`]  | [`RouterError`](error::RouterError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Atomicity
//!
//! A top-level call either fully succeeds — every hop settled, every
//! bound satisfied — or fails with an error.  The crate assumes, but does
//! not implement, an execution environment that discards partial effects
//! of failed calls; tests model it by cloning the [`Market`](market::Market)
//! before a call.

pub mod config;
pub mod domain;
pub mod error;
pub mod market;
pub mod path;
pub mod pools;
pub mod prelude;
pub mod router;
pub mod traits;
