//! # GBCE Core
//!
//! Reference data, trade ledger, and price aggregation for a small stock
//! exchange.
//!
//! ## Overview
//!
//! - **Stock catalog**: case-insensitive lookup of dividend and par value
//!   reference data, with per-stock dividend yield and P/E formulas
//! - **Clock**: injectable source of seconds, wall-clock or manual
//! - **Market**: append-only trade ledger plus the volume-weighted price
//!   and all-share index over a trailing five minute window
//! - **Configuration**: JSON description of the listed stocks and window
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Listed stocks and lookup |
//! | [`clock`] | `Clock` trait, `SystemClock`, `ManualClock` |
//! | [`config`] | JSON market configuration |
//! | [`domain`] | Symbol, stock record, trade |
//! | [`error`] | Validation and configuration errors |
//! | [`ledger`] | Append-only trade log |
//! | [`market`] | Trade recording and aggregation |
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use gbce_core::{Clock, ManualClock, Market, Side, StockCatalog};
//!
//! let clock = Arc::new(ManualClock::default());
//! let mut market = Market::new(StockCatalog::reference(), clock.clone());
//!
//! market.record_trade("POP", 1, 100.0, Side::Buy)?;
//! market.record_trade("pop", 3, 50.0, Side::Sell)?;
//! assert_eq!(market.volume_weighted_price("POP")?, 62.5);
//!
//! clock.advance(300);
//! assert_eq!(market.volume_weighted_price("POP")?, 0.0);
//! # Ok::<(), gbce_core::ValidationError>(())
//! ```
//!
//! ## Error Handling
//!
//! Every rejected input surfaces as a [`ValidationError`] and leaves the
//! market unchanged:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use gbce_core::{ManualClock, Market, Side, StockCatalog, ValidationError};
//!
//! let mut market = Market::new(StockCatalog::reference(), Arc::new(ManualClock::default()));
//! let err = market.record_trade("XYZ", 1, 10.0, Side::Buy).unwrap_err();
//! assert!(matches!(err, ValidationError::UnknownStock { .. }));
//! assert!(market.trades().is_empty());
//! ```
//!
//! ## Logging
//!
//! Trade recording and aggregation emit `tracing` events. No subscriber is
//! installed by this crate.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod market;

pub use catalog::StockCatalog;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{MarketConfig, DEFAULT_WINDOW_SECS};
pub use domain::{Side, StockKind, StockRecord, Symbol, Trade};
pub use error::{CoreError, ValidationError};
pub use ledger::Ledger;
pub use market::Market;
