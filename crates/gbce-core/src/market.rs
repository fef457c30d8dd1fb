//! # Market
//!
//! Records trades against the shared clock and derives prices from them.
//!
//! Per-stock yield and P/E are delegated to the catalog's [`StockRecord`]
//! formulas. Volume-weighted prices and the all-share index are computed by
//! scanning the ledger for trades inside the trailing window `(now - window, now]`.
//!
//! A `Market` has a single owner: recording takes `&mut self`, and there is
//! no internal locking. Wrap it in a `Mutex` if several threads must share it.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::config::DEFAULT_WINDOW_SECS;
use crate::domain::validate_price;
use crate::{
    Clock, Ledger, MarketConfig, Side, StockCatalog, StockRecord, Symbol, Trade, ValidationError,
};

#[derive(Debug, Clone, Copy, Default)]
struct VolumeAccumulator {
    notional: f64,
    volume: f64,
}

impl VolumeAccumulator {
    fn add(&mut self, trade: &Trade) {
        self.notional += trade.notional();
        self.volume += trade.quantity as f64;
    }

    fn price(&self) -> f64 {
        if self.volume == 0.0 {
            0.0
        } else {
            self.notional / self.volume
        }
    }
}

/// Trade ledger plus the stock catalog and clock it is validated against.
pub struct Market {
    catalog: StockCatalog,
    clock: Arc<dyn Clock>,
    ledger: Ledger,
    window_secs: i64,
}

impl Market {
    /// Market with the default five minute window.
    pub fn new(catalog: StockCatalog, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog,
            clock,
            ledger: Ledger::new(),
            window_secs: DEFAULT_WINDOW_SECS as i64,
        }
    }

    pub fn from_config(
        config: &MarketConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ValidationError> {
        Self::new(config.build_catalog()?, clock).with_window(config.window_secs)
    }

    /// Replaces the aggregation window. Zero is rejected.
    pub fn with_window(mut self, window_secs: u64) -> Result<Self, ValidationError> {
        if window_secs == 0 {
            return Err(ValidationError::InvalidWindow);
        }
        self.window_secs = i64::try_from(window_secs).unwrap_or(i64::MAX);
        Ok(self)
    }

    /// Length of the trailing aggregation window in seconds.
    pub fn window(&self) -> u64 {
        self.window_secs as u64
    }

    pub fn catalog(&self) -> &StockCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Recorded trades in insertion order.
    pub fn trades(&self) -> &[Trade] {
        self.ledger.as_slice()
    }

    pub fn dividend_yield(&self, identifier: &str, price: f64) -> Result<f64, ValidationError> {
        self.catalog.lookup(identifier)?.dividend_yield(price)
    }

    pub fn pe_ratio(&self, identifier: &str, price: f64) -> Result<f64, ValidationError> {
        self.catalog.lookup(identifier)?.pe_ratio(price)
    }

    /// Appends a trade stamped with the current clock reading.
    ///
    /// Validates, in order, that the stock is listed, the quantity is
    /// positive and the price is positive. A rejected trade leaves the
    /// ledger untouched.
    pub fn record_trade(
        &mut self,
        identifier: &str,
        quantity: i64,
        price: f64,
        side: Side,
    ) -> Result<(), ValidationError> {
        let (symbol, quantity) = match self.validate_trade(identifier, quantity, price) {
            Ok(valid) => valid,
            Err(err) => {
                warn!(symbol = identifier, reason = %err, "trade rejected");
                return Err(err);
            }
        };

        let trade = Trade {
            symbol,
            timestamp: self.clock.now(),
            quantity,
            price,
            side,
        };
        debug!(
            symbol = %trade.symbol,
            timestamp = trade.timestamp,
            quantity = trade.quantity,
            price = trade.price,
            side = %trade.side,
            ledger_len = self.ledger.len() + 1,
            "trade recorded"
        );
        self.ledger.append(trade);
        Ok(())
    }

    /// Volume-weighted price of one stock over the trailing window, or `0.0`
    /// when it has no trades inside the window.
    pub fn volume_weighted_price(&self, identifier: &str) -> Result<f64, ValidationError> {
        let symbol = self.catalog.lookup(identifier)?.symbol.clone();
        let horizon = self.horizon();

        let mut acc = VolumeAccumulator::default();
        for trade in self.ledger.after(horizon).filter(|trade| trade.symbol == symbol) {
            acc.add(trade);
        }

        let price = acc.price();
        trace!(%symbol, horizon, volume = acc.volume, price, "volume weighted price");
        Ok(price)
    }

    /// Geometric mean of the volume-weighted prices of every stock traded
    /// inside the trailing window, or `0.0` when nothing was traded.
    pub fn all_share_index(&self) -> f64 {
        let horizon = self.horizon();

        let mut groups: BTreeMap<&Symbol, VolumeAccumulator> = BTreeMap::new();
        for trade in self.ledger.after(horizon) {
            groups.entry(&trade.symbol).or_default().add(trade);
        }

        let index = match groups.len() {
            0 => return 0.0,
            1 => groups.values().next().map_or(0.0, VolumeAccumulator::price),
            count => {
                // Summing logs keeps large products from overflowing.
                let log_sum: f64 = groups.values().map(|acc| acc.price().ln()).sum();
                (log_sum / count as f64).exp()
            }
        };
        trace!(horizon, stocks = groups.len(), index, "all share index");
        index
    }

    fn horizon(&self) -> i64 {
        self.clock.now().saturating_sub(self.window_secs)
    }

    fn validate_trade(
        &self,
        identifier: &str,
        quantity: i64,
        price: f64,
    ) -> Result<(Symbol, u64), ValidationError> {
        let record: &StockRecord = self.catalog.lookup(identifier)?;
        let quantity = u64::try_from(quantity)
            .ok()
            .filter(|&quantity| quantity > 0)
            .ok_or(ValidationError::InvalidQuantity { value: quantity })?;
        validate_price(price)?;
        Ok((record.symbol.clone(), quantity))
    }
}
