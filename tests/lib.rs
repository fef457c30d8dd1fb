// Shared fixtures for the behavior tests
use std::sync::Arc;

pub use gbce_core::{
    Clock, CoreError, ManualClock, Market, MarketConfig, Side, StockCatalog, StockKind,
    StockRecord, Symbol, Trade, ValidationError,
};

pub const EPSILON: f64 = 1e-9;

/// A market over the reference catalog with a manual clock starting at zero.
pub fn fresh_market() -> (Market, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::default());
    let market = Market::new(StockCatalog::reference(), clock.clone());
    (market, clock)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
