//! JSON configuration for a market: the aggregation window and the listed stocks.
//!
//! ```json
//! {
//!   "window_secs": 300,
//!   "stocks": [
//!     { "symbol": "TEA", "last_dividend": 0.0, "par_value": 100.0, "kind": "common" },
//!     { "symbol": "GIN", "last_dividend": 8.0, "par_value": 100.0, "kind": "preferred", "fixed_dividend": 0.02 }
//!   ]
//! }
//! ```
//!
//! Missing fields fall back to the five reference stocks and a five minute window.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, StockCatalog, StockRecord, ValidationError};

/// Default trailing aggregation window in seconds.
pub const DEFAULT_WINDOW_SECS: u64 = 5 * 60;

/// Market settings loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub window_secs: u64,
    pub stocks: Vec<StockRecord>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_WINDOW_SECS,
            stocks: StockCatalog::reference().iter().cloned().collect(),
        }
    }
}

impl MarketConfig {
    pub fn from_json_str(input: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.window_secs == 0 {
            return Err(ValidationError::InvalidWindow);
        }
        self.build_catalog().map(|_| ())
    }

    pub fn build_catalog(&self) -> Result<StockCatalog, ValidationError> {
        StockCatalog::new(self.stocks.iter().cloned())
    }
}
