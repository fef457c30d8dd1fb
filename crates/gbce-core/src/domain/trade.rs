use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::{Symbol, ValidationError};

/// Trade direction. Recorded for reference; no aggregate depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(ValidationError::InvalidSide {
                value: value.to_owned(),
            }),
        }
    }
}

/// One executed trade, stamped with the clock reading at record time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub symbol: Symbol,
    /// Seconds on the market clock.
    pub timestamp: i64,
    pub quantity: u64,
    pub price: f64,
    pub side: Side,
}

impl Trade {
    pub fn notional(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// The timestamp as an RFC3339 UTC string, when it is representable.
    pub fn executed_at(&self) -> Option<String> {
        OffsetDateTime::from_unix_timestamp(self.timestamp)
            .ok()
            .and_then(|ts| ts.format(&Rfc3339).ok())
    }
}

impl Display for Trade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Trade[{} ts={} qty={} price={} side={}]",
            self.symbol, self.timestamp, self.quantity, self.price, self.side
        )
    }
}
