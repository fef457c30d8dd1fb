//! # Domain Models
//!
//! Reference data and trade records for the exchange.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Case-insensitive stock identifier |
//! | [`StockRecord`] | Dividend and par value reference data |
//! | [`StockKind`] | Common or preferred (with fixed dividend rate) |
//! | [`Trade`] | Recorded trade stamped with clock seconds |
//! | [`Side`] | Buy or sell |

mod stock;
mod symbol;
mod trade;

pub(crate) use stock::validate_price;
pub use stock::{StockKind, StockRecord};
pub use symbol::Symbol;
pub use trade::{Side, Trade};
