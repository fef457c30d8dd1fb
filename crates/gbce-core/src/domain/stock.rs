use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Symbol, ValidationError};

/// Dividend classification of a listed stock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StockKind {
    Common,
    /// Pays a fixed rate of its par value, e.g. `0.02` for 2%.
    Preferred { fixed_dividend: f64 },
}

/// Static reference data for one listed stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub symbol: Symbol,
    pub last_dividend: f64,
    pub par_value: f64,
    #[serde(flatten)]
    pub kind: StockKind,
}

impl StockRecord {
    pub fn common(symbol: Symbol, last_dividend: f64, par_value: f64) -> Self {
        Self {
            symbol,
            last_dividend,
            par_value,
            kind: StockKind::Common,
        }
    }

    pub fn preferred(
        symbol: Symbol,
        last_dividend: f64,
        par_value: f64,
        fixed_dividend: f64,
    ) -> Self {
        Self {
            symbol,
            last_dividend,
            par_value,
            kind: StockKind::Preferred { fixed_dividend },
        }
    }

    pub fn fixed_dividend(&self) -> Option<f64> {
        match self.kind {
            StockKind::Common => None,
            StockKind::Preferred { fixed_dividend } => Some(fixed_dividend),
        }
    }

    /// Dividend yield at `price`.
    ///
    /// Common stocks yield `last_dividend / price`; preferred stocks yield
    /// `fixed_dividend * par_value / price`.
    pub fn dividend_yield(&self, price: f64) -> Result<f64, ValidationError> {
        validate_price(price)?;
        let annual_dividend = match self.kind {
            StockKind::Common => self.last_dividend,
            StockKind::Preferred { fixed_dividend } => fixed_dividend * self.par_value,
        };
        Ok(annual_dividend / price)
    }

    /// Price/earnings ratio at `price`, or `0.0` when the stock paid no dividend.
    pub fn pe_ratio(&self, price: f64) -> Result<f64, ValidationError> {
        validate_price(price)?;
        if self.last_dividend == 0.0 {
            return Ok(0.0);
        }
        Ok(price / self.last_dividend)
    }

    /// Checks reference values loaded from configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_reference_value("last_dividend", self.last_dividend)?;
        validate_reference_value("par_value", self.par_value)?;
        if let Some(fixed_dividend) = self.fixed_dividend() {
            validate_reference_value("fixed_dividend", fixed_dividend)?;
        }
        Ok(())
    }
}

impl Display for StockRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            StockKind::Common => write!(
                f,
                "CommonStock[{} last_dividend={} par_value={}]",
                self.symbol, self.last_dividend, self.par_value
            ),
            StockKind::Preferred { fixed_dividend } => write!(
                f,
                "PreferredStock[{} last_dividend={} par_value={} fixed_dividend={}]",
                self.symbol, self.last_dividend, self.par_value, fixed_dividend
            ),
        }
    }
}

/// Rejects zero, negative, and NaN prices.
pub(crate) fn validate_price(price: f64) -> Result<(), ValidationError> {
    if price > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidPrice { value: price })
    }
}

fn validate_reference_value(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
