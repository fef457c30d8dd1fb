use std::collections::BTreeMap;

use tracing::info;

use crate::{StockRecord, Symbol, ValidationError};

/// Reference data listed on the exchange: symbol, last dividend, par value,
/// and fixed dividend rate for preferred stocks.
const REFERENCE_STOCKS: [(&str, f64, f64, Option<f64>); 5] = [
    ("TEA", 0.0, 100.0, None),
    ("POP", 8.0, 100.0, None),
    ("ALE", 23.0, 100.0, None),
    ("GIN", 8.0, 100.0, Some(0.02)),
    ("JOE", 13.0, 100.0, None),
];

/// Immutable, case-insensitive table of listed stocks.
#[derive(Debug, Clone, PartialEq)]
pub struct StockCatalog {
    stocks: BTreeMap<Symbol, StockRecord>,
}

impl StockCatalog {
    /// Builds a catalog, rejecting invalid reference values and duplicate symbols.
    pub fn new(records: impl IntoIterator<Item = StockRecord>) -> Result<Self, ValidationError> {
        let mut stocks = BTreeMap::new();
        for record in records {
            record.validate()?;
            if stocks.contains_key(&record.symbol) {
                return Err(ValidationError::DuplicateStock {
                    symbol: record.symbol.to_string(),
                });
            }
            stocks.insert(record.symbol.clone(), record);
        }

        info!(stocks = stocks.len(), "stock catalog built");
        Ok(Self { stocks })
    }

    /// The five stocks traded on the exchange.
    pub fn reference() -> Self {
        let stocks = REFERENCE_STOCKS
            .iter()
            .map(|&(symbol, last_dividend, par_value, fixed_dividend)| {
                let symbol = Symbol::parse(symbol).expect("reference symbols are valid");
                let record = match fixed_dividend {
                    Some(rate) => StockRecord::preferred(symbol, last_dividend, par_value, rate),
                    None => StockRecord::common(symbol, last_dividend, par_value),
                };
                (record.symbol.clone(), record)
            })
            .collect();
        Self { stocks }
    }

    /// Looks up a stock ignoring letter case.
    pub fn lookup(&self, identifier: &str) -> Result<&StockRecord, ValidationError> {
        Symbol::parse(identifier)
            .ok()
            .and_then(|symbol| self.stocks.get(&symbol))
            .ok_or_else(|| ValidationError::UnknownStock {
                symbol: identifier.to_owned(),
            })
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.lookup(identifier).is_ok()
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Records in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = &StockRecord> {
        self.stocks.values()
    }
}

impl Default for StockCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StockKind;

    #[test]
    fn reference_catalog_lists_five_stocks() {
        let catalog = StockCatalog::reference();
        let symbols: Vec<&str> = catalog.iter().map(|record| record.symbol.as_str()).collect();
        assert_eq!(symbols, ["ALE", "GIN", "JOE", "POP", "TEA"]);
    }

    #[test]
    fn gin_is_the_only_preferred_stock() {
        let catalog = StockCatalog::reference();
        let preferred: Vec<&StockRecord> = catalog
            .iter()
            .filter(|record| matches!(record.kind, StockKind::Preferred { .. }))
            .collect();
        assert_eq!(preferred.len(), 1);
        assert_eq!(preferred[0].symbol.as_str(), "GIN");
        assert_eq!(preferred[0].fixed_dividend(), Some(0.02));
    }

    #[test]
    fn lookup_ignores_case() {
        let catalog = StockCatalog::reference();
        let upper = catalog.lookup("POP").expect("POP");
        assert_eq!(catalog.lookup("pop").expect("pop"), upper);
        assert_eq!(catalog.lookup("PoP").expect("PoP"), upper);
    }

    #[test]
    fn lookup_reports_unknown_stock() {
        let catalog = StockCatalog::reference();
        for identifier in ["invalid", "", "P O P", " POP ", "\tpop\n"] {
            let err = catalog.lookup(identifier).expect_err("must fail");
            assert_eq!(
                err,
                ValidationError::UnknownStock {
                    symbol: identifier.to_owned()
                }
            );
        }
    }

    #[test]
    fn new_rejects_duplicates_across_case() {
        let records = vec![
            StockRecord::common(Symbol::parse("pop").expect("symbol"), 8.0, 100.0),
            StockRecord::common(Symbol::parse("POP").expect("symbol"), 9.0, 100.0),
        ];
        let err = StockCatalog::new(records).expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::DuplicateStock {
                symbol: "POP".to_owned()
            }
        );
    }

    #[test]
    fn new_rejects_non_finite_dividend() {
        let records = vec![StockRecord::common(
            Symbol::parse("BAD").expect("symbol"),
            f64::INFINITY,
            100.0,
        )];
        assert_eq!(
            StockCatalog::new(records),
            Err(ValidationError::NonFiniteValue {
                field: "last_dividend"
            })
        );
    }
}
