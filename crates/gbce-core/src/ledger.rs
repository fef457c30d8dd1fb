use crate::Trade;

/// Append-only, insertion-ordered record of trades.
///
/// Trades are never removed; aggregations skip the ones that fall outside
/// their window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    trades: Vec<Trade>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn as_slice(&self) -> &[Trade] {
        &self.trades
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trade> {
        self.trades.iter()
    }

    /// Trades stamped strictly after `horizon`, in insertion order.
    pub fn after(&self, horizon: i64) -> impl Iterator<Item = &Trade> {
        self.trades
            .iter()
            .filter(move |trade| trade.timestamp > horizon)
    }
}
