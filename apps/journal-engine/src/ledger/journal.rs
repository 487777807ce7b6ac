//! The journal: an insertion-ordered trade container.

use super::builder::build_trade;
use super::error::LedgerError;
use super::trade::{Trade, TradeDraft};

/// An insertion-ordered sequence of trades owned by one session.
///
/// The journal assigns ids monotonically and never reuses them, even
/// after removals. It never sorts; date ordering is the aggregator's
/// concern. All locking lives with the owner of the journal.
#[derive(Debug, Clone)]
pub struct Journal {
    trades: Vec<Trade>,
    next_id: u64,
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}

impl Journal {
    /// Create an empty journal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            trades: Vec::new(),
            next_id: 1,
        }
    }

    /// The id the next inserted trade will receive.
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Validate a draft, build it with the next id, and append it.
    ///
    /// On validation failure the journal is left unchanged.
    pub fn insert(&mut self, draft: TradeDraft) -> Result<&Trade, LedgerError> {
        let trade = build_trade(self.next_id, draft)?;
        self.append(trade);
        let idx = self.trades.len() - 1;
        Ok(&self.trades[idx])
    }

    /// Append a prebuilt trade, bumping the id counter past it.
    pub fn append(&mut self, trade: Trade) {
        self.next_id = self.next_id.max(trade.id + 1);
        self.trades.push(trade);
    }

    /// Remove a trade by id, returning it if present.
    pub fn remove(&mut self, id: u64) -> Option<Trade> {
        let idx = self.trades.iter().position(|t| t.id == id)?;
        Some(self.trades.remove(idx))
    }

    /// Look up a trade by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Trade> {
        self.trades.iter().find(|t| t.id == id)
    }

    /// Drop every trade and reset the id counter.
    pub fn clear(&mut self) {
        self.trades.clear();
        self.next_id = 1;
    }

    /// All trades in insertion order.
    #[must_use]
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// The most recently inserted trade.
    #[must_use]
    pub fn last(&self) -> Option<&Trade> {
        self.trades.last()
    }

    /// Number of trades in the journal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    /// Check if the journal is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}
