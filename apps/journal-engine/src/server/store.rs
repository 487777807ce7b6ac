//! In-memory session store shared across request handlers.

use std::sync::RwLock;

use rust_decimal::Decimal;

use crate::ledger::aggregator::aggregate;
use crate::ledger::error::LedgerError;
use crate::ledger::journal::Journal;
use crate::ledger::snapshot::LedgerSnapshot;
use crate::ledger::trade::{Trade, TradeDraft};

/// Journal and capital for one server session.
///
/// Holds the only mutable state in the process. Readers clone out of
/// the lock, so `snapshot` copies the trades, drops the guard, and
/// folds without holding it.
#[derive(Debug)]
pub struct SessionStore {
    journal: RwLock<Journal>,
    initial_capital: RwLock<Decimal>,
}

impl SessionStore {
    /// Create a store with an empty journal and the given capital.
    #[must_use]
    pub fn new(initial_capital: Decimal) -> Self {
        Self {
            journal: RwLock::new(Journal::new()),
            initial_capital: RwLock::new(initial_capital),
        }
    }

    /// Validate and record a trade, returning the stored copy.
    pub fn submit(&self, draft: TradeDraft) -> Result<Trade, LedgerError> {
        let mut journal = self.journal.write().unwrap();
        journal.insert(draft).map(Clone::clone)
    }

    /// All trades in insertion order.
    #[must_use]
    pub fn trades(&self) -> Vec<Trade> {
        self.journal.read().unwrap().trades().to_vec()
    }

    /// Look up a trade by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<Trade> {
        self.journal.read().unwrap().get(id).cloned()
    }

    /// Remove a trade by id, returning it if present.
    pub fn remove(&self, id: u64) -> Option<Trade> {
        self.journal.write().unwrap().remove(id)
    }

    /// Drop every trade, returning how many were removed.
    pub fn clear(&self) -> usize {
        let mut journal = self.journal.write().unwrap();
        let removed = journal.len();
        journal.clear();
        removed
    }

    /// Number of trades in the journal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.journal.read().unwrap().len()
    }

    /// Check if the journal is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.journal.read().unwrap().is_empty()
    }

    /// Recompute the ledger under the current capital.
    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot {
        let trades = self.trades();
        let capital = self.initial_capital();
        aggregate(&trades, capital)
    }

    /// The configured starting capital.
    #[must_use]
    pub fn initial_capital(&self) -> Decimal {
        *self.initial_capital.read().unwrap()
    }

    /// Replace the starting capital used for snapshots.
    pub fn set_initial_capital(&self, capital: Decimal) {
        *self.initial_capital.write().unwrap() = capital;
    }
}
