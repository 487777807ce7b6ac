//! Ledger error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Input field of a trade draft that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeField {
    /// Instrument symbol.
    Instrument,
    /// Position size.
    Size,
    /// Entry price.
    EntryPrice,
    /// Exit price.
    ExitPrice,
    /// Stop-loss price.
    StopLoss,
    /// Take-profit price.
    TakeProfit,
    /// Fees paid.
    Fees,
    /// Screenshot taken before the trade.
    BeforeImage,
    /// Screenshot taken after the trade.
    AfterImage,
}

impl fmt::Display for TradeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instrument => write!(f, "instrument"),
            Self::Size => write!(f, "size"),
            Self::EntryPrice => write!(f, "entry_price"),
            Self::ExitPrice => write!(f, "exit_price"),
            Self::StopLoss => write!(f, "stop_loss"),
            Self::TakeProfit => write!(f, "take_profit"),
            Self::Fees => write!(f, "fees"),
            Self::BeforeImage => write!(f, "before_image"),
            Self::AfterImage => write!(f, "after_image"),
        }
    }
}

/// A single validation violation on a trade draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Field that failed validation.
    pub field: TradeField,
    /// Human-readable message.
    pub message: String,
}

impl FieldViolation {
    /// Create a violation for a field.
    #[must_use]
    pub fn new(field: TradeField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ledger errors.
///
/// Validation carries every violation found in a single pass over the
/// draft, not just the first. An undefined ratio (zero risk distance)
/// is not an error; it is represented as an absent value on the trade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Trade draft failed validation.
    #[error("trade validation failed with {} violation(s)", .violations.len())]
    Validation {
        /// Every violation found, in field order.
        violations: Vec<FieldViolation>,
    },

    /// No trade with the given id exists in the journal.
    #[error("trade not found: {id}")]
    TradeNotFound {
        /// Journal-assigned trade id.
        id: u64,
    },
}

impl LedgerError {
    /// Create a validation error from accumulated violations.
    #[must_use]
    pub const fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation { violations }
    }
}
