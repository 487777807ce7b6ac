//! Trade records and submission drafts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::instrument::InstrumentClass;

/// A validated journal entry with derived performance figures.
///
/// Produced by [`build_trade`](super::builder::build_trade); never
/// constructed from raw input directly. `realized_pnl` is stored
/// rounded to cents; the risk/reward ratios keep full precision and
/// are `None` when the risk distance is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Journal-assigned identifier, unique within a journal.
    pub id: u64,
    /// Execution date.
    pub date: NaiveDate,
    /// Instrument symbol, normalized to uppercase.
    pub instrument: String,
    /// Instrument class determining the contract multiplier.
    pub instrument_class: InstrumentClass,
    /// Position direction.
    pub direction: Direction,
    /// Position size in lots/contracts/units.
    pub size: Decimal,
    /// Entry price.
    pub entry_price: Decimal,
    /// Exit price.
    pub exit_price: Decimal,
    /// Stop-loss price at entry.
    pub stop_loss: Decimal,
    /// Take-profit price at entry.
    pub take_profit: Decimal,
    /// Total fees paid.
    pub fees: Decimal,
    /// Net realized PnL after fees, rounded to cents.
    pub realized_pnl: Decimal,
    /// Planned reward-to-risk ratio; `None` when risk distance is zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_risk_reward: Option<Decimal>,
    /// Realized PnL per unit of risk distance; `None` when risk
    /// distance is zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realized_risk_reward: Option<Decimal>,
    /// Chart screenshot taken before the trade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_image: Option<Vec<u8>>,
    /// Chart screenshot taken after the trade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_image: Option<Vec<u8>>,
}

impl Trade {
    /// Check if this trade was profitable.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.realized_pnl > Decimal::ZERO
    }
}

/// Input for building a trade record.
///
/// Carries the raw user-submitted fields; validation and the derived
/// figures happen in [`build_trade`](super::builder::build_trade).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeDraft {
    /// Execution date.
    pub date: NaiveDate,
    /// Instrument symbol (any case; normalized on build).
    pub instrument: String,
    /// Instrument class; defaults to [`InstrumentClass::Other`].
    #[serde(default)]
    pub instrument_class: InstrumentClass,
    /// Position direction.
    pub direction: Direction,
    /// Position size in lots/contracts/units.
    pub size: Decimal,
    /// Entry price.
    pub entry_price: Decimal,
    /// Exit price.
    pub exit_price: Decimal,
    /// Stop-loss price at entry.
    pub stop_loss: Decimal,
    /// Take-profit price at entry.
    pub take_profit: Decimal,
    /// Total fees paid; defaults to zero.
    #[serde(default)]
    pub fees: Decimal,
    /// Chart screenshot taken before the trade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_image: Option<Vec<u8>>,
    /// Chart screenshot taken after the trade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_image: Option<Vec<u8>>,
}
