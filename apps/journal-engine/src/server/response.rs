//! HTTP response DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::direction::Direction;
use crate::ledger::error::FieldViolation;
use crate::ledger::instrument::InstrumentClass;
use crate::ledger::snapshot::{EquityPoint, LedgerRow, LedgerSnapshot, LedgerSummary};
use crate::ledger::trade::Trade;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// A validation violation on a submitted trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationResponse {
    /// Field that failed validation.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl From<&FieldViolation> for ViolationResponse {
    fn from(violation: &FieldViolation) -> Self {
        Self {
            field: violation.field.to_string(),
            message: violation.message.clone(),
        }
    }
}

/// A recorded trade, without its image attachments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeResponse {
    /// Journal-assigned id.
    pub id: u64,
    /// Trading day the position was closed.
    pub date: NaiveDate,
    /// Instrument symbol.
    pub instrument: String,
    /// Instrument class.
    pub instrument_class: InstrumentClass,
    /// Position direction.
    pub direction: Direction,
    /// Position size.
    pub size: Decimal,
    /// Entry price.
    pub entry_price: Decimal,
    /// Exit price.
    pub exit_price: Decimal,
    /// Stop-loss price.
    pub stop_loss: Decimal,
    /// Take-profit price.
    pub take_profit: Decimal,
    /// Fees paid.
    pub fees: Decimal,
    /// Realized profit or loss.
    pub realized_pnl: Decimal,
    /// Planned risk-reward ratio (absent when risk is zero).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_risk_reward: Option<Decimal>,
    /// Realized risk-reward ratio (absent when risk is zero).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realized_risk_reward: Option<Decimal>,
    /// Whether a before-trade screenshot is attached.
    pub has_before_image: bool,
    /// Whether an after-trade screenshot is attached.
    pub has_after_image: bool,
}

impl From<&Trade> for TradeResponse {
    fn from(trade: &Trade) -> Self {
        Self {
            id: trade.id,
            date: trade.date,
            instrument: trade.instrument.clone(),
            instrument_class: trade.instrument_class,
            direction: trade.direction,
            size: trade.size,
            entry_price: trade.entry_price,
            exit_price: trade.exit_price,
            stop_loss: trade.stop_loss,
            take_profit: trade.take_profit,
            fees: trade.fees,
            realized_pnl: trade.realized_pnl,
            planned_risk_reward: trade.planned_risk_reward,
            realized_risk_reward: trade.realized_risk_reward,
            has_before_image: trade.before_image.is_some(),
            has_after_image: trade.after_image.is_some(),
        }
    }
}

/// Response from trade submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitTradeResponse {
    /// Whether the trade was recorded.
    pub ok: bool,
    /// The recorded trade (absent on rejection).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade: Option<TradeResponse>,
    /// Violations found (empty when ok).
    pub violations: Vec<ViolationResponse>,
}

/// Image attachments of a trade, base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeImagesResponse {
    /// Journal-assigned id.
    pub id: u64,
    /// Before-trade screenshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_image: Option<String>,
    /// After-trade screenshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_image: Option<String>,
}

/// Response from clearing the journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearJournalResponse {
    /// How many trades were removed.
    pub removed: usize,
}

/// The starting capital in effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapitalResponse {
    /// Starting capital used for ledger snapshots.
    pub initial_capital: Decimal,
}

/// Generic error payload for lookups that miss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Full ledger snapshot: per-trade rows, summary and equity curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    /// One row per trade, in ledger order.
    pub rows: Vec<LedgerRow>,
    /// Aggregate statistics.
    pub summary: LedgerSummary,
    /// Balance after each trade, in ledger order.
    pub equity_curve: Vec<EquityPoint>,
}

impl From<LedgerSnapshot> for SnapshotResponse {
    fn from(snapshot: LedgerSnapshot) -> Self {
        let equity_curve = snapshot.equity_curve();
        Self {
            rows: snapshot.rows,
            summary: snapshot.summary,
            equity_curve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::error::TradeField;

    #[test]
    fn violation_response_uses_field_name() {
        let violation = FieldViolation::new(TradeField::EntryPrice, "must be non-zero");
        let response = ViolationResponse::from(&violation);

        assert_eq!(response.field, "entry_price");
        assert_eq!(response.message, "must be non-zero");
    }

    #[test]
    fn submit_response_omits_absent_trade() {
        let response = SubmitTradeResponse {
            ok: false,
            trade: None,
            violations: vec![ViolationResponse {
                field: "size".to_string(),
                message: "must be positive".to_string(),
            }],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("\"trade\""));
        assert!(json.contains("\"size\""));
    }
}
