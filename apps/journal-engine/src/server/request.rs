//! HTTP request DTOs.

use base64::Engine as _;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::direction::Direction;
use crate::ledger::error::{FieldViolation, LedgerError, TradeField};
use crate::ledger::instrument::InstrumentClass;
use crate::ledger::trade::TradeDraft;

/// Request to record a closed trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitTradeRequest {
    /// Trading day the position was closed.
    pub date: NaiveDate,
    /// Instrument symbol, e.g. "EURUSD".
    pub instrument: String,
    /// Instrument class used to pick the contract multiplier.
    #[serde(default)]
    pub instrument_class: InstrumentClass,
    /// Position direction.
    pub direction: Direction,
    /// Position size in lots or units.
    pub size: Decimal,
    /// Entry price.
    pub entry_price: Decimal,
    /// Exit price.
    pub exit_price: Decimal,
    /// Stop-loss price.
    pub stop_loss: Decimal,
    /// Take-profit price.
    pub take_profit: Decimal,
    /// Fees paid, zero when omitted.
    #[serde(default)]
    pub fees: Decimal,
    /// Base64-encoded screenshot taken before the trade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_image: Option<String>,
    /// Base64-encoded screenshot taken after the trade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_image: Option<String>,
}

impl SubmitTradeRequest {
    /// Decode the image attachments and turn the request into a draft.
    ///
    /// Base64 failures come back as field violations, so the transport
    /// layer shares the validation response shape with the builder.
    pub fn into_draft(self) -> Result<TradeDraft, LedgerError> {
        let mut violations = Vec::new();

        let before_image =
            decode_image(self.before_image, TradeField::BeforeImage, &mut violations);
        let after_image = decode_image(self.after_image, TradeField::AfterImage, &mut violations);

        if !violations.is_empty() {
            return Err(LedgerError::validation(violations));
        }

        Ok(TradeDraft {
            date: self.date,
            instrument: self.instrument,
            instrument_class: self.instrument_class,
            direction: self.direction,
            size: self.size,
            entry_price: self.entry_price,
            exit_price: self.exit_price,
            stop_loss: self.stop_loss,
            take_profit: self.take_profit,
            fees: self.fees,
            before_image,
            after_image,
        })
    }
}

fn decode_image(
    encoded: Option<String>,
    field: TradeField,
    violations: &mut Vec<FieldViolation>,
) -> Option<Vec<u8>> {
    let encoded = encoded?;
    match base64::engine::general_purpose::STANDARD.decode(encoded) {
        Ok(bytes) => Some(bytes),
        Err(_) => {
            violations.push(FieldViolation::new(field, "must be valid base64"));
            None
        }
    }
}

/// Request to change the starting capital.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCapitalRequest {
    /// New starting capital for the session.
    pub initial_capital: Decimal,
}
