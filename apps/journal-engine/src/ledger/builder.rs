//! Trade record construction: validation, normalization, derived fields.
//!
//! The builder is the only way to produce a [`Trade`]. It checks every
//! input rule in a single pass, collecting one violation per failed
//! field, then computes realized PnL and the risk/reward ratios.

use rust_decimal::Decimal;

use super::constants::PNL_SCALE;
use super::error::{FieldViolation, LedgerError, TradeField};
use super::trade::{Trade, TradeDraft};

/// Build a validated trade record from a draft.
///
/// Validation accumulates: a draft failing several rules reports every
/// failure at once. Prices must be strictly non-zero (their sign is not
/// constrained); size must be strictly positive; fees non-negative.
///
/// Derived figures:
/// - `realized_pnl`: signed price move times size times the class
///   contract multiplier, minus fees, rounded to cents.
/// - `planned_risk_reward`: take-profit distance over stop distance.
/// - `realized_risk_reward`: stored PnL over stop distance.
///
/// Both ratios are `None` when the stop distance `|entry - stop_loss|`
/// is zero.
pub fn build_trade(id: u64, draft: TradeDraft) -> Result<Trade, LedgerError> {
    let instrument = draft.instrument.trim().to_uppercase();

    let mut violations = Vec::new();

    if instrument.is_empty() {
        violations.push(FieldViolation::new(
            TradeField::Instrument,
            "must not be empty",
        ));
    }
    if draft.size <= Decimal::ZERO {
        violations.push(FieldViolation::new(TradeField::Size, "must be positive"));
    }
    if draft.entry_price == Decimal::ZERO {
        violations.push(FieldViolation::new(
            TradeField::EntryPrice,
            "must be non-zero",
        ));
    }
    if draft.exit_price == Decimal::ZERO {
        violations.push(FieldViolation::new(
            TradeField::ExitPrice,
            "must be non-zero",
        ));
    }
    if draft.stop_loss == Decimal::ZERO {
        violations.push(FieldViolation::new(
            TradeField::StopLoss,
            "must be non-zero",
        ));
    }
    if draft.take_profit == Decimal::ZERO {
        violations.push(FieldViolation::new(
            TradeField::TakeProfit,
            "must be non-zero",
        ));
    }
    if draft.fees < Decimal::ZERO {
        violations.push(FieldViolation::new(
            TradeField::Fees,
            "must not be negative",
        ));
    }

    if !violations.is_empty() {
        return Err(LedgerError::validation(violations));
    }

    let multiplier = draft.instrument_class.contract_multiplier();
    let price_delta = draft.direction.signed_unit() * (draft.exit_price - draft.entry_price);
    let realized_pnl = (price_delta * draft.size * multiplier - draft.fees).round_dp(PNL_SCALE);

    // Stop distance in price units; both ratios are undefined without it.
    let risk = (draft.entry_price - draft.stop_loss).abs();
    let reward = (draft.take_profit - draft.entry_price).abs();

    let planned_risk_reward = if risk == Decimal::ZERO {
        None
    } else {
        Some(reward / risk)
    };
    let realized_risk_reward = if risk == Decimal::ZERO {
        None
    } else {
        Some(realized_pnl / risk)
    };

    Ok(Trade {
        id,
        date: draft.date,
        instrument,
        instrument_class: draft.instrument_class,
        direction: draft.direction,
        size: draft.size,
        entry_price: draft.entry_price,
        exit_price: draft.exit_price,
        stop_loss: draft.stop_loss,
        take_profit: draft.take_profit,
        fees: draft.fees,
        realized_pnl,
        planned_risk_reward,
        realized_risk_reward,
        before_image: draft.before_image,
        after_image: draft.after_image,
    })
}
