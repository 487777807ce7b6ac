//! Ledger snapshot types: per-trade rows and the aggregate summary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::instrument::InstrumentClass;

/// One trade projected into the date-ordered ledger.
///
/// Carries the trade's stored scalars plus the running figures the
/// fold derived at this position. Image blobs never appear here; rows
/// back tables and CSV export, which are text-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Journal-assigned trade id.
    pub id: u64,
    /// Execution date.
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
    /// Net realized PnL.
    pub realized_pnl: Decimal,
    /// Planned reward-to-risk ratio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_risk_reward: Option<Decimal>,
    /// Realized PnL per unit of risk distance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realized_risk_reward: Option<Decimal>,
    /// Sum of realized PnL up to and including this trade.
    pub cumulative_pnl: Decimal,
    /// Account balance before this trade.
    pub balance_before: Decimal,
    /// Account balance after this trade.
    pub balance: Decimal,
    /// This trade's PnL as a percentage of the balance before it
    /// (zero when that balance was zero).
    pub gain_pct: Decimal,
    /// Highest balance seen so far, seeded at initial capital.
    pub running_peak: Decimal,
    /// Decline from the running peak, as a percentage (always <= 0).
    pub drawdown_pct: Decimal,
}

/// Aggregate statistics over the whole ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Total number of trades.
    pub trade_count: u64,
    /// Number of trades with positive PnL.
    pub winning_trades: u64,
    /// Number of trades with zero or negative PnL.
    pub losing_trades: u64,
    /// Winning trades as a percentage of all trades.
    pub win_rate_pct: Decimal,
    /// Average PnL over winning trades (0 if none).
    pub avg_win: Decimal,
    /// Average |PnL| over non-winning trades (0 if none).
    pub avg_loss: Decimal,
    /// Payoff ratio (avg win / avg loss).
    pub payoff_ratio: Option<Decimal>,
    /// Expectancy per trade in account currency.
    pub expectancy: Decimal,
    /// Sum of realized PnL over the whole journal.
    pub total_realized_pnl: Decimal,
    /// Starting capital the fold was seeded with.
    pub initial_capital: Decimal,
    /// Balance after the last trade.
    pub final_balance: Decimal,
    /// Total return on initial capital, as a percentage.
    pub total_return_pct: Option<Decimal>,
    /// Worst per-trade drawdown percentage (<= 0; 0 for empty journal).
    pub max_drawdown_pct: Decimal,
    /// PnL of the most recently entered trade.
    pub last_trade_pnl: Option<Decimal>,
}

impl Default for LedgerSummary {
    fn default() -> Self {
        Self {
            trade_count: 0,
            winning_trades: 0,
            losing_trades: 0,
            win_rate_pct: Decimal::ZERO,
            avg_win: Decimal::ZERO,
            avg_loss: Decimal::ZERO,
            payoff_ratio: None,
            expectancy: Decimal::ZERO,
            total_realized_pnl: Decimal::ZERO,
            initial_capital: Decimal::ZERO,
            final_balance: Decimal::ZERO,
            total_return_pct: None,
            max_drawdown_pct: Decimal::ZERO,
            last_trade_pnl: None,
        }
    }
}

/// Balance curve point for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// Trade date.
    pub date: NaiveDate,
    /// Balance after the trade on that date.
    pub balance: Decimal,
}

/// The full derived view of a journal under a starting capital.
///
/// Ephemeral: recomputed from the journal on every query, never
/// stored or incrementally updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Date-ordered ledger rows.
    pub rows: Vec<LedgerRow>,
    /// Aggregate statistics.
    pub summary: LedgerSummary,
}

impl LedgerSnapshot {
    /// The date-to-balance series, one point per ledger row.
    #[must_use]
    pub fn equity_curve(&self) -> Vec<EquityPoint> {
        self.rows
            .iter()
            .map(|row| EquityPoint {
                date: row.date,
                balance: row.balance,
            })
            .collect()
    }
}
