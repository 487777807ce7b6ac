//! Textual projections of a ledger snapshot.

use std::fmt::Write;

use rust_decimal::Decimal;

use super::snapshot::LedgerSnapshot;

/// Export ledger rows to CSV format.
///
/// One line per row in snapshot (date) order, columns matching
/// [`LedgerRow`](super::snapshot::LedgerRow) field order. Absent
/// ratios become empty cells so a spreadsheet shows a blank rather
/// than a fake zero. Image blobs are not part of the row type and
/// never reach the export.
#[must_use]
pub fn snapshot_to_csv(snapshot: &LedgerSnapshot) -> String {
    let mut csv = String::from(
        "id,date,instrument,instrument_class,direction,size,entry_price,exit_price,stop_loss,take_profit,fees,realized_pnl,planned_risk_reward,realized_risk_reward,cumulative_pnl,balance_before,balance,gain_pct,running_peak,drawdown_pct\n",
    );

    for row in &snapshot.rows {
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            row.id,
            row.date,
            row.instrument,
            row.instrument_class,
            row.direction,
            row.size,
            row.entry_price,
            row.exit_price,
            row.stop_loss,
            row.take_profit,
            row.fees,
            row.realized_pnl,
            optional_cell(row.planned_risk_reward),
            optional_cell(row.realized_risk_reward),
            row.cumulative_pnl,
            row.balance_before,
            row.balance,
            row.gain_pct,
            row.running_peak,
            row.drawdown_pct,
        );
    }

    csv
}

fn optional_cell(value: Option<Decimal>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

/// Format a percentage value for display.
#[must_use]
pub fn format_pct(value: Decimal) -> String {
    format!("{value:.2}%")
}

/// Format an optional ratio, rendering absence as "N/A".
#[must_use]
pub fn format_ratio(value: Option<Decimal>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}
