//! The ledger aggregator: a date-ordered fold over the journal.
//!
//! `aggregate` is a pure function of its two inputs. It sorts a working
//! copy of the trades by date (stable, so same-date trades keep journal
//! order), folds balances and drawdown through the sequence, and
//! derives the summary statistics in one pass. The journal's own
//! storage order is never touched.

use rust_decimal::Decimal;

use super::constants::HUNDRED;
use super::snapshot::{LedgerRow, LedgerSnapshot, LedgerSummary};
use super::trade::Trade;

/// Fold a journal into its derived ledger under a starting capital.
///
/// Every division is guarded: a zero balance yields a zero gain
/// percentage, a zero peak yields a zero drawdown, zero capital makes
/// the total return absent, and a zero average loss makes the payoff
/// ratio absent. Calling twice with the same inputs yields identical
/// output.
#[must_use]
pub fn aggregate(trades: &[Trade], initial_capital: Decimal) -> LedgerSnapshot {
    let mut ordered: Vec<&Trade> = trades.iter().collect();
    ordered.sort_by_key(|t| t.date);

    let mut rows = Vec::with_capacity(ordered.len());
    let mut cumulative_pnl = Decimal::ZERO;
    let mut running_peak = initial_capital;
    let mut max_drawdown_pct = Decimal::ZERO;

    for trade in ordered {
        let balance_before = initial_capital + cumulative_pnl;
        cumulative_pnl += trade.realized_pnl;
        let balance = initial_capital + cumulative_pnl;

        let gain_pct = if balance_before == Decimal::ZERO {
            Decimal::ZERO
        } else {
            trade.realized_pnl / balance_before * HUNDRED
        };

        running_peak = running_peak.max(balance);
        let drawdown_pct = if running_peak == Decimal::ZERO {
            Decimal::ZERO
        } else {
            (balance - running_peak) / running_peak * HUNDRED
        };
        max_drawdown_pct = max_drawdown_pct.min(drawdown_pct);

        rows.push(LedgerRow {
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
            cumulative_pnl,
            balance_before,
            balance,
            gain_pct,
            running_peak,
            drawdown_pct,
        });
    }

    let summary = summarize(trades, initial_capital, cumulative_pnl, max_drawdown_pct);

    LedgerSnapshot { rows, summary }
}

fn summarize(
    trades: &[Trade],
    initial_capital: Decimal,
    total_realized_pnl: Decimal,
    max_drawdown_pct: Decimal,
) -> LedgerSummary {
    let trade_count = trades.len() as u64;

    let mut winning_trades = 0u64;
    let mut gross_win = Decimal::ZERO;
    let mut gross_loss = Decimal::ZERO;

    for trade in trades {
        if trade.is_winner() {
            winning_trades += 1;
            gross_win += trade.realized_pnl;
        } else {
            gross_loss += trade.realized_pnl.abs();
        }
    }

    // Breakeven trades sit on the loss side: a win is strictly positive.
    let losing_trades = trade_count - winning_trades;

    let win_rate_pct = if trade_count > 0 {
        Decimal::from(winning_trades) / Decimal::from(trade_count) * HUNDRED
    } else {
        Decimal::ZERO
    };

    let avg_win = if winning_trades > 0 {
        gross_win / Decimal::from(winning_trades)
    } else {
        Decimal::ZERO
    };

    let avg_loss = if losing_trades > 0 {
        gross_loss / Decimal::from(losing_trades)
    } else {
        Decimal::ZERO
    };

    let payoff_ratio = if avg_loss > Decimal::ZERO {
        Some(avg_win / avg_loss)
    } else {
        None
    };

    // Expectancy = (WinRate * AvgWin) - (LossRate * AvgLoss)
    let win_fraction = win_rate_pct / HUNDRED;
    let expectancy = win_fraction * avg_win - (Decimal::ONE - win_fraction) * avg_loss;

    let final_balance = initial_capital + total_realized_pnl;

    let total_return_pct = if initial_capital == Decimal::ZERO {
        None
    } else {
        Some(total_realized_pnl / initial_capital * HUNDRED)
    };

    let last_trade_pnl = trades
        .iter()
        .max_by_key(|t| t.id)
        .map(|t| t.realized_pnl);

    LedgerSummary {
        trade_count,
        winning_trades,
        losing_trades,
        win_rate_pct,
        avg_win,
        avg_loss,
        payoff_ratio,
        expectancy,
        total_realized_pnl,
        initial_capital,
        final_balance,
        total_return_pct,
        max_drawdown_pct,
        last_trade_pnl,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::builder::build_trade;
    use crate::ledger::direction::Direction;
    use crate::ledger::instrument::InstrumentClass;
    use crate::ledger::trade::TradeDraft;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn make_trade(
        id: u64,
        day: u32,
        direction: Direction,
        entry: Decimal,
        exit: Decimal,
        size: Decimal,
    ) -> Trade {
        let draft = TradeDraft {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            instrument: "EURUSD".to_string(),
            instrument_class: InstrumentClass::Other,
            direction,
            size,
            entry_price: entry,
            exit_price: exit,
            stop_loss: entry * dec!(0.99),
            take_profit: exit,
            fees: Decimal::ZERO,
            before_image: None,
            after_image: None,
        };
        build_trade(id, draft).unwrap()
    }

    #[test]
    fn test_two_trade_ledger() {
        let trades = vec![
            make_trade(1, 2, Direction::Long, dec!(1.1), dec!(1.105), dec!(100000)),
            make_trade(2, 3, Direction::Short, dec!(1.2), dec!(1.21), dec!(1000)),
        ];

        let snapshot = aggregate(&trades, dec!(1000));

        assert_eq!(snapshot.rows.len(), 2);

        let first = &snapshot.rows[0];
        assert_eq!(first.realized_pnl, dec!(500.00));
        assert_eq!(first.balance_before, dec!(1000));
        assert_eq!(first.balance, dec!(1500.00));
        assert_eq!(first.gain_pct, dec!(50.0000));
        assert_eq!(first.running_peak, dec!(1500.00));
        assert_eq!(first.drawdown_pct, dec!(0));

        let second = &snapshot.rows[1];
        assert_eq!(second.realized_pnl, dec!(-10.00));
        assert_eq!(second.cumulative_pnl, dec!(490.00));
        assert_eq!(second.balance, dec!(1490.00));
        assert_eq!(second.running_peak, dec!(1500.00));
        // (1490 - 1500) / 1500 * 100
        assert!(second.drawdown_pct > dec!(-0.667) && second.drawdown_pct < dec!(-0.666));

        let summary = &snapshot.summary;
        assert_eq!(summary.trade_count, 2);
        assert_eq!(summary.winning_trades, 1);
        assert_eq!(summary.losing_trades, 1);
        assert_eq!(summary.win_rate_pct, dec!(50));
        assert_eq!(summary.avg_win, dec!(500.00));
        assert_eq!(summary.avg_loss, dec!(10.00));
        assert_eq!(summary.payoff_ratio, Some(dec!(50)));
        // 0.5 * 500 - 0.5 * 10
        assert_eq!(summary.expectancy, dec!(245.000));
        assert_eq!(summary.final_balance, dec!(1490.00));
        assert_eq!(summary.total_return_pct, Some(dec!(49.0000)));
        assert!(
            summary.max_drawdown_pct > dec!(-0.667) && summary.max_drawdown_pct < dec!(-0.666)
        );
        assert_eq!(summary.last_trade_pnl, Some(dec!(-10.00)));
    }

    #[test]
    fn test_date_sort_is_stable() {
        let trades = vec![
            make_trade(1, 10, Direction::Long, dec!(100), dec!(101), dec!(1)),
            make_trade(2, 5, Direction::Long, dec!(100), dec!(102), dec!(1)),
            make_trade(3, 5, Direction::Long, dec!(100), dec!(103), dec!(1)),
        ];

        let snapshot = aggregate(&trades, dec!(1000));

        let ids: Vec<u64> = snapshot.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_zero_capital_never_divides() {
        let trades = vec![
            make_trade(1, 2, Direction::Short, dec!(100), dec!(110), dec!(1)),
            make_trade(2, 3, Direction::Long, dec!(100), dec!(105), dec!(1)),
        ];

        let snapshot = aggregate(&trades, Decimal::ZERO);

        let first = &snapshot.rows[0];
        assert_eq!(first.balance_before, dec!(0));
        assert_eq!(first.gain_pct, dec!(0));
        assert_eq!(first.balance, dec!(-10.00));
        assert_eq!(first.drawdown_pct, dec!(0));

        assert_eq!(snapshot.summary.total_return_pct, None);
    }

    #[test]
    fn test_monotonic_balance_has_zero_drawdown() {
        let trades = vec![
            make_trade(1, 2, Direction::Long, dec!(100), dec!(105), dec!(1)),
            make_trade(2, 3, Direction::Long, dec!(100), dec!(110), dec!(1)),
            make_trade(3, 4, Direction::Long, dec!(100), dec!(101), dec!(1)),
        ];

        let snapshot = aggregate(&trades, dec!(1000));

        assert!(snapshot.rows.iter().all(|r| r.drawdown_pct == dec!(0)));
        assert_eq!(snapshot.summary.max_drawdown_pct, dec!(0));
    }

    #[test]
    fn test_cumulative_sum_invariant() {
        let trades = vec![
            make_trade(1, 2, Direction::Long, dec!(100), dec!(107), dec!(3)),
            make_trade(2, 3, Direction::Short, dec!(50), dec!(53), dec!(2)),
            make_trade(3, 4, Direction::Long, dec!(10), dec!(9), dec!(5)),
        ];

        let snapshot = aggregate(&trades, dec!(2500));

        let pnl_sum: Decimal = trades.iter().map(|t| t.realized_pnl).sum();
        let last = snapshot.rows.last().unwrap();
        assert_eq!(last.balance, dec!(2500) + pnl_sum);
        assert_eq!(snapshot.summary.final_balance, dec!(2500) + pnl_sum);
        assert_eq!(snapshot.summary.total_realized_pnl, pnl_sum);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let trades = vec![
            make_trade(1, 2, Direction::Long, dec!(1.1), dec!(1.105), dec!(100000)),
            make_trade(2, 3, Direction::Short, dec!(1.2), dec!(1.21), dec!(1000)),
        ];

        let first = aggregate(&trades, dec!(1000));
        let second = aggregate(&trades, dec!(1000));

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_journal() {
        let snapshot = aggregate(&[], dec!(1000));

        assert!(snapshot.rows.is_empty());
        assert_eq!(snapshot.summary.trade_count, 0);
        assert_eq!(snapshot.summary.win_rate_pct, dec!(0));
        assert_eq!(snapshot.summary.max_drawdown_pct, dec!(0));
        assert_eq!(snapshot.summary.initial_capital, dec!(1000));
        assert_eq!(snapshot.summary.final_balance, dec!(1000));
        assert_eq!(snapshot.summary.total_return_pct, Some(dec!(0)));
        assert_eq!(snapshot.summary.payoff_ratio, None);
        assert_eq!(snapshot.summary.last_trade_pnl, None);

        let zero_capital = aggregate(&[], Decimal::ZERO);
        assert_eq!(zero_capital.summary.total_return_pct, None);
    }

    #[test]
    fn test_breakeven_counts_as_loss() {
        let trades = vec![make_trade(1, 2, Direction::Long, dec!(100), dec!(100.001), dec!(1))];
        // 0.001 rounds to 0.00 at storage
        assert_eq!(trades[0].realized_pnl, dec!(0.00));

        let snapshot = aggregate(&trades, dec!(1000));

        assert_eq!(snapshot.summary.winning_trades, 0);
        assert_eq!(snapshot.summary.losing_trades, 1);
        assert_eq!(snapshot.summary.win_rate_pct, dec!(0));
        assert_eq!(snapshot.summary.avg_loss, dec!(0.00));
        assert_eq!(snapshot.summary.payoff_ratio, None);
    }

    #[test]
    fn test_last_trade_pnl_follows_journal_recency() {
        // Trade 2 was entered last but dates before trade 1.
        let trades = vec![
            make_trade(1, 20, Direction::Long, dec!(100), dec!(110), dec!(1)),
            make_trade(2, 5, Direction::Long, dec!(100), dec!(101), dec!(1)),
        ];

        let snapshot = aggregate(&trades, dec!(1000));

        assert_eq!(snapshot.rows[0].id, 2);
        assert_eq!(snapshot.summary.last_trade_pnl, Some(dec!(1.00)));
    }

    #[test]
    fn test_equity_curve_matches_rows() {
        let trades = vec![
            make_trade(1, 2, Direction::Long, dec!(100), dec!(105), dec!(1)),
            make_trade(2, 3, Direction::Short, dec!(100), dec!(103), dec!(1)),
        ];

        let snapshot = aggregate(&trades, dec!(1000));
        let curve = snapshot.equity_curve();

        assert_eq!(curve.len(), 2);
        assert_eq!(curve[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(curve[0].balance, dec!(1005.00));
        assert_eq!(curve[1].balance, dec!(1002.00));
    }
}
