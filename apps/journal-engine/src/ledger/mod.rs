//! Ledger Layer
//!
//! Pure journal and aggregation logic with zero I/O dependencies.
//! This layer defines:
//!
//! - **Trade records**: Validated, normalized entries with derived
//!   PnL and risk/reward figures
//! - **The journal**: An insertion-ordered container that assigns ids
//! - **The aggregator**: A date-ordered fold producing per-trade equity,
//!   drawdown, and a performance summary
//! - **Exports**: CSV and display projections of a ledger snapshot
//!
//! Everything here is deterministic and single-threaded; concurrency
//! belongs to the server layer.

pub mod aggregator;
pub mod builder;
pub mod direction;
pub mod error;
pub mod export;
pub mod instrument;
pub mod journal;
pub mod snapshot;
pub mod trade;

mod constants;

pub use aggregator::aggregate;
pub use builder::build_trade;
pub use direction::Direction;
pub use error::{FieldViolation, LedgerError, TradeField};
pub use export::{format_pct, format_ratio, snapshot_to_csv};
pub use instrument::InstrumentClass;
pub use journal::Journal;
pub use snapshot::{EquityPoint, LedgerRow, LedgerSnapshot, LedgerSummary};
pub use trade::{Trade, TradeDraft};
