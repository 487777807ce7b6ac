// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Journal Engine - Rust Core Library
//!
//! Deterministic ledger engine for a personal trading journal.
//!
//! # Architecture
//!
//! Two layers, inside out:
//!
//! - **Ledger**: Pure domain logic with no I/O.
//!   - `instrument` / `direction`: typed trade attributes and the
//!     contract multiplier table
//!   - `builder`: validation, normalization, and derived-field
//!     computation for submitted trade records
//!   - `journal`: the insertion-ordered trade container
//!   - `aggregator`: the date-ordered fold producing equity, drawdown,
//!     and the performance summary
//!   - `export`: CSV projection and display formatting
//!
//! - **Server**: Axum JSON API over an in-memory journal.
//!   - `AppState` + `create_router`: trade CRUD, ledger snapshots,
//!     CSV export, capital management
//!
//! All money arithmetic uses `rust_decimal::Decimal`. Realized PnL is
//! rounded to cents when a trade is stored; ratios that would divide by
//! zero are represented as `None`, never as NaN or a sentinel.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Ledger layer - Pure journal and aggregation logic with no I/O.
pub mod ledger;

/// Server layer - Axum HTTP surface over an in-memory journal.
pub mod server;

// Ledger re-exports
pub use ledger::aggregator::aggregate;
pub use ledger::builder::build_trade;
pub use ledger::direction::Direction;
pub use ledger::error::{FieldViolation, LedgerError, TradeField};
pub use ledger::export::{format_pct, format_ratio, snapshot_to_csv};
pub use ledger::instrument::InstrumentClass;
pub use ledger::journal::Journal;
pub use ledger::snapshot::{EquityPoint, LedgerRow, LedgerSnapshot, LedgerSummary};
pub use ledger::trade::{Trade, TradeDraft};

// Server re-exports
pub use server::{AppState, create_router};
