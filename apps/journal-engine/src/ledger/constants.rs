//! Decimal constants for ledger calculations.

use rust_decimal::Decimal;

pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Scale used when storing realized PnL (cents).
pub const PNL_SCALE: u32 = 2;
