//! Instrument classification and contract multipliers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument class determining the contract multiplier.
///
/// Prices for leveraged instruments are quoted per unit, so realized
/// PnL scales by a fixed per-class contract size. Spot-style classes
/// (index CFDs, crypto, everything else) use a multiplier of 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentClass {
    /// Standard forex lot (e.g. EURUSD): 100,000 units.
    ForexStandard,
    /// JPY-quoted forex lot (e.g. USDJPY): 1,000 units.
    ForexJpy,
    /// Gold futures/CFD (XAUUSD): 100 oz per contract.
    Gold,
    /// Silver futures/CFD (XAGUSD): 5,000 oz per contract.
    Silver,
    /// Equity index CFD: quoted per point.
    Index,
    /// Crypto pair: quoted per coin.
    Crypto,
    /// Anything else: no scaling.
    #[default]
    Other,
}

impl InstrumentClass {
    /// Returns the fixed contract multiplier for this class.
    #[must_use]
    pub const fn contract_multiplier(&self) -> Decimal {
        match self {
            Self::ForexStandard => Decimal::from_parts(100_000, 0, 0, false, 0),
            Self::ForexJpy => Decimal::from_parts(1_000, 0, 0, false, 0),
            Self::Gold => Decimal::from_parts(100, 0, 0, false, 0),
            Self::Silver => Decimal::from_parts(5_000, 0, 0, false, 0),
            Self::Index | Self::Crypto | Self::Other => Decimal::ONE,
        }
    }
}

impl fmt::Display for InstrumentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForexStandard => write!(f, "FOREX_STANDARD"),
            Self::ForexJpy => write!(f, "FOREX_JPY"),
            Self::Gold => write!(f, "GOLD"),
            Self::Silver => write!(f, "SILVER"),
            Self::Index => write!(f, "INDEX"),
            Self::Crypto => write!(f, "CRYPTO"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}
