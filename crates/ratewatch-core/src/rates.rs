//! Exchange-rate domain types

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::clock::LastUpdated;

/// A base/quote currency pairing, e.g. EUR/USD
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: String,
    pub quote: String,
}

impl CurrencyPair {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// One quoted exchange rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub pair: CurrencyPair,
    pub value: f64,
}

impl Rate {
    pub fn new(pair: CurrencyPair, value: f64) -> Self {
        Self { pair, value }
    }
}

/// The full set of displayed rates plus its update stamp.
///
/// The board is replaced wholesale by each snapshot; individual rates are
/// never patched in place.
#[derive(Debug, Clone, Default)]
pub struct RateBoard {
    pub rates: Vec<Rate>,
    pub last_updated: LastUpdated,
}

impl RateBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the board contents with a fresh snapshot
    pub fn apply_snapshot(&mut self, rates: Vec<Rate>, at: DateTime<Local>) {
        self.rates = rates;
        self.last_updated = LastUpdated::At(at);
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }
}
