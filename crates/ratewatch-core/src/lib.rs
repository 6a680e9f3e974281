//! # ratewatch-core - Core Domain Types
//!
//! Foundation crate for ratewatch. Provides domain types, error handling,
//! the clock abstraction, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Time (`clock`)
//! - [`Clock`] - Injectable time source
//! - [`SystemClock`] - Wall-clock implementation
//! - [`FixedClock`] - Pinned instant for deterministic tests
//! - [`LastUpdated`] - When the rate board was last refreshed, if known
//!
//! ### Rates (`rates`)
//! - [`CurrencyPair`] - A base/quote currency pairing
//! - [`Rate`] - One quoted exchange rate
//! - [`RateBoard`] - The full set of displayed rates plus its update stamp
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ratewatch_core::prelude::*;
//! ```

pub mod clock;
pub mod error;
pub mod logging;
pub mod rates;

/// Prelude for common imports used throughout all ratewatch crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use clock::{format_local, Clock, FixedClock, LastUpdated, SystemClock};
pub use error::{Error, Result, ResultExt};
pub use rates::{CurrencyPair, Rate, RateBoard};
