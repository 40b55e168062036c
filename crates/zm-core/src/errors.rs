//! Error types for zmanim-rs.
//!
//! Every fallible operation in the workspace returns [`Result`] with this
//! single `thiserror`-derived enum.  The `ensure!`, `ensure_post!`, and
//! `fail!` macros cover the common guard-and-bail patterns.

use chrono::NaiveDate;
use thiserror::Error;

use crate::Degrees;

/// The top-level error type used throughout zmanim-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated (raised by `ensure_post!`).
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Civil date outside the supported range or otherwise unusable.
    #[error("date error: {0}")]
    Date(String),

    /// Geographic coordinates outside their legal domain.
    #[error("location error: {0}")]
    Location(String),

    /// The sun never crosses the requested zenith distance on the given day
    /// (polar day or polar night at extreme latitudes).
    #[error("sun never reaches zenith {zenith}° at latitude {latitude}° on {date}")]
    SunNeverReaches {
        /// Requested zenith distance in degrees.
        zenith: Degrees,
        /// Geographic latitude in degrees.
        latitude: Degrees,
        /// Civil date of the failed computation.
        date: NaiveDate,
    },

    /// Hebrew calendar arithmetic error.
    #[error("hebrew calendar error: {0}")]
    Calendar(String),
}

/// Shorthand `Result` type used throughout zmanim-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Guard a precondition.
///
/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use zm_core::ensure;
/// fn latitude(deg: f64) -> zm_core::errors::Result<f64> {
///     ensure!((-90.0..=90.0).contains(&deg), "latitude {deg} out of range");
///     Ok(deg)
/// }
/// assert!(latitude(43.6629).is_ok());
/// assert!(latitude(123.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Guard a postcondition.
///
/// Returns `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use zm_core::ensure_post;
/// fn half_day(daylight_minutes: f64) -> zm_core::errors::Result<f64> {
///     let result = daylight_minutes / 2.0;
///     ensure_post!(result > 0.0, "daylight span must be positive, got {result}");
///     Ok(result)
/// }
/// assert!(half_day(600.0).is_ok());
/// assert!(half_day(-600.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Bail out with a runtime error.
///
/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use zm_core::fail;
/// fn always_err() -> zm_core::errors::Result<()> {
///     fail!("sun position unavailable");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
