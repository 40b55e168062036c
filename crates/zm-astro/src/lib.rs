//! # zm-astro
//!
//! Closed-form solar position for civil timekeeping: declination, the
//! equation of time, and the daily rise/transit/set instants at arbitrary
//! zenith distances (sunrise, sunset, and the twilight depths used for
//! dawn and nightfall).
//!
//! The formulas are the NOAA low-precision series, accurate to well under
//! a minute of clock time between 1900 and 2100, which is more than
//! enough for times that are rounded to the minute before anyone reads
//! them.
//!
//! All latitude/longitude arguments are in decimal degrees, positive
//! north and east.  All returned instants are UTC; callers localise them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Civil date → Julian day / Julian century conversions.
pub mod julian;

/// Solar declination and the equation of time (NOAA series).
pub mod position;

/// Rise, transit, and set instants at a chosen zenith distance.
pub mod horizon;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use horizon::{SolarDay, Zenith};
pub use julian::{julian_century, julian_day};
pub use position::{declination, equation_of_time};
