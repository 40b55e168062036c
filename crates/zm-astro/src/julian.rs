//! Julian day arithmetic.
//!
//! The solar series in [`crate::position`] are polynomials in the Julian
//! century, counted from the J2000.0 epoch.  Only the civil-date-to-era
//! conversions live here; everything stays in Universal Time because the
//! sub-minute difference from Terrestrial Time is far below the accuracy
//! of the series themselves.

use chrono::{Datelike, NaiveDate};
use zm_core::Real;

/// Julian day number of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000: Real = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: Real = 36_525.0;

/// Offset from a proleptic-Gregorian day number (day 1 = 0001-01-01) to
/// the Julian day at 00:00 UT of that civil day.
const DAY_NUMBER_TO_JD: Real = 1_721_424.5;

/// Julian day at 00:00 UT on the given civil date.
#[inline]
pub fn julian_day(date: NaiveDate) -> Real {
    Real::from(date.num_days_from_ce()) + DAY_NUMBER_TO_JD
}

/// Julian centuries elapsed between J2000.0 and the Julian day `jd`.
#[inline]
pub fn julian_century(jd: Real) -> Real {
    (jd - J2000) / DAYS_PER_CENTURY
}
