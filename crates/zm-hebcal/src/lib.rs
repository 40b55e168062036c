//! # zm-hebcal
//!
//! The arithmetic (fixed) Hebrew calendar: year layout from the molad
//! with the four classical postponements, conversions to and from the
//! civil calendar, holiday and fast-day classification, the weekly Torah
//! reading cycle, and Hebrew-numeral rendering.
//!
//! Everything here is pure integer arithmetic on day numbers; no
//! astronomy is involved.  Days are identified by their proleptic
//! Gregorian day number (`chrono::Datelike::num_days_from_ce`, day 1 =
//! 0001-01-01), so the civil boundary is `chrono::NaiveDate` throughout.
//!
//! A Hebrew calendar day begins at nightfall, earlier than its civil
//! partner; this crate deliberately works in whole civil days and leaves
//! the evening shift to callers that know the local sunset.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Hebrew dates and civil conversions.
pub mod date;

/// Hebrew numerals (gematria) for day and year rendering.
pub mod gematria;

/// Holidays, fasts, and their classification.
pub mod holiday;

/// Months of the Hebrew year.
pub mod month;

/// The weekly Torah reading cycle.
pub mod sedra;

/// Year-level arithmetic: leap years, molad, postponements, year length.
pub mod year;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::HebrewDate;
pub use holiday::{holidays_on, Holiday, HolidayClass};
pub use month::HebrewMonth;
pub use sedra::{weekly_reading, Parsha, Reading, SedraSchedule};
pub use year::{days_in_year, is_leap_year, months_in_year, YearShape};
