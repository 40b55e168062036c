//! # zmanim
//!
//! Halachic prayer times, Hebrew dates, holidays and Shabbat schedules
//! for a fixed location, assembled from the `zm-astro` solar ephemeris
//! and the `zm-hebcal` calendar crates.
//!
//! The deployed location is Toronto; everything is a pure function of
//! the civil date, so responses are freely cacheable and callers may
//! compute from any thread.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use zmanim::ZmanimCalculator;
//!
//! let calc = ZmanimCalculator::toronto();
//! let friday = NaiveDate::from_ymd_opt(2024, 12, 13).unwrap();
//! let day = calc.compute_for_date(friday)?;
//!
//! assert!(day.is_shabbat, "Friday evening begins Shabbat");
//! assert!(day.candle_lighting.is_some());
//! assert_eq!(day.hebrew_date.to_string(), "12 Kislev 5785");
//! # Ok::<(), zmanim::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ──────────────────────────────────────────────────────────────────

/// Response assembly for single days, weeks, and the coming Shabbat.
pub mod calculator;

/// Typed calendar events and the provider seam.
pub mod events;

/// Wall-clock formatting and JSON-ready views.
pub mod format;

/// The fixed observation point.
pub mod location;

/// Assembled result types.
pub mod response;

/// The twelve daily prayer-time boundaries.
pub mod times;

// ── Re-exports ───────────────────────────────────────────────────────────────

pub use calculator::ZmanimCalculator;
pub use events::{CalendarEvent, CandleOptions, EventSource, HebcalEventSource};
pub use format::{format_instant, format_long_date, ShabbatView, TimesView, ZmanimView, NO_TIME};
pub use location::Location;
pub use response::{ShabbatInfo, ZmanimResponse};
pub use times::ZmanimTimes;

pub use zm_core::{Clock, Error, FixedClock, Result, SystemClock};
