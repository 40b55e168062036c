//! Wall-clock access behind a trait.
//!
//! Calendar and zmanim computations take explicit dates; only the
//! convenience entry points that answer "what about today?" consult a
//! clock.  [`Clock`] makes that single ambient input injectable, so tests
//! pin the current instant with [`FixedClock`] instead of depending on
//! when they run.

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// Implementations must be cheap to call; the library may query the clock
/// more than once per request.
pub trait Clock {
    /// The current instant in UTC.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// [`Clock`] backed by the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// [`Clock`] pinned to a fixed instant, for tests and reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
