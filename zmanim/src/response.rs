//! Assembled per-day and per-Shabbat results.

use chrono::{DateTime, NaiveDate, Utc};
use zm_hebcal::HebrewDate;

use crate::times::ZmanimTimes;

/// Everything known about one civil day at the fixed location.
///
/// Optional fields are genuinely absent on most days (no candle lighting
/// on a plain Tuesday); absence is never an error.  The numeric and
/// Hebrew-glyph date renderings come from [`HebrewDate::to_string`] and
/// [`HebrewDate::hebrew_display`].
#[derive(Debug, Clone, PartialEq)]
pub struct ZmanimResponse {
    /// The civil day, in the location's zone.
    pub date: NaiveDate,
    /// The Hebrew calendar day.
    pub hebrew_date: HebrewDate,
    /// The twelve prayer-time boundaries.
    pub times: ZmanimTimes,
    /// Weekly Torah portion, on regular Shabbatot.
    pub portion: Option<String>,
    /// Holiday or fast-day label, when one applies.
    pub holiday_label: Option<String>,
    /// Candle-lighting instant (Friday or festival eve).
    pub candle_lighting: Option<DateTime<Utc>>,
    /// Havdalah instant (close of Shabbat or festival).
    pub havdalah: Option<DateTime<Utc>>,
    /// Whether the day is Shabbat.  Saturday is authoritative.
    pub is_shabbat: bool,
    /// Whether the day carries Yom Tov status (or begins one at dusk).
    pub is_yom_tov: bool,
}

/// The upcoming Shabbat: Friday's candles, Saturday's havdalah and
/// portion.
#[derive(Debug, Clone, PartialEq)]
pub struct ShabbatInfo {
    /// The Friday the candles are lit.
    pub friday: NaiveDate,
    /// The Shabbat day itself.
    pub saturday: NaiveDate,
    /// Torah portion, preferring the Saturday value.
    pub portion: Option<String>,
    /// Friday's candle-lighting instant.
    pub candle_lighting: Option<DateTime<Utc>>,
    /// Saturday's havdalah instant.
    pub havdalah: Option<DateTime<Utc>>,
}
