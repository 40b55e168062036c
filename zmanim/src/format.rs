//! Wall-clock rendering and the JSON-ready view types.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use zm_core::Result;

use crate::response::{ShabbatInfo, ZmanimResponse};

/// Placeholder for instants that do not apply on a given day.
pub const NO_TIME: &str = "--:--";

/// Renders an instant on the local wall clock as `4:23 PM` (12-hour, no
/// leading zero); absent instants become exactly [`NO_TIME`].
pub fn format_instant(instant: Option<DateTime<Utc>>, tz: Tz) -> String {
    match instant {
        Some(t) => t.with_timezone(&tz).format("%-I:%M %p").to_string(),
        None => NO_TIME.to_owned(),
    }
}

/// `December 13, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `Friday, December 13, 2024`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// The twelve times of a day, formatted on the location's wall clock.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TimesView {
    /// Dawn.
    pub dawn: String,
    /// Earliest tallit and tefillin.
    pub earliest_tefillin: String,
    /// Sunrise.
    pub sunrise: String,
    /// Latest Shema.
    pub latest_shema: String,
    /// Latest morning Tefilla.
    pub latest_tefilla: String,
    /// Solar midday.
    pub midday: String,
    /// Earliest mincha.
    pub mincha_gedola: String,
    /// Preferred mincha.
    pub mincha_ketana: String,
    /// Plag hamincha.
    pub plag_hamincha: String,
    /// Sunset.
    pub sunset: String,
    /// Nightfall.
    pub nightfall: String,
    /// Extended nightfall.
    pub extended_nightfall: String,
}

/// One day, fully formatted for the `mode=today` / `mode=week` response
/// shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ZmanimView {
    /// ISO civil date, e.g. `"2024-12-13"`.
    pub date: String,
    /// `December 13, 2024`.
    pub gregorian_date: String,
    /// Numeric Hebrew date, e.g. `"12 Kislev 5785"`.
    pub hebrew_date: String,
    /// Hebrew-glyph date, e.g. `"י״ב כסלו תשפ״ה"`.
    pub hebrew_date_display: String,
    /// Weekly Torah portion, if any.
    pub parsha: Option<String>,
    /// Holiday or fast label, if any.
    pub holiday: Option<String>,
    /// Candle lighting, or `"--:--"`.
    pub candle_lighting: String,
    /// Havdalah, or `"--:--"`.
    pub havdalah: String,
    /// Shabbat flag.
    pub is_shabbat: bool,
    /// Yom Tov flag.
    pub is_yom_tov: bool,
    /// The twelve formatted times.
    pub times: TimesView,
}

impl ZmanimView {
    /// Format a response on the given wall clock.
    ///
    /// Fails only when the Hebrew date cannot be rendered in glyphs,
    /// which no date a calculator produces can trigger.
    pub fn of(response: &ZmanimResponse, tz: Tz) -> Result<ZmanimView> {
        let t = &response.times;
        let clock = |instant| format_instant(Some(instant), tz);
        Ok(ZmanimView {
            date: response.date.to_string(),
            gregorian_date: format_date(response.date),
            hebrew_date: response.hebrew_date.to_string(),
            hebrew_date_display: response.hebrew_date.hebrew_display()?,
            parsha: response.portion.clone(),
            holiday: response.holiday_label.clone(),
            candle_lighting: format_instant(response.candle_lighting, tz),
            havdalah: format_instant(response.havdalah, tz),
            is_shabbat: response.is_shabbat,
            is_yom_tov: response.is_yom_tov,
            times: TimesView {
                dawn: clock(t.dawn),
                earliest_tefillin: clock(t.earliest_tefillin),
                sunrise: clock(t.sunrise),
                latest_shema: clock(t.latest_shema),
                latest_tefilla: clock(t.latest_tefilla),
                midday: clock(t.midday),
                mincha_gedola: clock(t.mincha_gedola),
                mincha_ketana: clock(t.mincha_ketana),
                plag_hamincha: clock(t.plag_hamincha),
                sunset: clock(t.sunset),
                nightfall: clock(t.nightfall),
                extended_nightfall: clock(t.extended_nightfall),
            },
        })
    }
}

/// The `mode=shabbat` response shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ShabbatView {
    /// Torah portion, if any.
    pub parsha: Option<String>,
    /// Long-form Friday date, e.g. `"Friday, December 13, 2024"`.
    pub date: String,
    /// Friday's candle lighting, or `"--:--"`.
    pub candle_lighting: String,
    /// Saturday's havdalah, or `"--:--"`.
    pub havdalah: String,
}

impl ShabbatView {
    /// Format a Shabbat lookup on the given wall clock.
    pub fn of(info: &ShabbatInfo, tz: Tz) -> ShabbatView {
        ShabbatView {
            parsha: info.portion.clone(),
            date: format_long_date(info.friday),
            candle_lighting: format_instant(info.candle_lighting, tz),
            havdalah: format_instant(info.havdalah, tz),
        }
    }
}
