//! The twelve daily prayer-time boundaries.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use zm_astro::{SolarDay, Zenith};
use zm_core::{ensure_post, Degrees, Result};

use crate::location::Location;

/// Solar depression angles (degrees below the geometric horizon) for the
/// twilight boundaries.  Extended nightfall keeps the 16.1° convention,
/// the depression-angle equivalent of the 72-minute opinion.
const DAWN_DEPRESSION: Degrees = 16.1;
const TEFILLIN_DEPRESSION: Degrees = 11.5;
const NIGHTFALL_DEPRESSION: Degrees = 8.5;
const EXTENDED_NIGHTFALL_DEPRESSION: Degrees = 16.1;

/// The twelve zmanim of one civil day, all UTC, monotone in field order.
///
/// Daytime boundaries follow the GRA reckoning: a seasonal hour is one
/// twelfth of sunrise-to-sunset, and the Shema/Tefilla/mincha boundaries
/// sit at fixed counts of those hours after sunrise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZmanimTimes {
    /// Dawn (alot hashachar), 16.1° depression before sunrise.
    pub dawn: DateTime<Utc>,
    /// Earliest tallit and tefillin (misheyakir), 11.5° depression.
    pub earliest_tefillin: DateTime<Utc>,
    /// Sea-level sunrise.
    pub sunrise: DateTime<Utc>,
    /// Latest Shema, three seasonal hours into the day.
    pub latest_shema: DateTime<Utc>,
    /// Latest morning Tefilla, four seasonal hours.
    pub latest_tefilla: DateTime<Utc>,
    /// Solar midday (chatzot), the sun's meridian transit.
    pub midday: DateTime<Utc>,
    /// Earliest mincha (mincha gedola), six and a half seasonal hours.
    pub mincha_gedola: DateTime<Utc>,
    /// Preferred mincha (mincha ketana), nine and a half seasonal hours.
    pub mincha_ketana: DateTime<Utc>,
    /// Plag hamincha, ten and three-quarter seasonal hours.
    pub plag_hamincha: DateTime<Utc>,
    /// Sea-level sunset.
    pub sunset: DateTime<Utc>,
    /// Nightfall (tzeit hakochavim), 8.5° depression after sunset.
    pub nightfall: DateTime<Utc>,
    /// Extended nightfall, 16.1° depression after sunset.
    pub extended_nightfall: DateTime<Utc>,
}

impl ZmanimTimes {
    /// Compute all twelve instants for the civil day at the location.
    ///
    /// Fails when the sun does not cross one of the required zenith
    /// angles that day (polar latitudes); no time is ever substituted.
    pub fn for_date(date: NaiveDate, location: &Location) -> Result<ZmanimTimes> {
        let solar = SolarDay::at(date, location.latitude(), location.longitude())?;
        let sunrise = solar.rising(Zenith::SUNRISE_SUNSET)?;
        let sunset = solar.setting(Zenith::SUNRISE_SUNSET)?;

        let seasonal_hour_ms = (sunset - sunrise).num_milliseconds() as f64 / 12.0;
        let after_sunrise = |hours: f64| {
            sunrise + Duration::milliseconds((seasonal_hour_ms * hours).round() as i64)
        };

        let times = ZmanimTimes {
            dawn: solar.rising(Zenith::from_depression(DAWN_DEPRESSION))?,
            earliest_tefillin: solar.rising(Zenith::from_depression(TEFILLIN_DEPRESSION))?,
            sunrise,
            latest_shema: after_sunrise(3.0),
            latest_tefilla: after_sunrise(4.0),
            midday: solar.transit(),
            mincha_gedola: after_sunrise(6.5),
            mincha_ketana: after_sunrise(9.5),
            plag_hamincha: after_sunrise(10.75),
            sunset,
            nightfall: solar.setting(Zenith::from_depression(NIGHTFALL_DEPRESSION))?,
            extended_nightfall: solar.setting(Zenith::from_depression(EXTENDED_NIGHTFALL_DEPRESSION))?,
        };
        times.check_order(date)?;
        Ok(times)
    }

    /// The instants in canonical (monotone) order with their names.
    pub fn in_order(&self) -> [(&'static str, DateTime<Utc>); 12] {
        [
            ("dawn", self.dawn),
            ("earliest tefillin", self.earliest_tefillin),
            ("sunrise", self.sunrise),
            ("latest Shema", self.latest_shema),
            ("latest Tefilla", self.latest_tefilla),
            ("midday", self.midday),
            ("mincha gedola", self.mincha_gedola),
            ("mincha ketana", self.mincha_ketana),
            ("plag hamincha", self.plag_hamincha),
            ("sunset", self.sunset),
            ("nightfall", self.nightfall),
            ("extended nightfall", self.extended_nightfall),
        ]
    }

    fn check_order(&self, date: NaiveDate) -> Result<()> {
        let ordered = self.in_order();
        for pair in ordered.windows(2) {
            let (first_name, first) = pair[0];
            let (second_name, second) = pair[1];
            ensure_post!(
                first <= second,
                "{first_name} falls after {second_name} on {date}"
            );
        }
        Ok(())
    }
}
