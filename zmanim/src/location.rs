//! The observation point all computations are anchored to.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use zm_core::{Clock, Degrees, Error, Result};

/// A fixed place on Earth together with the IANA zone that defines its
/// civil day.
///
/// Constructed once at startup and shared; every instant this crate
/// produces is UTC, and [`Location::local`] is the single place where
/// wall-clock rendering happens.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    country_code: String,
    latitude: Degrees,
    longitude: Degrees,
    timezone: Tz,
    in_israel: bool,
}

impl Location {
    /// Validated constructor.
    ///
    /// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`
    /// (positive east); the timezone is already well-formed by type.
    pub fn new(
        name: impl Into<String>,
        country_code: impl Into<String>,
        latitude: Degrees,
        longitude: Degrees,
        timezone: Tz,
        in_israel: bool,
    ) -> Result<Location> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::Location(format!(
                "latitude {latitude}° outside [-90°, 90°]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::Location(format!(
                "longitude {longitude}° outside [-180°, 180°]"
            )));
        }
        Ok(Location {
            name: name.into(),
            country_code: country_code.into(),
            latitude,
            longitude,
            timezone,
            in_israel,
        })
    }

    /// The deployed location: Toronto, Canada.
    pub fn toronto() -> Location {
        Location {
            name: "Toronto".to_owned(),
            country_code: "CA".to_owned(),
            latitude: 43.6629,
            longitude: -79.3957,
            timezone: chrono_tz::America::Toronto,
            in_israel: false,
        }
    }

    /// Display name, e.g. `"Toronto"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO 3166 country code, e.g. `"CA"`.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Latitude in signed degrees, positive north.
    pub fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// Longitude in signed degrees, positive east.
    pub fn longitude(&self) -> Degrees {
        self.longitude
    }

    /// The IANA timezone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Whether Land-of-Israel festival rules apply here.
    pub fn in_israel(&self) -> bool {
        self.in_israel
    }

    /// The local civil calendar day containing the given instant.
    pub fn civil_day(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.timezone).date_naive()
    }

    /// Today's civil date according to the injected clock.
    pub fn civil_today(&self, clock: &dyn Clock) -> NaiveDate {
        self.civil_day(clock.now_utc())
    }

    /// A UTC instant on this location's wall clock.
    pub fn local(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.timezone)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.name, self.country_code)
    }
}
