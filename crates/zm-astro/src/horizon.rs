//! Rise, transit, and set instants at a chosen zenith distance.
//!
//! [`SolarDay`] freezes the slowly-moving solar terms (declination and the
//! equation of time) once per civil day, evaluated at the approximate
//! local solar noon.  Every instant derived from one `SolarDay` therefore
//! shares the same geometry: rise and set sit exactly symmetric around the
//! transit, which keeps downstream seasonal-hour arithmetic consistent.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use zm_core::{ensure, Degrees, Error, Real, Result};

use crate::julian::{julian_century, julian_day};
use crate::position::{declination, equation_of_time};

/// Angular distance of the sun's centre from the vertical at which an
/// event fires, in degrees.
///
/// `90°` is the geometric horizon.  Rise and set use 90°50′ to account for
/// atmospheric refraction and the solar semidiameter; twilight events add
/// a depression angle below the horizon on top of `90°`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Zenith(Degrees);

impl Zenith {
    /// Official sunrise/sunset zenith: 90°50′.
    pub const SUNRISE_SUNSET: Zenith = Zenith(90.0 + 5.0 / 6.0);

    /// Zenith for a sun `angle` degrees below the geometric horizon.
    #[inline]
    pub fn from_depression(angle: Degrees) -> Zenith {
        Zenith(90.0 + angle)
    }

    /// The zenith distance in degrees.
    #[inline]
    pub fn degrees(self) -> Degrees {
        self.0
    }
}

/// Solar geometry for one civil day at one location.
#[derive(Debug, Clone, Copy)]
pub struct SolarDay {
    date: NaiveDate,
    latitude: Degrees,
    longitude: Degrees,
    declination: Degrees,
    eq_of_time: Real,
}

impl SolarDay {
    /// Evaluate the solar terms for `date` at the given coordinates.
    ///
    /// `latitude` is positive north, `longitude` positive east.
    pub fn at(date: NaiveDate, latitude: Degrees, longitude: Degrees) -> Result<SolarDay> {
        ensure!(
            (-90.0..=90.0).contains(&latitude),
            "latitude {latitude} out of range [-90, 90]"
        );
        ensure!(
            (-180.0..=180.0).contains(&longitude),
            "longitude {longitude} out of range [-180, 180]"
        );
        // Evaluate at the approximate local solar noon of this meridian.
        let t = julian_century(julian_day(date) + 0.5 - longitude / 360.0);
        Ok(SolarDay {
            date,
            latitude,
            longitude,
            declination: declination(t),
            eq_of_time: equation_of_time(t),
        })
    }

    /// The civil date this geometry was evaluated for.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Solar declination frozen for this day, in degrees.
    #[inline]
    pub fn declination(&self) -> Degrees {
        self.declination
    }

    /// Equation of time frozen for this day, in minutes.
    #[inline]
    pub fn equation_of_time(&self) -> Real {
        self.eq_of_time
    }

    /// Solar transit (true local noon) as a UTC instant.
    pub fn transit(&self) -> DateTime<Utc> {
        self.instant_at(720.0 - 4.0 * self.longitude - self.eq_of_time)
    }

    /// The morning crossing of `zenith` as a UTC instant.
    pub fn rising(&self, zenith: Zenith) -> Result<DateTime<Utc>> {
        let ha = self.hour_angle(zenith)?;
        Ok(self.instant_at(720.0 - 4.0 * (self.longitude + ha) - self.eq_of_time))
    }

    /// The evening crossing of `zenith` as a UTC instant.
    pub fn setting(&self, zenith: Zenith) -> Result<DateTime<Utc>> {
        let ha = self.hour_angle(zenith)?;
        Ok(self.instant_at(720.0 - 4.0 * (self.longitude - ha) - self.eq_of_time))
    }

    /// Hour angle (degrees from transit) at which the sun stands at
    /// `zenith`, or an error when it never gets there on this day.
    fn hour_angle(&self, zenith: Zenith) -> Result<Degrees> {
        let phi = self.latitude.to_radians();
        let delta = self.declination.to_radians();
        let cos_ha =
            (zenith.degrees().to_radians().cos() - phi.sin() * delta.sin()) / (phi.cos() * delta.cos());
        if !(-1.0..=1.0).contains(&cos_ha) {
            return Err(Error::SunNeverReaches {
                zenith: zenith.degrees(),
                latitude: self.latitude,
                date: self.date,
            });
        }
        Ok(cos_ha.acos().to_degrees())
    }

    /// Instant `minutes` after 00:00 UT of this day, rounded to the
    /// nearest millisecond.  Values outside `[0, 1440)` roll into the
    /// neighbouring UTC days, which happens routinely away from the
    /// prime meridian.
    fn instant_at(&self, minutes: Real) -> DateTime<Utc> {
        let midnight = self.date.and_time(NaiveTime::MIN).and_utc();
        midnight + Duration::milliseconds((minutes * 60_000.0).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn zenith_constants() {
        assert_abs_diff_eq!(Zenith::SUNRISE_SUNSET.degrees(), 90.833_333, epsilon = 1e-4);
        assert_abs_diff_eq!(Zenith::from_depression(16.1).degrees(), 106.1, epsilon = 1e-12);
        assert_abs_diff_eq!(Zenith::from_depression(8.5).degrees(), 98.5, epsilon = 1e-12);
    }

    #[test]
    fn coordinates_are_validated() {
        assert!(SolarDay::at(date(2024, 6, 1), 91.0, 0.0).is_err());
        assert!(SolarDay::at(date(2024, 6, 1), 0.0, -200.0).is_err());
        assert!(SolarDay::at(date(2024, 6, 1), -89.9, 179.9).is_ok());
    }

    #[test]
    fn rise_and_set_are_symmetric_about_transit() {
        let day = SolarDay::at(date(2024, 3, 20), 43.6629, -79.3957).unwrap();
        let rise = day.rising(Zenith::SUNRISE_SUNSET).unwrap();
        let set = day.setting(Zenith::SUNRISE_SUNSET).unwrap();
        let transit = day.transit();
        let before = transit - rise;
        let after = set - transit;
        // Each instant rounds to the millisecond on its own.
        assert!(
            (before - after).num_milliseconds().abs() <= 2,
            "rise/set asymmetric: {before} vs {after}"
        );
    }

    #[test]
    fn deeper_zenith_widens_the_day() {
        let day = SolarDay::at(date(2024, 9, 10), 43.6629, -79.3957).unwrap();
        let sunrise = day.rising(Zenith::SUNRISE_SUNSET).unwrap();
        let dawn = day.rising(Zenith::from_depression(16.1)).unwrap();
        let sunset = day.setting(Zenith::SUNRISE_SUNSET).unwrap();
        let dusk = day.setting(Zenith::from_depression(16.1)).unwrap();
        assert!(dawn < sunrise, "dawn must precede sunrise");
        assert!(dusk > sunset, "16.1° dusk must follow sunset");
    }

    #[test]
    fn polar_night_is_an_error() {
        // Tromsø latitude, mid-December: the sun never rises.
        let day = SolarDay::at(date(2024, 12, 13), 69.65, 18.96).unwrap();
        let err = day.rising(Zenith::SUNRISE_SUNSET).unwrap_err();
        match err {
            Error::SunNeverReaches { latitude, .. } => {
                assert_abs_diff_eq!(latitude, 69.65, epsilon = 1e-12);
            }
            other => panic!("expected SunNeverReaches, got {other:?}"),
        }
    }

    #[test]
    fn polar_day_is_an_error() {
        // Same latitude at midsummer: the sun never sets, and never gets
        // 16.1° below the horizon either.
        let day = SolarDay::at(date(2024, 6, 21), 69.65, 18.96).unwrap();
        assert!(day.setting(Zenith::SUNRISE_SUNSET).is_err());
        assert!(day.rising(Zenith::from_depression(16.1)).is_err());
    }
}
