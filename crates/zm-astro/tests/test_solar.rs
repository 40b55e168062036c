//! Rise/set instants checked against published almanac values.
//!
//! Reference times come from the NOAA solar calculator for Toronto
//! (43.6629° N, 79.3957° W) and are good to about a minute; the
//! assertions allow ±4 minutes to absorb both the almanac rounding and
//! the low-precision series.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use zm_astro::{SolarDay, Zenith};

const TORONTO_LAT: f64 = 43.6629;
const TORONTO_LON: f64 = -79.3957;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn assert_within(actual: DateTime<Utc>, expected: DateTime<Utc>, minutes: i64, what: &str) {
    let diff = actual.signed_duration_since(expected).num_minutes().abs();
    assert!(
        diff <= minutes,
        "{what}: got {actual}, expected {expected} ± {minutes} min"
    );
}

fn toronto(day: NaiveDate) -> SolarDay {
    SolarDay::at(day, TORONTO_LAT, TORONTO_LON).unwrap()
}

#[test]
fn toronto_december_sunrise_sunset() {
    // 2024-12-13: sunrise 07:44 EST, sunset 16:41 EST.
    let day = toronto(date(2024, 12, 13));
    let rise = day.rising(Zenith::SUNRISE_SUNSET).unwrap();
    let set = day.setting(Zenith::SUNRISE_SUNSET).unwrap();
    assert_within(rise, utc(2024, 12, 13, 12, 44), 4, "December sunrise");
    assert_within(set, utc(2024, 12, 13, 21, 41), 4, "December sunset");
}

#[test]
fn toronto_june_sunrise_sunset() {
    // 2024-06-21: sunrise 05:36 EDT, sunset 21:03 EDT.  The sunset lands
    // on the next UTC day.
    let day = toronto(date(2024, 6, 21));
    let rise = day.rising(Zenith::SUNRISE_SUNSET).unwrap();
    let set = day.setting(Zenith::SUNRISE_SUNSET).unwrap();
    assert_within(rise, utc(2024, 6, 21, 9, 36), 4, "June sunrise");
    assert_within(set, utc(2024, 6, 22, 1, 3), 4, "June sunset");
}

#[test]
fn toronto_transit_sits_between_rise_and_set() {
    let day = toronto(date(2024, 12, 13));
    let rise = day.rising(Zenith::SUNRISE_SUNSET).unwrap();
    let set = day.setting(Zenith::SUNRISE_SUNSET).unwrap();
    let transit = day.transit();
    assert!(rise < transit && transit < set);
    // Mid-December solar noon in Toronto is a few minutes past 12:12 EST.
    assert_within(transit, utc(2024, 12, 13, 17, 12), 4, "December transit");
}

#[test]
fn twilight_order_holds_across_the_year() {
    // Stride coprime to 365 so the scan drifts through all seasons.
    let mut day = date(2023, 1, 1);
    let end = date(2026, 1, 1);
    while day < end {
        let solar = toronto(day);
        let dawn = solar.rising(Zenith::from_depression(16.1)).unwrap();
        let rise = solar.rising(Zenith::SUNRISE_SUNSET).unwrap();
        let transit = solar.transit();
        let set = solar.setting(Zenith::SUNRISE_SUNSET).unwrap();
        let dusk = solar.setting(Zenith::from_depression(8.5)).unwrap();
        let night = solar.setting(Zenith::from_depression(16.1)).unwrap();
        assert!(
            dawn < rise && rise < transit && transit < set && set < dusk && dusk < night,
            "twilight chain out of order on {day}"
        );
        day += Duration::days(17);
    }
}

#[test]
fn daylight_span_tracks_the_seasons() {
    let december = toronto(date(2024, 12, 21));
    let june = toronto(date(2024, 6, 21));
    let winter_span = december.setting(Zenith::SUNRISE_SUNSET).unwrap()
        - december.rising(Zenith::SUNRISE_SUNSET).unwrap();
    let summer_span =
        june.setting(Zenith::SUNRISE_SUNSET).unwrap() - june.rising(Zenith::SUNRISE_SUNSET).unwrap();
    // Toronto: about 8h56m at the winter solstice, 15h26m at the summer one.
    assert!((530..=542).contains(&winter_span.num_minutes()), "winter span {winter_span}");
    assert!((920..=932).contains(&summer_span.num_minutes()), "summer span {summer_span}");
}
