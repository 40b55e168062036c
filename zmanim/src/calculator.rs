//! The calculator: one civil day in, one assembled response out.

use chrono::{Datelike, NaiveDate, Weekday};
use zm_core::{Error, Result};
use zm_hebcal::{HebrewDate, HolidayClass};

use crate::events::{CalendarEvent, CandleOptions, EventSource, HebcalEventSource};
use crate::location::Location;
use crate::response::{ShabbatInfo, ZmanimResponse};
use crate::times::ZmanimTimes;

/// Computes [`ZmanimResponse`]s for a fixed location.
///
/// Pure and stateless: the same date always yields the same response, and
/// concurrent calls need no coordination.  The event provider is a type
/// parameter so tests can substitute a scripted source.
pub struct ZmanimCalculator<S = HebcalEventSource> {
    location: Location,
    source: S,
}

impl ZmanimCalculator<HebcalEventSource> {
    /// A calculator with the default Hebrew-calendar event source.
    pub fn new(location: Location, options: CandleOptions) -> ZmanimCalculator {
        let source = HebcalEventSource::new(location.clone(), options);
        ZmanimCalculator { location, source }
    }

    /// The deployed configuration: Toronto with an 18-minute candle
    /// offset and 50-minute havdalah.
    pub fn toronto() -> ZmanimCalculator {
        ZmanimCalculator::new(Location::toronto(), CandleOptions::default())
    }
}

impl<S: EventSource> ZmanimCalculator<S> {
    /// A calculator over a custom event source.
    pub fn with_source(location: Location, source: S) -> ZmanimCalculator<S> {
        ZmanimCalculator { location, source }
    }

    /// The location computations are anchored to.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Everything about one civil day: the twelve times, Hebrew date,
    /// portion, holiday label, candle/havdalah instants and day flags.
    pub fn compute_for_date(&self, date: NaiveDate) -> Result<ZmanimResponse> {
        let times = ZmanimTimes::for_date(date, &self.location)?;
        let hebrew_date = HebrewDate::from_civil(date)?;
        let events = self.source.events_for_range(date, date)?;

        let mut portion = None;
        let mut holiday_label = None;
        let mut candle_lighting = None;
        let mut havdalah = None;
        let mut is_shabbat = false;
        let mut is_yom_tov = false;

        // One pass, first match wins within each category.
        for (_, event) in &events {
            match event {
                CalendarEvent::TorahPortion(reading) => {
                    if portion.is_none() {
                        portion = Some(reading.name());
                    }
                }
                CalendarEvent::CandleLighting(instant) => {
                    if candle_lighting.is_none() {
                        candle_lighting = Some(*instant);
                        if date.weekday() == Weekday::Fri {
                            is_shabbat = true;
                        } else {
                            // The civil day carries the festival eve.
                            is_yom_tov = true;
                        }
                    }
                }
                CalendarEvent::Havdalah(instant) => {
                    if havdalah.is_none() {
                        havdalah = Some(*instant);
                    }
                }
                CalendarEvent::Holiday { name, class } => match class {
                    HolidayClass::MajorHoliday => {
                        if holiday_label.is_none() {
                            holiday_label = Some(name.clone());
                        }
                        is_yom_tov = true;
                    }
                    HolidayClass::MinorHoliday
                    | HolidayClass::MajorFast
                    | HolidayClass::MinorFast => {
                        if holiday_label.is_none() {
                            holiday_label = Some(name.clone());
                        }
                    }
                    HolidayClass::RoshChodesh | HolidayClass::ErevHoliday => {}
                },
            }
        }

        // The weekday is authoritative for Shabbat, whatever the events
        // said.
        if date.weekday() == Weekday::Sat {
            is_shabbat = true;
        }

        Ok(ZmanimResponse {
            date,
            hebrew_date,
            times,
            portion,
            holiday_label,
            candle_lighting,
            havdalah,
            is_shabbat,
            is_yom_tov,
        })
    }

    /// Seven consecutive days starting at `start`, fully materialized.
    pub fn compute_for_week(&self, start: NaiveDate) -> Result<Vec<ZmanimResponse>> {
        let mut days = Vec::with_capacity(7);
        let mut date = start;
        for _ in 0..7 {
            days.push(self.compute_for_date(date)?);
            date = date
                .succ_opt()
                .ok_or_else(|| Error::Date(format!("no civil day after {date}")))?;
        }
        Ok(days)
    }

    /// The coming Shabbat relative to `reference`.
    ///
    /// A Friday reference is its own target; a Saturday reference rolls
    /// six days forward to the next Friday, never backwards.
    pub fn upcoming_shabbat(&self, reference: NaiveDate) -> Result<ShabbatInfo> {
        let days_ahead =
            (5 + 7 - i64::from(reference.weekday().num_days_from_sunday())) % 7;
        let friday = reference
            .checked_add_days(chrono::Days::new(days_ahead as u64))
            .ok_or_else(|| Error::Date(format!("no Friday after {reference}")))?;
        let saturday = friday
            .succ_opt()
            .ok_or_else(|| Error::Date(format!("no civil day after {friday}")))?;

        let friday_result = self.compute_for_date(friday)?;
        let saturday_result = self.compute_for_date(saturday)?;
        // The portion belongs to the Shabbat day itself when both carry
        // one.
        let portion = saturday_result.portion.or(friday_result.portion);

        Ok(ShabbatInfo {
            friday,
            saturday,
            portion,
            candle_lighting: friday_result.candle_lighting,
            havdalah: saturday_result.havdalah,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Replays a fixed event list regardless of the requested range.
    struct Scripted(Vec<CalendarEvent>);

    impl EventSource for Scripted {
        fn events_for_range(
            &self,
            start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<(NaiveDate, CalendarEvent)>> {
            Ok(self.0.iter().cloned().map(|e| (start, e)).collect())
        }
    }

    fn scripted(events: Vec<CalendarEvent>) -> ZmanimCalculator<Scripted> {
        ZmanimCalculator::with_source(Location::toronto(), Scripted(events))
    }

    #[test]
    fn first_label_wins() {
        let calc = scripted(vec![
            CalendarEvent::Holiday {
                name: "Chanukah: Day 6".to_owned(),
                class: HolidayClass::MinorHoliday,
            },
            CalendarEvent::Holiday {
                name: "Rosh Chodesh Tevet".to_owned(),
                class: HolidayClass::RoshChodesh,
            },
        ]);
        let day = calc.compute_for_date(date(2024, 12, 31)).unwrap();
        assert_eq!(day.holiday_label.as_deref(), Some("Chanukah: Day 6"));
        assert!(!day.is_yom_tov);
    }

    #[test]
    fn major_holiday_sets_yom_tov_even_when_label_taken() {
        let calc = scripted(vec![
            CalendarEvent::Holiday {
                name: "Chol HaMoed Sukkot".to_owned(),
                class: HolidayClass::MinorHoliday,
            },
            CalendarEvent::Holiday {
                name: "Shemini Atzeret".to_owned(),
                class: HolidayClass::MajorHoliday,
            },
        ]);
        let day = calc.compute_for_date(date(2024, 10, 24)).unwrap();
        assert_eq!(day.holiday_label.as_deref(), Some("Chol HaMoed Sukkot"));
        assert!(day.is_yom_tov);
    }

    #[test]
    fn rosh_chodesh_alone_leaves_no_label() {
        let calc = scripted(vec![CalendarEvent::Holiday {
            name: "Rosh Chodesh Kislev".to_owned(),
            class: HolidayClass::RoshChodesh,
        }]);
        let day = calc.compute_for_date(date(2024, 12, 2)).unwrap();
        assert_eq!(day.holiday_label, None);
        assert!(!day.is_yom_tov);
    }

    #[test]
    fn weekday_candles_mark_yom_tov_eve() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 2, 0, 37, 0).unwrap();
        let calc = scripted(vec![CalendarEvent::CandleLighting(instant)]);
        // Sunday evening, first night of Shavuot.
        let day = calc.compute_for_date(date(2025, 6, 1)).unwrap();
        assert_eq!(day.candle_lighting, Some(instant));
        assert!(day.is_yom_tov);
        assert!(!day.is_shabbat);
    }

    #[test]
    fn saturday_is_shabbat_even_with_no_events() {
        let calc = scripted(Vec::new());
        let day = calc.compute_for_date(date(2024, 12, 14)).unwrap();
        assert!(day.is_shabbat);
        assert!(!day.is_yom_tov);
        assert_eq!(day.portion, None);
    }
}
