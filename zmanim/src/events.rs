//! Typed calendar events and the provider seam.
//!
//! The calculator never inspects event descriptions; every fact arrives
//! as a [`CalendarEvent`] variant.  [`HebcalEventSource`] is the default
//! provider, composing the Hebrew-calendar tables with solar times for
//! candle lighting and havdalah; tests may substitute any [`EventSource`].

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use zm_astro::{SolarDay, Zenith};
use zm_core::{ensure, Error, Result};
use zm_hebcal::{holidays_on, weekly_reading, HebrewDate, HolidayClass, Reading};

use crate::location::Location;

/// Minute offsets around sunset for lighting candles and ending the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandleOptions {
    /// Candle lighting this many minutes before sunset (18 is the
    /// widespread custom).
    pub candle_offset_min: i64,
    /// Havdalah this many minutes after sunset.
    pub havdalah_offset_min: i64,
}

impl Default for CandleOptions {
    fn default() -> CandleOptions {
        CandleOptions {
            candle_offset_min: 18,
            havdalah_offset_min: 50,
        }
    }
}

/// One calendar fact about a civil day.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarEvent {
    /// The weekly Torah reading of a regular Shabbat.
    TorahPortion(Reading),
    /// Candles are lit at this instant (Friday, or a festival eve).
    CandleLighting(DateTime<Utc>),
    /// Shabbat or the festival ends at this instant.
    Havdalah(DateTime<Utc>),
    /// A named observance.
    Holiday {
        /// Display name, e.g. `"Pesach"`, `"Chanukah: Day 3"`.
        name: String,
        /// Classification deciding Yom Tov and fast handling.
        class: HolidayClass,
    },
}

/// Supplier of calendar events for a range of civil days.
pub trait EventSource {
    /// All events for days in `[start, end]` inclusive, ascending by day.
    fn events_for_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, CalendarEvent)>>;
}

/// The default provider: calendar facts from `zm-hebcal`, candle and
/// havdalah instants from `zm-astro` sunsets.
#[derive(Debug, Clone)]
pub struct HebcalEventSource {
    location: Location,
    options: CandleOptions,
}

impl HebcalEventSource {
    /// A provider for the given location and offsets.
    pub fn new(location: Location, options: CandleOptions) -> HebcalEventSource {
        HebcalEventSource { location, options }
    }

    /// The candle/havdalah offsets in use.
    pub fn options(&self) -> CandleOptions {
        self.options
    }

    fn sunset(&self, date: NaiveDate) -> Result<DateTime<Utc>> {
        SolarDay::at(date, self.location.latitude(), self.location.longitude())?
            .setting(Zenith::SUNRISE_SUNSET)
    }

    /// A day when work ceases: Shabbat or a Yom Tov.
    fn is_rest_day(&self, date: NaiveDate) -> Result<bool> {
        if date.weekday() == Weekday::Sat {
            return Ok(true);
        }
        self.is_yom_tov_day(date)
    }

    fn is_yom_tov_day(&self, date: NaiveDate) -> Result<bool> {
        let hebrew = HebrewDate::from_civil(date)?;
        Ok(holidays_on(&hebrew, self.location.in_israel())
            .iter()
            .any(|holiday| holiday.class().is_yom_tov()))
    }

    fn day_events(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>> {
        let in_israel = self.location.in_israel();
        let hebrew = HebrewDate::from_civil(date)?;
        let tomorrow = next_day(date)?;
        let mut events = Vec::new();

        // Weekly portion, on regular Shabbatot only; festival Shabbatot
        // read a festival portion instead.
        if date.weekday() == Weekday::Sat {
            if let Some(portion) = weekly_reading(date, in_israel)? {
                events.push(CalendarEvent::TorahPortion(portion));
            }
        }

        // Candles are lit tonight for every Shabbat (Friday) and for a
        // festival whose first or second day begins at nightfall.  On a
        // Friday the candles must precede sunset; on a day that is
        // itself Shabbat or Yom Tov the flame is transferred only after
        // the outgoing day ends.
        let rest_today = self.is_rest_day(date)?;
        if date.weekday() == Weekday::Fri || self.is_yom_tov_day(tomorrow)? {
            let instant = if rest_today && date.weekday() != Weekday::Fri {
                self.sunset(date)? + Duration::minutes(self.options.havdalah_offset_min)
            } else {
                self.sunset(date)? - Duration::minutes(self.options.candle_offset_min)
            };
            events.push(CalendarEvent::CandleLighting(instant));
        }

        // Havdalah closes a rest day not followed by another.
        if rest_today && !self.is_rest_day(tomorrow)? {
            let instant =
                self.sunset(date)? + Duration::minutes(self.options.havdalah_offset_min);
            events.push(CalendarEvent::Havdalah(instant));
        }

        for holiday in holidays_on(&hebrew, in_israel) {
            events.push(CalendarEvent::Holiday {
                name: holiday.name().to_string(),
                class: holiday.class(),
            });
        }
        Ok(events)
    }
}

impl EventSource for HebcalEventSource {
    fn events_for_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, CalendarEvent)>> {
        ensure!(start <= end, "event range {start}..{end} is reversed");
        let mut out = Vec::new();
        let mut day = start;
        loop {
            for event in self.day_events(day)? {
                out.push((day, event));
            }
            if day == end {
                break;
            }
            day = next_day(day)?;
        }
        Ok(out)
    }
}

fn next_day(date: NaiveDate) -> Result<NaiveDate> {
    date.succ_opt()
        .ok_or_else(|| Error::Date(format!("no civil day after {date}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn toronto_events(y: i32, m: u32, d: u32) -> Vec<CalendarEvent> {
        let source = HebcalEventSource::new(Location::toronto(), CandleOptions::default());
        source
            .events_for_range(date(y, m, d), date(y, m, d))
            .unwrap()
            .into_iter()
            .map(|(_, e)| e)
            .collect()
    }

    fn candle_instant(events: &[CalendarEvent]) -> Option<DateTime<Utc>> {
        events.iter().find_map(|e| match e {
            CalendarEvent::CandleLighting(t) => Some(*t),
            _ => None,
        })
    }

    fn havdalah_instant(events: &[CalendarEvent]) -> Option<DateTime<Utc>> {
        events.iter().find_map(|e| match e {
            CalendarEvent::Havdalah(t) => Some(*t),
            _ => None,
        })
    }

    #[test]
    fn friday_lights_before_sunset() {
        let events = toronto_events(2024, 12, 13);
        let candle = candle_instant(&events).unwrap();
        let sunset = HebcalEventSource::new(Location::toronto(), CandleOptions::default())
            .sunset(date(2024, 12, 13))
            .unwrap();
        assert_eq!(sunset - candle, Duration::minutes(18));
        assert!(havdalah_instant(&events).is_none(), "no havdalah on Friday");
    }

    #[test]
    fn saturday_ends_with_havdalah() {
        let events = toronto_events(2024, 12, 14);
        let havdalah = havdalah_instant(&events).unwrap();
        let sunset = HebcalEventSource::new(Location::toronto(), CandleOptions::default())
            .sunset(date(2024, 12, 14))
            .unwrap();
        assert_eq!(havdalah - sunset, Duration::minutes(50));
        assert!(candle_instant(&events).is_none());
        assert!(
            events
                .iter()
                .any(|e| matches!(e, CalendarEvent::TorahPortion(_))),
            "regular Shabbat carries its portion"
        );
    }

    #[test]
    fn festival_eve_on_a_weekday_lights_early() {
        // Wednesday 2025-10-01 is Erev Yom Kippur.
        let events = toronto_events(2025, 10, 1);
        let candle = candle_instant(&events).unwrap();
        let source = HebcalEventSource::new(Location::toronto(), CandleOptions::default());
        let sunset = source.sunset(date(2025, 10, 1)).unwrap();
        assert!(candle < sunset);
        assert!(havdalah_instant(&events).is_none());

        // Yom Kippur itself (Thursday) ends with havdalah, and no
        // candles follow since Friday is an ordinary day until evening.
        let yk = toronto_events(2025, 10, 2);
        assert!(havdalah_instant(&yk).is_some());
        assert!(candle_instant(&yk).is_none());
    }

    #[test]
    fn second_festival_night_transfers_the_flame() {
        // Rosh Hashanah 5786: Tuesday 2025-09-23 and Wednesday 09-24.
        let first_day = toronto_events(2025, 9, 23);
        let candle = candle_instant(&first_day).unwrap();
        let source = HebcalEventSource::new(Location::toronto(), CandleOptions::default());
        let sunset = source.sunset(date(2025, 9, 23)).unwrap();
        assert!(
            candle > sunset,
            "second-night candles wait for the first day to end"
        );
        assert!(
            havdalah_instant(&first_day).is_none(),
            "no havdalah between festival days"
        );

        let second_day = toronto_events(2025, 9, 24);
        assert!(candle_instant(&second_day).is_none());
        assert!(havdalah_instant(&second_day).is_some());
    }

    #[test]
    fn shabbat_flowing_into_a_festival_has_no_havdalah() {
        // Saturday 2025-04-12 is Erev Pesach: candles after nightfall,
        // no havdalah event.
        let events = toronto_events(2025, 4, 12);
        let candle = candle_instant(&events).unwrap();
        let source = HebcalEventSource::new(Location::toronto(), CandleOptions::default());
        let sunset = source.sunset(date(2025, 4, 12)).unwrap();
        assert_eq!(candle - sunset, Duration::minutes(50));
        assert!(havdalah_instant(&events).is_none());
    }

    #[test]
    fn plain_weekday_is_quiet() {
        let events = toronto_events(2024, 12, 11);
        assert!(events.is_empty(), "got {events:?}");
    }

    #[test]
    fn portion_events_only_on_saturdays() {
        let friday = toronto_events(2024, 12, 13);
        assert!(
            !friday
                .iter()
                .any(|e| matches!(e, CalendarEvent::TorahPortion(_)))
        );
    }

    #[test]
    fn reversed_ranges_are_rejected() {
        let source = HebcalEventSource::new(Location::toronto(), CandleOptions::default());
        assert!(source
            .events_for_range(date(2024, 12, 14), date(2024, 12, 13))
            .is_err());
    }
}
