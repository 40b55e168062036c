//! `HebrewDate`: a day in the Hebrew calendar, with civil conversions.
//!
//! Conversion runs through the proleptic Gregorian day number in both
//! directions.  Hebrew to day number is a month-offset sum; day number to
//! Hebrew estimates the year from the mean year length and then walks the
//! exact year starts.

use chrono::{Datelike, NaiveDate};
use zm_core::{ensure, Error, Result};

use crate::gematria;
use crate::month::HebrewMonth;
use crate::year;

/// Mean length of a Hebrew year in days, used only to seed the year
/// search in [`HebrewDate::from_civil`].
const MEAN_YEAR_LEN: f64 = 365.2468;

/// A date in the fixed Hebrew calendar.
///
/// Valid dates only: the constructor checks that the month occurs in the
/// year and that the day exists in the month, so every held value
/// converts cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: i32,
    month: HebrewMonth,
    day: u8,
}

impl HebrewDate {
    /// Construct a Hebrew date, validating all three components.
    pub fn new(year: i32, month: HebrewMonth, day: u8) -> Result<HebrewDate> {
        ensure!(year >= 1, "hebrew year {year} before the calendar epoch");
        let leap = year::is_leap_year(year);
        if !month.occurs_in(leap) {
            return Err(Error::Calendar(format!(
                "month {month} does not occur in year {year}"
            )));
        }
        let len = month.length(year);
        if day == 0 || day > len {
            return Err(Error::Calendar(format!(
                "day {day} out of range for {month} {year} (1..={len})"
            )));
        }
        Ok(HebrewDate { year, month, day })
    }

    /// The Hebrew year (Anno Mundi).
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month.
    pub fn month(&self) -> HebrewMonth {
        self.month
    }

    /// The day of the month, 1-based.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Proleptic Gregorian day number of this date (day 1 = 0001-01-01).
    pub fn day_number(&self) -> i64 {
        let mut days = year::first_day_of_year(self.year);
        let leap = year::is_leap_year(self.year);
        for &m in HebrewMonth::year_order(leap) {
            if m == self.month {
                break;
            }
            days += i64::from(m.length(self.year));
        }
        days + i64::from(self.day) - 1
    }

    /// Weekday of this date, 0 = Sunday … 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        self.day_number().rem_euclid(7) as u8
    }

    /// Convert to the civil (proleptic Gregorian) date.
    pub fn to_civil(&self) -> Result<NaiveDate> {
        let n = self.day_number();
        let n32 = i32::try_from(n)
            .map_err(|_| Error::Date(format!("day number {n} outside the civil range")))?;
        NaiveDate::from_num_days_from_ce_opt(n32)
            .ok_or_else(|| Error::Date(format!("day number {n} outside the civil range")))
    }

    /// Convert a civil date to its Hebrew counterpart.
    ///
    /// Note the civil day is taken as-is: the halachic day that begins at
    /// the previous nightfall belongs to callers who know the sunset.
    pub fn from_civil(date: NaiveDate) -> Result<HebrewDate> {
        let n = i64::from(date.num_days_from_ce());
        Self::from_day_number(n)
    }

    /// Convert a proleptic Gregorian day number to a Hebrew date.
    pub(crate) fn from_day_number(n: i64) -> Result<HebrewDate> {
        ensure!(
            n >= year::first_day_of_year(1),
            "day number {n} precedes 1 Tishrei AM 1"
        );

        // Seed from the mean year length, then settle on the exact year.
        let approx = ((n - year::EPOCH) as f64 / MEAN_YEAR_LEN) as i32;
        let mut hebrew_year = approx.max(1);
        while hebrew_year > 1 && year::first_day_of_year(hebrew_year) > n {
            hebrew_year -= 1;
        }
        while year::first_day_of_year(hebrew_year + 1) <= n {
            hebrew_year += 1;
        }

        let mut remaining = n - year::first_day_of_year(hebrew_year);
        let leap = year::is_leap_year(hebrew_year);
        for &month in HebrewMonth::year_order(leap) {
            let len = i64::from(month.length(hebrew_year));
            if remaining < len {
                return HebrewDate::new(hebrew_year, month, (remaining + 1) as u8);
            }
            remaining -= len;
        }
        Err(Error::Calendar(format!(
            "day number {n} not reachable in year {hebrew_year}"
        )))
    }

    /// Render in Hebrew script with Hebrew numerals, e.g.
    /// `"כ״ג כסלו תשפ״ה"`.
    pub fn hebrew_display(&self) -> Result<String> {
        Ok(format!(
            "{} {} {}",
            gematria::hebrew_numeral(u32::from(self.day))?,
            self.month.hebrew_name(),
            gematria::hebrew_year(self.year)?
        ))
    }
}

impl std::fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}
