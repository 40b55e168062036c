//! Holiday and fast-day classification.
//!
//! [`holidays_on`] answers "what is this day?" for a single Hebrew date,
//! including the weekday-shift rules for fasts (a fast that lands on
//! Shabbat moves forward to Sunday, except Ta'anit Esther, which moves
//! back to the preceding Thursday).
//!
//! Diaspora and Land-of-Israel schedules differ on the second festival
//! days; pass `in_israel` accordingly.  Chanukah days are named with
//! their ordinal since the count is what people look up.

use crate::date::HebrewDate;
use crate::month::HebrewMonth;
use crate::year;

/// Weekday numbers as used by [`HebrewDate::weekday`].
const SUNDAY: u8 = 0;
const THURSDAY: u8 = 4;
const SATURDAY: u8 = 6;

/// Broad class of an observance, deciding how downstream consumers
/// treat the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayClass {
    /// Yom Tov: full festival day with Shabbat-like restrictions.
    MajorHoliday,
    /// Lesser observance: chol hamoed, Chanukah, Purim and friends.
    MinorHoliday,
    /// A major fast (Yom Kippur aside, that means Tisha B'Av).
    MajorFast,
    /// A daytime-only fast.
    MinorFast,
    /// New-month day(s).
    RoshChodesh,
    /// Eve of a festival.
    ErevHoliday,
}

impl HolidayClass {
    /// Whether days of this class carry Yom Tov restrictions.
    pub fn is_yom_tov(self) -> bool {
        matches!(self, HolidayClass::MajorHoliday)
    }

    /// Whether days of this class are fasts.
    pub fn is_fast(self) -> bool {
        matches!(self, HolidayClass::MajorFast | HolidayClass::MinorFast)
    }
}

/// A named observance on a particular day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    name: String,
    class: HolidayClass,
}

impl Holiday {
    fn new(name: impl Into<String>, class: HolidayClass) -> Holiday {
        Holiday {
            name: name.into(),
            class,
        }
    }

    /// Display name, e.g. `"Yom Kippur"`, `"Chanukah: Day 3"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The observance class.
    pub fn class(&self) -> HolidayClass {
        self.class
    }
}

/// Which day of Chanukah the given date is (1 through 8), if any.
///
/// Chanukah starts on 25 Kislev and runs eight days, spilling into Tevet
/// by two or three days depending on Kislev's length that year.
pub fn chanukah_day(date: &HebrewDate) -> Option<u8> {
    match date.month() {
        HebrewMonth::Kislev if date.day() >= 25 => Some(date.day() - 24),
        HebrewMonth::Tevet => {
            let kislev_len = HebrewMonth::Kislev.length(date.year());
            let day = date.day() + kislev_len - 24;
            (day <= 8).then_some(day)
        }
        _ => None,
    }
}

/// All observances falling on the given Hebrew date.
///
/// The list is ordered festival-before-Rosh-Chodesh; most days yield an
/// empty list or a single entry, with overlaps like 1 Tevet (Chanukah and
/// Rosh Chodesh) producing two.
pub fn holidays_on(date: &HebrewDate, in_israel: bool) -> Vec<Holiday> {
    use HolidayClass::*;

    let mut found = Vec::new();
    let day = date.day();
    let weekday = date.weekday();
    let mut push = |name: &str, class: HolidayClass| found.push(Holiday::new(name, class));

    match date.month() {
        HebrewMonth::Tishrei => match day {
            1 => push("Rosh Hashanah", MajorHoliday),
            2 => push("Rosh Hashanah II", MajorHoliday),
            3 if weekday != SATURDAY => push("Tzom Gedaliah", MinorFast),
            4 if weekday == SUNDAY => push("Tzom Gedaliah", MinorFast),
            9 => push("Erev Yom Kippur", ErevHoliday),
            10 => push("Yom Kippur", MajorHoliday),
            14 => push("Erev Sukkot", ErevHoliday),
            15 => push("Sukkot", MajorHoliday),
            16 => {
                if in_israel {
                    push("Chol HaMoed Sukkot", MinorHoliday);
                } else {
                    push("Sukkot II", MajorHoliday);
                }
            }
            17..=20 => push("Chol HaMoed Sukkot", MinorHoliday),
            21 => push("Hoshana Raba", MinorHoliday),
            22 => push("Shemini Atzeret", MajorHoliday),
            23 if !in_israel => push("Simchat Torah", MajorHoliday),
            _ => {}
        },
        HebrewMonth::Kislev | HebrewMonth::Tevet => {
            if let Some(n) = chanukah_day(date) {
                push(&format!("Chanukah: Day {n}"), MinorHoliday);
            }
            if date.month() == HebrewMonth::Tevet && day == 10 {
                push("Asara B'Tevet", MinorFast);
            }
        }
        HebrewMonth::Shevat => {
            if day == 15 {
                push("Tu BiShvat", MinorHoliday);
            }
        }
        HebrewMonth::AdarI => {
            if day == 14 {
                push("Purim Katan", MinorHoliday);
            }
        }
        HebrewMonth::Adar | HebrewMonth::AdarII => match day {
            11 if weekday == THURSDAY => push("Ta'anit Esther", MinorFast),
            13 if weekday != SATURDAY => push("Ta'anit Esther", MinorFast),
            14 => push("Purim", MinorHoliday),
            15 => push("Shushan Purim", MinorHoliday),
            _ => {}
        },
        HebrewMonth::Nisan => match day {
            14 => push("Erev Pesach", ErevHoliday),
            15 => push("Pesach", MajorHoliday),
            16 => {
                if in_israel {
                    push("Chol HaMoed Pesach", MinorHoliday);
                } else {
                    push("Pesach II", MajorHoliday);
                }
            }
            17..=20 => push("Chol HaMoed Pesach", MinorHoliday),
            21 => push("Pesach VII", MajorHoliday),
            22 if !in_israel => push("Pesach VIII", MajorHoliday),
            _ => {}
        },
        HebrewMonth::Iyar => match day {
            14 => push("Pesach Sheni", MinorHoliday),
            18 => push("Lag BaOmer", MinorHoliday),
            _ => {}
        },
        HebrewMonth::Sivan => match day {
            5 => push("Erev Shavuot", ErevHoliday),
            6 => push("Shavuot", MajorHoliday),
            7 if !in_israel => push("Shavuot II", MajorHoliday),
            _ => {}
        },
        HebrewMonth::Tammuz => match day {
            17 if weekday != SATURDAY => push("Tzom Tammuz", MinorFast),
            18 if weekday == SUNDAY => push("Tzom Tammuz", MinorFast),
            _ => {}
        },
        HebrewMonth::Av => match day {
            9 if weekday != SATURDAY => push("Tisha B'Av", MajorFast),
            10 if weekday == SUNDAY => push("Tisha B'Av", MajorFast),
            15 => push("Tu B'Av", MinorHoliday),
            _ => {}
        },
        HebrewMonth::Elul => {
            if day == 29 {
                push("Erev Rosh Hashanah", ErevHoliday);
            }
        }
        HebrewMonth::Cheshvan => {}
    }

    // Rosh Chodesh: the 30th of a month and the 1st of the next (except
    // 1 Tishrei, which is Rosh Hashanah).
    let leap = year::is_leap_year(date.year());
    if day == 30 {
        if let Some(next) = date.month().successor(leap) {
            found.push(Holiday::new(
                format!("Rosh Chodesh {next}"),
                HolidayClass::RoshChodesh,
            ));
        }
    } else if day == 1 && date.month() != HebrewMonth::Tishrei {
        found.push(Holiday::new(
            format!("Rosh Chodesh {}", date.month()),
            HolidayClass::RoshChodesh,
        ));
    }

    found
}
