//! Year-level arithmetic for the fixed Hebrew calendar.
//!
//! The year begins on the day of the Tishrei molad (mean lunar
//! conjunction), postponed by up to two days under the four classical
//! rules.  Everything below works in whole days and *parts* (chalakim,
//! 1/1080 of an hour) from the calendar's epoch; no floating point.
//!
//! Weekday convention: day numbers are congruent to proleptic Gregorian
//! day numbers mod 7, with 0 = Sunday … 6 = Saturday.

/// Proleptic Gregorian day number of the day before 1 Tishrei, AM 1.
///
/// With this epoch, `first_day_of_year(1)` lands on the traditional
/// Monday of the first molad.
pub(crate) const EPOCH: i64 = -1_373_428;

/// Parts (1/1080 hour) per hour.
const PARTS_PER_HOUR: i64 = 1080;

/// Whether the given Hebrew year is a leap year (13 months).
///
/// Leap years fall in positions 3, 6, 8, 11, 14, 17, and 19 of the
/// 19-year Metonic cycle.
pub fn is_leap_year(hebrew_year: i32) -> bool {
    (7 * i64::from(hebrew_year) + 1).rem_euclid(19) < 7
}

/// Number of months in the given Hebrew year: 12, or 13 in a leap year.
pub fn months_in_year(hebrew_year: i32) -> u8 {
    if is_leap_year(hebrew_year) {
        13
    } else {
        12
    }
}

/// Months elapsed from the epoch to 1 Tishrei of `year`.
fn months_before_year(year: i32) -> i64 {
    let prior = i64::from(year) - 1;
    let cycles = prior.div_euclid(19);
    let remainder = prior.rem_euclid(19);
    235 * cycles + 12 * remainder + (7 * remainder + 1) / 19
}

/// Days from the epoch to 1 Tishrei of `year`, after postponements.
///
/// This is the core of the calendar: the mean conjunction is accumulated
/// in days, hours, and parts from the first molad (Monday, 5 h 204 p),
/// then shifted by the postponement rules:
///
/// * *molad zaken*: molad at or after noon (18 h = 19440 p into the day)
///   pushes Rosh Hashanah to the next day;
/// * *gatarad*: a Tuesday molad at or after 9 h 204 p in a common year
///   pushes to Wednesday (which the next rule then bounces to Thursday);
/// * *betutakpat*: a Monday molad at or after 15 h 589 p following a
///   leap year pushes to Tuesday;
/// * *lo adu rosh*: Rosh Hashanah never falls on Sunday, Wednesday, or
///   Friday; such days shift forward one more.
pub(crate) fn elapsed_days(year: i32) -> i64 {
    let months = months_before_year(year);
    let parts_elapsed = 204 + 793 * (months % PARTS_PER_HOUR);
    let hours_elapsed =
        5 + 12 * months + 793 * (months / PARTS_PER_HOUR) + parts_elapsed / PARTS_PER_HOUR;
    let day = 1 + 29 * months + hours_elapsed / 24;
    let parts = (hours_elapsed % 24) * PARTS_PER_HOUR + parts_elapsed % PARTS_PER_HOUR;

    let postponed = if parts >= 19440
        || (day % 7 == 2 && parts >= 9924 && !is_leap_year(year))
        || (day % 7 == 1 && parts >= 16789 && is_leap_year(year - 1))
    {
        day + 1
    } else {
        day
    };

    match postponed % 7 {
        // Sunday, Wednesday, Friday
        0 | 3 | 5 => postponed + 1,
        _ => postponed,
    }
}

/// Proleptic Gregorian day number of 1 Tishrei of `year`.
pub(crate) fn first_day_of_year(year: i32) -> i64 {
    EPOCH + elapsed_days(year)
}

/// Length of the given Hebrew year in days.
///
/// Common years have 353, 354, or 355 days; leap years 383, 384, or 385.
pub fn days_in_year(hebrew_year: i32) -> i64 {
    elapsed_days(hebrew_year + 1) - elapsed_days(hebrew_year)
}

/// The shape of a Hebrew year: which of the two flexible months
/// (Cheshvan and Kislev) absorb the year's slack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearShape {
    /// 353/383 days: Cheshvan and Kislev both have 29 days.
    Deficient,
    /// 354/384 days: Cheshvan 29, Kislev 30.
    Regular,
    /// 355/385 days: Cheshvan and Kislev both have 30 days.
    Complete,
}

impl YearShape {
    /// The shape of the given Hebrew year.
    pub fn of(hebrew_year: i32) -> YearShape {
        match days_in_year(hebrew_year) % 10 {
            3 => YearShape::Deficient,
            5 => YearShape::Complete,
            _ => YearShape::Regular,
        }
    }
}

/// Whether Cheshvan has 30 days in the given year (complete years only).
pub(crate) fn long_cheshvan(hebrew_year: i32) -> bool {
    YearShape::of(hebrew_year) == YearShape::Complete
}

/// Whether Kislev has 29 days in the given year (deficient years only).
pub(crate) fn short_kislev(hebrew_year: i32) -> bool {
    YearShape::of(hebrew_year) == YearShape::Deficient
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metonic_leap_pattern() {
        // Positions 3, 6, 8, 11, 14, 17, 19 of the cycle starting 5777.
        let leaps: Vec<i32> = (5777..=5795).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(leaps, vec![5779, 5782, 5784, 5787, 5790, 5793, 5795]);
    }

    #[test]
    fn months_follow_leapness() {
        assert_eq!(months_in_year(5784), 13);
        assert_eq!(months_in_year(5785), 12);
    }

    #[test]
    fn first_days_match_published_calendars() {
        // Day numbers are proleptic Gregorian (2024-10-03 is day 739162).
        assert_eq!(first_day_of_year(5785), 739_162); // 2024-10-03, Thursday
        assert_eq!(first_day_of_year(5786), 739_517); // 2025-09-23, Tuesday
        assert_eq!(first_day_of_year(5784), 738_779); // 2023-09-16, Saturday
    }

    #[test]
    fn rosh_hashanah_weekday_is_never_adu() {
        for year in 5700..5900 {
            let weekday = first_day_of_year(year).rem_euclid(7);
            assert!(
                !matches!(weekday, 0 | 3 | 5),
                "year {year}: Rosh Hashanah fell on weekday {weekday}"
            );
        }
    }

    #[test]
    fn year_lengths_are_valid() {
        for year in 5600..5900 {
            let len = days_in_year(year);
            let valid = if is_leap_year(year) {
                matches!(len, 383 | 384 | 385)
            } else {
                matches!(len, 353 | 354 | 355)
            };
            assert!(valid, "year {year} has impossible length {len}");
        }
    }

    #[test]
    fn known_year_lengths() {
        assert_eq!(days_in_year(5784), 383);
        assert_eq!(days_in_year(5785), 355);
        assert_eq!(days_in_year(5786), 354);
    }

    #[test]
    fn cheshvan_kislev_shape() {
        // 5785 complete: both long.  5784 deficient: both short.
        assert_eq!(YearShape::of(5785), YearShape::Complete);
        assert_eq!(YearShape::of(5784), YearShape::Deficient);
        assert_eq!(YearShape::of(5786), YearShape::Regular);
        assert!(long_cheshvan(5785));
        assert!(!short_kislev(5785));
        assert!(!long_cheshvan(5784));
        assert!(short_kislev(5784));
    }
}
