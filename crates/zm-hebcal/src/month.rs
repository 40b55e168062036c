//! `HebrewMonth`: month-of-year enum for the Hebrew calendar.
//!
//! Months are named, not numbered: the traditional numbering starts at
//! Nisan while the year number changes in Tishrei, and the two
//! conventions have caused enough grief elsewhere.  Order within a given
//! year comes from [`HebrewMonth::year_order`].
//!
//! A common year has a single Adar; a leap (pregnant) year has Adar I and
//! Adar II.  These are three distinct variants, so a date can never claim
//! "Adar" in a year that actually has two of them.

use crate::year;

/// Month of the Hebrew year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HebrewMonth {
    /// Tishrei (30 days); the civil year number changes on its first day.
    Tishrei,
    /// Cheshvan (29 or 30 days depending on the year's shape).
    Cheshvan,
    /// Kislev (30 or 29 days depending on the year's shape).
    Kislev,
    /// Tevet (29 days).
    Tevet,
    /// Shevat (30 days).
    Shevat,
    /// Adar (29 days); common years only.
    Adar,
    /// Adar I (30 days); leap years only.
    AdarI,
    /// Adar II (29 days); leap years only.
    AdarII,
    /// Nisan (30 days).
    Nisan,
    /// Iyar (29 days).
    Iyar,
    /// Sivan (30 days).
    Sivan,
    /// Tammuz (29 days).
    Tammuz,
    /// Av (30 days).
    Av,
    /// Elul (29 days).
    Elul,
}

const COMMON_ORDER: [HebrewMonth; 12] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shevat,
    HebrewMonth::Adar,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

const LEAP_ORDER: [HebrewMonth; 13] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shevat,
    HebrewMonth::AdarI,
    HebrewMonth::AdarII,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

impl HebrewMonth {
    /// The months of a year in calendar order, starting from Tishrei.
    pub fn year_order(leap: bool) -> &'static [HebrewMonth] {
        if leap {
            &LEAP_ORDER
        } else {
            &COMMON_ORDER
        }
    }

    /// Whether this month occurs in a year of the given character.
    pub fn occurs_in(self, leap: bool) -> bool {
        match self {
            HebrewMonth::Adar => !leap,
            HebrewMonth::AdarI | HebrewMonth::AdarII => leap,
            _ => true,
        }
    }

    /// Number of days in this month in the given Hebrew year.
    pub fn length(self, hebrew_year: i32) -> u8 {
        match self {
            HebrewMonth::Tishrei
            | HebrewMonth::Shevat
            | HebrewMonth::AdarI
            | HebrewMonth::Nisan
            | HebrewMonth::Sivan
            | HebrewMonth::Av => 30,
            HebrewMonth::Tevet
            | HebrewMonth::Adar
            | HebrewMonth::AdarII
            | HebrewMonth::Iyar
            | HebrewMonth::Tammuz
            | HebrewMonth::Elul => 29,
            HebrewMonth::Cheshvan => {
                if year::long_cheshvan(hebrew_year) {
                    30
                } else {
                    29
                }
            }
            HebrewMonth::Kislev => {
                if year::short_kislev(hebrew_year) {
                    29
                } else {
                    30
                }
            }
        }
    }

    /// English name, e.g. `"Tishrei"`, `"Adar II"`.
    pub fn name(&self) -> &'static str {
        match self {
            HebrewMonth::Tishrei => "Tishrei",
            HebrewMonth::Cheshvan => "Cheshvan",
            HebrewMonth::Kislev => "Kislev",
            HebrewMonth::Tevet => "Tevet",
            HebrewMonth::Shevat => "Shevat",
            HebrewMonth::Adar => "Adar",
            HebrewMonth::AdarI => "Adar I",
            HebrewMonth::AdarII => "Adar II",
            HebrewMonth::Nisan => "Nisan",
            HebrewMonth::Iyar => "Iyar",
            HebrewMonth::Sivan => "Sivan",
            HebrewMonth::Tammuz => "Tammuz",
            HebrewMonth::Av => "Av",
            HebrewMonth::Elul => "Elul",
        }
    }

    /// Hebrew name in Hebrew script, e.g. `"תשרי"`, `"אדר ב׳"`.
    pub fn hebrew_name(&self) -> &'static str {
        match self {
            HebrewMonth::Tishrei => "תשרי",
            HebrewMonth::Cheshvan => "חשון",
            HebrewMonth::Kislev => "כסלו",
            HebrewMonth::Tevet => "טבת",
            HebrewMonth::Shevat => "שבט",
            HebrewMonth::Adar => "אדר",
            HebrewMonth::AdarI => "אדר א׳",
            HebrewMonth::AdarII => "אדר ב׳",
            HebrewMonth::Nisan => "ניסן",
            HebrewMonth::Iyar => "אייר",
            HebrewMonth::Sivan => "סיון",
            HebrewMonth::Tammuz => "תמוז",
            HebrewMonth::Av => "אב",
            HebrewMonth::Elul => "אלול",
        }
    }

    /// The month that follows this one within the same year, or `None`
    /// for Elul (the next month starts a new year).
    pub fn successor(self, leap: bool) -> Option<HebrewMonth> {
        let order = Self::year_order(leap);
        let pos = order.iter().position(|&m| m == self)?;
        order.get(pos + 1).copied()
    }
}

impl std::fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_have_the_right_months() {
        assert_eq!(HebrewMonth::year_order(false).len(), 12);
        assert_eq!(HebrewMonth::year_order(true).len(), 13);
        assert!(HebrewMonth::year_order(false).contains(&HebrewMonth::Adar));
        assert!(!HebrewMonth::year_order(false).contains(&HebrewMonth::AdarI));
        assert!(!HebrewMonth::year_order(true).contains(&HebrewMonth::Adar));
        assert!(HebrewMonth::year_order(true).contains(&HebrewMonth::AdarII));
    }

    #[test]
    fn occurrence_matches_year_order() {
        for &leap in &[false, true] {
            for &m in HebrewMonth::year_order(leap) {
                assert!(m.occurs_in(leap), "{m} should occur (leap = {leap})");
            }
        }
        assert!(!HebrewMonth::Adar.occurs_in(true));
        assert!(!HebrewMonth::AdarII.occurs_in(false));
    }

    #[test]
    fn month_lengths() {
        // 5785 is a complete common year (355 days), 5784 a deficient
        // leap year (383 days).
        assert_eq!(HebrewMonth::Tishrei.length(5785), 30);
        assert_eq!(HebrewMonth::Cheshvan.length(5785), 30);
        assert_eq!(HebrewMonth::Kislev.length(5785), 30);
        assert_eq!(HebrewMonth::Elul.length(5785), 29);
        assert_eq!(HebrewMonth::Adar.length(5785), 29);
        assert_eq!(HebrewMonth::Cheshvan.length(5784), 29);
        assert_eq!(HebrewMonth::Kislev.length(5784), 29);
        assert_eq!(HebrewMonth::AdarI.length(5784), 30);
        assert_eq!(HebrewMonth::AdarII.length(5784), 29);
    }

    #[test]
    fn successor_walks_the_year() {
        assert_eq!(
            HebrewMonth::Shevat.successor(false),
            Some(HebrewMonth::Adar)
        );
        assert_eq!(
            HebrewMonth::Shevat.successor(true),
            Some(HebrewMonth::AdarI)
        );
        assert_eq!(
            HebrewMonth::AdarII.successor(true),
            Some(HebrewMonth::Nisan)
        );
        assert_eq!(HebrewMonth::Elul.successor(false), None);
        assert_eq!(HebrewMonth::Elul.successor(true), None);
    }
}
