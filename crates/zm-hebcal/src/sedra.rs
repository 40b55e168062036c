//! The weekly Torah reading cycle (sedra).
//!
//! The annual cycle restarts on the Shabbat after Simchat Torah and must
//! land Devarim on the Shabbat on or before 9 Av, so the 54 portions are
//! squeezed into however many free Shabbatot the year offers: festival
//! Shabbatot read no weekly portion, and seven fixed pairs of portions
//! combine when the count runs short.
//!
//! Rather than carrying the traditional year-type tables, the schedule is
//! built by counting: place portions between the fixed anchors (Pesach,
//! Shavuot, the Devarim Shabbat, Rosh Hashanah) and combine just enough
//! pairs, in the customary order, to make the counts meet.  The Land of
//! Israel keeps one fewer festival day, which occasionally frees an extra
//! Shabbat and shifts its schedule ahead of the diaspora until the next
//! combined pair realigns them.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use zm_core::{ensure, Error, Result};

use crate::date::HebrewDate;
use crate::month::HebrewMonth;
use crate::year;

// ── Portions ─────────────────────────────────────────────────────────────────

/// One of the 54 weekly Torah portions, in reading order.
///
/// The final portion, V'Zot HaBerachah, is read on Simchat Torah rather
/// than on a Shabbat, so it never appears in a [`SedraSchedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Parsha {
    Bereshit = 1,
    Noach = 2,
    LechLecha = 3,
    Vayera = 4,
    ChayeiSara = 5,
    Toldot = 6,
    Vayetzei = 7,
    Vayishlach = 8,
    Vayeshev = 9,
    Miketz = 10,
    Vayigash = 11,
    Vayechi = 12,
    Shemot = 13,
    Vaera = 14,
    Bo = 15,
    Beshalach = 16,
    Yitro = 17,
    Mishpatim = 18,
    Terumah = 19,
    Tetzaveh = 20,
    KiTisa = 21,
    Vayakhel = 22,
    Pekudei = 23,
    Vayikra = 24,
    Tzav = 25,
    Shmini = 26,
    Tazria = 27,
    Metzora = 28,
    AchreiMot = 29,
    Kedoshim = 30,
    Emor = 31,
    Behar = 32,
    Bechukotai = 33,
    Bamidbar = 34,
    Nasso = 35,
    Behaalotcha = 36,
    Shlach = 37,
    Korach = 38,
    Chukat = 39,
    Balak = 40,
    Pinchas = 41,
    Matot = 42,
    Masei = 43,
    Devarim = 44,
    Vaetchanan = 45,
    Eikev = 46,
    Reeh = 47,
    Shoftim = 48,
    KiTeitzei = 49,
    KiTavo = 50,
    Nitzavim = 51,
    Vayeilech = 52,
    Haazinu = 53,
    VezotHaberakhah = 54,
}

const ALL_PARSHIYOT: [Parsha; 54] = [
    Parsha::Bereshit,
    Parsha::Noach,
    Parsha::LechLecha,
    Parsha::Vayera,
    Parsha::ChayeiSara,
    Parsha::Toldot,
    Parsha::Vayetzei,
    Parsha::Vayishlach,
    Parsha::Vayeshev,
    Parsha::Miketz,
    Parsha::Vayigash,
    Parsha::Vayechi,
    Parsha::Shemot,
    Parsha::Vaera,
    Parsha::Bo,
    Parsha::Beshalach,
    Parsha::Yitro,
    Parsha::Mishpatim,
    Parsha::Terumah,
    Parsha::Tetzaveh,
    Parsha::KiTisa,
    Parsha::Vayakhel,
    Parsha::Pekudei,
    Parsha::Vayikra,
    Parsha::Tzav,
    Parsha::Shmini,
    Parsha::Tazria,
    Parsha::Metzora,
    Parsha::AchreiMot,
    Parsha::Kedoshim,
    Parsha::Emor,
    Parsha::Behar,
    Parsha::Bechukotai,
    Parsha::Bamidbar,
    Parsha::Nasso,
    Parsha::Behaalotcha,
    Parsha::Shlach,
    Parsha::Korach,
    Parsha::Chukat,
    Parsha::Balak,
    Parsha::Pinchas,
    Parsha::Matot,
    Parsha::Masei,
    Parsha::Devarim,
    Parsha::Vaetchanan,
    Parsha::Eikev,
    Parsha::Reeh,
    Parsha::Shoftim,
    Parsha::KiTeitzei,
    Parsha::KiTavo,
    Parsha::Nitzavim,
    Parsha::Vayeilech,
    Parsha::Haazinu,
    Parsha::VezotHaberakhah,
];

impl Parsha {
    /// Construct from the 1-based reading-order number.
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Parsha> {
        ALL_PARSHIYOT.get(usize::from(n.checked_sub(1)?)).copied()
    }

    /// The 1-based reading-order number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Transliterated name, e.g. `"Vayishlach"`, `"Achrei Mot"`.
    pub fn name(&self) -> &'static str {
        match self {
            Parsha::Bereshit => "Bereshit",
            Parsha::Noach => "Noach",
            Parsha::LechLecha => "Lech-Lecha",
            Parsha::Vayera => "Vayera",
            Parsha::ChayeiSara => "Chayei Sara",
            Parsha::Toldot => "Toldot",
            Parsha::Vayetzei => "Vayetzei",
            Parsha::Vayishlach => "Vayishlach",
            Parsha::Vayeshev => "Vayeshev",
            Parsha::Miketz => "Miketz",
            Parsha::Vayigash => "Vayigash",
            Parsha::Vayechi => "Vayechi",
            Parsha::Shemot => "Shemot",
            Parsha::Vaera => "Vaera",
            Parsha::Bo => "Bo",
            Parsha::Beshalach => "Beshalach",
            Parsha::Yitro => "Yitro",
            Parsha::Mishpatim => "Mishpatim",
            Parsha::Terumah => "Terumah",
            Parsha::Tetzaveh => "Tetzaveh",
            Parsha::KiTisa => "Ki Tisa",
            Parsha::Vayakhel => "Vayakhel",
            Parsha::Pekudei => "Pekudei",
            Parsha::Vayikra => "Vayikra",
            Parsha::Tzav => "Tzav",
            Parsha::Shmini => "Shmini",
            Parsha::Tazria => "Tazria",
            Parsha::Metzora => "Metzora",
            Parsha::AchreiMot => "Achrei Mot",
            Parsha::Kedoshim => "Kedoshim",
            Parsha::Emor => "Emor",
            Parsha::Behar => "Behar",
            Parsha::Bechukotai => "Bechukotai",
            Parsha::Bamidbar => "Bamidbar",
            Parsha::Nasso => "Nasso",
            Parsha::Behaalotcha => "Beha'alotcha",
            Parsha::Shlach => "Sh'lach",
            Parsha::Korach => "Korach",
            Parsha::Chukat => "Chukat",
            Parsha::Balak => "Balak",
            Parsha::Pinchas => "Pinchas",
            Parsha::Matot => "Matot",
            Parsha::Masei => "Masei",
            Parsha::Devarim => "Devarim",
            Parsha::Vaetchanan => "Vaetchanan",
            Parsha::Eikev => "Eikev",
            Parsha::Reeh => "Re'eh",
            Parsha::Shoftim => "Shoftim",
            Parsha::KiTeitzei => "Ki Teitzei",
            Parsha::KiTavo => "Ki Tavo",
            Parsha::Nitzavim => "Nitzavim",
            Parsha::Vayeilech => "Vayeilech",
            Parsha::Haazinu => "Ha'Azinu",
            Parsha::VezotHaberakhah => "Vezot Haberakhah",
        }
    }
}

impl std::fmt::Display for Parsha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What is read on a given Shabbat: one portion, or a combined pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reading {
    /// A single weekly portion.
    Single(Parsha),
    /// Two portions combined, e.g. Matot-Masei.
    Double(Parsha, Parsha),
}

impl Reading {
    /// Display name: `"Tzav"`, `"Matot-Masei"`.
    pub fn name(&self) -> String {
        match self {
            Reading::Single(p) => p.name().to_string(),
            Reading::Double(a, b) => format!("{}-{}", a.name(), b.name()),
        }
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ── Schedule construction ─────────────────────────────────────────────────────

/// Weekday convention from [`HebrewDate::weekday`]: 6 = Saturday.
const SATURDAY: i64 = 6;

/// Pairs that may combine before Pesach.
const PAIRS_BEFORE_PESACH: [(u8, u8); 1] = [(22, 23)]; // Vayakhel-Pekudei

/// Pairs that may combine between Pesach and Shavuot, in the order they
/// are given up as Shabbatot run short.
const PAIRS_BEFORE_SHAVUOT: [(u8, u8); 3] = [(27, 28), (29, 30), (32, 33)];

/// Pairs that may combine between Shavuot and 9 Av; Matot-Masei combines
/// first, Chukat-Balak only in the tightest years.
const PAIRS_BEFORE_AV: [(u8, u8); 2] = [(42, 43), (39, 40)];

fn saturday_on_or_after(day: i64) -> i64 {
    day + (SATURDAY - day.rem_euclid(7) + 7) % 7
}

fn saturday_on_or_before(day: i64) -> i64 {
    day - (day.rem_euclid(7) + 7 - SATURDAY) % 7
}

/// All Saturdays `s` with `from <= s < until`.
fn saturdays_in(from: i64, until: i64) -> Vec<i64> {
    let mut sats = Vec::new();
    let mut s = saturday_on_or_after(from);
    while s < until {
        sats.push(s);
        s += 7;
    }
    sats
}

/// The weekly reading schedule of one Hebrew year.
///
/// Covers every Saturday from Rosh Hashanah to the eve of the next one;
/// Saturdays inside festivals map to `None` (a festival reading replaces
/// the weekly portion).
#[derive(Debug, Clone)]
pub struct SedraSchedule {
    year: i32,
    in_israel: bool,
    readings: BTreeMap<i64, Option<Reading>>,
}

impl SedraSchedule {
    /// Build the schedule for the given Hebrew year.
    pub fn for_hebrew_year(year: i32, in_israel: bool) -> Result<SedraSchedule> {
        ensure!(year >= 1, "hebrew year {year} before the calendar epoch");

        let rh = year::first_day_of_year(year);
        let rh_next = year::first_day_of_year(year + 1);
        let mut readings = BTreeMap::new();

        // Simchat Torah ends the previous cycle; Bereshit restarts on the
        // Shabbat after it.  In Israel the festival falls a day earlier.
        let simchat_torah = if in_israel { rh + 21 } else { rh + 22 };
        let bereshit = saturday_on_or_after(simchat_torah + 1);

        // Tail of the previous cycle: Shabbat Shuva reads Vayeilech when
        // the year began Monday or Tuesday (otherwise Vayeilech was
        // already combined with Nitzavim before Rosh Hashanah), and
        // Ha'Azinu fills the remaining pre-Sukkot Shabbat.
        let rh_weekday = rh.rem_euclid(7);
        for sat in saturdays_in(rh, bereshit) {
            let tishrei_day = sat - rh + 1;
            let reading = match tishrei_day {
                3..=9 => {
                    if rh_weekday == 1 || rh_weekday == 2 {
                        Some(Reading::Single(Parsha::Vayeilech))
                    } else {
                        Some(Reading::Single(Parsha::Haazinu))
                    }
                }
                11..=14 => Some(Reading::Single(Parsha::Haazinu)),
                // Rosh Hashanah, Yom Kippur, Sukkot through Simchat Torah
                _ => None,
            };
            readings.insert(sat, reading);
        }

        let pesach = HebrewDate::new(year, HebrewMonth::Nisan, 15)?.day_number();
        let shavuot = HebrewDate::new(year, HebrewMonth::Sivan, 6)?.day_number();
        let av9 = HebrewDate::new(year, HebrewMonth::Av, 9)?.day_number();
        let devarim_sat = saturday_on_or_before(av9);

        // Bereshit through the Shabbat before Pesach.  No festival
        // Shabbatot occur in this stretch, and the only pair that may
        // combine is Vayakhel-Pekudei.
        let slots_a = saturdays_in(bereshit, pesach);
        let nominal_a = if year::is_leap_year(year) {
            Parsha::Metzora.number()
        } else {
            Parsha::Tzav.number()
        };
        let last_a = place_run(
            &mut readings,
            &slots_a,
            Parsha::Bereshit.number(),
            nominal_a,
            &PAIRS_BEFORE_PESACH,
        )?;

        // Pesach to Shavuot.  Shabbatot inside the festival are
        // displaced; the nominal target is Bamidbar just before Shavuot,
        // with Nasso pulled forward when a spare Shabbat appears (an
        // Israel-only situation in practice).
        let mut slots_b = Vec::new();
        for sat in saturdays_in(pesach, shavuot) {
            if displaced_in_festival(sat, in_israel)? {
                readings.insert(sat, None);
            } else {
                slots_b.push(sat);
            }
        }
        let last_b = place_run(
            &mut readings,
            &slots_b,
            last_a + 1,
            Parsha::Bamidbar.number(),
            &PAIRS_BEFORE_SHAVUOT,
        )?;

        // Shavuot to the Devarim Shabbat, which is anchored on or
        // immediately before 9 Av.
        let mut slots_c = Vec::new();
        for sat in saturdays_in(shavuot, devarim_sat) {
            if displaced_in_festival(sat, in_israel)? {
                readings.insert(sat, None);
            } else {
                slots_c.push(sat);
            }
        }
        slots_c.push(devarim_sat);
        place_run(
            &mut readings,
            &slots_c,
            last_b + 1,
            Parsha::Devarim.number(),
            &PAIRS_BEFORE_AV,
        )?;

        // Rigid tail: exactly seven Shabbatot remain, carrying Vaetchanan
        // through Ki Tavo and then Nitzavim, joined by Vayeilech when the
        // coming year starts Thursday or Shabbat.
        let tail = saturdays_in(devarim_sat + 1, rh_next);
        if tail.len() != 7 {
            return Err(Error::Calendar(format!(
                "year {year}: {} Shabbatot between Devarim and Rosh Hashanah, expected 7",
                tail.len()
            )));
        }
        for (i, &sat) in tail.iter().take(6).enumerate() {
            let parsha = parsha_by_number(Parsha::Vaetchanan.number() + i as u8)?;
            readings.insert(sat, Some(Reading::Single(parsha)));
        }
        let next_rh_weekday = rh_next.rem_euclid(7);
        let closing = if next_rh_weekday == 4 || next_rh_weekday == 6 {
            Reading::Double(Parsha::Nitzavim, Parsha::Vayeilech)
        } else {
            Reading::Single(Parsha::Nitzavim)
        };
        readings.insert(tail[6], Some(closing));

        Ok(SedraSchedule {
            year,
            in_israel,
            readings,
        })
    }

    /// The Hebrew year this schedule covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether this is the Land-of-Israel schedule.
    pub fn in_israel(&self) -> bool {
        self.in_israel
    }

    /// The reading on the given Saturday, or `None` on a festival
    /// Shabbat.
    ///
    /// Fails if the date is not a Saturday or not covered by this
    /// schedule's year.
    pub fn reading_on(&self, saturday: NaiveDate) -> Result<Option<Reading>> {
        let day = i64::from(saturday.num_days_from_ce());
        ensure!(
            day.rem_euclid(7) == SATURDAY,
            "{saturday} is not a Saturday"
        );
        match self.readings.get(&day) {
            Some(reading) => Ok(*reading),
            None => Err(Error::Calendar(format!(
                "{saturday} outside the schedule for year {}",
                self.year
            ))),
        }
    }
}

/// The reading for an arbitrary Saturday, building the schedule of the
/// Hebrew year that contains it.
pub fn weekly_reading(saturday: NaiveDate, in_israel: bool) -> Result<Option<Reading>> {
    let hebrew = HebrewDate::from_civil(saturday)?;
    SedraSchedule::for_hebrew_year(hebrew.year(), in_israel)?.reading_on(saturday)
}

/// Whether this Saturday falls inside Pesach or Shavuot for the given
/// region (festival Shabbatot read a festival portion instead).
fn displaced_in_festival(sat: i64, in_israel: bool) -> Result<bool> {
    let date = HebrewDate::from_day_number(sat)?;
    Ok(match date.month() {
        HebrewMonth::Nisan => {
            if in_israel {
                (15..=21).contains(&date.day())
            } else {
                (15..=22).contains(&date.day())
            }
        }
        HebrewMonth::Sivan => {
            if in_israel {
                date.day() == 6
            } else {
                (6..=7).contains(&date.day())
            }
        }
        _ => false,
    })
}

fn parsha_by_number(n: u8) -> Result<Parsha> {
    Parsha::from_number(n)
        .ok_or_else(|| Error::Calendar(format!("portion number {n} out of range")))
}

/// Place the run `first..=nominal_last` onto `slots`, combining pairs
/// from `pairs` (in priority order) when slots run short, or extending
/// past `nominal_last` when there are spare slots.
///
/// Returns the last portion number actually placed.
fn place_run(
    readings: &mut BTreeMap<i64, Option<Reading>>,
    slots: &[i64],
    first: u8,
    nominal_last: u8,
    pairs: &[(u8, u8)],
) -> Result<u8> {
    let nominal = i64::from(nominal_last) - i64::from(first) + 1;
    let deficit = nominal - slots.len() as i64;

    let (last, doubled): (u8, Vec<(u8, u8)>) = if deficit <= 0 {
        // Spare Shabbatot pull the following portions forward.
        (nominal_last + (-deficit) as u8, Vec::new())
    } else {
        let usable: Vec<(u8, u8)> = pairs
            .iter()
            .copied()
            .filter(|&(a, b)| a >= first && b <= nominal_last)
            .collect();
        if deficit as usize > usable.len() {
            return Err(Error::Calendar(format!(
                "cannot fit portions {first}..={nominal_last} into {} Shabbatot",
                slots.len()
            )));
        }
        (nominal_last, usable[..deficit as usize].to_vec())
    };

    let mut slot_iter = slots.iter();
    let mut n = first;
    while n <= last {
        let &sat = slot_iter.next().ok_or_else(|| {
            Error::Calendar(format!("ran out of Shabbatot placing portion {n}"))
        })?;
        if let Some(&(a, b)) = doubled.iter().find(|&&(a, _)| a == n) {
            readings.insert(
                sat,
                Some(Reading::Double(parsha_by_number(a)?, parsha_by_number(b)?)),
            );
            n += 2;
        } else {
            readings.insert(sat, Some(Reading::Single(parsha_by_number(n)?)));
            n += 1;
        }
    }
    if slot_iter.next().is_some() {
        return Err(Error::Calendar(format!(
            "Shabbatot left over after portion {last}"
        )));
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsha_numbers_roundtrip() {
        for n in 1..=54u8 {
            let p = Parsha::from_number(n).unwrap();
            assert_eq!(p.number(), n);
        }
        assert!(Parsha::from_number(0).is_none());
        assert!(Parsha::from_number(55).is_none());
    }

    #[test]
    fn double_reading_names() {
        assert_eq!(
            Reading::Double(Parsha::Matot, Parsha::Masei).name(),
            "Matot-Masei"
        );
        assert_eq!(Reading::Single(Parsha::Tzav).name(), "Tzav");
    }
}
