//! Hebrew numerals (gematria).
//!
//! Renders day and year numbers in Hebrew letters the way printed
//! calendars do: additive letter values, the ט״ו/ט״ז substitution for 15
//! and 16 (avoiding the spelled divine name), a geresh after a single
//! letter and a gershayim before the last letter of a longer numeral.

use zm_core::{ensure, Result};

/// U+05F3 HEBREW PUNCTUATION GERESH, after single-letter numerals.
const GERESH: char = '\u{05F3}';

/// U+05F4 HEBREW PUNCTUATION GERSHAYIM, before the last letter of
/// multi-letter numerals.
const GERSHAYIM: char = '\u{05F4}';

/// Letter values in descending order.  Final forms are not used in
/// numerals, and 15/16 are handled separately.
const LETTERS: [(u32, char); 22] = [
    (400, 'ת'),
    (300, 'ש'),
    (200, 'ר'),
    (100, 'ק'),
    (90, 'צ'),
    (80, 'פ'),
    (70, 'ע'),
    (60, 'ס'),
    (50, 'נ'),
    (40, 'מ'),
    (30, 'ל'),
    (20, 'כ'),
    (10, 'י'),
    (9, 'ט'),
    (8, 'ח'),
    (7, 'ז'),
    (6, 'ו'),
    (5, 'ה'),
    (4, 'ד'),
    (3, 'ג'),
    (2, 'ב'),
    (1, 'א'),
];

/// Render `n` as a Hebrew numeral with punctuation, e.g. `23` → `"כ״ג"`,
/// `15` → `"ט״ו"`, `30` → `"ל׳"`.
///
/// Supports 1 through 9999.
pub fn hebrew_numeral(n: u32) -> Result<String> {
    ensure!((1..=9999).contains(&n), "numeral {n} out of range 1..=9999");

    let mut letters = Vec::new();
    let mut rest = n;
    while rest > 0 {
        // 15 = יה and 16 = יו spell fragments of the divine name; the
        // convention is 9+6 and 9+7 instead.
        if rest == 15 {
            letters.push('ט');
            letters.push('ו');
            break;
        }
        if rest == 16 {
            letters.push('ט');
            letters.push('ז');
            break;
        }
        for &(value, letter) in &LETTERS {
            if value <= rest {
                letters.push(letter);
                rest -= value;
                break;
            }
        }
    }

    let mut out = String::new();
    match letters.len() {
        1 => {
            out.push(letters[0]);
            out.push(GERESH);
        }
        len => {
            for (i, &letter) in letters.iter().enumerate() {
                if i == len - 1 {
                    out.push(GERSHAYIM);
                }
                out.push(letter);
            }
        }
    }
    Ok(out)
}

/// Render a Hebrew year in the customary short form that drops the
/// thousands, e.g. `5785` → `"תשפ״ה"`.
///
/// Round thousands (5000, 6000, …) render the thousands digit itself.
pub fn hebrew_year(year: i32) -> Result<String> {
    ensure!(year >= 1, "hebrew year {year} before the calendar epoch");
    let remainder = (year % 1000) as u32;
    if remainder == 0 {
        hebrew_numeral((year / 1000) as u32)
    } else {
        hebrew_numeral(remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters_take_a_geresh() {
        assert_eq!(hebrew_numeral(1).unwrap(), "א׳");
        assert_eq!(hebrew_numeral(30).unwrap(), "ל׳");
        assert_eq!(hebrew_numeral(400).unwrap(), "ת׳");
    }

    #[test]
    fn multi_letter_numerals_take_a_gershayim() {
        assert_eq!(hebrew_numeral(11).unwrap(), "י״א");
        assert_eq!(hebrew_numeral(23).unwrap(), "כ״ג");
        assert_eq!(hebrew_numeral(29).unwrap(), "כ״ט");
        assert_eq!(hebrew_numeral(785).unwrap(), "תשפ״ה");
    }

    #[test]
    fn fifteen_and_sixteen_avoid_the_divine_name() {
        assert_eq!(hebrew_numeral(15).unwrap(), "ט״ו");
        assert_eq!(hebrew_numeral(16).unwrap(), "ט״ז");
        // …but 115 is קט״ו, built from 100 + 15.
        assert_eq!(hebrew_numeral(115).unwrap(), "קט״ו");
        assert_eq!(hebrew_numeral(516).unwrap(), "תקט״ז");
    }

    #[test]
    fn years_drop_the_thousands() {
        assert_eq!(hebrew_year(5785).unwrap(), "תשפ״ה");
        assert_eq!(hebrew_year(5784).unwrap(), "תשפ״ד");
        assert_eq!(hebrew_year(5786).unwrap(), "תשפ״ו");
        assert_eq!(hebrew_year(5000).unwrap(), "ה׳");
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(hebrew_numeral(0).is_err());
        assert!(hebrew_numeral(10_000).is_err());
        assert!(hebrew_year(0).is_err());
    }

    #[test]
    fn large_numerals_stack_the_hundreds() {
        assert_eq!(hebrew_numeral(700).unwrap(), "ת״ש");
        assert_eq!(hebrew_numeral(1000).unwrap(), "תת״ר");
    }
}
