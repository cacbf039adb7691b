// crates/eclipsedb-core/src/postal.rs

//! # Postal Code Resolution
//!
//! Maps a postal code string to a (region, country) pair. Two systems are
//! supported, recognized by shape alone: U.S. ZIP codes (5 digits, optional
//! hyphenated plus-four) resolved through a 3-digit-prefix range table, and
//! Canadian postal codes (`A1A 1A1`) resolved through a first-letter
//! province table. Anything else is not a postal code.

use once_cell::sync::Lazy;
use regex::Regex;

static ZIP_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}(?:-\d{4})?$").unwrap());
static CANADIAN_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]\d[A-Za-z](?:\s?\d[A-Za-z]\d)?$").unwrap());

/// Inclusive 3-digit ZIP prefix ranges, checked in table order; the first
/// containing range wins. The Armed Forces rows keep "United States" as
/// their country.
const ZIP_STATE_RANGES: &[(u16, u16, &str)] = &[
    (5, 9, "Puerto Rico"),
    (10, 27, "Massachusetts"),
    (28, 29, "Rhode Island"),
    (30, 38, "New Hampshire"),
    (39, 49, "Maine"),
    (50, 59, "Vermont"),
    (60, 69, "Connecticut"),
    (70, 89, "New Jersey"),
    (90, 98, "Armed Forces Europe"),
    (100, 149, "New York"),
    (150, 196, "Pennsylvania"),
    (197, 199, "Delaware"),
    (200, 205, "District of Columbia"),
    (206, 219, "Maryland"),
    (220, 246, "Virginia"),
    (247, 268, "West Virginia"),
    (270, 289, "North Carolina"),
    (290, 299, "South Carolina"),
    (300, 319, "Georgia"),
    (320, 349, "Florida"),
    (350, 369, "Alabama"),
    (370, 385, "Tennessee"),
    (386, 397, "Mississippi"),
    (398, 399, "Georgia"),
    (400, 427, "Kentucky"),
    (430, 459, "Ohio"),
    (460, 479, "Indiana"),
    (480, 499, "Michigan"),
    (500, 528, "Iowa"),
    (530, 549, "Wisconsin"),
    (550, 567, "Minnesota"),
    (570, 577, "South Dakota"),
    (580, 588, "North Dakota"),
    (590, 599, "Montana"),
    (600, 629, "Illinois"),
    (630, 658, "Missouri"),
    (660, 679, "Kansas"),
    (680, 693, "Nebraska"),
    (700, 715, "Louisiana"),
    (716, 729, "Arkansas"),
    (730, 749, "Oklahoma"),
    (750, 799, "Texas"),
    (800, 816, "Colorado"),
    (820, 831, "Wyoming"),
    (832, 838, "Idaho"),
    (840, 847, "Utah"),
    (850, 865, "Arizona"),
    (870, 884, "New Mexico"),
    (889, 898, "Nevada"),
    (900, 961, "California"),
    (962, 966, "Armed Forces Pacific"),
    (967, 968, "Hawaii"),
    (970, 979, "Oregon"),
    (980, 994, "Washington"),
    (995, 999, "Alaska"),
];

const CANADA_POSTAL_PREFIX: &[(char, &str)] = &[
    ('A', "Newfoundland and Labrador"),
    ('B', "Nova Scotia"),
    ('C', "Prince Edward Island"),
    ('E', "New Brunswick"),
    ('G', "Quebec"),
    ('H', "Quebec"),
    ('J', "Quebec"),
    ('K', "Ontario"),
    ('L', "Ontario"),
    ('M', "Ontario"),
    ('N', "Ontario"),
    ('P', "Ontario"),
    ('R', "Manitoba"),
    ('S', "Saskatchewan"),
    ('T', "Alberta"),
    ('V', "British Columbia"),
    ('X', "Nunavut"),
    ('Y', "Yukon"),
];

/// Whether the trimmed input looks like one of the two supported postal
/// systems. The parser uses this to take its postal shortcut.
pub fn is_postal_shape(code: &str) -> bool {
    ZIP_SHAPE.is_match(code) || CANADIAN_SHAPE.is_match(code)
}

fn resolve_us_zip(zip_code: &str) -> Option<(&'static str, &'static str)> {
    let digits: String = zip_code.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 3 {
        return None;
    }
    let prefix: u16 = digits[..3].parse().ok()?;
    for (lower, upper, state) in ZIP_STATE_RANGES {
        if (*lower..=*upper).contains(&prefix) {
            return Some((state, "United States"));
        }
    }
    None
}

fn resolve_canadian_postal(code: &str) -> Option<(&'static str, &'static str)> {
    let first = code
        .chars()
        .find(|c| !c.is_whitespace())?
        .to_ascii_uppercase();
    CANADA_POSTAL_PREFIX
        .iter()
        .find(|(letter, _)| *letter == first)
        .map(|(_, province)| (*province, "Canada"))
}

/// Attempt to derive (region, country) from a postal code. A code matching
/// neither supported shape resolves to `None`, as does an in-shape code
/// whose prefix has no table entry.
pub fn resolve_postal_code(code: &str) -> Option<(&'static str, &'static str)> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    if ZIP_SHAPE.is_match(code) {
        return resolve_us_zip(code);
    }
    if CANADIAN_SHAPE.is_match(code) {
        return resolve_canadian_postal(code);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_prefix_ranges_resolve_first_match() {
        assert_eq!(
            resolve_postal_code("78701"),
            Some(("Texas", "United States"))
        );
        assert_eq!(
            resolve_postal_code("90210"),
            Some(("California", "United States"))
        );
        // Plus-four suffix is accepted.
        assert_eq!(
            resolve_postal_code("10001-1234"),
            Some(("New York", "United States"))
        );
    }

    #[test]
    fn zip_prefix_without_a_range_fails() {
        // Prefix 000 falls before the first range.
        assert_eq!(resolve_postal_code("00001"), None);
        // 999 is the last covered prefix; 869 sits in a gap.
        assert_eq!(resolve_postal_code("86901"), None);
    }

    #[test]
    fn canadian_first_letter_resolves_province() {
        assert_eq!(resolve_postal_code("K1A 0B1"), Some(("Ontario", "Canada")));
        assert_eq!(resolve_postal_code("v6b"), Some(("British Columbia", "Canada")));
        // 'Z' is not a valid Canadian prefix letter.
        assert_eq!(resolve_postal_code("Z1A 0B1"), None);
    }

    #[test]
    fn non_postal_shapes_are_rejected() {
        assert!(!is_postal_shape("Austin"));
        assert!(!is_postal_shape("1234"));
        assert!(!is_postal_shape("123456"));
        assert!(is_postal_shape("78701"));
        assert!(is_postal_shape("78701-0042"));
        assert!(is_postal_shape("K1A"));
        assert!(is_postal_shape("K1A 0B1"));
        assert_eq!(resolve_postal_code("not a code"), None);
    }
}
