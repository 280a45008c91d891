//! Column-name codec
//!
//! Spreadsheet columns are named in bijective base 26: `A` = 1 .. `Z` = 26,
//! then `AA` = 27, `AZ` = 52, `BA` = 53 and so on. There is no digit for zero,
//! so column numbers here are always 1-based.

/// Convert a 1-based column number to its letters (1 = A, 26 = Z, 27 = AA)
///
/// `0` has no name and renders as an empty string.
///
/// # Examples
/// ```
/// use sheet_range::column::number_to_letters;
///
/// assert_eq!(number_to_letters(1), "A");
/// assert_eq!(number_to_letters(28), "AB");
/// assert_eq!(number_to_letters(16384), "XFD");
/// ```
pub fn number_to_letters(number: u32) -> String {
    let mut letters = Vec::new();
    let mut n = number;

    while n > 0 {
        letters.push(b'A' + ((n - 1) % 26) as u8);
        n = (n - 1) / 26;
    }

    letters.iter().rev().map(|&b| b as char).collect()
}

/// Render an optional column number; an absent column is an empty string
pub fn optional_letters(number: Option<u32>) -> String {
    number.map(number_to_letters).unwrap_or_default()
}

/// Convert column letters to a 1-based column number (A = 1, Z = 26, AA = 27)
///
/// Only uppercase ASCII letters are accepted. Returns `None` for an empty
/// string, any other character, or a value that does not fit in a `u32`.
///
/// # Examples
/// ```
/// use sheet_range::column::letters_to_number;
///
/// assert_eq!(letters_to_number("A"), Some(1));
/// assert_eq!(letters_to_number("BA"), Some(53));
/// assert_eq!(letters_to_number("b"), None);
/// ```
pub fn letters_to_number(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }

    letters.bytes().try_fold(0u32, |acc, b| {
        if !b.is_ascii_uppercase() {
            return None;
        }
        acc.checked_mul(26)?.checked_add(1 + u32::from(b - b'A'))
    })
}
