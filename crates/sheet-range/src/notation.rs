//! A1 notation parser and serializer
//!
//! Accepted text is `[<sheet>!]<start>[:<end>]` where the range part takes one
//! of three shapes:
//!
//! 1. `B2:D10` - fully bounded rectangle
//! 2. `B2:D` - bounded start, end column only (rows open-ended)
//! 3. `B2` - start cell only, no end bound
//!
//! The sheet name may hold any characters, including `!`. The last `!` that is
//! followed by a valid range separates the two.

use crate::column::{letters_to_number, number_to_letters, optional_letters};
use crate::error::{Error, Result};
use lazy_regex::regex;
use std::fmt;

/// The five logical fields of a range as written in A1 notation
///
/// Values are exactly what the text says; no clamping has been applied yet.
/// A row of `0` is representable here and only fixed up once the notation is
/// turned into a [`RangeAddress`](crate::RangeAddress).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Notation {
    /// Sheet (page) name, `None` for the current sheet
    pub sheet_name: Option<String>,
    /// Start column (1-based)
    pub start_col: u32,
    /// Start row (1-based)
    pub start_row: u32,
    /// End column, `None` when open-ended
    pub end_col: Option<u32>,
    /// End row, `None` when open-ended
    pub end_row: Option<u32>,
}

impl Notation {
    /// Parse A1 notation text
    ///
    /// An empty (or all-whitespace) input is [`Error::EmptyRange`]; anything
    /// else that does not fit the grammar is [`Error::InvalidRangeFormat`].
    ///
    /// # Examples
    /// ```
    /// use sheet_range::notation::Notation;
    ///
    /// let n = Notation::parse("Sheet1!B2:D").unwrap();
    /// assert_eq!(n.sheet_name.as_deref(), Some("Sheet1"));
    /// assert_eq!((n.start_col, n.start_row), (2, 2));
    /// assert_eq!((n.end_col, n.end_row), (Some(4), None));
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        log::trace!("parsing range notation '{input}'");

        if input.trim().is_empty() {
            return Err(Error::EmptyRange);
        }

        let pattern = regex!(r"(?s)^(?:(.+)!)?([A-Z]+)([0-9]+)(?::([A-Z]+)([0-9]+)?)?$");
        let captures = pattern
            .captures(input)
            .ok_or_else(|| Error::invalid_format(input))?;

        let text = |i: usize| captures.get(i).map(|m| m.as_str());
        let column = |s: &str| letters_to_number(s).ok_or_else(|| Error::invalid_format(input));
        let row = |s: &str| s.parse::<u32>().map_err(|_| Error::invalid_format(input));

        let start_col = text(2).map(column).transpose()?.unwrap_or(1);
        let start_row = text(3).map(row).transpose()?.unwrap_or(1);
        let end_col = text(4).map(column).transpose()?;
        let end_row = text(5).map(row).transpose()?;

        Ok(Self {
            sheet_name: text(1).map(str::to_owned),
            start_col,
            start_row,
            end_col,
            end_row,
        })
    }

    /// Render back to A1 notation
    pub fn to_a1_string(&self) -> String {
        render(
            self.sheet_name.as_deref(),
            self.start_col,
            self.start_row,
            self.end_col,
            self.end_row,
        )
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

/// Start segment, always `<letters><row>`
pub fn start_segment(col: u32, row: u32) -> String {
    format!("{}{}", number_to_letters(col), row)
}

/// End segment
///
/// `None` when both bounds are absent, bare letters when only the row is
/// absent, `<letters><row>` otherwise. An absent column renders as no letters.
pub fn end_segment(col: Option<u32>, row: Option<u32>) -> Option<String> {
    match (col, row) {
        (None, None) => None,
        (col, None) => Some(optional_letters(col)),
        (col, Some(row)) => Some(format!("{}{}", optional_letters(col), row)),
    }
}

/// Render the five fields as `[sheet!]<start>[:<end>]`
pub fn render(
    sheet_name: Option<&str>,
    start_col: u32,
    start_row: u32,
    end_col: Option<u32>,
    end_row: Option<u32>,
) -> String {
    let mut out = String::new();

    if let Some(name) = sheet_name {
        out.push_str(name);
        out.push('!');
    }
    out.push_str(&start_segment(start_col, start_row));
    if let Some(end) = end_segment(end_col, end_row) {
        out.push(':');
        out.push_str(&end);
    }

    out
}
