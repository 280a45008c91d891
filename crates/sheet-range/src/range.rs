//! Range addresses and range arithmetic
//!
//! A [`RangeAddress`] is a rectangle on a sheet, optionally bound to a named
//! sheet. The start corner is always present. Each end bound is optional, and
//! an absent end means the range runs to the edge of the sheet on that axis.
//! That is different from an end equal to the start.
//!
//! Every mutator re-establishes the invariants below and never fails:
//!
//! - `start_row >= 1` and `start_col >= 1`
//! - `end_row`, when present, is `>= start_row`
//! - `end_col`, when present, is `>= start_col`
//!
//! A `RangeAddress` is not internally synchronized. Callers sharing one across
//! threads must copy it per thread or wrap it in a lock.

use crate::column::number_to_letters;
use crate::error::{Error, Result};
use crate::notation::{end_segment, render, start_segment, Notation};
use crate::record::{GridRange, RangeRecord};
use std::fmt;
use std::str::FromStr;

/// One of the four coordinates of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    StartRow,
    StartCol,
    EndRow,
    EndCol,
}

/// An operation on a single coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldOp {
    /// `field = (field or 0) + n`
    Add(i64),
    /// `field = (field or 0) - n`
    Sub(i64),
    /// `field = n`; `Set(None)` reopens an end bound
    Set(Option<i64>),
}

/// How deep a copy [`RangeAddress::copy`] makes
///
/// All fields are plain values, so both modes produce the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyMode {
    #[default]
    Shallow,
    Deep,
}

/// Where a new range comes from
#[derive(Debug, Clone, Copy)]
pub enum RangeSource<'a> {
    /// A1 notation text, e.g. `Sheet1!B2:D10`
    Notation(&'a str),
    /// Another range
    Copy(&'a RangeAddress),
    /// A sheet name and detached start/end cell references (`B2`, `D10`)
    Parts {
        sheet_name: Option<&'a str>,
        start: &'a str,
        end: Option<&'a str>,
    },
    /// Explicit 1-based coordinates; absent or `< 1` starts become 1
    Coords {
        sheet_name: Option<&'a str>,
        start_col: Option<i64>,
        start_row: Option<i64>,
        end_col: Option<i64>,
        end_row: Option<i64>,
    },
}

/// A rectangular region of a sheet in 1-based coordinates
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeAddress {
    sheet_name: Option<String>,
    start_row: u32,
    start_col: u32,
    end_row: Option<u32>,
    end_col: Option<u32>,
}

/// Saturate a wide intermediate value into a stored coordinate
fn clamp(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

impl RangeAddress {
    /// Build a range from any [`RangeSource`]
    pub fn build(source: RangeSource<'_>) -> Result<Self> {
        match source {
            RangeSource::Notation(text) => Self::parse(text),
            RangeSource::Copy(other) => Ok(other.clone()),
            RangeSource::Parts {
                sheet_name,
                start,
                end,
            } => Self::from_parts(sheet_name, start, end),
            RangeSource::Coords {
                sheet_name,
                start_col,
                start_row,
                end_col,
                end_row,
            } => Ok(Self::from_coords(
                sheet_name, start_col, start_row, end_col, end_row,
            )),
        }
    }

    /// Parse a range from A1 notation
    ///
    /// # Examples
    /// ```
    /// use sheet_range::RangeAddress;
    ///
    /// let range = RangeAddress::parse("Sheet1!B2:D10").unwrap();
    /// assert_eq!(range.sheet_name(), Some("Sheet1"));
    /// assert_eq!(range.start_col(), 2);
    /// assert_eq!(range.end_row(), Some(10));
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        Notation::parse(text).map(Self::from)
    }

    /// Copy another range
    pub fn from_range(other: &RangeAddress) -> Self {
        other.clone()
    }

    /// Build a range from a sheet name and detached cell references
    ///
    /// `from_parts(Some("Sheet1"), "B2", Some("D10"))` is `Sheet1!B2:D10`.
    /// An empty start reference is [`Error::EmptyRange`].
    pub fn from_parts(sheet_name: Option<&str>, start: &str, end: Option<&str>) -> Result<Self> {
        if start.trim().is_empty() {
            return Err(Error::EmptyRange);
        }

        let mut text = String::new();
        if let Some(name) = sheet_name {
            text.push_str(name);
            text.push('!');
        }
        text.push_str(start);
        if let Some(end) = end {
            text.push(':');
            text.push_str(end);
        }

        Self::parse(&text)
    }

    /// Build a range from explicit 1-based coordinates
    pub fn from_coords(
        sheet_name: Option<&str>,
        start_col: Option<i64>,
        start_row: Option<i64>,
        end_col: Option<i64>,
        end_row: Option<i64>,
    ) -> Self {
        let mut range = Self {
            sheet_name: sheet_name.map(str::to_owned),
            start_row: start_row.map_or(1, clamp),
            start_col: start_col.map_or(1, clamp),
            end_row: end_row.map(clamp),
            end_col: end_col.map(clamp),
        };
        range.normalize();
        range
    }

    /// A range exactly covering a rectangular data grid placed at `base`
    ///
    /// The column count comes from the first row. An empty grid, or one whose
    /// first row is empty, collapses that axis to a single row or column, so
    /// the result is never narrower than one cell.
    ///
    /// # Examples
    /// ```
    /// use sheet_range::RangeAddress;
    ///
    /// let base = RangeAddress::parse("B2").unwrap();
    /// let data = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
    /// assert_eq!(RangeAddress::by_data(&data, &base).to_string(), "B2:C4");
    /// ```
    pub fn by_data<T>(data: &[Vec<T>], base: &RangeAddress) -> Self {
        let cols = data.first().map_or(0, Vec::len);
        Self::by_size(data.len(), cols, base)
    }

    /// [`RangeAddress::by_data`] with the base given as A1 notation
    pub fn by_data_notation<T>(data: &[Vec<T>], base: &str) -> Result<Self> {
        Ok(Self::by_data(data, &Self::parse(base)?))
    }

    /// A range of `rows` x `cols` cells anchored at the start of `base`
    pub fn by_size(rows: usize, cols: usize, base: &RangeAddress) -> Self {
        let rows = i64::try_from(rows).unwrap_or(i64::MAX);
        let cols = i64::try_from(cols).unwrap_or(i64::MAX);
        let start_col = i64::from(base.start_col);
        let start_row = i64::from(base.start_row);

        let mut range = base.clone();
        range
            .set_end_col(Some(start_col.saturating_add(cols) - 1))
            .set_end_row(Some(start_row.saturating_add(rows) - 1));
        range
    }

    /// Restore the range invariants, clamping instead of failing
    fn normalize(&mut self) -> &mut Self {
        if self.start_row < 1 {
            log::debug!("start row {} clamped to 1", self.start_row);
            self.start_row = 1;
        }
        if let Some(end_row) = self.end_row.filter(|&end| end < self.start_row) {
            log::debug!("end row {end_row} clamped to start row {}", self.start_row);
            self.end_row = Some(self.start_row);
        }
        if self.start_col < 1 {
            log::debug!("start column {} clamped to 1", self.start_col);
            self.start_col = 1;
        }
        if let Some(end_col) = self.end_col.filter(|&end| end < self.start_col) {
            log::debug!("end column {end_col} clamped to start column {}", self.start_col);
            self.end_col = Some(self.start_col);
        }
        self
    }

    /// Read one coordinate; start coordinates are always `Some`
    pub fn get(&self, field: Field) -> Option<u32> {
        match field {
            Field::StartRow => Some(self.start_row),
            Field::StartCol => Some(self.start_col),
            Field::EndRow => self.end_row,
            Field::EndCol => self.end_col,
        }
    }

    /// Apply an operation to one coordinate and re-normalize
    ///
    /// `None` leaves the range untouched.
    pub fn apply(&mut self, field: Field, op: Option<FieldOp>) -> &mut Self {
        let Some(op) = op else {
            return self;
        };

        let current = self.get(field).map_or(0, i64::from);
        let next = match op {
            FieldOp::Add(n) => Some(current.saturating_add(n)),
            FieldOp::Sub(n) => Some(current.saturating_sub(n)),
            FieldOp::Set(value) => value,
        };

        match field {
            Field::StartRow => self.start_row = next.map_or(1, clamp),
            Field::StartCol => self.start_col = next.map_or(1, clamp),
            Field::EndRow => self.end_row = next.map(clamp),
            Field::EndCol => self.end_col = next.map(clamp),
        }

        self.normalize()
    }

    pub fn add_start_row(&mut self, n: i64) -> &mut Self {
        self.apply(Field::StartRow, Some(FieldOp::Add(n)))
    }

    pub fn sub_start_row(&mut self, n: i64) -> &mut Self {
        self.apply(Field::StartRow, Some(FieldOp::Sub(n)))
    }

    /// Set the start row; `None` resets it to 1
    pub fn set_start_row(&mut self, value: Option<i64>) -> &mut Self {
        self.apply(Field::StartRow, Some(FieldOp::Set(value)))
    }

    pub fn add_start_col(&mut self, n: i64) -> &mut Self {
        self.apply(Field::StartCol, Some(FieldOp::Add(n)))
    }

    pub fn sub_start_col(&mut self, n: i64) -> &mut Self {
        self.apply(Field::StartCol, Some(FieldOp::Sub(n)))
    }

    /// Set the start column; `None` resets it to 1
    pub fn set_start_col(&mut self, value: Option<i64>) -> &mut Self {
        self.apply(Field::StartCol, Some(FieldOp::Set(value)))
    }

    /// Add to the end row; an open end counts as 0
    pub fn add_end_row(&mut self, n: i64) -> &mut Self {
        self.apply(Field::EndRow, Some(FieldOp::Add(n)))
    }

    pub fn sub_end_row(&mut self, n: i64) -> &mut Self {
        self.apply(Field::EndRow, Some(FieldOp::Sub(n)))
    }

    /// Set the end row; `None` makes the rows open-ended
    pub fn set_end_row(&mut self, value: Option<i64>) -> &mut Self {
        self.apply(Field::EndRow, Some(FieldOp::Set(value)))
    }

    /// Add to the end column; an open end counts as 0
    pub fn add_end_col(&mut self, n: i64) -> &mut Self {
        self.apply(Field::EndCol, Some(FieldOp::Add(n)))
    }

    pub fn sub_end_col(&mut self, n: i64) -> &mut Self {
        self.apply(Field::EndCol, Some(FieldOp::Sub(n)))
    }

    /// Set the end column; `None` makes the columns open-ended
    pub fn set_end_col(&mut self, value: Option<i64>) -> &mut Self {
        self.apply(Field::EndCol, Some(FieldOp::Set(value)))
    }

    pub fn set_sheet_name<S: Into<String>>(&mut self, sheet_name: Option<S>) -> &mut Self {
        self.sheet_name = sheet_name.map(Into::into);
        self
    }

    /// Builder form of [`RangeAddress::set_sheet_name`]
    pub fn with_sheet_name<S: Into<String>>(mut self, sheet_name: Option<S>) -> Self {
        self.set_sheet_name(sheet_name);
        self
    }

    /// An independent copy with identical fields
    pub fn copy(&self, mode: CopyMode) -> Self {
        match mode {
            CopyMode::Shallow | CopyMode::Deep => self.clone(),
        }
    }

    /// Move the range down one row
    ///
    /// Without `truncate` the whole window slides (`B2:D10` becomes `B3:D11`).
    /// With `truncate` only the top edge moves and the window shrinks
    /// (`B2:D10` becomes `B3:D10`). An open-ended row bound stays open.
    pub fn jump_row(&mut self, truncate: bool) -> &mut Self {
        self.add_start_row(1);
        if !truncate && self.end_row.is_some() {
            self.add_end_row(1);
        }
        self
    }

    /// A new range spanning rows relative to this range's start row
    ///
    /// Rows are `start_row + start_offset ..= start_row + end_offset`; without
    /// an end offset the result is the single row at `start_offset`. Negative
    /// offsets reach above the start row. The sheet name and the column bounds
    /// are kept.
    ///
    /// # Examples
    /// ```
    /// use sheet_range::RangeAddress;
    ///
    /// let table = RangeAddress::parse("Data!B5:D").unwrap();
    /// assert_eq!(table.new_range_by_row(0, None).to_string(), "Data!B5:D5");
    /// assert_eq!(table.new_range_by_row(-2, Some(1)).to_string(), "Data!B3:D6");
    /// ```
    pub fn new_range_by_row(&self, start_offset: i64, end_offset: Option<i64>) -> Self {
        let base = i64::from(self.start_row);
        let mut range = self.clone();
        let start = base.saturating_add(start_offset);
        let end = end_offset.map_or(start, |offset| base.saturating_add(offset));

        range.set_end_row(None).set_start_row(Some(start)).set_end_row(Some(end));
        range
    }

    pub fn sheet_name(&self) -> Option<&str> {
        self.sheet_name.as_deref()
    }

    /// Start row (1-based)
    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    /// Start row as a 0-based index
    pub fn start_row_index(&self) -> u32 {
        self.start_row - 1
    }

    /// Start column (1-based)
    pub fn start_col(&self) -> u32 {
        self.start_col
    }

    /// Start column as a 0-based index
    pub fn start_col_index(&self) -> u32 {
        self.start_col - 1
    }

    pub fn end_row(&self) -> Option<u32> {
        self.end_row
    }

    pub fn end_col(&self) -> Option<u32> {
        self.end_col
    }

    pub fn start_letter(&self) -> String {
        number_to_letters(self.start_col)
    }

    pub fn end_letter(&self) -> Option<String> {
        self.end_col.map(number_to_letters)
    }

    /// Start cell reference, e.g. `B2`
    pub fn start_ref(&self) -> String {
        start_segment(self.start_col, self.start_row)
    }

    /// Start cell reference with the 0-based row, e.g. `B1` for `B2`
    pub fn start_ref_zero_based(&self) -> String {
        start_segment(self.start_col, self.start_row_index())
    }

    /// End reference; `None` for a start-only range, bare letters when rows are open
    pub fn end_ref(&self) -> Option<String> {
        end_segment(self.end_col, self.end_row)
    }

    /// Rows covered, `None` when rows are open-ended
    pub fn row_count(&self) -> Option<u32> {
        self.end_row.map(|end| end - self.start_row + 1)
    }

    /// Columns covered, `None` when columns are open-ended
    pub fn col_count(&self) -> Option<u32> {
        self.end_col.map(|end| end - self.start_col + 1)
    }

    /// True when no end bound is set at all
    pub fn is_single_cell(&self) -> bool {
        self.end_row.is_none() && self.end_col.is_none()
    }

    /// Format as A1 notation, e.g. `Sheet1!B2:D10`
    pub fn to_a1_string(&self) -> String {
        render(
            self.sheet_name(),
            self.start_col,
            self.start_row,
            self.end_col,
            self.end_row,
        )
    }

    /// Export the five fields as a plain record
    pub fn to_record(&self) -> RangeRecord {
        RangeRecord {
            sheet_name: self.sheet_name.clone(),
            start_row: self.start_row,
            start_col: self.start_col,
            end_row: self.end_row,
            end_col: self.end_col,
        }
    }

    /// Export as a zero-based, end-exclusive grid window
    pub fn to_grid_range(&self) -> GridRange {
        GridRange {
            sheet_name: self.sheet_name.clone(),
            start_row_index: self.start_row_index(),
            start_column_index: self.start_col_index(),
            end_row_index: self.end_row,
            end_column_index: self.end_col,
        }
    }
}

impl From<Notation> for RangeAddress {
    fn from(notation: Notation) -> Self {
        let mut range = Self {
            sheet_name: notation.sheet_name,
            start_row: notation.start_row,
            start_col: notation.start_col,
            end_row: notation.end_row,
            end_col: notation.end_col,
        };
        range.normalize();
        range
    }
}

impl From<&RangeAddress> for RangeAddress {
    fn from(other: &RangeAddress) -> Self {
        other.clone()
    }
}

impl From<RangeRecord> for RangeAddress {
    fn from(record: RangeRecord) -> Self {
        Self::from_coords(
            record.sheet_name.as_deref(),
            Some(i64::from(record.start_col)),
            Some(i64::from(record.start_row)),
            record.end_col.map(i64::from),
            record.end_row.map(i64::from),
        )
    }
}

impl fmt::Display for RangeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for RangeAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for RangeAddress {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RangeAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_a1_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RangeAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
