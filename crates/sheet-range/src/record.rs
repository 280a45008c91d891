//! Plain structural exports of a range
//!
//! These are what callers feed into protocol-specific payloads. Neither type
//! enforces range invariants on its own; convert back through
//! [`RangeAddress`](crate::RangeAddress) to get a normalized value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The five logical fields of a range, 1-based
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangeRecord {
    pub sheet_name: Option<String>,
    pub start_row: u32,
    pub start_col: u32,
    /// `None` when rows are open-ended
    pub end_row: Option<u32>,
    /// `None` when columns are open-ended
    pub end_col: Option<u32>,
}

/// A zero-based grid window with exclusive end bounds
///
/// This is the shape remote spreadsheet APIs use for grid ranges. Start
/// indices are the 1-based coordinates minus one. Exclusive zero-based ends
/// are numerically equal to the inclusive 1-based ends, so they carry over
/// unchanged. Mapping the sheet name to a numeric sheet id is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GridRange {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub sheet_name: Option<String>,
    pub start_row_index: u32,
    pub start_column_index: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub end_row_index: Option<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub end_column_index: Option<u32>,
}

impl GridRange {
    /// Rows covered, `None` when the window is open at the bottom
    pub fn row_span(&self) -> Option<u32> {
        self.end_row_index
            .map(|end| end.saturating_sub(self.start_row_index))
    }

    /// Columns covered, `None` when the window is open on the right
    pub fn column_span(&self) -> Option<u32> {
        self.end_column_index
            .map(|end| end.saturating_sub(self.start_column_index))
    }
}

#[cfg(test)]
mod tests {
    use crate::RangeAddress;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grid_range_matches_record() {
        let range = RangeAddress::parse("Sheet1!B2:D10").unwrap();
        let record = range.to_record();
        let grid = range.to_grid_range();

        assert_eq!(grid.sheet_name, record.sheet_name);
        assert_eq!(grid.start_row_index, record.start_row - 1);
        assert_eq!(grid.start_column_index, record.start_col - 1);
        assert_eq!(grid.end_row_index, record.end_row);
        assert_eq!(grid.end_column_index, record.end_col);
    }

    #[test]
    fn test_grid_spans() {
        let grid = RangeAddress::parse("B2:D10").unwrap().to_grid_range();
        assert_eq!(grid.row_span(), Some(9));
        assert_eq!(grid.column_span(), Some(3));

        let open = RangeAddress::parse("A1").unwrap().to_grid_range();
        assert_eq!(open.row_span(), None);
        assert_eq!(open.column_span(), None);
    }
}
