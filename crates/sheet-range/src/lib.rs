//! # sheet-range
//!
//! Spreadsheet range addresses in A1 notation.
//!
//! This crate provides:
//! - [`RangeAddress`] - A rectangular region of a sheet, optionally bound to a named sheet
//! - [`column`] - Bijective base-26 column names (`A` = 1, `Z` = 26, `AA` = 27)
//! - [`notation`] - The A1 notation parser and serializer
//! - [`RangeRecord`] and [`GridRange`] - Plain exports for building API payloads
//! - [`last`] - An opt-in process-wide "last range produced" slot
//!
//! Ranges only ever fail at construction. Once built, every mutation clamps
//! into a well-formed range instead of erroring.
//!
//! ## Example
//!
//! ```rust
//! use sheet_range::RangeAddress;
//!
//! let mut header = RangeAddress::parse("Sheet1!B2:D2").unwrap();
//!
//! // The body starts one row below the header and runs to the end of the sheet
//! let mut body = header.clone();
//! body.jump_row(false).set_end_row(None);
//! assert_eq!(body.to_string(), "Sheet1!B3:D");
//!
//! // Size a range from the data that will be written into it
//! let data = vec![vec!["a", "b", "c"]; 5];
//! let target = RangeAddress::by_data(&data, &body);
//! assert_eq!(target.to_string(), "Sheet1!B3:D7");
//!
//! header.add_end_col(1);
//! assert_eq!(header.to_string(), "Sheet1!B2:E2");
//! ```

pub mod column;
pub mod error;
pub mod last;
pub mod notation;
pub mod range;
pub mod record;

// Re-exports for convenience
pub use error::{Error, Result};
pub use notation::Notation;
pub use range::{CopyMode, Field, FieldOp, RangeAddress, RangeSource};
pub use record::{GridRange, RangeRecord};
