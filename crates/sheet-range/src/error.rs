//! Error types for sheet-range

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a [`RangeAddress`](crate::RangeAddress)
///
/// Only construction and parsing can fail. Range arithmetic never returns
/// an error, it clamps to the nearest well-formed range instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No range information was supplied at all
    #[error("A range is required, use the example structure: PageName!A6:F10")]
    EmptyRange,

    /// The text does not match any accepted A1 notation shape
    #[error("Range '{0}' in invalid format, use the example structure: PageName!A6:F10")]
    InvalidRangeFormat(String),
}

impl Error {
    /// Create an invalid-format error carrying the offending input
    pub fn invalid_format<S: Into<String>>(input: S) -> Self {
        Error::InvalidRangeFormat(input.into())
    }

    /// True for [`Error::EmptyRange`]
    pub fn is_empty_range(&self) -> bool {
        matches!(self, Error::EmptyRange)
    }

    /// True for [`Error::InvalidRangeFormat`]
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Error::InvalidRangeFormat(_))
    }

    /// The rejected input text, if this error carries one
    pub fn input(&self) -> Option<&str> {
        match self {
            Error::EmptyRange => None,
            Error::InvalidRangeFormat(input) => Some(input),
        }
    }
}
