//! This module contains the error and result definitions used in this
//! crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// An enumeration of the errors that may occur when parsing a
/// [Grid](crate::Grid) from a code.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// is not exactly 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than 9).
    InvalidNumber
}

impl From<ParseIntError> for ParseError {
    fn from(_: ParseIntError) -> Self {
        ParseError::NumberFormatError
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongNumberOfCells =>
                write!(f, "number of cells is not 81"),
            ParseError::NumberFormatError =>
                write!(f, "cell entry is not a number"),
            ParseError::InvalidNumber =>
                write!(f, "cell number is not in the range [1, 9]")
        }
    }
}

/// Syntactic sugar for `Result<V, ParseError>`.
pub type ParseResult<V> = Result<V, ParseError>;
