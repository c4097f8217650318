//! Error types with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Parsing placements (`x,y,orientation,content`):
//!
//! - E001: `MissingField` (Placement has fewer than four fields)
//! - E002: `InvalidCoordinate` (Coordinate is not a non-negative integer)
//! - E003: `InvalidOrientation` (Orientation is not H or V)
//! - E004: `NoPlacements` (Nothing to build a board from)
//! - E005: `LineError` (Error on a line of a placement list (wraps another error))
//!
//! Refused placements (see [`Collision`]):
//!
//! - C001: `Duplicate`
//! - C002: `OccupiedBefore`
//! - C003: `OccupiedAfter`
//! - C004: `LetterMismatch`
//! - C005: `SideContact`
//!
//! # Examples
//!
//! ```
//! use crosswords::errors::ParseError;
//! use crosswords::word::Word;
//!
//! match "1,1,X,computer".parse::<Word>() {
//!     Err(e) => {
//!         assert_eq!(e.code(), "E003");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use crate::position::{Orientation, Position};
use std::io;
use std::num::ParseIntError;

/// Errors reading placements from text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Placement \"{input}\" is missing its {field} field")]
    MissingField { field: &'static str, input: String },

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(#[from] ParseIntError),

    #[error("Invalid orientation \"{input}\"")]
    InvalidOrientation { input: String },

    #[error("No placements given")]
    NoPlacements,

    #[error("Error on line {line}: {source}")]
    LineError {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl From<ParseError> for io::Error {
    fn from(pe: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, pe.to_string())
    }
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::MissingField { .. } => "E001",
            ParseError::InvalidCoordinate(_) => "E002",
            ParseError::InvalidOrientation { .. } => "E003",
            ParseError::NoPlacements => "E004",
            ParseError::LineError { .. } => "E005",
        }
    }

    /// Returns a short description of this error type
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::MissingField { .. } => "Placement has fewer than four fields",
            ParseError::InvalidCoordinate(_) => "Coordinate is not a non-negative integer",
            ParseError::InvalidOrientation { .. } => "Orientation is not H or V",
            ParseError::NoPlacements => "Nothing to build a board from",
            ParseError::LineError { .. } => "Error on a line of a placement list",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::MissingField { .. } => Some("Expected format: x,y,orientation,content (e.g., '1,1,H,computer')"),
            ParseError::InvalidCoordinate(_) => Some("Coordinates are column and row numbers starting at 0"),
            ParseError::InvalidOrientation { .. } => Some("Use H (or horizontal) for across words and V (or vertical) for down words"),
            ParseError::NoPlacements => Some("Give at least one placement; the first one seeds the board"),
            ParseError::LineError { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            // the wrapped error carries the useful help
            ParseError::LineError { source, .. } => format_error_with_code_and_help(
                &self.to_string(),
                &format!("{}/{}", self.code(), source.code()),
                source.help(),
            ),
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// Why a word could not be placed on a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Collision {
    #[error("a word oriented {orientation} already starts at {start}")]
    Duplicate { start: Position, orientation: Orientation },

    #[error("cell {cell} just before the word is occupied")]
    OccupiedBefore { cell: Position },

    #[error("cell {cell} just after the word is occupied")]
    OccupiedAfter { cell: Position },

    #[error("cell {cell} holds '{existing}', not '{proposed}'")]
    LetterMismatch { cell: Position, existing: char, proposed: char },

    #[error("letter at {cell} would touch the occupied cell {neighbor}")]
    SideContact { cell: Position, neighbor: Position },
}

impl Collision {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Collision::Duplicate { .. } => "C001",
            Collision::OccupiedBefore { .. } => "C002",
            Collision::OccupiedAfter { .. } => "C003",
            Collision::LetterMismatch { .. } => "C004",
            Collision::SideContact { .. } => "C005",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Collision::Duplicate { .. } => "A word with the same start and orientation is already placed",
            Collision::OccupiedBefore { .. } => "The word would touch another word at its start",
            Collision::OccupiedAfter { .. } => "The word would touch another word at its end",
            Collision::LetterMismatch { .. } => "The word disagrees with a crossing word",
            Collision::SideContact { .. } => "The word would run alongside another word",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Collision::Duplicate { .. } => Some("Each start cell holds at most one across and one down word"),
            Collision::OccupiedBefore { .. } | Collision::OccupiedAfter { .. } => {
                Some("Leave an empty cell between words on the same line")
            }
            Collision::LetterMismatch { .. } => None,
            Collision::SideContact { .. } => Some("Only crossing cells may touch other words"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
