//! Grid coordinates and word orientation.

use crate::errors::ParseError;
use std::fmt;
use std::str::FromStr;

/// A cell on the board. Columns grow to the right (`x`), rows grow downwards (`y`).
///
/// The derived ordering is lexicographic by `(x, y)`; [`Position::transposed`]
/// gives the `(y, x)` key used for comparisons along rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn transposed(self) -> (usize, usize) {
        (self.y, self.x)
    }

    /// The cell `distance` steps further along `orientation`.
    #[inline]
    pub fn advanced(self, orientation: Orientation, distance: usize) -> Position {
        match orientation {
            Orientation::Horizontal => Position::new(self.x + distance, self.y),
            Orientation::Vertical => Position::new(self.x, self.y + distance),
        }
    }

    /// The neighbouring cell one step back along `orientation`, if it exists.
    #[inline]
    pub fn step_back(self, orientation: Orientation) -> Option<Position> {
        match orientation {
            Orientation::Horizontal => self.x.checked_sub(1).map(|x| Position::new(x, self.y)),
            Orientation::Vertical => self.y.checked_sub(1).map(|y| Position::new(self.x, y)),
        }
    }

    /// The neighbouring cell one step forward along `orientation`, if it exists.
    #[inline]
    pub fn step_forward(self, orientation: Orientation) -> Option<Position> {
        match orientation {
            Orientation::Horizontal => self.x.checked_add(1).map(|x| Position::new(x, self.y)),
            Orientation::Vertical => self.y.checked_add(1).map(|y| Position::new(self.x, y)),
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Position::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Growth direction of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    #[must_use]
    pub const fn perpendicular(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Key under which a word starting at `pos` is indexed for this orientation.
    ///
    /// The first component names the line the word lies on (row for horizontal
    /// words, column for vertical ones), the second is the offset along it, so
    /// the greatest key not above a cell's key is the only word on that line
    /// that can cover the cell.
    #[inline]
    pub const fn axis_key(self, pos: Position) -> (usize, usize) {
        match self {
            Orientation::Horizontal => pos.transposed(),
            Orientation::Vertical => (pos.x, pos.y),
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Orientation::Horizontal),
            "v" | "vertical" => Ok(Orientation::Vertical),
            _ => Err(ParseError::InvalidOrientation { input: s.to_string() }),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Orientation::Horizontal => "H",
            Orientation::Vertical => "V",
        };
        write!(f, "{s}")
    }
}
