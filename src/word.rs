//! Positioned words.
//!
//! A [`Word`] is immutable once built: a start cell, an orientation and its
//! uppercased letters. Identity is positional: two words with the same start
//! and orientation are equivalent whatever their letters.
//!
//! ```
//! use crosswords::position::{Orientation, Position};
//! use crosswords::word::Word;
//!
//! let w = Word::new(Position::new(1, 1), Orientation::Horizontal, "computer");
//! assert_eq!(w.content(), "COMPUTER");
//! assert_eq!(w.end(), Position::new(8, 1));
//! assert_eq!(w.letter_at(Position::new(3, 1)), Some('M'));
//! ```

use crate::bounding_box::BoundingBox;
use crate::errors::ParseError;
use crate::position::{Orientation, Position};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Reserved character for unknown letters: out-of-range offsets and empty content.
pub const PLACEHOLDER: char = '?';

/// Letter agreement used when checking placements: case-insensitive, and the
/// placeholder matches anything.
pub fn letters_match(a: char, b: char) -> bool {
    a == PLACEHOLDER || b == PLACEHOLDER || a.to_uppercase().eq(b.to_uppercase())
}

#[derive(Debug, Clone)]
pub struct Word {
    start: Position,
    orientation: Orientation,
    letters: Vec<char>,
}

impl Word {
    /// Build a word, uppercasing `content`. Empty content becomes a single
    /// [`PLACEHOLDER`].
    pub fn new(start: Position, orientation: Orientation, content: &str) -> Self {
        let mut letters: Vec<char> = content.chars().flat_map(char::to_uppercase).collect();
        if letters.is_empty() {
            letters.push(PLACEHOLDER);
        }
        Self { start, orientation, letters }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.pos_of_letter(self.letters.len() - 1)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: empty content is replaced by a placeholder letter.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn content(&self) -> String {
        self.letters.iter().collect()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Letter at `offset`, or [`PLACEHOLDER`] past the end.
    pub fn at(&self, offset: usize) -> char {
        self.letters.get(offset).copied().unwrap_or(PLACEHOLDER)
    }

    /// Letter covering `pos`, or `None` when `pos` is not on this word.
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        let (line, along) = self.orientation.axis_key(pos);
        let (start_line, start_along) = self.orientation.axis_key(self.start);
        if line != start_line || along < start_along {
            return None;
        }
        self.letters.get(along - start_along).copied()
    }

    /// Cell of the letter at `offset`.
    pub fn pos_of_letter(&self, offset: usize) -> Position {
        self.start.advanced(self.orientation, offset)
    }

    /// Every `(cell, letter)` pair of the word, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .map(move |(offset, &letter)| (self.pos_of_letter(offset), letter))
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.start, self.end())
    }

    /// Positional order: by start `x`, then start `y`, then horizontal before
    /// vertical. Letters take no part.
    pub fn compare(&self, other: &Word) -> Ordering {
        self.start
            .x
            .cmp(&other.start.x)
            .then(self.start.y.cmp(&other.start.y))
            .then(self.orientation.cmp(&other.orientation))
    }

    /// Same start and orientation.
    pub fn is_equivalent(&self, other: &Word) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.is_equivalent(other)
    }
}

impl Eq for Word {}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

/// Parses the placement form `x,y,orientation,content`, e.g. `3,1,V,memory`.
///
/// Content is everything after the third comma, so it may itself contain commas.
impl FromStr for Word {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.splitn(4, ',');
        let mut next_field = |name: &'static str| {
            fields.next().ok_or_else(|| ParseError::MissingField {
                field: name,
                input: s.to_string(),
            })
        };

        let x_raw = next_field("x")?;
        let y_raw = next_field("y")?;
        let orientation_raw = next_field("orientation")?;
        let content = next_field("content")?;

        let x = x_raw.trim().parse::<usize>()?;
        let y = y_raw.trim().parse::<usize>()?;
        let orientation = orientation_raw.parse::<Orientation>()?;

        Ok(Word::new(Position::new(x, y), orientation, content.trim()))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{},{}", self.start.x, self.start.y, self.orientation, self.content())
    }
}
