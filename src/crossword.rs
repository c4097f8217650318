//! The crossword board: placement validation, spatial lookup and merging.
//!
//! Words are owned by a single arena in insertion order. Two ordered indexes,
//! one per orientation, map a word's [`Orientation::axis_key`] to its slot in
//! the arena, so a point lookup only has to look at the closest preceding
//! starts on the point's row and column.
//!
//! ```
//! use crosswords::crossword::Crossword;
//! use crosswords::position::{Orientation, Position};
//! use crosswords::word::Word;
//!
//! let computer = Word::new(Position::new(1, 1), Orientation::Horizontal, "computer");
//! let memory = Word::new(Position::new(3, 1), Orientation::Vertical, "memory");
//! let board = Crossword::new(computer, [memory]);
//!
//! assert_eq!(board.size(), (8, 6));
//! assert_eq!(board.word_count(), (1, 1));
//! assert_eq!(board.letter_at(Position::new(3, 4)), Some('O'));
//! ```

use crate::bounding_box::BoundingBox;
use crate::errors::Collision;
use crate::position::{Orientation, Position};
use crate::word::{letters_match, Word};
use log::debug;
use std::collections::BTreeMap;

type AxisIndex = BTreeMap<(usize, usize), usize>;

#[derive(Debug, Clone)]
pub struct Crossword {
    /// Every placed word, in insertion order.
    words: Vec<Word>,
    horizontal: AxisIndex,
    vertical: AxisIndex,
    /// Union of the bounding boxes of all placed words.
    area: BoundingBox,
}

impl Crossword {
    /// Board seeded with `seed`, then every word of `others` offered in order.
    /// Words that collide are left out.
    pub fn new(seed: Word, others: impl IntoIterator<Item = Word>) -> Self {
        let mut crossword = Crossword {
            words: Vec::new(),
            horizontal: AxisIndex::new(),
            vertical: AxisIndex::new(),
            area: BoundingBox::EMPTY,
        };
        crossword.insert_word(&seed);
        for word in others {
            crossword.insert_word(&word);
        }
        crossword
    }

    fn index(&self, orientation: Orientation) -> &AxisIndex {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn index_mut(&mut self, orientation: Orientation) -> &mut AxisIndex {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    /// Letter of the `orientation` word covering `pos`, if any.
    ///
    /// Walks back from the closest start not past `pos` on the same line; the
    /// first candidate covers `pos` unless words on that line overlap.
    fn letter_on_axis(&self, orientation: Orientation, pos: Position) -> Option<char> {
        let key = orientation.axis_key(pos);
        self.index(orientation)
            .range(..=key)
            .rev()
            .take_while(|((line, _), _)| *line == key.0)
            .find_map(|(_, &slot)| self.words[slot].letter_at(pos))
    }

    /// Letter at `pos`; horizontal words take precedence over vertical ones.
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.letter_on_axis(Orientation::Horizontal, pos)
            .or_else(|| self.letter_on_axis(Orientation::Vertical, pos))
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.letter_at(pos).is_some()
    }

    /// First reason `word` cannot be placed, or `None` if it fits.
    pub fn check_collision(&self, word: &Word) -> Option<Collision> {
        let orientation = word.orientation();

        if self.index(orientation).contains_key(&orientation.axis_key(word.start())) {
            return Some(Collision::Duplicate { start: word.start(), orientation });
        }

        if let Some(cell) = word.start().step_back(orientation) {
            if self.is_occupied(cell) {
                return Some(Collision::OccupiedBefore { cell });
            }
        }
        if let Some(cell) = word.end().step_forward(orientation) {
            if self.is_occupied(cell) {
                return Some(Collision::OccupiedAfter { cell });
            }
        }

        let side = orientation.perpendicular();
        for (cell, proposed) in word.cells() {
            match self.letter_at(cell) {
                Some(existing) => {
                    if !letters_match(existing, proposed) {
                        return Some(Collision::LetterMismatch { cell, existing, proposed });
                    }
                }
                None => {
                    let neighbors = [cell.step_back(side), cell.step_forward(side)];
                    if let Some(neighbor) = neighbors.into_iter().flatten().find(|n| self.is_occupied(*n)) {
                        return Some(Collision::SideContact { cell, neighbor });
                    }
                }
            }
        }

        None
    }

    pub fn does_collide(&self, word: &Word) -> bool {
        self.check_collision(word).is_some()
    }

    /// Place a copy of `word`, or report why it does not fit. A refused word
    /// leaves the board untouched.
    pub fn try_insert_word(&mut self, word: &Word) -> Result<(), Collision> {
        if let Some(collision) = self.check_collision(word) {
            debug!("Refused {word}: {collision}");
            return Err(collision);
        }

        let orientation = word.orientation();
        let slot = self.words.len();
        self.index_mut(orientation).insert(orientation.axis_key(word.start()), slot);
        self.words.push(word.clone());
        self.area.embrace(word.start());
        self.area.embrace(word.end());

        debug!("Placed {word}; board is now {:?}", self.area.size());
        Ok(())
    }

    /// Place a copy of `word` if it fits. Returns whether it was placed.
    pub fn insert_word(&mut self, word: &Word) -> bool {
        self.try_insert_word(word).is_ok()
    }

    /// Offer every word of `other`, in its insertion order, to this board.
    /// Words that do not fit are dropped. Returns how many were placed.
    pub fn merge_from(&mut self, other: &Crossword) -> usize {
        let placed = other.words().filter(|word| self.insert_word(word)).count();
        debug!("Merged {placed} of {} words", other.words.len());
        placed
    }

    /// Non-mutating form of [`Crossword::merge_from`].
    #[must_use]
    pub fn merged(&self, other: &Crossword) -> Crossword {
        let mut combined = self.clone();
        combined.merge_from(other);
        combined
    }

    /// Placed words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.words.iter()
    }

    pub fn area(&self) -> BoundingBox {
        self.area
    }

    /// `(width, height)` of the area covered by words.
    pub fn size(&self) -> (usize, usize) {
        self.area.size()
    }

    /// `(horizontal, vertical)` word counts.
    pub fn word_count(&self) -> (usize, usize) {
        (self.horizontal.len(), self.vertical.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Orientation::{Horizontal as H, Vertical as V};

    fn word(x: usize, y: usize, o: Orientation, content: &str) -> Word {
        Word::new(Position::new(x, y), o, content)
    }

    fn computer_memory() -> Crossword {
        Crossword::new(word(1, 1, H, "computer"), [word(3, 1, V, "memory")])
    }

    #[test]
    fn test_seed_only() {
        let board = Crossword::new(word(1, 1, H, "COMPUTER"), []);
        assert_eq!(board.size(), (8, 1));
        assert_eq!(board.word_count(), (1, 0));
        assert_eq!(board.area(), BoundingBox::new(Position::new(1, 1), Position::new(8, 1)));
    }

    #[test]
    fn test_crossing_word_is_accepted() {
        let board = computer_memory();
        assert_eq!(board.word_count(), (1, 1));
        assert_eq!(board.size(), (8, 6));
    }

    #[test]
    fn test_letter_at() {
        let board = computer_memory();
        assert_eq!(board.letter_at(Position::new(1, 1)), Some('C'));
        assert_eq!(board.letter_at(Position::new(3, 1)), Some('M'));
        assert_eq!(board.letter_at(Position::new(8, 1)), Some('R'));
        assert_eq!(board.letter_at(Position::new(3, 6)), Some('Y'));
        assert_eq!(board.letter_at(Position::new(9, 1)), None);
        assert_eq!(board.letter_at(Position::new(4, 2)), None);
        assert_eq!(board.letter_at(Position::new(0, 0)), None);
    }

    #[test]
    fn test_letter_at_skips_words_on_other_lines() {
        let board = Crossword::new(word(0, 0, H, "abc"), [word(0, 2, H, "xyz")]);
        // closest preceding horizontal start is on row 0, which does not cover row 1
        assert_eq!(board.letter_at(Position::new(5, 1)), None);
        assert_eq!(board.letter_at(Position::new(2, 2)), Some('Z'));
        assert_eq!(board.letter_at(Position::new(3, 2)), None);
    }

    #[test]
    fn test_mismatch_is_refused_without_changes() {
        let mut board = computer_memory();
        let before = (board.size(), board.word_count());
        let result = board.try_insert_word(&word(2, 4, H, "programme"));
        assert_eq!(
            result,
            Err(Collision::LetterMismatch { cell: Position::new(3, 4), existing: 'O', proposed: 'R' })
        );
        assert_eq!((board.size(), board.word_count()), before);
    }

    #[test]
    fn test_end_to_end_contact_is_refused() {
        let mut board = Crossword::new(word(0, 0, H, "abc"), []);
        assert_eq!(
            board.try_insert_word(&word(3, 0, H, "def")),
            Err(Collision::OccupiedBefore { cell: Position::new(2, 0) })
        );
        assert_eq!(
            board.try_insert_word(&word(5, 5, V, "pq")),
            Ok(())
        );
        assert_eq!(
            board.try_insert_word(&word(5, 2, V, "xyz")),
            Err(Collision::OccupiedAfter { cell: Position::new(5, 5) })
        );
        assert_eq!(board.word_count(), (1, 1));
    }

    #[test]
    fn test_side_contact_is_refused() {
        let mut board = Crossword::new(word(0, 0, H, "abc"), []);
        // runs directly under ABC without crossing it
        assert_eq!(
            board.try_insert_word(&word(0, 1, H, "xyz")),
            Err(Collision::SideContact { cell: Position::new(0, 1), neighbor: Position::new(0, 0) })
        );
        // grazes the end of ABC sideways
        assert_eq!(
            board.try_insert_word(&word(3, 0, V, "no")),
            Err(Collision::SideContact { cell: Position::new(3, 0), neighbor: Position::new(2, 0) })
        );
        assert_eq!(board.word_count(), (1, 0));
    }

    #[test]
    fn test_diagonal_contact_is_allowed() {
        let mut board = Crossword::new(word(0, 0, H, "abc"), []);
        assert!(board.insert_word(&word(3, 1, V, "de")));
        assert_eq!(board.size(), (4, 3));
    }

    #[test]
    fn test_placeholder_matches_any_letter() {
        let mut board = Crossword::new(word(0, 1, H, "cat"), []);
        assert!(board.insert_word(&word(1, 0, V, "?a?")));
        assert_eq!(board.letter_at(Position::new(1, 1)), Some('A'));
        assert_eq!(board.letter_at(Position::new(1, 0)), Some('?'));
    }

    #[test]
    fn test_duplicate_start_is_refused() {
        let mut board = Crossword::new(word(1, 1, H, "computer"), []);
        assert_eq!(
            board.try_insert_word(&word(1, 1, H, "computers")),
            Err(Collision::Duplicate { start: Position::new(1, 1), orientation: H })
        );
        assert!(board.insert_word(&word(1, 1, V, "cat")));
        assert_eq!(board.word_count(), (1, 1));
    }

    #[test]
    fn test_seed_at_origin_has_no_cells_before_it() {
        let board = Crossword::new(word(0, 0, H, "syrop"), [word(0, 0, V, "Ssak")]);
        assert_eq!(board.word_count(), (1, 1));
        assert_eq!(board.size(), (5, 4));
    }

    #[test]
    fn test_words_in_insertion_order() {
        let board = Crossword::new(
            word(3, 1, V, "memory"),
            [word(1, 1, H, "computer"), word(2, 4, H, "unplaced"), word(5, 8, H, "err")],
        );
        let order: Vec<String> = board.words().map(Word::content).collect();
        assert_eq!(order, vec!["MEMORY", "COMPUTER", "ERR"]);
    }

    #[test]
    fn test_merged_leaves_operands_untouched() {
        let a = Crossword::new(word(0, 0, H, "syrop"), [word(0, 0, V, "ssak")]);
        let b = Crossword::new(word(4, 0, V, "pies"), []);
        let c = b.merged(&a);
        assert_eq!(c.word_count(), (1, 2));
        assert_eq!(c.size(), (5, 4));
        assert_eq!(a.word_count(), (1, 1));
        assert_eq!(b.word_count(), (0, 1));
    }

    #[test]
    fn test_merge_drops_colliding_words() {
        let mut a = Crossword::new(word(0, 0, H, "abc"), []);
        let b = Crossword::new(word(0, 1, H, "xyz"), [word(10, 10, V, "far")]);
        assert_eq!(a.merge_from(&b), 1);
        assert_eq!(a.word_count(), (1, 1));
        assert_eq!(a.size(), (11, 13));
    }
}
