//! Text rendering of a board.
//!
//! Each row of the board's area becomes one line, cells separated by a single
//! space. Letters print as themselves, non-alphabetic content as
//! [`PLACEHOLDER`], and empty cells as the configured background.

use crate::crossword::Crossword;
use crate::word::PLACEHOLDER;
use std::fmt;

pub const DEFAULT_BACKGROUND: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Printed for cells no word covers.
    pub background: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { background: DEFAULT_BACKGROUND }
    }
}

impl RenderConfig {
    pub fn with_background(background: char) -> Self {
        Self { background }
    }

    fn cell(&self, letter: Option<char>) -> char {
        match letter {
            Some(c) if c.is_alphabetic() => c,
            Some(_) => PLACEHOLDER,
            None => self.background,
        }
    }
}

fn write_board(f: &mut impl fmt::Write, board: &Crossword, config: &RenderConfig) -> fmt::Result {
    let area = board.area();
    if area.is_empty() {
        return Ok(());
    }
    let (left, top) = (area.left_top().x, area.left_top().y);
    let (right, bottom) = (area.right_bottom().x, area.right_bottom().y);

    for y in top..=bottom {
        if y > top {
            f.write_char('\n')?;
        }
        for x in left..=right {
            if x > left {
                f.write_char(' ')?;
            }
            f.write_char(config.cell(board.letter_at((x, y).into())))?;
        }
    }
    Ok(())
}

/// The board as text, rows separated by `\n` (no trailing newline).
pub fn render(board: &Crossword, config: &RenderConfig) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_board(&mut out, board, config);
    out
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_board(f, self, &RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{Orientation, Position};
    use crate::word::Word;
    use Orientation::{Horizontal as H, Vertical as V};

    fn word(x: usize, y: usize, o: Orientation, content: &str) -> Word {
        Word::new(Position::new(x, y), o, content)
    }

    #[test]
    fn test_render_crossing_words() {
        let board = Crossword::new(word(0, 0, H, "syrop"), [word(0, 0, V, "ssak")]);
        let expected = "\
S Y R O P
S . . . .
A . . . .
K . . . .";
        assert_eq!(board.to_string(), expected);
        assert_eq!(render(&board, &RenderConfig::default()), expected);
    }

    #[test]
    fn test_render_uses_configured_background() {
        let board = Crossword::new(word(2, 1, V, "ab"), [word(1, 2, H, "xb")]);
        assert_eq!(render(&board, &RenderConfig::with_background('~')), "~ A\nX B");
    }

    #[test]
    fn test_render_non_alphabetic_as_placeholder() {
        let board = Crossword::new(word(0, 0, H, "c++20"), []);
        assert_eq!(board.to_string(), "C ? ? ? ?");
    }

    #[test]
    fn test_render_spaces_in_content() {
        let board = Crossword::new(word(10, 10, V, "a b"), []);
        assert_eq!(board.to_string(), "A\n?\nB");
    }
}
