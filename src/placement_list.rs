//! `placement_list` — reading batches of word placements.
//!
//! One placement per line in the form `x,y,orientation,content`. Blank lines
//! and lines starting with `#` are skipped. The first placement seeds a board,
//! the rest are offered to it in file order.

use crate::crossword::Crossword;
use crate::errors::ParseError;
use crate::word::Word;

#[derive(Debug, Clone, Default)]
pub struct PlacementList {
    pub words: Vec<Word>,
}

impl PlacementList {
    /// Parse placements from an in-memory string.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError::LineError`] naming the first malformed line.
    pub fn parse_from_str(contents: &str) -> Result<PlacementList, Box<ParseError>> {
        let words = contents
            .lines()
            .enumerate()
            .map(|(idx, raw_line)| (idx + 1, raw_line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
            .map(|(line_no, line)| {
                line.parse::<Word>().map_err(|e| {
                    Box::new(ParseError::LineError { line: line_no, source: Box::new(e) })
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PlacementList { words })
    }

    /// Read a file of placements and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path` or if a line
    /// is not a valid placement.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<PlacementList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read placements from '{}': {}", path_ref.display(), e),
            )
        })?;

        Self::parse_from_str(&data).map_err(|pe| (*pe).into())
    }

    /// Board seeded with the first placement; the others are offered in order.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoPlacements`] for an empty list.
    pub fn build(&self) -> Result<Crossword, Box<ParseError>> {
        let (seed, rest) = self.words.split_first().ok_or(ParseError::NoPlacements)?;
        Ok(Crossword::new(seed.clone(), rest.iter().cloned()))
    }
}

impl From<Vec<Word>> for PlacementList {
    fn from(words: Vec<Word>) -> Self {
        PlacementList { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_parse_basic() {
        let list = PlacementList::parse_from_str("1,1,H,computer\n3,1,V,memory").unwrap();
        assert_eq!(list.words.len(), 2);
        assert_eq!(list.words[1].start(), Position::new(3, 1));
        assert_eq!(list.words[1].content(), "MEMORY");
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let input = "# board one\n\n  1,1,H,computer  \n\n# crossing\n3,1,V,memory\n";
        let list = PlacementList::parse_from_str(input).unwrap();
        assert_eq!(list.words.len(), 2);
    }

    #[test]
    fn test_parse_reports_line_number() {
        let input = "1,1,H,computer\n\n3,1,Q,memory";
        let err = PlacementList::parse_from_str(input).unwrap_err();
        match *err {
            ParseError::LineError { line, ref source } => {
                assert_eq!(line, 3);
                assert_eq!(source.code(), "E003");
            }
            ref other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_input() {
        let list = PlacementList::parse_from_str("").unwrap();
        assert!(list.words.is_empty());
        assert!(matches!(*list.build().unwrap_err(), ParseError::NoPlacements));
    }

    #[test]
    fn test_build_skips_colliding_words() {
        let input = "1,1,H,computer\n3,1,V,memory\n2,4,H,programme\n2,5,H,programming";
        let board = PlacementList::parse_from_str(input).unwrap().build().unwrap();
        assert_eq!(board.word_count(), (2, 1));
        assert_eq!(board.size(), (12, 6));
    }

    #[test]
    fn test_load_from_missing_path() {
        let err = PlacementList::load_from_path("/nonexistent/placements.txt").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("/nonexistent/placements.txt"));
    }
}
