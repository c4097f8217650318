//! Incrementally built crossword boards.
//!
//! A [`Crossword`](crossword::Crossword) stores horizontal and vertical
//! [`Word`](word::Word)s that agree on every shared cell and do not touch
//! anywhere else. Placement, point lookup and merging live in [`crossword`];
//! [`render`] turns a board into text.

pub mod bounding_box;
pub mod crossword;
pub mod errors;
pub mod log;
pub mod placement_list;
pub mod position;
pub mod render;
pub mod word;

pub use bounding_box::BoundingBox;
pub use crossword::Crossword;
pub use position::{Orientation, Position};
pub use word::Word;
