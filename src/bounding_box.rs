//! Axis-aligned, inclusive rectangles on the board grid.
//!
//! A box is empty when its left-top corner lies past its right-bottom corner
//! on either axis. Every operation that produces an empty result returns
//! [`BoundingBox::EMPTY`], so two empty boxes always compare equal.

use crate::position::Position;
use std::fmt;

/// Rectangle spanning `left_top ..= right_bottom` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    left_top: Position,
    right_bottom: Position,
}

impl BoundingBox {
    pub const EMPTY: BoundingBox = BoundingBox {
        left_top: Position::new(1, 1),
        right_bottom: Position::new(0, 0),
    };

    /// Box with the given corners. No normalisation happens: a `left_top`
    /// past `right_bottom` yields an empty box.
    pub const fn new(left_top: Position, right_bottom: Position) -> Self {
        Self { left_top, right_bottom }
    }

    /// The one-cell box covering `p`.
    pub const fn point(p: Position) -> Self {
        Self::new(p, p)
    }

    pub fn left_top(&self) -> Position {
        self.left_top
    }

    pub fn right_bottom(&self) -> Position {
        self.right_bottom
    }

    pub fn left_bottom(&self) -> Position {
        Position::new(self.left_top.x, self.right_bottom.y)
    }

    pub fn right_top(&self) -> Position {
        Position::new(self.right_bottom.x, self.left_top.y)
    }

    pub fn set_left_top(&mut self, p: Position) {
        self.left_top = p;
    }

    pub fn set_right_bottom(&mut self, p: Position) {
        self.right_bottom = p;
    }

    pub fn set_left_bottom(&mut self, p: Position) {
        self.left_top.x = p.x;
        self.right_bottom.y = p.y;
    }

    pub fn set_right_top(&mut self, p: Position) {
        self.right_bottom.x = p.x;
        self.left_top.y = p.y;
    }

    pub fn is_empty(&self) -> bool {
        self.left_top.x > self.right_bottom.x || self.left_top.y > self.right_bottom.y
    }

    pub fn contains_point(&self, p: Position) -> bool {
        p.x >= self.left_top.x
            && p.y >= self.left_top.y
            && p.x <= self.right_bottom.x
            && p.y <= self.right_bottom.y
    }

    /// True iff all four corners of `other` lie inside `self`.
    pub fn contains_rect(&self, other: &BoundingBox) -> bool {
        self.contains_point(other.left_top())
            && self.contains_point(other.right_top())
            && self.contains_point(other.left_bottom())
            && self.contains_point(other.right_bottom())
    }

    /// Overlap of two boxes; [`BoundingBox::EMPTY`] when they share no cell.
    #[must_use]
    pub fn intersect(&self, other: &BoundingBox) -> BoundingBox {
        if self.is_empty() || other.is_empty() {
            return Self::EMPTY;
        }
        if self.contains_rect(other) {
            return *other;
        }
        if other.contains_rect(self) {
            return *self;
        }

        let overlap = BoundingBox::new(
            Position::new(
                self.left_top.x.max(other.left_top.x),
                self.left_top.y.max(other.left_top.y),
            ),
            Position::new(
                self.right_bottom.x.min(other.right_bottom.x),
                self.right_bottom.y.min(other.right_bottom.y),
            ),
        );
        if overlap.is_empty() {
            Self::EMPTY
        } else {
            overlap
        }
    }

    /// In-place form of [`BoundingBox::intersect`].
    pub fn intersect_with(&mut self, other: &BoundingBox) -> &mut Self {
        *self = self.intersect(other);
        self
    }

    /// `(width, height)` counting cells inclusively; `(0, 0)` when empty.
    pub fn size(&self) -> (usize, usize) {
        if self.is_empty() {
            return (0, 0);
        }
        (
            self.right_bottom.x - self.left_top.x + 1,
            self.right_bottom.y - self.left_top.y + 1,
        )
    }

    /// Grow the box just enough to cover `p`. An empty box collapses onto `p`.
    pub fn embrace(&mut self, p: Position) {
        if self.contains_point(p) {
            return;
        }
        if self.is_empty() {
            *self = Self::point(p);
            return;
        }

        if p.x < self.left_top.x {
            self.left_top.x = p.x;
        } else if p.x > self.right_bottom.x {
            self.right_bottom.x = p.x;
        }

        if p.y < self.left_top.y {
            self.left_top.y = p.y;
        } else if p.y > self.right_bottom.y {
            self.right_bottom.y = p.y;
        }
    }

    /// Row-major iterator over every cell of the box.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let (lt, rb) = (self.left_top, self.right_bottom);
        let rows = if self.is_empty() { 1..=0 } else { lt.y..=rb.y };
        rows.flat_map(move |y| (lt.x..=rb.x).map(move |x| Position::new(x, y)))
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            write!(f, "[empty]")
        } else {
            write!(f, "[{} .. {}]", self.left_top, self.right_bottom)
        }
    }
}
