//! Offset and coordinate primitives.
//!
//! All offsets are character offsets (Unicode scalar values) from the start of the buffer.
//! Regions are half-open (`start..end`), and a zero-width region is a caret.

use std::cmp::Ordering;
use std::fmt;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A half-open character-offset range (`start..end`) in a buffer.
///
/// Used both for lint marks and for selection ranges. `start <= end` always holds for regions
/// built through [`Region::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Range start offset (inclusive).
    pub start: usize,
    /// Range end offset (exclusive).
    pub end: usize,
}

impl Region {
    /// Create a region from two offsets, in either order.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Create a zero-width region (a caret) at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns `true` if the region has zero width.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Width of the region in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if `point` lies inside the region, counting both ends.
    ///
    /// A caret sitting right after the last character of a mark is still "on" that mark.
    pub fn contains_point(&self, point: usize) -> bool {
        self.start <= point && point <= self.end
    }

    /// Returns `true` if `other` lies entirely inside this region.
    pub fn contains(&self, other: &Region) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<std::ops::Range<usize>> for Region {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// An explicit, ordered selection: the full set of ranges owned by a view.
///
/// Navigation takes a selection by reference and hands back a replacement; nothing in this crate
/// mutates a live host cursor.
pub type Selection = Vec<Region>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_offsets() {
        assert_eq!(Region::new(7, 3), Region { start: 3, end: 7 });
        assert_eq!(Region::new(3, 7), Region { start: 3, end: 7 });
        assert!(Region::caret(4).is_empty());
        assert_eq!(Region::new(2, 9).len(), 7);
    }

    #[test]
    fn test_contains_point_is_inclusive() {
        let region = Region::new(10, 15);
        assert!(region.contains_point(10));
        assert!(region.contains_point(15));
        assert!(!region.contains_point(9));
        assert!(!region.contains_point(16));
    }

    #[test]
    fn test_contains_region() {
        let outer = Region::new(10, 20);
        assert!(outer.contains(&Region::new(10, 20)));
        assert!(outer.contains(&Region::caret(20)));
        assert!(outer.contains(&Region::new(12, 14)));
        assert!(!outer.contains(&Region::new(9, 12)));
        assert!(!outer.contains(&Region::new(15, 21)));
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 9) < Position::new(2, 0));
        assert!(Position::new(2, 1) > Position::new(2, 0));
    }
}
