//! Resolve a point or region to the lint mark that encloses it.

use crate::region::Region;

/// Return the first mark, in ascending-start order, that fully contains `region`.
///
/// `marks` must be sorted by start. Sorting by start says nothing about where marks end, so a
/// mark that starts past `region.start` does not stop the scan.
pub fn find_mark_within(marks: &[Region], region: Region) -> Option<Region> {
    marks.iter().copied().find(|mark| mark.contains(&region))
}

/// Selection to apply for `region`: the mark enclosing it, or a caret at its start.
pub fn resolve_mark_or_caret(marks: &[Region], region: Region) -> Region {
    find_mark_within(marks, region).unwrap_or_else(|| Region::caret(region.start))
}
