//! Next/previous lint error navigation.
//!
//! Navigation is a pure function of the current selection and the merged mark list: it returns
//! the replacement selection (plus the region the view should center on) or reports that there
//! is nothing further in that direction, handing back the selection to restore.

use crate::locator::resolve_mark_or_caret;
use crate::region::{Region, Selection};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the end of the buffer.
    #[default]
    Next,
    /// Towards the start of the buffer.
    Previous,
}

impl Direction {
    /// Lowercase name used in messages (`"next"` / `"previous"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Next => "next",
            Direction::Previous => "previous",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selection mutation for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// The new selection. It replaces the previous selection entirely.
    pub selection: Selection,
    /// Region the view should be centered on.
    pub center: Region,
}

impl Navigation {
    /// Select exactly `region` and center the view on it.
    pub fn select(region: Region) -> Self {
        Self {
            selection: vec![region],
            center: region,
        }
    }
}

/// Navigation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Nothing to move to in the requested direction.
    ///
    /// Non-fatal; the host should restore `selection` and show the message.
    #[error("No {direction} lint error.")]
    NoMoreDiagnostics {
        /// Requested direction.
        direction: Direction,
        /// The selection as it was before the call.
        selection: Selection,
    },
    /// The buffer has no marks to navigate between.
    #[error("No lint errors.")]
    EmptyDiagnosticSet,
}

/// Move to the next or previous lint mark.
///
/// - `selection`: current selection ranges in order. An empty list counts as a caret at `0`.
/// - `marks`: merged marks of every severity, sorted ascending by start.
/// - `wrap`: whether to wrap around to the first/last mark when the search runs off the end.
pub fn goto_error(
    selection: &[Region],
    direction: Direction,
    marks: &[Region],
    wrap: bool,
) -> Result<Navigation, NavigationError> {
    let (Some(first_mark), Some(last_mark)) = (marks.first(), marks.last()) else {
        return Err(NavigationError::EmptyDiagnosticSet);
    };

    let saved: Selection = if selection.is_empty() {
        vec![Region::caret(0)]
    } else {
        selection.to_vec()
    };
    let empty_selection = saved.len() == 1 && saved[0].is_empty();

    let point = match direction {
        Direction::Next => saved[0].start,
        Direction::Previous => saved[saved.len() - 1].end,
    };

    let found = match direction {
        Direction::Next => marks.iter().copied().find(|mark| {
            (point == mark.start && empty_selection && !mark.is_empty()) || point < mark.start
        }),
        Direction::Previous => marks.iter().rev().copied().find(|mark| {
            (point == mark.end && empty_selection && !mark.is_empty()) || point > mark.end
        }),
    };

    let target = found.or_else(|| {
        // A lone mark that already holds the caret is not a "next" error.
        let edge = match direction {
            Direction::Next => first_mark,
            Direction::Previous => last_mark,
        };
        let can_wrap = marks.len() > 1 || !edge.contains_point(point);
        if wrap && can_wrap {
            tracing::debug!(%direction, point, "goto_error: wrapping around");
            Some(*edge)
        } else {
            None
        }
    });

    let Some(target) = target else {
        tracing::debug!(%direction, point, wrap, "goto_error: no target");
        return Err(NavigationError::NoMoreDiagnostics {
            direction,
            selection: saved,
        });
    };

    Ok(select_lint_region(marks, target))
}

/// Select the first mark enclosing `region`, or a caret at `region.start` if there is none.
pub fn select_lint_region(marks: &[Region], region: Region) -> Navigation {
    let selected = resolve_mark_or_caret(marks, region);
    tracing::debug!(%region, %selected, "select_lint_region");
    Navigation::select(selected)
}
