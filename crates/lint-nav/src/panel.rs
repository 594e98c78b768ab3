//! "Show all errors" panel.
//!
//! Builds the list a host shows in its quick-pick surface: one row per finding, ordered by
//! position, each with a `"{line}  {message}"` label and a one-line code preview with an arrow
//! pointing at the finding's column. Picking a row is resolved back into a selection mutation.
//!
//! Preview layout for a finding at `column`:
//!
//! ```text
//! raw line:     "    foo.bar(baz)"     column 8
//! stripped:     "foo.bar(baz)"         4 leading whitespace chars removed
//! preview:      "foo.➜bar(baz)"        arrow before adjusted column 4
//! ```
//!
//! When more than [`MAX_PREFIX_LEN`] characters precede the arrow, the head of the line is
//! replaced by `...` so the arrow lands at column `MAX_PREFIX_LEN + 3`.

use crate::diagnostics::{DiagnosticStore, Severity};
use crate::navigator::{Navigation, select_lint_region};
use crate::region::{Position, Region};
use crate::text::{TextSource, trim_line_terminator};
use itertools::Itertools;
use thiserror::Error;

/// Maximum number of characters shown before the arrow.
pub const MAX_PREFIX_LEN: usize = 40;

/// Marker inserted in front of a truncated preview.
pub const ELLIPSIS: &str = "...";

/// Marker inserted at the finding's column.
pub const ARROW: char = '➜';

/// Panel errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// The host reported a pick outside the panel.
    #[error("panel entry {index} is out of range (panel has {len} entries)")]
    EntryOutOfRange {
        /// Picked index.
        index: usize,
        /// Number of panel entries.
        len: usize,
    },
}

/// Result of showing the panel to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelChoice {
    /// The user picked the entry at this index.
    Picked(usize),
    /// The user dismissed the panel.
    Cancelled,
}

impl PanelChoice {
    /// Map a host quick-panel index (`-1` for cancel) to a choice.
    pub fn from_host_index(index: i64) -> Self {
        usize::try_from(index)
            .map(PanelChoice::Picked)
            .unwrap_or(PanelChoice::Cancelled)
    }
}

/// One row of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    /// `"{line + 1}  {message}"`.
    pub label: String,
    /// Line preview with the column arrow.
    pub preview: String,
    /// Absolute offset of the finding's raw `(line, column)`, before indentation is stripped.
    pub target: usize,
    /// Logical position of the finding.
    pub position: Position,
    /// Finding severity.
    pub severity: Severity,
}

/// The rendered error panel for one buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorPanel {
    entries: Vec<PanelEntry>,
}

impl ErrorPanel {
    /// Render every finding of `diagnostics` against the buffer text.
    ///
    /// Rows are ordered by line, then `(column, message)`. Findings with the same line, column
    /// and message collapse into one row.
    pub fn build<T: TextSource + ?Sized>(diagnostics: &DiagnosticStore, text: &T) -> Self {
        let mut entries = Vec::with_capacity(diagnostics.len());

        let sorted = diagnostics
            .sorted()
            .into_iter()
            .dedup_by(|a, b| a.line == b.line && a.column == b.column && a.message == b.message);

        for (line, findings) in &sorted.chunk_by(|entry| entry.line) {
            let line_text = text.line_text(line).unwrap_or_default();

            for finding in findings {
                let position = finding.position();
                entries.push(PanelEntry {
                    label: format!("{}  {}", line + 1, finding.message),
                    preview: render_preview(&line_text, finding.column),
                    target: text.text_point(position),
                    position,
                    severity: finding.severity,
                });
            }
        }

        tracing::debug!(entry_count = entries.len(), "error panel: built");
        Self { entries }
    }

    /// Panel rows in display order.
    pub fn entries(&self) -> &[PanelEntry] {
        &self.entries
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the panel has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(label, preview)` pairs, in display order, for the host's choice surface.
    pub fn items(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|entry| (entry.label.clone(), entry.preview.clone()))
            .collect()
    }

    /// Resolve the user's choice into a selection mutation.
    ///
    /// `marks` is the merged mark list of the same snapshot the panel was built from. Returns
    /// `Ok(None)` when the panel was cancelled.
    pub fn select(
        &self,
        choice: PanelChoice,
        marks: &[Region],
    ) -> Result<Option<Navigation>, PanelError> {
        let index = match choice {
            PanelChoice::Cancelled => return Ok(None),
            PanelChoice::Picked(index) => index,
        };

        let entry = self.entries.get(index).ok_or(PanelError::EntryOutOfRange {
            index,
            len: self.entries.len(),
        })?;

        Ok(Some(select_lint_region(marks, Region::caret(entry.target))))
    }
}

/// Render the preview of `line` (already stripped of its terminator) for a finding at `column`.
///
/// Columns count characters. A column at or past the end of the visible text puts the arrow at
/// the end.
pub fn render_preview(line: &str, column: usize) -> String {
    let line = trim_line_terminator(line);
    let visible = line.trim_start();
    let stripped = line.chars().count() - visible.chars().count();
    let column = column.saturating_sub(stripped);

    let (base, arrow_at) = if column > MAX_PREFIX_LEN {
        let tail: String = visible.chars().skip(column - MAX_PREFIX_LEN).collect();
        (
            format!("{ELLIPSIS}{tail}"),
            MAX_PREFIX_LEN + ELLIPSIS.chars().count(),
        )
    } else {
        (visible.to_string(), column)
    };

    let mut preview = String::with_capacity(base.len() + ARROW.len_utf8());
    let mut inserted = false;
    for (idx, ch) in base.chars().enumerate() {
        if idx == arrow_at {
            preview.push(ARROW);
            inserted = true;
        }
        preview.push(ch);
    }
    if !inserted {
        preview.push(ARROW);
    }
    preview
}
