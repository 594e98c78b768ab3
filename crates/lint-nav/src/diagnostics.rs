//! Lint findings for one buffer.
//!
//! A [`DiagnosticStore`] is the complete result of one lint pass. It is never patched: a new pass
//! builds a new store and publishes it in a new snapshot.

use crate::region::Position;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Finding severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning findings.
    Warning,
    /// Error findings.
    Error,
}

impl Severity {
    /// Every severity, in the order marks are pooled for navigation.
    pub const ALL: [Severity; 2] = [Severity::Warning, Severity::Error];

    /// Lowercase name, as used in settings and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    /// Zero-based line.
    pub line: usize,
    /// Zero-based column in characters, counted on the raw (unstripped) line.
    pub column: usize,
    /// Finding severity.
    pub severity: Severity,
    /// Linter message.
    pub message: String,
}

impl DiagnosticEntry {
    /// Create a new finding.
    pub fn new(line: usize, column: usize, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            severity,
            message: message.into(),
        }
    }

    /// Logical position of the finding.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

/// All findings of one lint pass for one buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticStore {
    entries: Vec<DiagnosticEntry>,
}

impl DiagnosticStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of findings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the pass produced no findings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Findings in publish order.
    pub fn entries(&self) -> &[DiagnosticEntry] {
        &self.entries
    }

    /// Number of findings with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.severity == severity)
            .count()
    }

    /// Findings sorted by `(line, column, message)`.
    ///
    /// This is the display order shared by the error panel and the error report.
    pub fn sorted(&self) -> Vec<&DiagnosticEntry> {
        self.entries
            .iter()
            .sorted_by(|a, b| {
                a.line
                    .cmp(&b.line)
                    .then_with(|| a.column.cmp(&b.column))
                    .then_with(|| a.message.cmp(&b.message))
            })
            .collect()
    }
}

impl FromIterator<DiagnosticEntry> for DiagnosticStore {
    fn from_iter<I: IntoIterator<Item = DiagnosticEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<DiagnosticEntry>> for DiagnosticStore {
    fn from(entries: Vec<DiagnosticEntry>) -> Self {
        Self { entries }
    }
}
