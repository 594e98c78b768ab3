//! Plain-text error report across buffers.
//!
//! ```text
//!
//! main.rs:
//!   3: unused variable `x`
//!   10: missing semicolon
//! ```

use crate::diagnostics::DiagnosticStore;
use std::fmt::Write as _;
use std::path::Path;

const UNTITLED: &str = "untitled";

/// Accumulates report sections, one per buffer with findings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReport {
    text: String,
    sections: usize,
}

impl ErrorReport {
    /// Start an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the findings of one buffer.
    ///
    /// `path` is reduced to its file name; buffers without a path are reported as `untitled`.
    /// Line numbers are 1-based, the same as the error panel labels. Buffers without findings
    /// add nothing.
    pub fn add(&mut self, path: Option<&str>, diagnostics: &DiagnosticStore) -> &mut Self {
        if diagnostics.is_empty() {
            return self;
        }

        let _ = write!(self.text, "\n{}:\n", display_name(path));
        for entry in diagnostics.sorted() {
            let _ = writeln!(self.text, "  {}: {}", entry.line + 1, entry.message);
        }
        self.sections += 1;
        self
    }

    /// Number of buffers in the report.
    pub fn section_count(&self) -> usize {
        self.sections
    }

    /// Returns `true` if no buffer had findings.
    pub fn is_empty(&self) -> bool {
        self.sections == 0
    }

    /// The report text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the report and return its text.
    pub fn into_string(self) -> String {
        self.text
    }
}

fn display_name(path: Option<&str>) -> &str {
    path.filter(|p| !p.is_empty())
        .map(|p| {
            Path::new(p)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(p)
        })
        .unwrap_or(UNTITLED)
}
