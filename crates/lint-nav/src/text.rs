//! Buffer text access.
//!
//! The navigation core never owns buffer text. Hosts expose their storage through
//! [`TextSource`]; [`RopeText`] is a rope-backed implementation for hosts without their own
//! line index (and for tests).

use crate::region::{Position, Region};
use ropey::Rope;

/// Read-only access to a buffer's lines and coordinates.
pub trait TextSource {
    /// Text of `line` including its line terminator (if any).
    ///
    /// Returns `None` when the line does not exist.
    fn full_line(&self, line: usize) -> Option<String>;

    /// Resolve a `(line, column)` position to an absolute character offset.
    ///
    /// Positions past the end of the buffer resolve to the buffer length.
    fn text_point(&self, position: Position) -> usize;

    /// Region covering `line`, including its line terminator.
    fn line_region(&self, line: usize) -> Region;

    /// Text of `line` with trailing `\n` / `\r` characters removed.
    fn line_text(&self, line: usize) -> Option<String> {
        self.full_line(line)
            .map(|text| trim_line_terminator(&text).to_string())
    }
}

/// Strip every trailing `\n` and `\r` from `text`.
pub fn trim_line_terminator(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

/// Rope-backed [`TextSource`].
///
/// Lines are split on `\n` only; a `\r` before it stays part of the line. Form feeds, lone
/// carriage returns and Unicode line separators do not start a line.
#[derive(Debug, Clone, Default)]
pub struct RopeText {
    rope: Rope,
}

impl RopeText {
    /// Build from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Number of lines, counting the empty line after a trailing `\n`.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Buffer length in characters.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// The whole buffer as a `String`.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }
}

impl From<&str> for RopeText {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl TextSource for RopeText {
    fn full_line(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        Some(self.rope.line(line).to_string())
    }

    fn text_point(&self, position: Position) -> usize {
        if position.line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        // Columns are not clamped to the line; an overlong column runs into the following
        // lines the same way the host editor resolves it.
        let line_start = self.rope.line_to_char(position.line);
        line_start
            .saturating_add(position.column)
            .min(self.rope.len_chars())
    }

    fn line_region(&self, line: usize) -> Region {
        if line >= self.rope.len_lines() {
            return Region::caret(self.rope.len_chars());
        }

        let start = self.rope.line_to_char(line);
        let end = if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1)
        } else {
            self.rope.len_chars()
        };
        Region::new(start, end)
    }
}
