//! Command Interface Layer
//!
//! Host-facing entry points for the lint UI. Each command reads the buffer's current
//! [`LintSnapshot`] once, at entry, and works on that handle only.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use lint_nav::{
//!     BufferId, DiagnosticEntry, Direction, LintCommands, LintSettings, LintSnapshot, MarkSet,
//!     Region, RopeText, Severity, SnapshotTable,
//! };
//!
//! let table = Arc::new(SnapshotTable::new());
//! let buffer = BufferId::new(1);
//! let text = RopeText::from_text("let x = 1;\nlet y = ;\n");
//!
//! // The lint pipeline publishes its result.
//! let generation = table.begin_pass(buffer);
//! table.publish(
//!     buffer,
//!     LintSnapshot::new(
//!         generation,
//!         vec![DiagnosticEntry::new(1, 8, Severity::Error, "expected expression")].into(),
//!         MarkSet::from_layers(Vec::new(), vec![Region::new(19, 20)]).unwrap(),
//!     ),
//! );
//!
//! let commands = LintCommands::new(Arc::clone(&table), LintSettings::default());
//! let nav = commands
//!     .goto_error(buffer, &[Region::caret(0)], Direction::Next)
//!     .unwrap();
//! assert_eq!(nav.selection, vec![Region::new(19, 20)]);
//!
//! let panel = commands.show_all_errors(buffer, &text).unwrap();
//! assert_eq!(
//!     panel.items(),
//!     vec![("2  expected expression".to_string(), "let y = ➜;".to_string())]
//! );
//! ```

use crate::navigator::{Direction, Navigation, NavigationError, goto_error};
use crate::panel::{ErrorPanel, PanelChoice, PanelError};
use crate::region::Region;
use crate::report::ErrorReport;
use crate::settings::LintSettings;
use crate::snapshot::{BufferId, LintSnapshot, SnapshotTable};
use crate::text::TextSource;
use std::sync::Arc;
use thiserror::Error;

/// Command error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LintCommandError {
    /// The buffer has no current findings; lint commands do not apply.
    #[error("No lint errors.")]
    NoLintErrors,
    /// Navigation failed.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    /// Panel selection failed.
    #[error(transparent)]
    Panel(#[from] PanelError),
}

/// An error panel bound to the snapshot it was rendered from.
///
/// Picking an entry resolves against the marks of that same snapshot, even if a newer lint
/// pass was published while the panel was open.
#[derive(Debug, Clone)]
pub struct ErrorListing {
    snapshot: Arc<LintSnapshot>,
    panel: ErrorPanel,
}

impl ErrorListing {
    /// The rendered panel.
    pub fn panel(&self) -> &ErrorPanel {
        &self.panel
    }

    /// The snapshot the panel was rendered from.
    pub fn snapshot(&self) -> &Arc<LintSnapshot> {
        &self.snapshot
    }

    /// `(label, preview)` pairs for the host's choice surface.
    pub fn items(&self) -> Vec<(String, String)> {
        self.panel.items()
    }

    /// Resolve the user's choice. `Ok(None)` means the panel was cancelled.
    pub fn select(&self, choice: PanelChoice) -> Result<Option<Navigation>, LintCommandError> {
        Ok(self.panel.select(choice, self.snapshot.marks().merged())?)
    }
}

/// Lint UI commands over a shared [`SnapshotTable`].
#[derive(Debug, Clone)]
pub struct LintCommands {
    table: Arc<SnapshotTable>,
    settings: LintSettings,
}

impl LintCommands {
    /// Create the command set.
    pub fn new(table: Arc<SnapshotTable>, settings: LintSettings) -> Self {
        Self { table, settings }
    }

    /// The shared snapshot table.
    pub fn table(&self) -> &Arc<SnapshotTable> {
        &self.table
    }

    /// Current settings.
    pub fn settings(&self) -> LintSettings {
        self.settings
    }

    /// Replace the settings (e.g. after the host's settings changed).
    pub fn set_settings(&mut self, settings: LintSettings) {
        self.settings = settings;
    }

    /// Returns `true` if `buffer` currently has findings; lint commands are enabled only then.
    pub fn has_errors(&self, buffer: BufferId) -> bool {
        self.table
            .snapshot(buffer)
            .is_some_and(|snapshot| snapshot.has_errors())
    }

    fn snapshot_with_errors(
        &self,
        buffer: BufferId,
    ) -> Result<Arc<LintSnapshot>, LintCommandError> {
        self.table
            .snapshot(buffer)
            .filter(|snapshot| snapshot.has_errors())
            .ok_or(LintCommandError::NoLintErrors)
    }

    /// Move the selection to the next/previous lint error of `buffer`.
    ///
    /// On [`NavigationError::NoMoreDiagnostics`] the host restores the selection carried by the
    /// error and shows its message.
    pub fn goto_error(
        &self,
        buffer: BufferId,
        selection: &[Region],
        direction: Direction,
    ) -> Result<Navigation, LintCommandError> {
        let snapshot = self.snapshot_with_errors(buffer)?;
        tracing::debug!(
            buffer = buffer.get(),
            generation = %snapshot.generation(),
            %direction,
            "goto_error"
        );
        Ok(goto_error(
            selection,
            direction,
            snapshot.marks().merged(),
            self.settings.wrap_find,
        )?)
    }

    /// Render the "all errors" panel for `buffer`.
    pub fn show_all_errors<T: TextSource + ?Sized>(
        &self,
        buffer: BufferId,
        text: &T,
    ) -> Result<ErrorListing, LintCommandError> {
        let snapshot = self.snapshot_with_errors(buffer)?;
        let panel = ErrorPanel::build(snapshot.diagnostics(), text);
        Ok(ErrorListing { snapshot, panel })
    }

    /// Build a report over `buffers` (each with an optional file path), in the given order.
    ///
    /// Buffers without a current snapshot or without findings are skipped.
    pub fn report(&self, buffers: &[(BufferId, Option<&str>)]) -> ErrorReport {
        let mut report = ErrorReport::new();
        for (buffer, path) in buffers {
            if let Some(snapshot) = self.table.snapshot(*buffer) {
                report.add(*path, snapshot.diagnostics());
            }
        }
        report
    }
}

/// Select the whole of `line`, including its line terminator.
pub fn select_line<T: TextSource + ?Sized>(text: &T, line: usize) -> Navigation {
    Navigation::select(text.line_region(line))
}
