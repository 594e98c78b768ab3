#![warn(missing_docs)]
//! Lint Nav - Headless Lint Error Navigation Kernel
//!
//! # Overview
//!
//! `lint-nav` is the navigation and presentation core of an editor lint UI. Given the findings a
//! linter reported for a buffer, it lets the user jump to the next/previous finding and browse a
//! column-accurate preview list of all findings. It does not run linters, draw anything, or own
//! buffer text: the host publishes lint results and applies the selection mutations returned
//! here.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  LintCommands (goto / show all / report)    │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Navigator          │  ErrorPanel           │  ← Navigation & Presentation
//! ├─────────────────────────────────────────────┤
//! │  Region locator (enclosing mark lookup)     │
//! ├─────────────────────────────────────────────┤
//! │  SnapshotTable (generation-tagged results)  │  ← Published State
//! ├─────────────────────────────────────────────┤
//! │  DiagnosticStore + MarkSet │ TextSource     │  ← Data
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use lint_nav::{Direction, Region, goto_error};
//!
//! let marks = [Region::new(4, 9), Region::new(20, 25)];
//!
//! let nav = goto_error(&[Region::caret(0)], Direction::Next, &marks, true).unwrap();
//! assert_eq!(nav.selection, vec![Region::new(4, 9)]);
//!
//! let nav = goto_error(&nav.selection, Direction::Next, &marks, true).unwrap();
//! assert_eq!(nav.selection, vec![Region::new(20, 25)]);
//!
//! // Wraps back to the first mark.
//! let nav = goto_error(&nav.selection, Direction::Next, &marks, true).unwrap();
//! assert_eq!(nav.selection, vec![Region::new(4, 9)]);
//! ```
//!
//! # Module Description
//!
//! - [`region`] - offsets, regions and selections
//! - [`text`] - buffer text access ([`TextSource`], rope-backed [`RopeText`])
//! - [`diagnostics`] - findings of one lint pass
//! - [`marks`] - per-severity marked regions
//! - [`locator`] - enclosing-mark lookup
//! - [`navigator`] - next/previous error navigation
//! - [`panel`] - the "show all errors" panel
//! - [`snapshot`] - generation-tagged snapshot table
//! - [`settings`] - user settings
//! - [`report`] - plain-text error report
//! - [`commands`] - host-facing command set

pub mod commands;
pub mod diagnostics;
pub mod locator;
pub mod marks;
pub mod navigator;
pub mod panel;
pub mod region;
pub mod report;
pub mod settings;
pub mod snapshot;
pub mod text;

pub use commands::{ErrorListing, LintCommandError, LintCommands, select_line};
pub use diagnostics::{DiagnosticEntry, DiagnosticStore, Severity};
pub use locator::{find_mark_within, resolve_mark_or_caret};
pub use marks::{MarkSet, MarkSetError};
pub use navigator::{Direction, Navigation, NavigationError, goto_error, select_lint_region};
pub use panel::{
    ARROW, ErrorPanel, MAX_PREFIX_LEN, PanelChoice, PanelEntry, PanelError, render_preview,
};
pub use region::{Position, Region, Selection};
pub use report::ErrorReport;
pub use settings::{LintSettings, SettingsError};
pub use snapshot::{BufferId, Generation, LintSnapshot, PublishOutcome, SnapshotTable};
pub use text::{RopeText, TextSource, trim_line_terminator};
