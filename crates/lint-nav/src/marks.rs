//! Highlighted lint marks.
//!
//! The highlighting pipeline turns each finding into a marked region. Marks are kept per
//! severity, sorted by start and pairwise non-overlapping within a severity. Navigation ignores
//! severity and works on the [merged](MarkSet::merged) list.

use crate::diagnostics::Severity;
use crate::region::Region;
use thiserror::Error;

/// Errors produced when building a [`MarkSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkSetError {
    /// Marks of one severity are not sorted ascending by start.
    #[error("{severity} marks are not sorted: {previous} comes before {next}")]
    Unsorted {
        /// Severity layer holding the marks.
        severity: Severity,
        /// The earlier mark in input order.
        previous: Region,
        /// The mark that starts before it.
        next: Region,
    },
    /// Two marks of one severity overlap.
    #[error("{severity} marks overlap: {previous} and {next}")]
    Overlapping {
        /// Severity layer holding the marks.
        severity: Severity,
        /// The earlier mark.
        previous: Region,
        /// The mark that starts inside it.
        next: Region,
    },
}

/// Per-severity marked regions for one buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkSet {
    warnings: Vec<Region>,
    errors: Vec<Region>,
    merged: Vec<Region>,
}

impl MarkSet {
    /// Create an empty mark set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mark set from per-severity regions.
    ///
    /// Each list must be sorted by start with no two regions overlapping.
    pub fn from_layers(warnings: Vec<Region>, errors: Vec<Region>) -> Result<Self, MarkSetError> {
        validate_layer(Severity::Warning, &warnings)?;
        validate_layer(Severity::Error, &errors)?;

        let mut merged: Vec<Region> = Vec::with_capacity(warnings.len() + errors.len());
        merged.extend_from_slice(&warnings);
        merged.extend_from_slice(&errors);
        // Stable: warnings stay ahead of errors with identical bounds.
        merged.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.end.cmp(&b.end)));

        Ok(Self {
            warnings,
            errors,
            merged,
        })
    }

    /// Marks for one severity, sorted by start.
    pub fn layer(&self, severity: Severity) -> &[Region] {
        match severity {
            Severity::Warning => &self.warnings,
            Severity::Error => &self.errors,
        }
    }

    /// Marks of every severity, sorted ascending by start.
    ///
    /// Regions of different severities may overlap here.
    pub fn merged(&self) -> &[Region] {
        &self.merged
    }

    /// Total number of marks.
    pub fn len(&self) -> usize {
        self.merged.len()
    }

    /// Returns `true` if no region is marked.
    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }
}

fn validate_layer(severity: Severity, regions: &[Region]) -> Result<(), MarkSetError> {
    for pair in regions.windows(2) {
        let (previous, next) = (pair[0], pair[1]);
        if next.start < previous.start {
            return Err(MarkSetError::Unsorted {
                severity,
                previous,
                next,
            });
        }
        if next.start < previous.end {
            return Err(MarkSetError::Overlapping {
                severity,
                previous,
                next,
            });
        }
    }
    Ok(())
}
