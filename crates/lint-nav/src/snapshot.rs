//! Published lint results, one immutable snapshot per buffer.
//!
//! A lint pass runs off the UI thread and ends by publishing a [`LintSnapshot`]: the findings
//! and their marks, tagged with the generation handed out when the pass began. The
//! [`SnapshotTable`] adopts a snapshot only if its generation is newer than the one already
//! published for that buffer, so a slow stale pass can never overwrite a newer result.
//!
//! Readers take an `Arc<LintSnapshot>` at call entry and work on that handle; they always see
//! diagnostics and marks from the same pass.

use crate::diagnostics::DiagnosticStore;
use crate::marks::MarkSet;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Host-provided identifier of an open buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferId(u64);

impl BufferId {
    /// Wrap a host buffer/view id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Version tag of a lint pass. Strictly increasing across the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Get the underlying counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Diagnostics and marks produced by one lint pass for one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSnapshot {
    generation: Generation,
    diagnostics: DiagnosticStore,
    marks: MarkSet,
}

impl LintSnapshot {
    /// Bundle the output of the pass started with `generation`.
    pub fn new(generation: Generation, diagnostics: DiagnosticStore, marks: MarkSet) -> Self {
        Self {
            generation,
            diagnostics,
            marks,
        }
    }

    /// Generation of the pass that produced this snapshot.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Findings of the pass.
    pub fn diagnostics(&self) -> &DiagnosticStore {
        &self.diagnostics
    }

    /// Marks of the pass.
    pub fn marks(&self) -> &MarkSet {
        &self.marks
    }

    /// Returns `true` if the pass found anything.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Outcome of [`SnapshotTable::publish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The snapshot is now current for the buffer.
    Adopted {
        /// Generation of the snapshot it replaced, if any.
        replaced: Option<Generation>,
    },
    /// A newer (or equal) generation is already current; the snapshot was dropped.
    Superseded {
        /// The generation that stays current.
        current: Generation,
    },
    /// The snapshot belongs to a pass started before the buffer's diagnostics were discarded.
    Discarded,
    /// No pass was ever started for the buffer, or the buffer was closed.
    UnknownBuffer,
}

#[derive(Debug, Default)]
struct BufferSlot {
    latest_pass: Option<Generation>,
    /// Passes at or below this generation were started before a discard.
    floor: Option<Generation>,
    current: Option<Arc<LintSnapshot>>,
}

/// Arena of the current lint snapshot for every buffer.
///
/// The write lock is held only to compare generations and swap one `Arc`.
#[derive(Debug)]
pub struct SnapshotTable {
    next_generation: AtomicU64,
    slots: RwLock<HashMap<BufferId, BufferSlot>>,
}

impl Default for SnapshotTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            next_generation: AtomicU64::new(1),
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Register the start of a lint pass for `buffer` and return its generation.
    ///
    /// Any pass started earlier for the same buffer becomes stale (see
    /// [`is_latest_pass`](Self::is_latest_pass)).
    pub fn begin_pass(&self, buffer: BufferId) -> Generation {
        let generation = Generation(self.next_generation.fetch_add(1, Ordering::Relaxed));
        let mut slots = self.slots.write();
        let slot = slots.entry(buffer).or_default();
        if slot.latest_pass.is_none_or(|latest| latest < generation) {
            slot.latest_pass = Some(generation);
        }
        tracing::trace!(buffer = buffer.get(), %generation, "lint pass started");
        generation
    }

    /// Returns `true` if `generation` is the most recent pass started for `buffer`.
    ///
    /// Pipelines can poll this to abandon superseded work early.
    pub fn is_latest_pass(&self, buffer: BufferId, generation: Generation) -> bool {
        self.slots
            .read()
            .get(&buffer)
            .and_then(|slot| slot.latest_pass)
            == Some(generation)
    }

    /// Publish the result of a pass.
    ///
    /// The snapshot is adopted only if its generation is newer than the current one.
    pub fn publish(&self, buffer: BufferId, snapshot: LintSnapshot) -> PublishOutcome {
        let generation = snapshot.generation();
        let mut slots = self.slots.write();
        let Some(slot) = slots.get_mut(&buffer) else {
            return PublishOutcome::UnknownBuffer;
        };

        if slot.floor.is_some_and(|floor| generation <= floor) {
            tracing::trace!(buffer = buffer.get(), %generation, "lint snapshot discarded");
            return PublishOutcome::Discarded;
        }

        if let Some(current) = slot.current.as_ref().map(|s| s.generation())
            && generation <= current
        {
            tracing::trace!(
                buffer = buffer.get(),
                %generation,
                %current,
                "lint snapshot superseded"
            );
            return PublishOutcome::Superseded { current };
        }

        let replaced = slot
            .current
            .replace(Arc::new(snapshot))
            .map(|old| old.generation());
        tracing::trace!(buffer = buffer.get(), %generation, "lint snapshot adopted");
        PublishOutcome::Adopted { replaced }
    }

    /// Current snapshot for `buffer`.
    pub fn snapshot(&self, buffer: BufferId) -> Option<Arc<LintSnapshot>> {
        self.slots
            .read()
            .get(&buffer)
            .and_then(|slot| slot.current.clone())
    }

    /// Drop the current snapshot for `buffer` (e.g. linting was disabled for it).
    ///
    /// Passes started before the discard will not be adopted; later passes will.
    pub fn discard(&self, buffer: BufferId) -> Option<Arc<LintSnapshot>> {
        let mut slots = self.slots.write();
        let slot = slots.get_mut(&buffer)?;
        slot.floor = slot.latest_pass;
        slot.current.take()
    }

    /// Forget `buffer` entirely (the buffer was closed).
    pub fn close_buffer(&self, buffer: BufferId) -> Option<Arc<LintSnapshot>> {
        self.slots
            .write()
            .remove(&buffer)
            .and_then(|slot| slot.current)
    }

    /// Buffers with a current snapshot, sorted by id.
    pub fn buffers(&self) -> Vec<BufferId> {
        let mut ids: Vec<BufferId> = self
            .slots
            .read()
            .iter()
            .filter(|(_, slot)| slot.current.is_some())
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }
}
