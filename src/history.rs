//! Linear undo/redo history over annotation snapshots.
//!
//! The history keeps whole-collection snapshots rather than diffs:
//! annotation counts are tens, not millions, so value snapshots are cheap
//! and keep undo/redo trivially correct.
//!
//! Two kinds of updates flow through here:
//! - `commit` pushes the current `present` onto the past stack and clears
//!   the redo stack. Used for history-worthy actions.
//! - `amend` replaces `present` in place with no history entry. Used for
//!   continuous drag feedback so intermediate pointer-moves do not pollute
//!   the undo history.
//!
//! A drag is bracketed by `begin_transient` / `commit_transient`: the
//! pre-drag snapshot is pinned when the drag starts and becomes the single
//! history entry when it ends. `cancel_transient` drops the pin while
//! keeping the amended `present` (Escape never rolls back a live drag).

use crate::constants;
use crate::model::AnnotationList;

/// Linear undo/redo log of annotation collection snapshots.
#[derive(Debug, Clone)]
pub struct EditHistory {
    /// Snapshots that can be restored by undo, oldest first.
    past: Vec<AnnotationList>,
    /// The current committed-or-amended collection.
    present: AnnotationList,
    /// Snapshots that can be restored by redo, most recent undo last.
    future: Vec<AnnotationList>,
    /// Pre-drag snapshot pinned while a transient (amend-only) edit runs.
    pinned: Option<AnnotationList>,
    /// Maximum number of past snapshots kept.
    max_depth: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::with_depth(constants::history::MAX_DEPTH)
    }

    /// Create an empty history with a custom undo depth.
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            past: Vec::new(),
            present: AnnotationList::new(),
            future: Vec::new(),
            pinned: None,
            max_depth,
        }
    }

    /// The current annotation collection.
    pub fn present(&self) -> &AnnotationList {
        &self.present
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Commit a new collection: the old `present` becomes undoable and the
    /// redo stack is cleared.
    pub fn commit(&mut self, next: AnnotationList) {
        let prev = std::mem::replace(&mut self.present, next);
        self.past.push(prev);
        self.future.clear();
        self.pinned = None;
        self.trim();
        log::debug!("📝 History: committed ({} undoable)", self.past.len());
    }

    /// Replace `present` in place without creating a history entry.
    pub fn amend(&mut self, next: AnnotationList) {
        self.present = next;
    }

    /// Pin the current `present` as the base of a transient edit.
    pub fn begin_transient(&mut self) {
        if self.pinned.is_none() {
            self.pinned = Some(self.present.clone());
        }
    }

    /// The pinned pre-drag collection, if a transient edit is running.
    pub fn transient_base(&self) -> Option<&AnnotationList> {
        self.pinned.as_ref()
    }

    /// Finish a transient edit: the pinned pre-drag snapshot becomes the
    /// single history entry for the whole drag. Skipped when nothing
    /// actually changed, so a click-without-move leaves no entry.
    pub fn commit_transient(&mut self) {
        if let Some(base) = self.pinned.take() {
            if base != self.present {
                self.past.push(base);
                self.future.clear();
                self.trim();
                log::debug!("📝 History: drag committed ({} undoable)", self.past.len());
            }
        }
    }

    /// Abandon a transient edit, keeping the amended `present` but
    /// recording no history entry.
    pub fn cancel_transient(&mut self) {
        self.pinned = None;
    }

    /// Restore the previous snapshot. Returns false if there is nothing to
    /// undo.
    pub fn undo(&mut self) -> bool {
        let Some(prev) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, prev);
        self.future.push(current);
        self.pinned = None;
        log::debug!("⏪ Undo ({} redoable)", self.future.len());
        true
    }

    /// Restore the most recently undone snapshot. Returns false if there
    /// is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        self.pinned = None;
        log::debug!("⏩ Redo ({} undoable)", self.past.len());
        true
    }

    /// Drop everything, including `present`. Used on image change or
    /// session cancel.
    pub fn reset(&mut self) {
        self.past.clear();
        self.present.clear();
        self.future.clear();
        self.pinned = None;
        log::debug!("🗑️ History cleared");
    }

    /// Replace the whole history with a fresh `present` (session restore).
    pub fn reset_to(&mut self, present: AnnotationList) {
        self.reset();
        self.present = present;
    }

    fn trim(&mut self) {
        while self.past.len() > self.max_depth {
            self.past.remove(0);
        }
    }
}
