use crate::foundation::config::DEFAULT_HISTORY_CAP;
use crate::model::operation::Operation;

/// Ordered operation history with an undo/redo cursor.
///
/// Only the prefix `[0, cursor]` is active. `cursor` ranges over `[-1, len - 1]`; `-1` means
/// nothing is applied. The log never holds more than `cap` entries.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationLog {
    ops: Vec<Operation>,
    cursor: isize,
    cap: usize,
}

impl Default for OperationLog {
    fn default() -> Self {
        Self::with_cap(DEFAULT_HISTORY_CAP)
    }
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty log holding at most `cap` entries (at least one).
    pub fn with_cap(cap: usize) -> Self {
        Self {
            ops: Vec::new(),
            cursor: -1,
            cap: cap.max(1),
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Every retained entry, including the redo branch.
    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }

    /// The prefix `[0, cursor]`.
    pub fn active(&self) -> &[Operation] {
        &self.ops[..self.active_count()]
    }

    pub fn active_count(&self) -> usize {
        (self.cursor + 1) as usize
    }

    pub fn can_undo(&self) -> bool {
        self.cursor >= 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.ops.len() as isize - 1
    }

    /// Drop the redo branch, push `op`, and evict the oldest entries beyond the cap.
    pub fn append(&mut self, op: Operation) {
        self.ops.truncate(self.active_count());
        self.ops.push(op);
        if self.ops.len() > self.cap {
            let excess = self.ops.len() - self.cap;
            tracing::debug!(excess, cap = self.cap, "history cap reached; evicting oldest");
            self.ops.drain(..excess);
        }
        self.cursor = self.ops.len() as isize - 1;
    }

    /// Step the cursor back. Returns whether it moved.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step the cursor forward. Returns whether it moved.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn reset(&mut self) {
        self.ops.clear();
        self.cursor = -1;
    }

    /// Replace the whole log, keeping the first `cap` entries, with every entry active.
    pub fn import(&mut self, mut ops: Vec<Operation>) {
        if ops.len() > self.cap {
            tracing::debug!(len = ops.len(), cap = self.cap, "imported history truncated");
            ops.truncate(self.cap);
        }
        self.cursor = ops.len() as isize - 1;
        self.ops = ops;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/history/log.rs"]
mod tests;
