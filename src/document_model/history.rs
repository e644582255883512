use super::snapshot::Snapshot;
use tracing::debug;

/// Undo and redo stacks of document snapshots.
#[derive(Debug, Default)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_undo_levels: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `max_undo_levels` undo snapshots, dropping
    /// the oldest first.
    pub fn with_limit(max_undo_levels: usize) -> Self {
        Self {
            max_undo_levels: Some(max_undo_levels),
            ..Self::default()
        }
    }

    /// Record the state from before a new edit. Clears redo history.
    pub fn save_state(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);

        // Limit the undo stack size
        if let Some(limit) = self.max_undo_levels {
            if self.undo_stack.len() > limit {
                let excess = self.undo_stack.len() - limit;
                self.undo_stack.drain(..excess);
            }
        }

        self.redo_stack.clear();
        debug!(undo = self.undo_stack.len(), "saved state, redo cleared");
    }

    /// Step back one edit. `current` moves onto the redo stack only when
    /// there is something to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        debug!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "undo");
        Some(previous)
    }

    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        debug!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "redo");
        Some(next)
    }

    #[allow(dead_code)]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[allow(dead_code)]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_on_empty_history() {
        let mut history = History::new();
        assert!(history.undo(Snapshot::new("current")).is_none());
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_redo_on_empty_history() {
        let mut history = History::new();
        history.save_state(Snapshot::new(""));
        assert!(history.redo(Snapshot::new("current")).is_none());
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_undo_moves_current_to_redo() {
        let mut history = History::new();
        history.save_state(Snapshot::new("before"));

        let previous = history.undo(Snapshot::new("after")).unwrap();
        assert_eq!(previous.text(), "before");
        assert!(!history.can_undo());
        assert!(history.can_redo());

        let next = history.redo(Snapshot::new("before")).unwrap();
        assert_eq!(next.text(), "after");
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_save_state_clears_redo() {
        let mut history = History::new();
        history.save_state(Snapshot::new("a"));
        history.save_state(Snapshot::new("b"));
        history.undo(Snapshot::new("c"));
        assert_eq!(history.redo_depth(), 1);

        history.save_state(Snapshot::new("d"));
        assert_eq!(history.redo_depth(), 0);
        assert!(history.redo(Snapshot::new("e")).is_none());
    }

    #[test]
    fn test_undo_is_lifo() {
        let mut history = History::new();
        history.save_state(Snapshot::new("one"));
        history.save_state(Snapshot::new("two"));

        assert_eq!(history.undo(Snapshot::new("three")).unwrap().text(), "two");
        assert_eq!(history.undo(Snapshot::new("two")).unwrap().text(), "one");
        assert!(history.undo(Snapshot::new("one")).is_none());
    }

    #[test]
    fn test_limit_discards_oldest() {
        let mut history = History::with_limit(2);
        history.save_state(Snapshot::new("one"));
        history.save_state(Snapshot::new("two"));
        history.save_state(Snapshot::new("three"));
        assert_eq!(history.undo_depth(), 2);

        assert_eq!(history.undo(Snapshot::new("four")).unwrap().text(), "three");
        assert_eq!(history.undo(Snapshot::new("three")).unwrap().text(), "two");
        assert!(history.undo(Snapshot::new("two")).is_none());
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.save_state(Snapshot::new("one"));
        history.undo(Snapshot::new("two"));
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
