use image::RgbaImage;

/// Undo/redo history over full bitmap snapshots.
///
/// Every mutating operation pushes its pre-mutation snapshot. The redo stack is
/// only emptied by [`SnapshotHistory::clear`] when a new image is imported; a
/// fresh edit after an undo leaves the redo stack intact.
#[derive(Default)]
pub struct SnapshotHistory {
    undo_stack: Vec<RgbaImage>,
    redo_stack: Vec<RgbaImage>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pre-mutation state of the image before an edit is applied.
    pub fn push_snapshot(&mut self, snapshot: RgbaImage) {
        self.undo_stack.push(snapshot);
    }

    /// Take back the last edit: the current bitmap moves to the redo stack and
    /// the previous snapshot is swapped in. Returns false (leaving `current`
    /// untouched) when there is nothing to undo.
    pub fn undo(&mut self, current: &mut RgbaImage) -> bool {
        match self.undo_stack.pop() {
            Some(previous) => {
                let now = std::mem::replace(current, previous);
                self.redo_stack.push(now);
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone edit. Mirror image of [`SnapshotHistory::undo`].
    pub fn redo(&mut self, current: &mut RgbaImage) -> bool {
        match self.redo_stack.pop() {
            Some(next) => {
                let now = std::mem::replace(current, next);
                self.undo_stack.push(now);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop both stacks. Called when a new image is imported, and nowhere else.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
