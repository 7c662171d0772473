use crate::types::ConfigurationState;

/// Two-stack undo/redo history over configuration snapshots.
///
/// Because every store operation returns a whole new state, history is
/// just the previous snapshots; no command inversion is needed.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<ConfigurationState>,
    redo: Vec<ConfigurationState>,
}

impl History {
    pub fn new() -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Record the state being replaced, clearing the redo stack.
    pub fn push(&mut self, previous: ConfigurationState) {
        self.undo.push(previous);
        self.redo.clear();
    }

    /// Step back: returns the state to restore, stashing `current` for redo.
    pub fn undo(&mut self, current: ConfigurationState) -> Option<ConfigurationState> {
        let restored = self.undo.pop()?;
        self.redo.push(current);
        Some(restored)
    }

    /// Step forward: returns the state to restore, stashing `current` for undo.
    pub fn redo(&mut self, current: ConfigurationState) -> Option<ConfigurationState> {
        let restored = self.redo.pop()?;
        self.undo.push(current);
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
