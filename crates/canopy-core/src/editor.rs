//! Text editor subject.

use crate::traits::Originator;
use crate::types::{SubjectId, TextState};

/// A text buffer that can be saved to and restored from snapshots.
#[derive(Debug, Clone)]
pub struct TextEditor {
    id: SubjectId,
    state: TextState,
}

impl TextEditor {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self {
            id: SubjectId::new(),
            state: TextState::default(),
        }
    }

    /// Replace the buffer contents.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.text = text.into();
    }

    /// Current buffer contents.
    pub fn text(&self) -> &str {
        &self.state.text
    }
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl Originator for TextEditor {
    type State = TextState;

    fn subject_id(&self) -> SubjectId {
        self.id
    }

    fn state(&self) -> &TextState {
        &self.state
    }

    fn replace_state(&mut self, state: TextState) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert_eq!(TextEditor::new().text(), "");
    }

    #[test]
    fn test_save_restore() {
        let mut editor = TextEditor::new();
        editor.set_text("Hello, World!");
        let snap = editor.save();

        editor.set_text("This is a new text.");
        assert_eq!(snap.state().text, "Hello, World!");

        editor.restore(&snap);
        assert_eq!(editor.text(), "Hello, World!");
    }

    #[test]
    fn test_restore_is_idempotent() {
        let mut editor = TextEditor::new();
        editor.set_text("one");
        let snap = editor.save();
        editor.set_text("two");

        editor.restore(&snap);
        let once = editor.state().clone();
        editor.restore(&snap);
        assert_eq!(editor.state(), &once);
    }

    #[test]
    fn test_restore_accepts_foreign_snapshot() {
        let mut source = TextEditor::new();
        source.set_text("from elsewhere");
        let foreign = source.save();

        let mut editor = TextEditor::new();
        editor.set_text("mine");
        assert!(!editor.owns(&foreign));
        assert!(source.owns(&foreign));

        editor.restore(&foreign);
        assert_eq!(editor.text(), "from elsewhere");
        assert_ne!(editor.subject_id(), source.subject_id());
    }

    #[test]
    fn test_clone_keeps_identity() {
        let editor = TextEditor::new();
        let snap = editor.save();
        assert!(editor.clone().owns(&snap));
    }
}
