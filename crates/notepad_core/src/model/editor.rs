//! Editor session state.
//!
//! # Invariants
//! - `is_editing == true` implies `active_note_id.is_some()`.
//! - Draft fields are the only staging area; notes change only on save.

use crate::model::note::{Note, NoteId};
use serde::Serialize;

/// Active-note pointer plus draft fields for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditorState {
    /// Lookup key into the collection, not an ownership relation.
    pub active_note_id: Option<NoteId>,
    /// True while the active note has unsaved draft edits in progress.
    pub is_editing: bool,
    pub draft_title: String,
    pub draft_content: String,
}

impl EditorState {
    /// Points the editor at `note` and mirrors its fields into the drafts.
    pub(crate) fn focus(&mut self, note: &Note, editing: bool) {
        self.active_note_id = Some(note.id);
        self.is_editing = editing;
        self.draft_title.clone_from(&note.title);
        self.draft_content.clone_from(&note.content);
    }

    /// Drops the active note and clears drafts.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns whether `id` is the active note.
    pub fn is_active(&self, id: NoteId) -> bool {
        self.active_note_id == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::EditorState;
    use crate::model::note::Note;

    #[test]
    fn focus_copies_note_fields_into_drafts() {
        let note = Note::with_id(uuid::Uuid::new_v4(), "Groceries", "- milk");
        let mut editor = EditorState::default();

        editor.focus(&note, false);

        assert!(editor.is_active(note.id));
        assert!(!editor.is_editing);
        assert_eq!(editor.draft_title, "Groceries");
        assert_eq!(editor.draft_content, "- milk");
    }

    #[test]
    fn clear_resets_every_field() {
        let note = Note::default();
        let mut editor = EditorState::default();
        editor.focus(&note, true);

        editor.clear();

        assert_eq!(editor, EditorState::default());
    }
}
