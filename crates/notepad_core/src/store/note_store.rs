//! Note store: collection plus editor state machine.
//!
//! # Responsibility
//! - Create, select, save and delete notes.
//! - Keep draft fields as the only staging area for unsaved edits.
//!
//! # Invariants
//! - Newly created notes are inserted at the front of the list.
//! - No two live notes share an id.
//! - `editor.is_editing` implies `editor.active_note_id` is set.
//! - Deleting the active note clears the active id, drafts and edit mode.

use crate::model::editor::EditorState;
use crate::model::note::{Note, NoteId, DEFAULT_NOTE_TITLE};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Reason a store transition was skipped.
///
/// State is never modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Target id does not resolve to a live note.
    NoteNotFound(NoteId),
    /// Operation needs an active note and none is set.
    NoActiveNote,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::NoActiveNote => write!(f, "no active note"),
        }
    }
}

impl Error for StoreError {}

/// Notes plus the editor session that views or edits one of them.
#[derive(Debug, Clone)]
pub struct NoteStore {
    notes: Vec<Note>,
    editor: EditorState,
    default_title: String,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    /// Creates an empty store using the `"New Note"` placeholder title.
    pub fn new() -> Self {
        Self::with_default_title(DEFAULT_NOTE_TITLE)
    }

    /// Creates an empty store whose new notes start with `default_title`.
    pub fn with_default_title(default_title: impl Into<String>) -> Self {
        Self {
            notes: Vec::new(),
            editor: EditorState::default(),
            default_title: default_title.into(),
        }
    }

    /// Notes in display order, most recently created first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// Returns the note referenced by the editor, if any.
    pub fn active_note(&self) -> Option<&Note> {
        self.editor.active_note_id.and_then(|id| self.get(id))
    }

    /// Creates a note at the front of the list and starts editing it.
    pub fn create_note(&mut self) -> NoteId {
        let mut note = Note::new(self.default_title.as_str());
        // Ids must stay unique within the collection.
        while self.position(note.id).is_some() {
            note.id = uuid::Uuid::new_v4();
        }
        let id = note.id;
        self.editor.focus(&note, true);
        self.notes.insert(0, note);
        info!(
            "event=note_create module=store status=ok note_id={} total={}",
            id,
            self.notes.len()
        );
        id
    }

    /// Makes `id` the active note in view mode and loads its fields into the
    /// drafts. Unsaved drafts of the previous note are discarded.
    ///
    /// # Errors
    /// - `NoteNotFound` when `id` is unknown; state is left unchanged.
    pub fn select_note(&mut self, id: NoteId) -> StoreResult<&Note> {
        let index = self.position(id).ok_or_else(|| {
            debug!("event=note_select module=store status=skipped reason=not_found note_id={id}");
            StoreError::NoteNotFound(id)
        })?;
        self.editor.focus(&self.notes[index], false);
        debug!("event=note_select module=store status=ok note_id={id}");
        Ok(&self.notes[index])
    }

    /// Writes the drafts into the active note and leaves edit mode.
    ///
    /// # Errors
    /// - `NoActiveNote` when nothing is active; state is left unchanged.
    pub fn save_active_note(&mut self) -> StoreResult<&Note> {
        let Some(id) = self.editor.active_note_id else {
            debug!("event=note_save module=store status=skipped reason=no_active_note");
            return Err(StoreError::NoActiveNote);
        };
        // The active id always points at a live note; deletion clears it.
        let index = self.position(id).ok_or(StoreError::NoteNotFound(id))?;
        let note = &mut self.notes[index];
        note.overwrite(
            self.editor.draft_title.as_str(),
            self.editor.draft_content.as_str(),
        );
        self.editor.is_editing = false;
        info!(
            "event=note_save module=store status=ok note_id={} content_bytes={}",
            id,
            note.content.len()
        );
        Ok(&self.notes[index])
    }

    /// Removes the note with `id` and returns it; `None` when absent.
    ///
    /// Removing the active note also clears the active id, drafts and edit
    /// mode. Removing any other note leaves the editor untouched.
    pub fn delete_note(&mut self, id: NoteId) -> Option<Note> {
        let Some(index) = self.position(id) else {
            debug!("event=note_delete module=store status=skipped reason=not_found note_id={id}");
            return None;
        };
        let removed = self.notes.remove(index);
        let was_active = self.editor.is_active(id);
        if was_active {
            self.editor.clear();
        }
        info!(
            "event=note_delete module=store status=ok note_id={} was_active={} total={}",
            id,
            was_active,
            self.notes.len()
        );
        Some(removed)
    }

    /// Switches the active note into edit mode without touching drafts.
    ///
    /// # Errors
    /// - `NoActiveNote` when nothing is active; state is left unchanged.
    pub fn begin_edit(&mut self) -> StoreResult<()> {
        if self.editor.active_note_id.is_none() {
            debug!("event=note_edit module=store status=skipped reason=no_active_note");
            return Err(StoreError::NoActiveNote);
        }
        self.editor.is_editing = true;
        Ok(())
    }

    /// Overwrites the draft title. Accepted in any mode.
    pub fn set_draft_title(&mut self, text: impl Into<String>) {
        self.editor.draft_title = text.into();
    }

    /// Overwrites the draft content. Accepted in any mode.
    pub fn set_draft_content(&mut self, text: impl Into<String>) {
        self.editor.draft_content = text.into();
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}
