//! Note domain model.
//!
//! # Responsibility
//! - Define the user-authored record kept in the note collection.
//!
//! # Invariants
//! - `id` is assigned once at construction and never changes.
//! - `title` and `content` carry no validation; empty values are allowed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder title assigned to freshly created notes.
pub const DEFAULT_NOTE_TITLE: &str = "New Note";

/// Stable identifier for one note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// User-authored note with markdown source content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Sole lookup key inside the collection.
    pub id: NoteId,
    /// Display title.
    pub title: String,
    /// Raw markdown source.
    pub content: String,
}

impl Note {
    /// Creates a note with a generated id, the given title and empty content.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, String::new())
    }

    /// Creates a note with a caller-provided id.
    ///
    /// The caller is responsible for id uniqueness inside one collection.
    pub fn with_id(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Replaces title and content in place; `id` is left untouched.
    pub fn overwrite(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new(DEFAULT_NOTE_TITLE)
    }
}
