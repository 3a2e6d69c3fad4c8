//! Render-ready projection of the store for surfaces.
//!
//! # Invariants
//! - A view is a detached snapshot; it never borrows the store.
//! - `detail` is `None` exactly when no note is active.

use crate::markdown::preview::preview_text;
use crate::markdown::render::MarkdownRenderer;
use crate::model::note::NoteId;
use crate::store::note_store::NoteStore;
use serde::Serialize;

/// One row of the note list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteListItem {
    pub id: NoteId,
    pub title: String,
    /// Plain-text summary of the stored content.
    pub preview: Option<String>,
    /// Whether this row should be highlighted.
    pub is_active: bool,
}

/// Detail pane content for the active note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum NoteDetail {
    /// Form fields bound to the drafts.
    Editing {
        draft_title: String,
        draft_content: String,
    },
    /// Stored title plus rendered markup of the stored content.
    Viewing { title: String, markup: String },
}

/// Everything a surface needs to redraw after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceView {
    pub notes: Vec<NoteListItem>,
    pub active_note_id: Option<NoteId>,
    pub is_editing: bool,
    pub detail: Option<NoteDetail>,
}

impl SurfaceView {
    /// Projects `store` into a view, rendering markup with `renderer`.
    pub fn project(store: &NoteStore, renderer: &MarkdownRenderer) -> Self {
        let editor = store.editor();
        let notes = store
            .notes()
            .iter()
            .map(|note| NoteListItem {
                id: note.id,
                title: note.title.clone(),
                preview: preview_text(&note.content),
                is_active: editor.is_active(note.id),
            })
            .collect();

        let detail = store.active_note().map(|note| {
            if editor.is_editing {
                NoteDetail::Editing {
                    draft_title: editor.draft_title.clone(),
                    draft_content: editor.draft_content.clone(),
                }
            } else {
                NoteDetail::Viewing {
                    title: note.title.clone(),
                    markup: renderer.render(&note.content),
                }
            }
        });

        Self {
            notes,
            active_note_id: editor.active_note_id,
            is_editing: editor.is_editing,
            detail,
        }
    }

    /// Returns the list row for `id`, if present.
    pub fn item(&self, id: NoteId) -> Option<&NoteListItem> {
        self.notes.iter().find(|item| item.id == id)
    }
}
