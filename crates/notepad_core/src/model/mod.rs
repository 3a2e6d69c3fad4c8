//! Domain model for the note list and the editor session.
//!
//! # Responsibility
//! - Define the canonical `Note` record shown by every surface.
//! - Define `EditorState`, the single staging area for unsaved edits.
//!
//! # Invariants
//! - Every note is identified by a `NoteId` that is never reused.
//! - `EditorState::is_editing` implies an active note is set.

pub mod editor;
pub mod note;
