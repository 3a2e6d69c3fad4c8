//! Core domain logic for notepad.
//! This crate is the single source of truth for note and editor invariants.

pub mod logging;
pub mod markdown;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
    LoggingError,
};
pub use markdown::preview::preview_text;
pub use markdown::render::{render, render_optional, MarkdownRenderer, MarkupPolicy};
pub use model::editor::EditorState;
pub use model::note::{Note, NoteId, DEFAULT_NOTE_TITLE};
pub use service::controller::{
    ControllerConfig, Dispatch, Intent, NoteController, SubscriptionId, SurfaceObserver,
};
pub use service::view::{NoteDetail, NoteListItem, SurfaceView};
pub use store::note_store::{NoteStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
