//! In-memory note collection and editor state machine.
//!
//! # Responsibility
//! - Own the note list and the active-note/draft state as one struct.
//! - Expose every state transition as a synchronous method.
//!
//! # Invariants
//! - Calls with unknown ids or without an active note leave state unchanged
//!   and report the reason to the caller.

pub mod note_store;
