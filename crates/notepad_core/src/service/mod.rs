//! Surface-facing use-case layer.
//!
//! # Responsibility
//! - Translate user intents into store transitions.
//! - Keep rendering surfaces decoupled from store internals via views.

pub mod controller;
pub mod view;
