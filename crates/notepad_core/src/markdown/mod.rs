//! Markdown subset conversion.
//!
//! # Responsibility
//! - Convert the supported markdown subset into display markup.
//! - Derive plain-text previews for list rows.
//!
//! # Invariants
//! - Every function here is pure and total; none of them can fail.

pub mod preview;
pub mod render;
