//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep pipeline and listing structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make exit-code mapping explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — extracted data, parsed specs, run outcome, listing structs.
//! - `error.rs` — validator error taxonomy + exit-code mapping.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.

pub mod error;
pub mod models;
