//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `help.rs` — supported-types/supported-operations listings.
//! - `validate.rs` — the load/parse/extract/execute pipeline.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and exit-code mapping stable.

pub mod help;
pub mod validate;
