//! Service layer containing the validation pipeline pieces.
//!
//! ## Service map
//! - `loader.rs` — PEM decode + X.509 parse from an injected byte source.
//! - `extraction.rs` — named certificate field -> ordered string values.
//! - `registry.rs` — fixed module table + built-in predicates.
//! - `spec.rs` — command-line module-specification grammar.
//! - `executor.rs` — per-field AND aggregation and negation policy.
//! - `output.rs` — JSON/text output helpers for the listings.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod executor;
pub mod extraction;
pub mod loader;
pub mod output;
pub mod registry;
pub mod spec;
