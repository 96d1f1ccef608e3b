//! Service layer containing the evaluation logic and I/O helpers.
//!
//! ## Service map
//! - `input.rs` — input file loading.
//! - `analysis.rs` — per-report evaluation and tallying.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod analysis;
pub mod input;
