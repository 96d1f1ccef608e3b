//! Command handler layer.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate evaluation to `services/*`.
//! - Keep behavior and output schema stable.

pub mod tally;

pub use tally::handle_tally;
