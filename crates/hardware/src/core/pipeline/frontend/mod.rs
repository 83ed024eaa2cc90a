//! Frontend pipeline stages.
//!
//! The frontend moves instructions from the static stream into the backend:
//! Fetch&Decode -> Rename&Dispatch.

pub mod fetch;
pub mod rename;

pub use fetch::fetch_stage;
pub use rename::{DispatchOutcome, StallReason, rename_stage};
