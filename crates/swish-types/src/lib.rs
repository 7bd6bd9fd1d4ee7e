//! Pure data types for swish — job identifiers, job status, command results.
//!
//! This crate is a leaf dependency with no process or terminal handling.
//! It exists so that front ends can display jobs and results without
//! pulling in swish-kernel's system-call layer.

pub mod job;
pub mod result;

// Flat re-exports for convenience
pub use job::*;
pub use result::*;
