//! Shared UI helpers.

pub mod formatting;

pub use formatting::{format_vector_full, format_vector_preview};
