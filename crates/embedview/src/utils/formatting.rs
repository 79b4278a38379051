//! Formatting for embedding vectors shown in the UI.
//!
//! Collapsed chunk cards show a short fixed-width preview; expanded cards
//! show every dimension at higher precision.

use embedview_core::config::{
    VECTOR_FULL_DECIMALS, VECTOR_PREVIEW_DECIMALS, VECTOR_PREVIEW_DIMS,
};

/// Formats the leading dimensions of a vector for the collapsed card view.
///
/// Shows the first [`VECTOR_PREVIEW_DIMS`] values at
/// [`VECTOR_PREVIEW_DECIMALS`] decimal places, with a trailing ellipsis
/// when dimensions were cut off.
pub fn format_vector_preview(vectors: &[f32]) -> String {
    let shown: Vec<String> = vectors
        .iter()
        .take(VECTOR_PREVIEW_DIMS)
        .map(|v| format!("{v:.prec$}", prec = VECTOR_PREVIEW_DECIMALS))
        .collect();

    if vectors.len() > VECTOR_PREVIEW_DIMS {
        format!("[{}, ...]", shown.join(", "))
    } else {
        format!("[{}]", shown.join(", "))
    }
}

/// Formats every dimension of a vector for the expanded card view, at
/// [`VECTOR_FULL_DECIMALS`] decimal places.
pub fn format_vector_full(vectors: &[f32]) -> String {
    let values: Vec<String> = vectors
        .iter()
        .map(|v| format!("{v:.prec$}", prec = VECTOR_FULL_DECIMALS))
        .collect();
    format!("[{}]", values.join(", "))
}
