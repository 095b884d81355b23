//! Classifies engine stdout into a fixed outcome taxonomy.
//!
//! The engine reports domain-level failures as free-form text on stdout
//! with exit code 0, so classification is substring matching over fixed
//! sentinels. The sentinels are not guaranteed mutually exclusive in the
//! engine's output, so matching is order-sensitive: first match wins.
//! Whether the sentinel strings are a stable contract or incidental debug
//! output of the engine is an open question; treat them as fragile.

use crate::consts::{SENTINEL_DECODE_ERROR, SENTINEL_NOT_FOUND, SENTINEL_SCHEMA_ERROR};

/// Outcome categories, in matching precedence order (Success last).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Engine could not parse its own model output as JSON.
    DecodeError,
    /// The selected record was not found in the chosen dataset.
    NotFoundError,
    /// The extracted structure was too sparse to build a graph from.
    SchemaError,
    /// No sentinel present; the artifact is assumed written by convention.
    Success,
}

/// The terminal value of one orchestration run. Never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedResult {
    pub category: Category,
    /// Short user-facing message for the category.
    pub user_message: &'static str,
    /// Full engine stdout, forwarded for all categories so a human can
    /// inspect the raw diagnostic trace.
    pub raw_output: String,
    /// Conventional artifact location. Populated only on success; never
    /// verified against the filesystem.
    pub artifact_path: Option<String>,
}

/// Classify the stdout of an engine run that exited zero.
///
/// Pure function: the same stdout always yields the same result.
pub fn classify(stdout: &str, artifact_path: &str) -> ClassifiedResult {
    let (category, user_message, artifact) = if stdout.contains(SENTINEL_DECODE_ERROR) {
        (
            Category::DecodeError,
            "processing error, no artifact produced",
            None,
        )
    } else if stdout.contains(SENTINEL_NOT_FOUND) {
        (Category::NotFoundError, "selected data not found", None)
    } else if stdout.contains(SENTINEL_SCHEMA_ERROR) {
        (
            Category::SchemaError,
            "processing error, try again later",
            None,
        )
    } else {
        (
            Category::Success,
            "processed successfully",
            Some(artifact_path.to_string()),
        )
    };

    ClassifiedResult {
        category,
        user_message,
        raw_output: stdout.to_string(),
        artifact_path: artifact,
    }
}
