//! Maps a caller's `(selection, user input)` pair to a concrete job input.
//!
//! Resolution is pure: no filesystem probing happens here. A dataset file
//! that is missing on disk surfaces later as an engine-reported error, not
//! as a resolver error.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ResolveError;

/// The three input kinds a caller can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    ReferenceDatasetA,
    ReferenceDatasetB,
    FreeText,
}

impl Selection {
    /// Parse the wire value of `selectedOption`.
    fn parse(value: &str) -> Result<Self, ResolveError> {
        match value {
            "ReferenceDatasetA" => Ok(Self::ReferenceDatasetA),
            "ReferenceDatasetB" => Ok(Self::ReferenceDatasetB),
            "FreeText" => Ok(Self::FreeText),
            other => Err(ResolveError::InvalidSelection(other.to_string())),
        }
    }
}

/// The caller-supplied request body. Fields are optional so that missing
/// and empty values can both be reported as `MissingField` rather than as
/// a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub selected_option: Option<String>,
    #[serde(default)]
    pub user_input: Option<String>,
}

/// The two fixed, server-known dataset files selectable by name.
#[derive(Debug, Clone)]
pub struct DatasetCatalog {
    pub dataset_a: PathBuf,
    pub dataset_b: PathBuf,
}

impl DatasetCatalog {
    pub fn new(dataset_a: impl Into<PathBuf>, dataset_b: impl Into<PathBuf>) -> Self {
        Self {
            dataset_a: dataset_a.into(),
            dataset_b: dataset_b.into(),
        }
    }
}

/// A resolved job input, owned by the orchestration run that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedJobInput {
    /// One of the two reference datasets; `user_input` identifies the record
    /// within it and is passed through to the engine verbatim.
    FileBacked { path: PathBuf, user_input: String },
    /// Free text carried verbatim; no file path is resolved.
    InlineText { text: String },
}

impl ResolvedJobInput {
    /// The engine's two positional arguments: a file path (empty string for
    /// inline text, explicitly valid) and the raw user input.
    pub fn engine_args(&self) -> (&Path, &str) {
        match self {
            Self::FileBacked { path, user_input } => (path.as_path(), user_input.as_str()),
            Self::InlineText { text } => (Path::new(""), text.as_str()),
        }
    }
}

/// Resolve a request against the catalog, or fail with a caller error.
///
/// Field presence is checked strictly before selection validity, so a
/// request that is both missing `userInput` and carries a bogus
/// `selectedOption` reports `MissingField`.
pub fn resolve(
    request: &AnalysisRequest,
    catalog: &DatasetCatalog,
) -> Result<ResolvedJobInput, ResolveError> {
    let selected = request
        .selected_option
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(ResolveError::MissingField("selectedOption"))?;
    let user_input = request
        .user_input
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(ResolveError::MissingField("userInput"))?;

    let input = match Selection::parse(selected)? {
        Selection::ReferenceDatasetA => ResolvedJobInput::FileBacked {
            path: catalog.dataset_a.clone(),
            user_input: user_input.to_string(),
        },
        Selection::ReferenceDatasetB => ResolvedJobInput::FileBacked {
            path: catalog.dataset_b.clone(),
            user_input: user_input.to_string(),
        },
        Selection::FreeText => ResolvedJobInput::InlineText {
            text: user_input.to_string(),
        },
    };
    Ok(input)
}
