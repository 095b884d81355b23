//! Error taxonomy for the orchestration pipeline.
//!
//! Two families: [`ResolveError`] covers caller mistakes (mapped to 400 at
//! the HTTP boundary) and [`EngineError`] covers infrastructure failures of
//! the engine process itself (mapped to 500). The three patterned domain
//! failures the engine reports on stdout are *not* errors — they are
//! [`Category`](crate::classify::Category) variants of a successful run.

use thiserror::Error;

/// Caller-input failures, raised before any process is spawned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// A required request field is absent or empty. Checked before
    /// selection validation.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// `selectedOption` is not one of the enumerated values.
    #[error("invalid option selected: {0}")]
    InvalidSelection(String),
}

/// Infrastructure failures of a single engine invocation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine process could not be started at all (binary missing,
    /// permission denied). No `ProcessOutcome` exists on this path.
    #[error("failed to spawn analysis engine: {0}")]
    Spawn(#[source] std::io::Error),

    /// The per-job deadline expired; the child was killed.
    #[error("analysis engine timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The engine exited nonzero, which it reserves for internal crashes.
    /// Domain-level failures come back on stdout with exit code 0 instead.
    #[error("analysis engine exited with code {exit_code}")]
    ExecutionFailure {
        exit_code: i32,
        stderr_excerpt: String,
    },

    /// Reading the engine's output streams failed mid-run.
    #[error("failed to read engine output: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything a single orchestration run can fail with.
#[derive(Debug, Error)]
pub enum OrchestrateError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_errors_render_field_and_value() {
        let e = ResolveError::MissingField("userInput");
        assert!(e.to_string().contains("userInput"));

        let e = ResolveError::InvalidSelection("bogus".to_string());
        assert!(e.to_string().contains("bogus"));
    }

    #[test]
    fn execution_failure_renders_exit_code() {
        let e = EngineError::ExecutionFailure {
            exit_code: 2,
            stderr_excerpt: "Traceback".to_string(),
        };
        assert!(e.to_string().contains('2'));
    }

    #[test]
    fn orchestrate_error_is_transparent() {
        let e = OrchestrateError::from(ResolveError::MissingField("selectedOption"));
        assert_eq!(
            e.to_string(),
            ResolveError::MissingField("selectedOption").to_string()
        );
    }
}
