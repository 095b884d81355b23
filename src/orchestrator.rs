//! The pipeline: resolve → dispatch → classify.
//!
//! Each request is an independent unit of work with no shared mutable
//! state; the only cross-request coupling is the semaphore bounding
//! concurrent engine invocations. Within one request the stages are
//! strictly sequential. No retries, no cancellation beyond the runner's
//! own deadline.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::classify::{ClassifiedResult, classify};
use crate::error::{EngineError, OrchestrateError};
use crate::resolver::{AnalysisRequest, DatasetCatalog, resolve};
use crate::runner::JobRunner;

/// Longest stderr slice embedded in an `ExecutionFailure`. Full stderr
/// still goes to the log.
const STDERR_EXCERPT_CHARS: usize = 500;

pub struct Orchestrator {
    catalog: DatasetCatalog,
    runner: Arc<dyn JobRunner>,
    /// Bounds concurrent engine invocations; requests past the cap queue here.
    permits: Arc<Semaphore>,
    artifact_path: String,
}

impl Orchestrator {
    pub fn new(
        catalog: DatasetCatalog,
        runner: Arc<dyn JobRunner>,
        max_jobs: usize,
        artifact_path: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            runner,
            permits: Arc::new(Semaphore::new(max_jobs)),
            artifact_path: artifact_path.into(),
        }
    }

    /// Run one analysis job end to end.
    ///
    /// Caller errors are raised before a permit is taken, so invalid
    /// requests never occupy engine capacity.
    pub async fn handle(
        &self,
        request: &AnalysisRequest,
    ) -> Result<ClassifiedResult, OrchestrateError> {
        let input = resolve(request, &self.catalog)?;

        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| EngineError::Io(std::io::Error::other("job queue closed")))?;

        tracing::info!(input = ?input, "dispatching analysis job");
        let outcome = self.runner.run(&input).await?;

        if outcome.exit_code != 0 {
            tracing::error!(
                exit_code = outcome.exit_code,
                stderr = %outcome.stderr,
                "engine exited nonzero"
            );
            return Err(OrchestrateError::Engine(EngineError::ExecutionFailure {
                exit_code: outcome.exit_code,
                stderr_excerpt: excerpt(&outcome.stderr),
            }));
        }

        let result = classify(&outcome.stdout, &self.artifact_path);
        tracing::info!(category = ?result.category, "job classified");
        Ok(result)
    }
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= STDERR_EXCERPT_CHARS {
        return text.to_string();
    }
    text.chars().take(STDERR_EXCERPT_CHARS).collect()
}
