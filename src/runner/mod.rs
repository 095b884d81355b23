pub mod mock;
pub mod process;

use async_trait::async_trait;

use crate::error::EngineError;
use crate::resolver::ResolvedJobInput;

/// Raw result of running the external engine once. Created when the child
/// process terminates, immutable thereafter, consumed exactly once by the
/// classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub exit_code: i32,
    /// Accumulated stdout, capped at the configured byte limit.
    pub stdout: String,
    /// Accumulated stderr. Operator diagnostics only; never shown to the caller.
    pub stderr: String,
}

/// Something that can execute one analysis job. The orchestrator only
/// knows this trait; tests script it with [`mock::MockRunner`].
#[async_trait]
pub trait JobRunner: Send + Sync {
    async fn run(&self, input: &ResolvedJobInput) -> Result<ProcessOutcome, EngineError>;
}
