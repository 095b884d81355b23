use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{JobRunner, ProcessOutcome};
use crate::error::EngineError;
use crate::resolver::ResolvedJobInput;

/// A scripted runner for tests. Returns pre-defined outcomes in order and
/// records how it was called, so tests can assert that no engine process
/// would have been spawned.
pub struct MockRunner {
    script: Mutex<Vec<Result<ProcessOutcome, EngineError>>>,
    calls: AtomicUsize,
    inputs: Mutex<Vec<ResolvedJobInput>>,
}

impl MockRunner {
    pub fn new(outcomes: Vec<Result<ProcessOutcome, EngineError>>) -> Self {
        Self {
            script: Mutex::new(outcomes),
            calls: AtomicUsize::new(0),
            inputs: Mutex::new(Vec::new()),
        }
    }

    /// A runner that always succeeds with the given stdout and exit code 0.
    pub fn with_stdout(stdout: &str) -> Self {
        Self::new(vec![Ok(ProcessOutcome {
            exit_code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        })])
    }

    /// How many times `run` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The inputs `run` was invoked with, in order.
    pub fn recorded_inputs(&self) -> Vec<ResolvedJobInput> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobRunner for MockRunner {
    async fn run(&self, input: &ResolvedJobInput) -> Result<ProcessOutcome, EngineError> {
        let i = self.calls.fetch_add(1, Ordering::SeqCst);
        self.inputs.lock().unwrap().push(input.clone());
        let mut script = self.script.lock().unwrap();
        if script.is_empty() {
            return Err(EngineError::Io(std::io::Error::other(format!(
                "MockRunner: no more outcomes (called {} times)",
                i + 1
            ))));
        }
        script.remove(0)
    }
}
