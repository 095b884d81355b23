//! Runs the analysis engine as a child process.
//!
//! The engine is invoked as `<command> <script> <file-path> <user-input>`
//! where the file path is an empty string for free-text jobs. Both output
//! streams are drained incrementally and concurrently so the child never
//! blocks on a full pipe, with accumulation capped at a configurable byte
//! limit. A per-job deadline kills runaway engine processes.

use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use super::{JobRunner, ProcessOutcome};
use crate::consts::{
    DEFAULT_ENGINE_COMMAND, DEFAULT_ENGINE_SCRIPT, DEFAULT_JOB_TIMEOUT, DEFAULT_MAX_OUTPUT_BYTES,
};
use crate::error::EngineError;
use crate::resolver::ResolvedJobInput;

/// Configuration for the engine process runner.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Interpreter or binary to invoke.
    pub command: String,
    /// Engine script passed as the first argument.
    pub script: PathBuf,
    /// Deadline for a single job, spawn to exit.
    pub timeout: Duration,
    /// Cap on captured bytes per output stream.
    pub max_output_bytes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_ENGINE_COMMAND.to_string(),
            script: PathBuf::from(DEFAULT_ENGINE_SCRIPT),
            timeout: DEFAULT_JOB_TIMEOUT,
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
        }
    }
}

/// Executes analysis jobs by spawning the configured engine.
pub struct EngineProcessRunner {
    config: EngineConfig,
}

impl EngineProcessRunner {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }
}

/// Read a stream to EOF, keeping at most `cap` bytes. Bytes past the cap
/// are counted and discarded so the child can keep writing.
async fn drain_capped<R: AsyncRead + Unpin>(mut reader: R, cap: usize) -> io::Result<String> {
    let mut chunk = [0u8; 8192];
    let mut kept: Vec<u8> = Vec::new();
    let mut total: usize = 0;

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        total += n;
        if kept.len() < cap {
            let take = n.min(cap - kept.len());
            kept.extend_from_slice(&chunk[..take]);
        }
    }

    let mut text = String::from_utf8_lossy(&kept).into_owned();
    if total > cap {
        text.push_str(&format!("\n\n[truncated: showing {cap}/{total} bytes]"));
    }
    Ok(text)
}

#[async_trait]
impl JobRunner for EngineProcessRunner {
    async fn run(&self, input: &ResolvedJobInput) -> Result<ProcessOutcome, EngineError> {
        let (file_path, user_input) = input.engine_args();

        let mut child = Command::new(&self.config.command)
            .arg(&self.config.script)
            .arg(file_path)
            .arg(user_input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(EngineError::Spawn)?;

        let stdout_pipe = child
            .stdout
            .take()
            .ok_or_else(|| EngineError::Io(io::Error::other("stdout not captured")))?;
        let stderr_pipe = child
            .stderr
            .take()
            .ok_or_else(|| EngineError::Io(io::Error::other("stderr not captured")))?;

        let cap = self.config.max_output_bytes;
        let finished = tokio::time::timeout(self.config.timeout, async {
            let (stdout, stderr, status) = tokio::join!(
                drain_capped(stdout_pipe, cap),
                drain_capped(stderr_pipe, cap),
                child.wait(),
            );
            Ok::<_, io::Error>((stdout?, stderr?, status?))
        })
        .await;

        let (stdout, stderr, status) = match finished {
            Ok(result) => result?,
            Err(_elapsed) => {
                let _ = child.kill().await;
                return Err(EngineError::Timeout(self.config.timeout));
            }
        };

        if !stderr.is_empty() {
            tracing::warn!(stderr = %stderr, "engine wrote to stderr");
        }

        Ok(ProcessOutcome {
            exit_code: status.code().unwrap_or(-1),
            stdout,
            stderr,
        })
    }
}
