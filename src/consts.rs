//! Project-wide constants.

use std::time::Duration;

/// Sentinel the engine prints when it cannot parse its own model output.
pub const SENTINEL_DECODE_ERROR: &str = "JSON Decode Error:";

/// Sentinel the engine prints when the selected record is absent from the dataset.
pub const SENTINEL_NOT_FOUND: &str = "Error: Selected data not found";

/// Sentinel the engine prints when the extracted structure is too sparse to graph.
pub const SENTINEL_SCHEMA_ERROR: &str = "Error: Expected at least 3 keys";

/// Conventional static-resource path where the engine writes its visualization.
/// The engine's side effect, not ours; we report it without probing the filesystem.
pub const DEFAULT_ARTIFACT_PATH: &str = "/entity_network.html";

/// Default interpreter for the analysis engine script.
pub const DEFAULT_ENGINE_COMMAND: &str = "python3";

/// Default analysis engine script path, relative to the working directory.
pub const DEFAULT_ENGINE_SCRIPT: &str = "process_data.py";

/// Default cap on concurrent engine invocations.
pub const DEFAULT_MAX_JOBS: usize = 4;

/// Default per-job deadline. Engine runs include an LLM round-trip, so generous.
pub const DEFAULT_JOB_TIMEOUT: Duration = Duration::from_secs(180);

/// Maximum captured bytes per output stream. Anything beyond this is truncated.
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 1_000_000;
