use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use entigraph::consts::{
    DEFAULT_ARTIFACT_PATH, DEFAULT_ENGINE_COMMAND, DEFAULT_ENGINE_SCRIPT, DEFAULT_MAX_JOBS,
    DEFAULT_MAX_OUTPUT_BYTES,
};
use entigraph::logging;
use entigraph::orchestrator::Orchestrator;
use entigraph::resolver::DatasetCatalog;
use entigraph::runner::process::{EngineConfig, EngineProcessRunner};
use entigraph::server::{AppState, router};

#[derive(Parser)]
#[command(name = "entigraph", version, about = "Entity-network analysis job orchestrator")]
struct Cli {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Interpreter or binary that runs the analysis engine
    #[arg(long, default_value = DEFAULT_ENGINE_COMMAND)]
    engine_command: String,

    /// Analysis engine script, passed as the engine's first argument
    #[arg(long, default_value = DEFAULT_ENGINE_SCRIPT)]
    engine_script: PathBuf,

    /// Path of reference dataset A
    #[arg(long, default_value = "data/dataset_a.xlsx")]
    dataset_a: PathBuf,

    /// Path of reference dataset B
    #[arg(long, default_value = "data/dataset_b.xlsx")]
    dataset_b: PathBuf,

    /// Static-resource path where the engine writes its visualization
    #[arg(long, default_value = DEFAULT_ARTIFACT_PATH)]
    artifact_path: String,

    /// Maximum concurrent engine invocations; further requests queue
    #[arg(long, default_value_t = DEFAULT_MAX_JOBS)]
    max_jobs: usize,

    /// Per-job deadline in seconds
    #[arg(short, long, default_value_t = 180)]
    timeout: u64,

    /// Cap on captured bytes per engine output stream
    #[arg(long, default_value_t = DEFAULT_MAX_OUTPUT_BYTES)]
    max_output_bytes: usize,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let runner = EngineProcessRunner::new(EngineConfig {
        command: cli.engine_command,
        script: cli.engine_script,
        timeout: Duration::from_secs(cli.timeout),
        max_output_bytes: cli.max_output_bytes,
    });

    let orchestrator = Orchestrator::new(
        DatasetCatalog::new(cli.dataset_a, cli.dataset_b),
        Arc::new(runner),
        cli.max_jobs,
        cli.artifact_path,
    );

    let app = router(AppState {
        orchestrator: Arc::new(orchestrator),
    });

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!(addr = %cli.bind, max_jobs = cli.max_jobs, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
