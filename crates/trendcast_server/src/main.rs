use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use trendcast_server::{
    ApiState, Credentials, DEFAULT_LOG_FILTER, ObservabilityConfig, Orchestrator,
    TrendcastConfig, init_observability, serve,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Trendcast social content server", long_about = None)]
struct Args {
    /// Extra configuration file layered over the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    port: Option<u16>,

    /// Emit JSON log lines
    #[arg(long)]
    json_logs: bool,

    /// Log at debug level everywhere
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = TrendcastConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.server.json_logs |= args.json_logs;

    init_observability(&ObservabilityConfig {
        log_level: if args.verbose {
            "debug".to_string()
        } else {
            DEFAULT_LOG_FILTER.to_string()
        },
        json_logs: config.server.json_logs,
    })
    .map_err(|e| anyhow::anyhow!(e))?;

    let credentials = Credentials::from_env()?;
    let orchestrator = Orchestrator::from_config(&config, &credentials)?;

    info!(
        model = %config.gemini.model,
        trend_context = config.generation.use_trend_context,
        "Starting Trendcast"
    );
    serve(&config.server.address(), ApiState::new(orchestrator)).await?;
    Ok(())
}
