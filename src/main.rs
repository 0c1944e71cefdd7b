use anyhow::Result;
use clap::Parser;
use job_search::{start_web_server, ConfigManager};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "jobsearch-backend")]
#[command(about = "Job listing API backed by the RapidAPI jsearch service")]
struct Cli {
    /// Port to listen on, overrides PORT
    #[arg(long)]
    port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging first
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("job_search=info,rocket=warn"));

    if cli.log_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_current_span(false).with_span_list(false))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    let mut config = ConfigManager::load()?;
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    info!(
        "Mode: {}",
        if config.is_live() { "live (jsearch)" } else { "offline (sample jobs)" }
    );

    start_web_server(config).await
}
