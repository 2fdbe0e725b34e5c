use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use url::Url;

use dot_org_redirector::config::{load_config, AppConfig};
use dot_org_redirector::observability::{logging, metrics};
use dot_org_redirector::HttpServer;

/// HTTP redirector that forwards traffic to a fixed target origin with
/// tracking parameters attached.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        target_url = %config.redirect.target_url,
        exclude_pattern = %config.redirect.exclude_pattern,
        "dot-org-redirector starting"
    );

    // A target that does not parse is a deployment fault: stay up and
    // serve 500s rather than crash-loop, but say so loudly.
    if let Err(err) = Url::parse(&config.redirect.target_url) {
        tracing::error!(
            target_url = %config.redirect.target_url,
            error = %err,
            "Configured target URL does not parse; every redirect will fail until it is fixed"
        );
    }

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
