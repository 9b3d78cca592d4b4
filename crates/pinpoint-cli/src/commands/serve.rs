//! Serve command - run the HTTP analysis server.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Args;
use tracing::info;

use pinpoint_core::PdfReader;

use super::{build_completion, load_config};
use crate::server::{self, AppState};

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Bind address (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Only run the deterministic stages, never call the completion service
    #[arg(long)]
    no_fallback: bool,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.no_fallback {
        config.resolution.semantic_fallback = false;
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    let state = AppState {
        completion: build_completion(&config),
        reader: Arc::new(PdfReader::new().with_max_pages(config.pdf.max_pages)),
        config: Arc::new(config),
    };

    let app = server::router(state);

    info!("pinpoint server starting on http://{}", addr);
    info!("  POST /analyze - resolve pointers against an uploaded PDF");
    info!("  GET  /health  - health check");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
