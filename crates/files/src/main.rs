mod app;
mod config;
mod handlers;
mod models;
mod state;
mod storage;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState, storage::InMemoryObjectStore};

/// Stash files - serve objects from an S3 bucket by key
#[derive(Parser, Debug)]
#[command(name = "stash-files")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3001", env = "PORT")]
    port: u16,

    /// Serve from an in-memory store instead of S3
    #[arg(long)]
    in_memory: bool,

    /// Directory whose files are loaded into the in-memory store
    #[arg(long, requires = "in_memory")]
    seed_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let in_lambda = std::env::var_os("AWS_LAMBDA_RUNTIME_API").is_some();

    // Initialize tracing subscriber (JSON lines for CloudWatch inside Lambda)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stash_files=debug,tower_http=debug".into()),
        )
        .with(in_lambda.then(|| tracing_subscriber::fmt::layer().json().without_time()))
        .with((!in_lambda).then(tracing_subscriber::fmt::layer))
        .init();

    let state = if cli.in_memory {
        tracing::warn!("Using in-memory object storage");
        let store = InMemoryObjectStore::new();
        if let Some(dir) = &cli.seed_dir {
            let loaded = store.load_dir(dir).await?;
            tracing::info!(dir = %dir.display(), objects = loaded, "Seeded in-memory store");
        }
        AppState::in_memory(store)
    } else {
        AppState::from_config(&Config::from_env()).await
    };

    let app = create_app(state);

    if in_lambda {
        tracing::info!("Running as a Lambda function");
        return stash_lambda::run(app)
            .await
            .map_err(|err| anyhow::anyhow!(err));
    }

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
