use std::process::ExitCode;

use cramer_server::{Server, ServerConfig, ServerError};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(err) => {
            // Without a signal handler the server runs until killed.
            error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let server = Server::new(config)?;
    server.run_until(shutdown_signal()).await
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "server failed");
            ExitCode::FAILURE
        }
    }
}
