use std::{error::Error, sync::Arc};

use inference_api::InferenceHandler;
use tracing::*;
use tracing_subscriber::EnvFilter;

mod config;
mod server;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!(
        "Starting... CARGO_PKG_NAME={}, CARGO_PKG_VERSION={}, version={}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        option_env!("version").unwrap_or("(not defined at compile)")
    );

    let config = Config::from_env()?;
    info!(
        "inference_url={} timeout={:?}",
        config.inference_url, config.timeout
    );

    let handler =
        Arc::new(InferenceHandler::new(config.inference_url).with_timeout(config.timeout));
    let app = server::router(handler);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _signal_err = tokio::signal::ctrl_c().await;
            info!("Received Ctrl-C, shutting down.");
        })
        .await?;

    Ok(())
}
