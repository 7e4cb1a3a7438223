use anyhow::Result;
use echo_function::{config::Config, handler, logger::setup_logger, shutdown::shutdown_signal};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    setup_logger()?;
    info!("Starting HTTP server...");

    let config = Config::from_env()?;
    let app = handler::router(config.header_mode);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    println!("Running on port {}", config.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
