//! Tale API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p tale-api
//! ```
//!
//! Configuration comes from the file named by `TALE_CONFIG` when set,
//! otherwise from environment variables.

use std::env;

use tale_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match env::var("TALE_CONFIG") {
        Ok(path) => AppConfig::from_file(path)?,
        Err(_) => AppConfig::from_env()?,
    };
    config.validate()?;

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        backend = ?config.store.backend,
        address = %config.api.address(),
        "Configuration loaded"
    );

    tale_api::run(config).await?;

    Ok(())
}
