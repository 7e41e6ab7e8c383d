//! SportsBuddy
//!
//! Renders one route of the application as JSON

use anyhow::Context;
use tracing::info;

use SportsBuddy::{
    config::Settings,
    handlers::handle_request,
    state::AppContext,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("loading settings")?;
    settings.validate().context("validating settings")?;

    // Initialize logging; the guard flushes the file writer on drop
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", SportsBuddy::info());

    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());

    let ctx = AppContext::bootstrap(settings)
        .await
        .context("bootstrapping application context")?;

    let response = handle_request(&ctx, &path)
        .await
        .with_context(|| format!("rendering {}", path))?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
