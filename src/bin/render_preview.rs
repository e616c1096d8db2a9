// Render Preview Binary
//
// Purpose: Render the standard skeleton with a data directory and print the page
// Usage: cargo run --features preview --bin render_preview -- [DATA_DIR]
// Env: PORTFOLIO_CONFIG (JSON config file), PORTFOLIO_DATA_DIR

use anyhow::{bail, Context};
use portfolio_site::{standard_skeleton, FsFetcher, InitStatus, PortfolioApp, SiteConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays pure HTML
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_site=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Optional JSON config file; PORTFOLIO_DATA_DIR and the argument override it
    let mut config = match std::env::var("PORTFOLIO_CONFIG") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path))?;
            SiteConfig::from_json(&raw)
                .with_context(|| format!("Failed to parse config: {}", path))?
        }
        Err(_) => SiteConfig::default(),
    }
    .with_env_overrides();
    if let Some(dir) = std::env::args().nth(1) {
        config.data_dir = dir.into();
    }
    tracing::info!("Data directory: {}", config.data_dir.display());

    let fetcher = FsFetcher::new(config.data_dir.clone());
    let mut app = PortfolioApp::new(standard_skeleton(), config);

    if app.init(&fetcher).await != InitStatus::Ready {
        bail!("render failed: {}", app.diagnostics().join("; "));
    }

    print!("{}", app.document().to_html());
    Ok(())
}
