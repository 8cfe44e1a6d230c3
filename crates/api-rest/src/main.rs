//! Standalone REST API server binary.
//!
//! Runs the composer REST API on its own. The workspace's main `tawasul-run` binary serves the
//! same router; this one is handy when working on the API crate alone.

use tawasul_core::config::markup_from_env_value;
use tawasul_core::ComposerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Start the REST API server.
///
/// # Environment Variables
/// - `TAWASUL_REST_ADDR`: server address (default: "0.0.0.0:3000")
/// - `TAWASUL_MARKUP`: default markup, `html` or `plain` (default: "html")
///
/// # Errors
/// Returns an error if the tracing configuration, the markup setting or the listener address is
/// invalid, or if the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let markup = markup_from_env_value(std::env::var("TAWASUL_MARKUP").ok())?;
    let addr = std::env::var("TAWASUL_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting Tawasul REST API on {}", addr);

    let app = api_rest::router(ComposerConfig::new(markup));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
