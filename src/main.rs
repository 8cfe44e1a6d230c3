use std::net::SocketAddr;
use tawasul_core::ComposerConfig;
use tawasul_core::config::markup_from_env_value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Tawasul application
///
/// Resolves configuration once at startup and serves the composer REST API with its
/// OpenAPI/Swagger documentation.
///
/// # Environment Variables
/// - `TAWASUL_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `TAWASUL_MARKUP`: default markup for composed text, `html` or `plain` (default: "html")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tawasul=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let markup = markup_from_env_value(std::env::var("TAWASUL_MARKUP").ok())?;
    let rest_addr: SocketAddr = std::env::var("TAWASUL_REST_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".into())
        .parse()?;

    tracing::info!(
        "-- Starting Tawasul REST API on {} (markup: {})",
        rest_addr,
        markup.to_wire()
    );

    let app = api_rest::router(ComposerConfig::new(markup));
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
