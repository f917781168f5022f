mod cms;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::cms::ContentSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .map_err(|e| format!("invalid PORT: {e}"))?;

    // Content source is non-fatal: pages show their empty state without it.
    let cms: Option<Arc<dyn ContentSource>> = match cms::CmsClient::from_env() {
        Ok(client) => {
            tracing::info!(provider = client.provider_name(), "content source initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, code = e.error_code(), "content source not configured; CMS routes disabled");
            None
        }
    };

    let state = state::AppState::new(cms);
    let app = routes::app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "fusion-site listening");
    axum::serve(listener, app).await?;
    Ok(())
}
