// File: src/main.rs
// Purpose: Demo server for the select and toast components

mod config;
mod error;
mod forms;
mod layout;
mod model;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::Uri,
    response::Redirect,
    routing::get,
    Router,
};

use config::DemoConfig;
use error::AppError;

pub struct AppState {
    pub config: DemoConfig,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/forms") }))
        .route("/forms", get(forms::show).post(forms::submit))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Route '{}' not found", uri.path()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = DemoConfig::load_default()?;
    let addr = config.addr();
    tracing::info!(
        position = %config.toast.position,
        sound = config.toast.enable_sound,
        searchable = config.select.searchable,
        "Loaded configuration"
    );

    let state = Arc::new(AppState { config });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
