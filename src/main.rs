//! Server binary for the wage compliance engine.

use std::env;
use std::sync::Arc;

use tracing::info;

use wage_engine::api::{AppState, create_router};
use wage_engine::audit::JsonlAuditSink;
use wage_engine::calculation::WageEngine;
use wage_engine::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config_dir =
        env::var("WAGE_CONFIG_DIR").unwrap_or_else(|_| "./config/thailand".to_string());
    let audit_path =
        env::var("WAGE_AUDIT_LOG").unwrap_or_else(|_| "./calculations.jsonl".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "4000".to_string());

    let loader = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        records = loader.records().len(),
        "Loaded wage dataset"
    );

    let engine = WageEngine::from_dataset(loader.into_dataset())?;
    let audit = Arc::new(JsonlAuditSink::open(&audit_path)?);
    let state = AppState::new(engine, audit);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Wage engine listening");

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
