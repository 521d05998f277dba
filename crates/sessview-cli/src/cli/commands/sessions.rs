//! `sessview sessions` – resolve previews for a session list.

use anyhow::{Context, Result};
use sessview_core::batch::{resolve_batch, DisplayState};
use sessview_core::config::SessviewConfig;
use sessview_core::liveness::ViewLiveness;
use sessview_core::resolver::ThumbnailResolver;
use sessview_core::source::{ContentSource, GraphqlSource, JsonFileSource};
use std::path::Path;
use std::sync::Arc;

use super::{open_cache, save_cache};

/// Environment variable holding the GraphQL bearer token, if any.
const TOKEN_ENV: &str = "SESSVIEW_TOKEN";

fn source_for(cfg: &SessviewConfig, file: Option<&Path>) -> Result<Box<dyn ContentSource + Send>> {
    if let Some(path) = file {
        return Ok(Box::new(JsonFileSource::new(path)));
    }
    let endpoint = cfg
        .graphql_endpoint
        .as_deref()
        .context("no --file given and no graphql_endpoint in config")?;
    let mut source = GraphqlSource::new(endpoint, cfg.oembed_timeout() * 2);
    if let Ok(token) = std::env::var(TOKEN_ENV) {
        source = source.with_bearer_token(token);
    }
    Ok(Box::new(source))
}

pub async fn run_sessions(
    cfg: &SessviewConfig,
    file: Option<&Path>,
    batch_size: Option<usize>,
    json: bool,
) -> Result<()> {
    let source = source_for(cfg, file)?;
    let records = tokio::task::spawn_blocking(move || source.fetch_records())
        .await
        .context("session source task")??;

    if records.is_empty() {
        println!("No sessions.");
        return Ok(());
    }

    let resolver = ThumbnailResolver::from_config(cfg);
    let cache = Arc::new(open_cache(cfg));
    let state = DisplayState::new();
    let liveness = ViewLiveness::new();
    let batch_size = batch_size.unwrap_or(cfg.batch_size);

    let written = resolve_batch(
        &resolver,
        &records,
        Arc::clone(&cache),
        batch_size,
        &liveness,
        &state,
    )
    .await;
    tracing::info!(records = records.len(), written, batch_size, "sessions resolved");

    let rows = state.ordered(&records);
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{:<10} {:<28} {:<5} {:<48} {}", "ID", "KIND", "PDF", "IMAGE", "TITLE");
        for row in rows {
            println!(
                "{:<10} {:<28} {:<5} {:<48} {}",
                row.id,
                row.kind,
                if row.display.is_pdf { "yes" } else { "no" },
                row.display.image_url,
                row.title
            );
        }
    }

    save_cache(cfg, &cache);
    Ok(())
}
