//! `sessview resolve` – resolve preview images for URLs.

use anyhow::Result;
use sessview_core::config::SessviewConfig;
use sessview_core::resolver::ThumbnailResolver;

use super::{open_cache, save_cache};

pub async fn run_resolve(cfg: &SessviewConfig, urls: &[String]) -> Result<()> {
    let resolver = ThumbnailResolver::from_config(cfg);
    let cache = open_cache(cfg);

    println!("{:<6} {:<60} {}", "PDF", "IMAGE", "URL");
    for url in urls {
        let resolution = resolver.resolve(url, &cache).await;
        if let Some(reason) = resolution.fallback_reason() {
            tracing::info!(url = %url, %reason, "fallback preview");
        }
        println!(
            "{:<6} {:<60} {}",
            if resolution.is_pdf() { "yes" } else { "no" },
            resolution.image_url(),
            url
        );
    }

    save_cache(cfg, &cache);
    Ok(())
}
