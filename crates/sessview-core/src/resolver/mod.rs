//! Thumbnail resolution.
//!
//! Turns a content URL into the image a list item shows. Every kind except
//! TikTok is derived synchronously from the URL; TikTok goes through the
//! oEmbed client, the host allow-list, and the caller's cache.
//!
//! Nothing here returns an error: every failure becomes a
//! [`Resolution::Fallback`] with a static asset and a typed reason, so one
//! bad record never breaks a list.

mod outcome;

pub use outcome::{FallbackReason, Resolution};

use std::sync::Arc;

use crate::allow_list::HostAllowList;
use crate::assets::AssetSet;
use crate::cache::ThumbnailCache;
use crate::classify::{classify, FallbackCause, Kind};
use crate::config::SessviewConfig;
use crate::oembed::{CurlOembedClient, OembedClient};

/// YouTube's static thumbnail for a video id.
pub fn youtube_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}

#[derive(Clone)]
pub struct ThumbnailResolver {
    client: Arc<dyn OembedClient>,
    allow_list: HostAllowList,
    assets: AssetSet,
}

impl std::fmt::Debug for ThumbnailResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailResolver")
            .field("allow_list", &self.allow_list)
            .field("assets", &self.assets)
            .finish_non_exhaustive()
    }
}

impl ThumbnailResolver {
    pub fn new(client: Arc<dyn OembedClient>, allow_list: HostAllowList, assets: AssetSet) -> Self {
        Self {
            client,
            allow_list,
            assets,
        }
    }

    /// Resolver with the curl client, the TikTok CDN allow-list, and configured assets.
    pub fn from_config(cfg: &SessviewConfig) -> Self {
        Self::new(
            Arc::new(CurlOembedClient::from_config(cfg)),
            HostAllowList::tiktok_cdn(),
            cfg.assets.clone(),
        )
    }

    pub fn assets(&self) -> &AssetSet {
        &self.assets
    }

    /// Resolves the preview for `url`. Only the TikTok path suspends.
    pub async fn resolve(&self, url: &str, cache: &ThumbnailCache) -> Resolution {
        let kind = classify(url);
        self.resolve_kind(url, &kind, cache).await
    }

    /// Like [`resolve`](Self::resolve) with the classification already done.
    pub async fn resolve_kind(&self, url: &str, kind: &Kind, cache: &ThumbnailCache) -> Resolution {
        match kind {
            Kind::YouTube { video_id } => Resolution::Resolved {
                image_url: youtube_thumbnail_url(video_id),
                is_pdf: false,
            },
            Kind::TikTok => self.resolve_tiktok(url, cache).await,
            Kind::Pdf => Resolution::Resolved {
                image_url: self.assets.pdf.clone(),
                is_pdf: true,
            },
            Kind::Audio => Resolution::Resolved {
                image_url: self.assets.audio.clone(),
                is_pdf: false,
            },
            Kind::VideoFile => Resolution::Resolved {
                image_url: self.assets.video.clone(),
                is_pdf: false,
            },
            Kind::Fallback(FallbackCause::InvalidUrl) => Resolution::Fallback {
                image_url: self.assets.text.clone(),
                reason: FallbackReason::InvalidUrl,
            },
            Kind::Fallback(FallbackCause::UnrecognizedType) => Resolution::Fallback {
                image_url: self.assets.fallback.clone(),
                reason: FallbackReason::UnrecognizedType,
            },
        }
    }

    async fn resolve_tiktok(&self, url: &str, cache: &ThumbnailCache) -> Resolution {
        if let Some(image_url) = cache.get(url) {
            tracing::trace!(url, "thumbnail cache hit");
            return Resolution::Resolved {
                image_url,
                is_pdf: false,
            };
        }

        match self.lookup_tiktok(url).await {
            Ok(image_url) => {
                let image_url = cache.insert(url, &image_url);
                Resolution::Resolved {
                    image_url,
                    is_pdf: false,
                }
            }
            Err(reason) => {
                tracing::warn!(url, %reason, "tiktok thumbnail unavailable, using fallback");
                Resolution::Fallback {
                    image_url: self.assets.fallback.clone(),
                    reason,
                }
            }
        }
    }

    async fn lookup_tiktok(&self, url: &str) -> Result<String, FallbackReason> {
        let client = Arc::clone(&self.client);
        let target = url.to_string();
        let thumbnail = tokio::task::spawn_blocking(move || client.fetch_thumbnail(&target))
            .await
            .map_err(|e| FallbackReason::TaskFailed(e.to_string()))??;

        self.allow_list.validate(&thumbnail)?;
        tracing::debug!(url, thumbnail = %thumbnail, "resolved tiktok thumbnail");
        Ok(thumbnail)
    }
}

#[cfg(test)]
mod tests;
