use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::oembed::OembedError;

const TIKTOK_URL: &str = "https://www.tiktok.com/@biolab/video/7234567890123456789";
const CDN_THUMB: &str = "https://p16-sign-va.tiktokcdn.com/obj/tos-maliva-p-0068/abc.jpeg";

/// Fake client that counts calls and returns a fixed answer.
struct CountingClient {
    calls: AtomicUsize,
    answer: Result<String, OembedError>,
}

impl CountingClient {
    fn new(answer: Result<String, OembedError>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            answer,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl OembedClient for CountingClient {
    fn fetch_thumbnail(&self, _target_url: &str) -> Result<String, OembedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

fn resolver_with(client: Arc<CountingClient>) -> ThumbnailResolver {
    ThumbnailResolver::new(client, HostAllowList::tiktok_cdn(), AssetSet::default())
}

#[tokio::test]
async fn youtube_needs_no_network() {
    let client = CountingClient::new(Err(OembedError::Timeout));
    let resolver = resolver_with(Arc::clone(&client));
    let cache = ThumbnailCache::new();

    let r = resolver
        .resolve("https://youtu.be/dQw4w9WgXcQ", &cache)
        .await;
    assert_eq!(
        r,
        Resolution::Resolved {
            image_url: "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string(),
            is_pdf: false,
        }
    );
    assert_eq!(client.calls(), 0);
    assert!(cache.is_empty());
}

#[tokio::test]
async fn tiktok_second_call_hits_cache() {
    let client = CountingClient::new(Ok(CDN_THUMB.to_string()));
    let resolver = resolver_with(Arc::clone(&client));
    let cache = ThumbnailCache::new();

    let first = resolver.resolve(TIKTOK_URL, &cache).await;
    let second = resolver.resolve(TIKTOK_URL, &cache).await;

    assert_eq!(client.calls(), 1);
    assert_eq!(first, second);
    assert_eq!(first.image_url(), CDN_THUMB);
    assert_eq!(cache.get(TIKTOK_URL).as_deref(), Some(CDN_THUMB));
}

#[tokio::test]
async fn tiktok_prefilled_cache_skips_client() {
    let client = CountingClient::new(Err(OembedError::Timeout));
    let resolver = resolver_with(Arc::clone(&client));
    let cache = ThumbnailCache::new();
    cache.insert(TIKTOK_URL, CDN_THUMB);

    for _ in 0..3 {
        let r = resolver.resolve(TIKTOK_URL, &cache).await;
        assert_eq!(r.image_url(), CDN_THUMB);
    }
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn untrusted_host_falls_back() {
    let client = CountingClient::new(Ok("https://attacker.example/pixel.png".to_string()));
    let resolver = resolver_with(Arc::clone(&client));
    let cache = ThumbnailCache::new();

    let r = resolver.resolve(TIKTOK_URL, &cache).await;
    assert_eq!(r.image_url(), "/fallback.png");
    assert!(!r.is_pdf());
    assert!(matches!(
        r.fallback_reason(),
        Some(FallbackReason::UntrustedThumbnail(_))
    ));
    assert!(cache.is_empty(), "rejected thumbnails are not cached");
}

#[tokio::test]
async fn oembed_failure_falls_back_and_is_retried() {
    let client = CountingClient::new(Err(OembedError::Http(503)));
    let resolver = resolver_with(Arc::clone(&client));
    let cache = ThumbnailCache::new();

    let r = resolver.resolve(TIKTOK_URL, &cache).await;
    assert_eq!(
        r,
        Resolution::Fallback {
            image_url: "/fallback.png".to_string(),
            reason: FallbackReason::Oembed(OembedError::Http(503)),
        }
    );
    resolver.resolve(TIKTOK_URL, &cache).await;
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn file_types_use_static_assets() {
    let client = CountingClient::new(Err(OembedError::Timeout));
    let resolver = resolver_with(Arc::clone(&client));
    let cache = ThumbnailCache::new();

    let pdf = resolver
        .resolve("https://files.example.com/ch3-notes.pdf", &cache)
        .await;
    assert_eq!(pdf.display().image_url, "/pdf.png");
    assert!(pdf.display().is_pdf);

    let mp3 = resolver
        .resolve("https://files.example.com/lecture.mp3", &cache)
        .await;
    assert_eq!(mp3.image_url(), "/mp3.png");
    assert!(!mp3.is_pdf());

    let video = resolver
        .resolve("https://files.example.com/lab.webm", &cache)
        .await;
    assert_eq!(video.image_url(), "/recorder.png");

    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn invalid_and_unknown_urls() {
    let client = CountingClient::new(Err(OembedError::Timeout));
    let resolver = resolver_with(Arc::clone(&client));
    let cache = ThumbnailCache::new();

    let invalid = resolver.resolve("not a url", &cache).await;
    assert_eq!(invalid.image_url(), "/text.png");
    assert_eq!(invalid.fallback_reason(), Some(&FallbackReason::InvalidUrl));

    let empty = resolver.resolve("", &cache).await;
    assert_eq!(empty.image_url(), "/text.png");

    let unknown = resolver
        .resolve("https://example.com/article", &cache)
        .await;
    assert_eq!(unknown.image_url(), "/fallback.png");
    assert_eq!(
        unknown.fallback_reason(),
        Some(&FallbackReason::UnrecognizedType)
    );
}

#[tokio::test]
async fn custom_assets_are_used() {
    let client = CountingClient::new(Err(OembedError::MissingThumbnail));
    let assets = AssetSet {
        fallback: "/img/none.svg".to_string(),
        ..AssetSet::default()
    };
    let resolver = ThumbnailResolver::new(client, HostAllowList::tiktok_cdn(), assets);
    let cache = ThumbnailCache::new();

    let r = resolver.resolve(TIKTOK_URL, &cache).await;
    assert_eq!(r.image_url(), "/img/none.svg");
}
