//! YouTube video id extraction.

use regex::Regex;
use std::sync::OnceLock;

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?|shorts|live)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
        )
        .expect("youtube id pattern is valid")
    })
}

fn is_youtube_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    host == "youtube.com" || host.ends_with(".youtube.com") || host == "youtu.be"
}

pub(super) fn youtube_video_id_parsed(parsed: &url::Url) -> Option<String> {
    if !parsed.host_str().is_some_and(is_youtube_host) {
        return None;
    }
    id_pattern()
        .captures(parsed.as_str())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extracts the 11-character video id from a YouTube watch/share/embed URL.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    youtube_video_id_parsed(&parsed)
}
