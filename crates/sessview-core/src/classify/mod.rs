//! URL classification.
//!
//! Every preview decision starts here: a content URL is mapped to a [`Kind`]
//! by a fixed, ordered set of rules. The first matching rule wins, since a
//! URL can satisfy more than one heuristic (a YouTube link ending in `.mp4`,
//! a TikTok link with a `.pdf` query).
//!
//! Classification never fails. Anything that cannot be parsed or recognized
//! degrades to [`Kind::Fallback`].

mod path;
mod youtube;

pub use path::{extension_from_url_path, last_path_segment};
pub use youtube::youtube_video_id;

use std::fmt;

/// Why a URL was classified as [`Kind::Fallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackCause {
    /// Not a syntactically valid absolute URL (including the empty string).
    InvalidUrl,
    /// A valid URL whose type could not be determined.
    UnrecognizedType,
}

/// How a content URL should be previewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    YouTube { video_id: String },
    TikTok,
    Pdf,
    Audio,
    VideoFile,
    Fallback(FallbackCause),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::YouTube { video_id } => write!(f, "youtube ({video_id})"),
            Kind::TikTok => write!(f, "tiktok"),
            Kind::Pdf => write!(f, "pdf"),
            Kind::Audio => write!(f, "audio"),
            Kind::VideoFile => write!(f, "video"),
            Kind::Fallback(FallbackCause::InvalidUrl) => write!(f, "fallback (invalid url)"),
            Kind::Fallback(FallbackCause::UnrecognizedType) => {
                write!(f, "fallback (unrecognized type)")
            }
        }
    }
}

/// Extensions previewed with the video "recorder" icon.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "webm", "ogg", "m4a", "wav"];

/// Classifies a content URL.
///
/// Rules, in order:
/// 1. not a valid URL → `Fallback(InvalidUrl)`
/// 2. YouTube watch/share/embed link with an 11-character id → `YouTube`
/// 3. host contains `tiktok.com` → `TikTok`
/// 4. extension of the last path segment: `pdf`, `mp3`, or a video
///    extension; anything else → `Fallback(UnrecognizedType)`
pub fn classify(url: &str) -> Kind {
    let parsed = match url::Url::parse(url.trim()) {
        Ok(u) => u,
        Err(_) => return Kind::Fallback(FallbackCause::InvalidUrl),
    };

    if let Some(video_id) = youtube::youtube_video_id_parsed(&parsed) {
        return Kind::YouTube { video_id };
    }

    if parsed
        .host_str()
        .is_some_and(|h| h.to_ascii_lowercase().contains("tiktok.com"))
    {
        return Kind::TikTok;
    }

    match path::extension_of(&parsed).as_deref() {
        Some("pdf") => Kind::Pdf,
        Some("mp3") => Kind::Audio,
        Some(ext) if VIDEO_EXTENSIONS.contains(&ext) => Kind::VideoFile,
        _ => Kind::Fallback(FallbackCause::UnrecognizedType),
    }
}
