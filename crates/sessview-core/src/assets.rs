//! Static preview assets.
//!
//! The pipeline only emits these paths as opaque identifiers; turning them
//! into bytes is the renderer's job.

use serde::{Deserialize, Serialize};

/// Fixed local icon paths for each preview type (`[assets]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSet {
    /// Icon for PDF documents.
    pub pdf: String,
    /// Icon for audio files.
    pub audio: String,
    /// "Recorder" icon for video files.
    pub video: String,
    /// Generic fallback image (unknown type, failed lookups).
    pub fallback: String,
    /// Text placeholder, used when the URL is not a URL at all.
    pub text: String,
}

impl Default for AssetSet {
    fn default() -> Self {
        Self {
            pdf: "/pdf.png".to_string(),
            audio: "/mp3.png".to_string(),
            video: "/recorder.png".to_string(),
            fallback: "/fallback.png".to_string(),
            text: "/text.png".to_string(),
        }
    }
}
