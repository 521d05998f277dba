//! Parse an oEmbed JSON body into its thumbnail URL.

use serde::Deserialize;

use super::OembedError;

/// The subset of an oEmbed response we read.
#[derive(Debug, Deserialize)]
struct OembedBody {
    #[serde(default)]
    thumbnail_url: Option<String>,
}

pub(crate) fn parse_thumbnail_url(body: &[u8]) -> Result<String, OembedError> {
    let parsed: OembedBody =
        serde_json::from_slice(body).map_err(|e| OembedError::MalformedBody(e.to_string()))?;
    parsed
        .thumbnail_url
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(OembedError::MissingThumbnail)
}
