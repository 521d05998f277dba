//! oEmbed failure kinds and curl error classification.

use thiserror::Error;

/// Why an oEmbed lookup produced no thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OembedError {
    #[error("oEmbed request timed out")]
    Timeout,
    #[error("could not connect to oEmbed service: {0}")]
    Connection(String),
    #[error("oEmbed service returned HTTP {0}")]
    Http(u32),
    #[error("oEmbed response is not valid JSON: {0}")]
    MalformedBody(String),
    #[error("oEmbed response has no thumbnail_url")]
    MissingThumbnail,
    #[error("oEmbed request failed: {0}")]
    Transport(String),
}

/// Classify a curl error into an OembedError.
pub fn classify_curl_error(e: &curl::Error) -> OembedError {
    if e.is_operation_timedout() {
        return OembedError::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return OembedError::Connection(e.description().to_string());
    }
    OembedError::Transport(e.description().to_string())
}

/// Non-2xx statuses are failures; everything 2xx is accepted.
pub fn check_http_status(code: u32) -> Result<(), OembedError> {
    if (200..300).contains(&code) {
        Ok(())
    } else {
        Err(OembedError::Http(code))
    }
}
