//! oEmbed thumbnail lookup.
//!
//! Uses the curl crate (libcurl) to `GET <endpoint>?url=<target>` and read
//! `thumbnail_url` from the JSON body. Calls are blocking with a connect and
//! a total timeout; async callers run them via `spawn_blocking`.

mod error;
mod parse;

pub use error::{check_http_status, classify_curl_error, OembedError};

use std::time::Duration;

use crate::config::SessviewConfig;

/// Source of oEmbed thumbnails. The resolver only depends on this trait.
pub trait OembedClient: Send + Sync {
    /// Looks up the thumbnail URL for `target_url`. Blocking.
    fn fetch_thumbnail(&self, target_url: &str) -> Result<String, OembedError>;
}

/// oEmbed client backed by libcurl.
#[derive(Debug, Clone)]
pub struct CurlOembedClient {
    endpoint: String,
    timeout: Duration,
    connect_timeout: Duration,
}

impl CurlOembedClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration, connect_timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
            connect_timeout: connect_timeout.min(timeout),
        }
    }

    pub fn from_config(cfg: &SessviewConfig) -> Self {
        Self::new(
            cfg.oembed_endpoint.clone(),
            cfg.oembed_timeout(),
            cfg.oembed_connect_timeout(),
        )
    }

    /// Full request URL with `target_url` percent-encoded as the `url` parameter.
    pub fn request_url(&self, target_url: &str) -> Result<String, OembedError> {
        let url = url::Url::parse_with_params(&self.endpoint, &[("url", target_url)])
            .map_err(|e| OembedError::Transport(format!("invalid oEmbed endpoint: {e}")))?;
        Ok(url.into())
    }
}

impl OembedClient for CurlOembedClient {
    fn fetch_thumbnail(&self, target_url: &str) -> Result<String, OembedError> {
        let request_url = self.request_url(target_url)?;
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        let setup = |easy: &mut curl::easy::Easy| -> Result<(), curl::Error> {
            easy.url(&request_url)?;
            easy.get(true)?;
            easy.follow_location(true)?;
            easy.max_redirections(3)?;
            easy.connect_timeout(self.connect_timeout)?;
            easy.timeout(self.timeout)?;
            easy.useragent(concat!("sessview/", env!("CARGO_PKG_VERSION")))?;
            Ok(())
        };
        setup(&mut easy).map_err(|e| classify_curl_error(&e))?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(|e| classify_curl_error(&e))?;
            transfer.perform().map_err(|e| classify_curl_error(&e))?;
        }

        let code = easy
            .response_code()
            .map_err(|e| classify_curl_error(&e))?;
        check_http_status(code)?;

        parse::parse_thumbnail_url(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_percent_encodes_target() {
        let client = CurlOembedClient::new(
            "https://www.tiktok.com/oembed",
            Duration::from_secs(5),
            Duration::from_secs(3),
        );
        let url = client
            .request_url("https://www.tiktok.com/@user/video/123?lang=en&is_copy=1")
            .unwrap();
        assert_eq!(
            url,
            "https://www.tiktok.com/oembed?url=https%3A%2F%2Fwww.tiktok.com%2F%40user%2Fvideo%2F123%3Flang%3Den%26is_copy%3D1"
        );
    }

    #[test]
    fn request_url_rejects_bad_endpoint() {
        let client = CurlOembedClient::new("not an endpoint", Duration::from_secs(5), Duration::from_secs(3));
        assert!(matches!(
            client.request_url("https://www.tiktok.com/@u/video/1"),
            Err(OembedError::Transport(_))
        ));
    }

    #[test]
    fn connect_timeout_never_exceeds_total() {
        let client = CurlOembedClient::new(
            "https://www.tiktok.com/oembed",
            Duration::from_secs(2),
            Duration::from_secs(10),
        );
        assert_eq!(client.connect_timeout, Duration::from_secs(2));
    }

    #[test]
    fn from_config_uses_endpoint() {
        let cfg = SessviewConfig::default();
        let client = CurlOembedClient::from_config(&cfg);
        assert_eq!(client.timeout, Duration::from_secs(5));
        assert!(client
            .request_url("https://www.tiktok.com/@u/video/1")
            .unwrap()
            .starts_with("https://www.tiktok.com/oembed?url="));
    }
}
