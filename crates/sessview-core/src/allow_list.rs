//! Thumbnail host allow-list.
//!
//! oEmbed responses are third-party data; a thumbnail URL is only shown if
//! it is `https` and its host is on this list. Hosts match either an exact
//! entry or one of the anchored suffix patterns.
//!
//! The built-in TikTok list keeps some hosts exact-only even though sibling
//! subdomains exist. It is a starting list, not a complete one.

use regex::Regex;
use thiserror::Error;

/// Exact CDN hosts seen in TikTok oEmbed responses.
const TIKTOK_EXACT_HOSTS: &[&str] = &[
    "p16-sign-va.tiktokcdn.com",
    "p16-sign-sg.tiktokcdn.com",
    "p77-sign-va.tiktokcdn.com",
    "p16-sign.tiktokcdn-us.com",
    "p19-sign.tiktokcdn-us.com",
    "p16-pu-sign-useast8.tiktokcdn-us.com",
];

/// Suffix patterns for the numbered signing CDNs.
const TIKTOK_HOST_PATTERNS: &[&str] = &[
    r"^p\d{1,3}-sign-[a-z0-9]+\.tiktokcdn\.com$",
    r"^p\d{1,3}-(?:pu-)?sign(?:-[a-z0-9]+)?\.tiktokcdn-us\.com$",
];

/// Why a thumbnail URL was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostRejection {
    #[error("thumbnail URL does not parse")]
    InvalidUrl,
    #[error("thumbnail URL uses scheme '{0}', expected https")]
    InsecureScheme(String),
    #[error("thumbnail host '{0}' is not on the allow-list")]
    HostNotAllowed(String),
}

#[derive(Debug, Clone)]
pub struct HostAllowList {
    exact: Vec<String>,
    patterns: Vec<Regex>,
}

impl HostAllowList {
    /// Build a list from exact hosts and regex patterns (matched against the
    /// lower-cased host).
    pub fn new<E, P>(exact: E, patterns: P) -> Result<Self, regex::Error>
    where
        E: IntoIterator,
        E::Item: Into<String>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let exact = exact
            .into_iter()
            .map(|h| Into::<String>::into(h).to_ascii_lowercase())
            .collect();
        let patterns = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { exact, patterns })
    }

    /// The TikTok CDN list used for oEmbed thumbnails.
    pub fn tiktok_cdn() -> Self {
        Self::new(TIKTOK_EXACT_HOSTS.iter().copied(), TIKTOK_HOST_PATTERNS)
            .expect("built-in host patterns are valid")
    }

    /// True if `host` matches an exact entry or a pattern.
    pub fn allows_host(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        self.exact.iter().any(|h| *h == host) || self.patterns.iter().any(|p| p.is_match(&host))
    }

    /// Checks a full thumbnail URL: it must parse, be https, and have an allowed host.
    pub fn validate(&self, thumbnail_url: &str) -> Result<(), HostRejection> {
        let parsed = url::Url::parse(thumbnail_url).map_err(|_| HostRejection::InvalidUrl)?;
        if parsed.scheme() != "https" {
            return Err(HostRejection::InsecureScheme(parsed.scheme().to_string()));
        }
        let host = parsed.host_str().ok_or(HostRejection::InvalidUrl)?;
        if self.allows_host(host) {
            Ok(())
        } else {
            Err(HostRejection::HostNotAllowed(host.to_string()))
        }
    }
}

impl Default for HostAllowList {
    fn default() -> Self {
        Self::tiktok_cdn()
    }
}
