//! Resolution result and fallback reasons.

use thiserror::Error;

use crate::allow_list::HostRejection;
use crate::oembed::OembedError;
use crate::record::ResolvedDisplay;

/// Why a URL ended up with a fallback asset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FallbackReason {
    #[error("not a valid URL")]
    InvalidUrl,
    #[error("content type not recognized")]
    UnrecognizedType,
    #[error(transparent)]
    Oembed(#[from] OembedError),
    #[error(transparent)]
    UntrustedThumbnail(#[from] HostRejection),
    #[error("oEmbed lookup task failed: {0}")]
    TaskFailed(String),
}

/// Outcome of resolving one content URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A type-specific preview was found.
    Resolved { image_url: String, is_pdf: bool },
    /// A static fallback asset is shown instead; `reason` is for logs only.
    Fallback {
        image_url: String,
        reason: FallbackReason,
    },
}

impl Resolution {
    pub fn image_url(&self) -> &str {
        match self {
            Resolution::Resolved { image_url, .. } | Resolution::Fallback { image_url, .. } => {
                image_url
            }
        }
    }

    pub fn is_pdf(&self) -> bool {
        matches!(self, Resolution::Resolved { is_pdf: true, .. })
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Resolution::Resolved { .. } => None,
            Resolution::Fallback { reason, .. } => Some(reason),
        }
    }

    /// What the list item renders; identical whether resolved or fallen back.
    pub fn display(&self) -> ResolvedDisplay {
        ResolvedDisplay {
            image_url: self.image_url().to_string(),
            is_pdf: self.is_pdf(),
        }
    }
}
