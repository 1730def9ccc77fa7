use thiserror::Error;

use crate::types::ResourceType;

/// Everything that can end a conversion without a Deezer link.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input does not contain an `open.spotify.com/<type>/<id>` link.
    #[error("not a Spotify link: {0}")]
    InvalidLink(String),

    /// A request through the relay failed: transport error, timeout or a
    /// non-2xx status. `url` is the target, without the relay prefix.
    #[error("request to {url} failed: {reason}")]
    Proxy { url: String, reason: String },

    /// Deezer returned an empty result list.
    #[error("{0} not found on Deezer.")]
    NotFound(ResourceType),

    /// Spotify answered, but without the fields a search needs.
    #[error("malformed {kind} metadata: {reason}")]
    MalformedMetadata { kind: ResourceType, reason: String },
}

/// The terminal states a conversion can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    InvalidInput,
    ProxyError,
    NotFound(ResourceType),
}

impl OutcomeKind {
    /// Stable identifier used by the JSON endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Success => "success",
            OutcomeKind::InvalidInput => "invalid_input",
            OutcomeKind::ProxyError => "proxy_error",
            OutcomeKind::NotFound(_) => "not_found",
        }
    }
}

impl ConvertError {
    /// Shorthand for [`ConvertError::Proxy`].
    pub fn proxy(url: impl Into<String>, reason: impl ToString) -> Self {
        ConvertError::Proxy {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(kind: ResourceType, reason: impl ToString) -> Self {
        ConvertError::MalformedMetadata {
            kind,
            reason: reason.to_string(),
        }
    }

    /// Maps the error onto the state shown to the user. Malformed metadata
    /// is reported like a missing match of the same type.
    pub fn outcome_kind(&self) -> OutcomeKind {
        match self {
            ConvertError::InvalidLink(_) => OutcomeKind::InvalidInput,
            ConvertError::Proxy { .. } => OutcomeKind::ProxyError,
            ConvertError::NotFound(kind) => OutcomeKind::NotFound(*kind),
            ConvertError::MalformedMetadata { kind, .. } => OutcomeKind::NotFound(*kind),
        }
    }
}
