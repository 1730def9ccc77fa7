//! Output surface abstraction.
//!
//! A conversion moves `Idle → Converting → {Success, InvalidInput,
//! ProxyError, NotFound}`. Surfaces (terminal, web page, JSON) implement
//! [`Presenter`] and receive exactly one terminal call per conversion.

use crate::{
    error::{ConvertError, OutcomeKind},
    types::{ResourceType, SearchMatch},
};

pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid Spotify link.";
pub const PROXY_ERROR_MESSAGE: &str =
    "CORS error detected. Please request temporary access to the demo server:";
pub const PROXY_RETRY_MESSAGE: &str = "After granting access, please try converting again.";
pub const CONVERTING_MESSAGE: &str = "Converting...";
pub const OPEN_LINK_LABEL: &str = "Open in Deezer";

pub trait Presenter {
    /// A new conversion started; any previous result must be hidden.
    fn converting(&mut self, input: &str);

    fn success(&mut self, found: &SearchMatch);

    fn failure(&mut self, status: &FailureStatus);
}

/// The three failure messages a surface can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureStatus {
    InvalidInput,
    ProxyError { remediation_url: Option<String> },
    NotFound(ResourceType),
}

impl FailureStatus {
    /// Failure message for `error`.
    ///
    /// Malformed metadata is shown like a missing match of the same type.
    /// `remediation_url` is only used for relay failures.
    pub fn from_error(error: &ConvertError, remediation_url: Option<&str>) -> Self {
        match error {
            ConvertError::InvalidLink(_) => FailureStatus::InvalidInput,
            ConvertError::Proxy { .. } => FailureStatus::ProxyError {
                remediation_url: remediation_url.map(str::to_string),
            },
            ConvertError::NotFound(kind) | ConvertError::MalformedMetadata { kind, .. } => {
                FailureStatus::NotFound(*kind)
            }
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            FailureStatus::InvalidInput => OutcomeKind::InvalidInput,
            FailureStatus::ProxyError { .. } => OutcomeKind::ProxyError,
            FailureStatus::NotFound(kind) => OutcomeKind::NotFound(*kind),
        }
    }

    /// Plain-text rendering, one line per sentence.
    pub fn text(&self) -> String {
        match self {
            FailureStatus::InvalidInput => INVALID_INPUT_MESSAGE.to_string(),
            FailureStatus::ProxyError { remediation_url } => match remediation_url {
                Some(url) => format!("{}\n{}\n{}", PROXY_ERROR_MESSAGE, url, PROXY_RETRY_MESSAGE),
                None => {
                    "Could not reach Spotify or Deezer.\nCheck your network connection and try converting again."
                        .to_string()
                }
            },
            FailureStatus::NotFound(kind) => not_found_message(*kind),
        }
    }

    /// HTML rendering for the status region of the converter page.
    pub fn html(&self) -> String {
        match self {
            FailureStatus::ProxyError {
                remediation_url: Some(url),
            } => {
                let url = html_escape::encode_double_quoted_attribute(url);
                format!(
                    "{}<br><a href=\"{url}\" target=\"_blank\">{url}</a><br>{}",
                    PROXY_ERROR_MESSAGE, PROXY_RETRY_MESSAGE
                )
            }
            other => html_escape::encode_text(&other.text())
                .replace('\n', "<br>"),
        }
    }
}

pub fn not_found_message(kind: ResourceType) -> String {
    format!("{} not found on Deezer.", kind)
}

/// HTML rendering of a successful conversion.
pub fn success_html(found: &SearchMatch) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\">{}</a>",
        html_escape::encode_double_quoted_attribute(&found.link),
        OPEN_LINK_LABEL
    )
}
