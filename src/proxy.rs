//! Relay-aware HTTP client.
//!
//! Every request of a conversion (oEmbed, player page, Deezer search) goes
//! through [`ProxyClient`], which prefixes the target URL with the configured
//! CORS relay. Any failure on the way, be it a transport error, a timeout or a
//! non-2xx status, comes back as [`ConvertError::Proxy`].

use std::error::Error as _;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{config::Settings, debug, error::ConvertError};

/// HTTP client that prefixes every target URL with the relay base.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: Client,
    base: String,
}

impl ProxyClient {
    /// Builds the client from the relay base and timeout in `settings`.
    ///
    /// An empty relay base sends requests directly to their targets.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest::Error` if the underlying client cannot be built.
    pub fn new(settings: &Settings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            client,
            base: settings.proxy_url.clone(),
        })
    }

    /// Page of the relay where access has to be granted, when a relay is used.
    pub fn remediation_url(&self) -> Option<String> {
        if self.base.is_empty() {
            return None;
        }
        Some(format!("{}/corsdemo", self.base.trim_end_matches('/')))
    }

    /// Target URL as it is sent over the wire.
    ///
    /// # Example
    ///
    /// ```
    /// // with the relay "https://cors-anywhere.herokuapp.com/"
    /// let url = client.proxied("https://api.deezer.com/search/artist?q=x");
    /// // https://cors-anywhere.herokuapp.com/https://api.deezer.com/search/artist?q=x
    /// ```
    pub fn proxied(&self, url: &str) -> String {
        format!("{}{}", self.base, url)
    }

    /// Fetches `url` through the relay and decodes the JSON body.
    ///
    /// A body that fails to decode is reported through `on_decode_error` so the
    /// caller can decide which content error it represents.
    pub async fn fetch_json<T, F>(&self, url: &str, on_decode_error: F) -> Result<T, ConvertError>
    where
        T: DeserializeOwned,
        F: FnOnce(reqwest::Error) -> ConvertError,
    {
        let response = self.send(url).await?;
        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                on_decode_error(e)
            } else {
                ConvertError::proxy(url, describe(&e))
            }
        })
    }

    /// Fetches `url` through the relay and returns the body as text.
    pub async fn fetch_text(&self, url: &str) -> Result<String, ConvertError> {
        let response = self.send(url).await?;
        response
            .text()
            .await
            .map_err(|e| ConvertError::proxy(url, describe(&e)))
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, ConvertError> {
        let target = self.proxied(url);
        debug!("GET {}", target);

        let response = self
            .client
            .get(&target)
            .send()
            .await
            .map_err(|e| ConvertError::proxy(url, describe(&e)))?;

        match response.error_for_status() {
            Ok(valid_response) => Ok(valid_response),
            Err(err) => Err(ConvertError::proxy(url, describe(&err))),
        }
    }
}

/// Failure reason for a relay request, including the chain of causes.
///
/// Timeouts and refused connections lead with `timed out` and
/// `connection failed` so both read differently in the log.
///
/// # Example
///
/// ```
/// // "connection failed: error sending request for url (...): ...: Connection refused"
/// let reason = describe(&err);
/// ```
pub fn describe(err: &reqwest::Error) -> String {
    let mut reason = if err.is_timeout() {
        format!("timed out: {}", err)
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    };

    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !reason.ends_with(&cause_text) {
            reason.push_str(": ");
            reason.push_str(&cause_text);
        }
        source = cause.source();
    }

    reason
}
