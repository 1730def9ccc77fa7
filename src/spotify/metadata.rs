use crate::{
    debug,
    error::ConvertError,
    proxy::ProxyClient,
    spotify::link::SPOTIFY_URL,
    types::{OEmbedResponse, ResourceLink, ResourceMetadata, ResourceType},
};

/// Reads the oEmbed description of a Spotify resource through the relay.
#[derive(Debug, Clone)]
pub struct MetadataFetcher {
    client: ProxyClient,
}

impl MetadataFetcher {
    pub fn new(client: ProxyClient) -> Self {
        Self { client }
    }

    /// Fetches the title of the resource.
    ///
    /// Tracks need a second request: the oEmbed response points at the
    /// embedded player page, which is returned as `raw_document` for the
    /// credits extractor.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::Proxy`] when any request fails or answers non-2xx
    /// - [`ConvertError::MalformedMetadata`] when the oEmbed body lacks a
    ///   `title`, or a track lacks an `iframe_url`
    pub async fn fetch(&self, link: &ResourceLink) -> Result<ResourceMetadata, ConvertError> {
        let oembed = self.oembed(link).await?;
        debug!(
            "{} oEmbed title for {}: {}",
            oembed.provider_name.as_deref().unwrap_or("Spotify"),
            link.spotify_url(),
            oembed.title
        );

        if link.kind != ResourceType::Track {
            return Ok(ResourceMetadata {
                title: oembed.title,
                raw_document: None,
            });
        }

        let iframe_url = oembed
            .iframe_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConvertError::malformed(link.kind, "oEmbed response has no iframe_url"))?;

        let document = self.client.fetch_text(&iframe_url).await?;

        Ok(ResourceMetadata {
            title: oembed.title,
            raw_document: Some(document),
        })
    }

    async fn oembed(&self, link: &ResourceLink) -> Result<OEmbedResponse, ConvertError> {
        let kind = link.kind;
        self.client
            .fetch_json::<OEmbedResponse, _>(&oembed_url(link), |e| ConvertError::malformed(kind, e))
            .await
    }
}

/// oEmbed endpoint URL describing `link`.
pub fn oembed_url(link: &ResourceLink) -> String {
    format!("{}/oembed?url={}", SPOTIFY_URL, link.spotify_url())
}
