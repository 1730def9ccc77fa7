//! The conversion pipeline.
//!
//! ```text
//! Link Parser → Metadata Fetcher → (Embed Extractor / Title Splitter) → Deezer Search → Presenter
//! ```
//!
//! Every step waits for the previous one; a conversion never runs two
//! requests at the same time.

use crate::{
    config::Settings,
    debug,
    deezer::DeezerSearch,
    error::{ConvertError, OutcomeKind},
    presenter::{FailureStatus, Presenter},
    proxy::ProxyClient,
    spotify::{
        EmbedExtractor, MetadataFetcher, PlayerMarkupExtractor, split_title, title::split_on_by,
    },
    types::{ResourceLink, ResourceMetadata, ResourceType, SearchMatch, SplitTitle},
    warning,
};

/// Turns Spotify links into Deezer search matches.
///
/// One instance serves any number of conversions; it holds no per-conversion
/// state and can be shared behind an `Arc`.
pub struct Converter {
    metadata: MetadataFetcher,
    search: DeezerSearch,
    extractor: Box<dyn EmbedExtractor>,
    remediation_url: Option<String>,
}

impl Converter {
    /// Creates a converter using the relay and timeout from `settings`.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest::Error` if the HTTP client cannot be built, e.g.
    /// when no TLS backend can be initialized.
    ///
    /// # Example
    ///
    /// ```
    /// let converter = Converter::new(&Settings::from_env())?;
    /// let found = converter.convert("https://open.spotify.com/artist/4tZwfgrHOc3mvqYlEYSvVi").await?;
    /// println!("{}", found.link);
    /// ```
    pub fn new(settings: &Settings) -> Result<Self, reqwest::Error> {
        let client = ProxyClient::new(settings)?;
        let remediation_url = client.remediation_url();

        Ok(Self {
            metadata: MetadataFetcher::new(client.clone()),
            search: DeezerSearch::new(client),
            extractor: Box::new(PlayerMarkupExtractor),
            remediation_url,
        })
    }

    /// Replaces the player page credits extractor.
    pub fn with_extractor(mut self, extractor: impl EmbedExtractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    /// Page where the relay grants access, shown with proxy errors.
    pub fn remediation_url(&self) -> Option<&str> {
        self.remediation_url.as_deref()
    }

    /// Converts user input into the best matching Deezer resource.
    ///
    /// Input that is not a Spotify link fails before any request is made.
    pub async fn convert(&self, input: &str) -> Result<SearchMatch, ConvertError> {
        let link = ResourceLink::parse(input)?;
        self.convert_link(&link).await
    }

    /// Converts an already parsed link.
    ///
    /// Artists and playlists are searched by their full title, albums by
    /// title and artist split on `" by "`, tracks by the credits of the
    /// player page (or the split oEmbed title when the page has none).
    ///
    /// # Errors
    ///
    /// - [`ConvertError::Proxy`] when any request fails
    /// - [`ConvertError::MalformedMetadata`] when Spotify's answer lacks a usable title
    /// - [`ConvertError::NotFound`] when Deezer has no match
    pub async fn convert_link(&self, link: &ResourceLink) -> Result<SearchMatch, ConvertError> {
        let metadata = self.metadata.fetch(link).await?;
        if metadata.title.trim().is_empty() {
            return Err(ConvertError::malformed(link.kind, "oEmbed title is empty"));
        }

        let found = match link.kind {
            ResourceType::Artist => self.search.search_artist(metadata.title.trim()).await?,
            ResourceType::Playlist => self.search.search_playlist(metadata.title.trim()).await?,
            ResourceType::Album => match split_on_by(&metadata.title) {
                Some((album, artist)) => {
                    self.search
                        .search_album(&album, Some(artist.as_str()))
                        .await?
                }
                None => self.search.search_album(metadata.title.trim(), None).await?,
            },
            ResourceType::Track => {
                let track = self.track_credits(&metadata)?;
                debug!(
                    "Track: {}, Artist: {}",
                    track.track_title,
                    track.artist.as_deref().unwrap_or("-")
                );
                self.search
                    .search_song(&track.track_title, track.artist.as_deref())
                    .await?
            }
        };

        found.ok_or(ConvertError::NotFound(link.kind))
    }

    /// Runs one conversion and reports it on `presenter`.
    pub async fn run(&self, input: &str, presenter: &mut (dyn Presenter + Send)) -> OutcomeKind {
        presenter.converting(input);

        match self.convert(input).await {
            Ok(found) => {
                presenter.success(&found);
                OutcomeKind::Success
            }
            Err(e) => {
                match &e {
                    ConvertError::MalformedMetadata { .. } | ConvertError::Proxy { .. } => {
                        warning!("{}", e)
                    }
                    _ => debug!("{}", e),
                }

                let status = FailureStatus::from_error(&e, self.remediation_url());
                presenter.failure(&status);
                status.kind()
            }
        }
    }

    fn track_credits(&self, metadata: &ResourceMetadata) -> Result<SplitTitle, ConvertError> {
        let credits = metadata
            .raw_document
            .as_deref()
            .and_then(|document| self.extractor.extract(document));

        if let Some(credits) = credits {
            return Ok(SplitTitle {
                track_title: credits.title,
                artist: Some(credits.artist),
            });
        }

        warning!("Player page has no track credits, using the oEmbed title instead.");
        let split = split_title(&metadata.title);
        if split.track_title.is_empty() {
            return Err(ConvertError::malformed(
                ResourceType::Track,
                "neither the player page nor the oEmbed title name the track",
            ));
        }

        Ok(split)
    }
}
