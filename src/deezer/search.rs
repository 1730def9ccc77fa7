use crate::{
    debug,
    error::ConvertError,
    proxy::ProxyClient,
    types::{ResourceType, SearchMatch, SearchResponse},
};

/// Base URL of the public Deezer API.
pub const DEEZER_API_URL: &str = "https://api.deezer.com";

/// Deezer catalog search client.
///
/// Stateless apart from its relay-aware HTTP client; build one and share it
/// by reference.
#[derive(Debug, Clone)]
pub struct DeezerSearch {
    client: ProxyClient,
}

impl DeezerSearch {
    /// Creates a search client sending its requests through `client`.
    pub fn new(client: ProxyClient) -> Self {
        Self { client }
    }

    /// Best ranked artist named `name`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(SearchMatch))` - First entry of the result list
    /// - `Ok(None)` - Deezer knows no matching artist
    ///
    /// # Errors
    ///
    /// - [`ConvertError::Proxy`] when the request fails or answers non-2xx
    /// - [`ConvertError::MalformedMetadata`] when the body is not a search page
    pub async fn search_artist(&self, name: &str) -> Result<Option<SearchMatch>, ConvertError> {
        self.first_match(ResourceType::Artist, &artist_search_url(name))
            .await
    }

    /// Best ranked album titled `album_title`, narrowed to `artist` when known.
    pub async fn search_album(
        &self,
        album_title: &str,
        artist: Option<&str>,
    ) -> Result<Option<SearchMatch>, ConvertError> {
        self.first_match(ResourceType::Album, &album_search_url(album_title, artist))
            .await
    }

    /// Best ranked track titled `track_title`, narrowed to `artist` when known.
    pub async fn search_song(
        &self,
        track_title: &str,
        artist: Option<&str>,
    ) -> Result<Option<SearchMatch>, ConvertError> {
        self.first_match(ResourceType::Track, &song_search_url(track_title, artist))
            .await
    }

    /// Best matching playlist named `name`.
    pub async fn search_playlist(&self, name: &str) -> Result<Option<SearchMatch>, ConvertError> {
        self.first_match(ResourceType::Playlist, &playlist_search_url(name))
            .await
    }

    async fn first_match(
        &self,
        kind: ResourceType,
        url: &str,
    ) -> Result<Option<SearchMatch>, ConvertError> {
        let response = self
            .client
            .fetch_json::<SearchResponse, _>(url, |e| {
                ConvertError::malformed(kind, format!("unreadable search response: {}", e))
            })
            .await?;

        debug!(
            "Deezer {} search returned {} of {} result(s)",
            kind.as_path(),
            response.data.len(),
            response.total.unwrap_or(response.data.len() as u64)
        );

        Ok(response.data.into_iter().next())
    }
}

// Only the track query is percent-encoded; the other queries are sent as
// typed and left to the HTTP client's URL normalization.

/// Builds the Deezer artist search URL for `name`.
///
/// Results are ordered by ranking and the name is matched as an exact
/// `artist:"..."` phrase.
///
/// # Arguments
///
/// * `name` - Artist name as shown by Spotify
///
/// # Example
///
/// ```
/// let url = artist_search_url("Daft Punk");
/// // https://api.deezer.com/search/artist?order=RANKING&q=artist:"Daft Punk"
/// ```
pub fn artist_search_url(name: &str) -> String {
    format!(
        "{}/search/artist?order=RANKING&q=artist:\"{}\"",
        DEEZER_API_URL, name
    )
}

/// Builds the Deezer album search URL.
///
/// # Arguments
///
/// * `album_title` - Album title without the artist suffix
/// * `artist` - Artist to narrow the search to; the `artist:` clause is left
///   out entirely when `None`
///
/// # Example
///
/// ```
/// let url = album_search_url("Discovery", Some("Daft Punk"));
/// // https://api.deezer.com/search/album?order=RANKING&q=artist:"Daft Punk" album:"Discovery"
/// ```
pub fn album_search_url(album_title: &str, artist: Option<&str>) -> String {
    let query = match artist {
        Some(artist) => format!("artist:\"{}\" album:\"{}\"", artist, album_title),
        None => format!("album:\"{}\"", album_title),
    };
    format!("{}/search/album?order=RANKING&q={}", DEEZER_API_URL, query)
}

/// Advanced search query for a track, before encoding.
///
/// # Returns
///
/// `track:"<title>"`, followed by ` artist:"<artist>"` when the artist is known.
pub fn song_query(track_title: &str, artist: Option<&str>) -> String {
    let mut query = format!("track:\"{}\"", track_title);
    if let Some(artist) = artist {
        query.push_str(&format!(" artist:\"{}\"", artist));
    }
    query
}

/// Builds the Deezer track search URL with the percent-encoded [`song_query`].
///
/// # Example
///
/// ```
/// let url = song_search_url("Yesterday", Some("The Beatles"));
/// // https://api.deezer.com/search/track?order=RANKING&q=track%3A%22Yesterday%22%20artist%3A%22The%20Beatles%22
/// ```
pub fn song_search_url(track_title: &str, artist: Option<&str>) -> String {
    format!(
        "{}/search/track?order=RANKING&q={}",
        DEEZER_API_URL,
        urlencoding::encode(&song_query(track_title, artist))
    )
}

/// Builds the Deezer playlist search URL.
///
/// Playlists use strict matching and the default ordering instead of
/// `order=RANKING`.
pub fn playlist_search_url(name: &str) -> String {
    format!("{}/search/playlist?strict=on&q={}", DEEZER_API_URL, name)
}
