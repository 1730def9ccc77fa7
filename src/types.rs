use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Track,
    Artist,
    Album,
    Playlist,
}

impl ResourceType {
    /// Path segment used by both Spotify links and Deezer search endpoints.
    pub fn as_path(&self) -> &'static str {
        match self {
            ResourceType::Track => "track",
            ResourceType::Artist => "artist",
            ResourceType::Album => "album",
            ResourceType::Playlist => "playlist",
        }
    }

    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "track" => Some(ResourceType::Track),
            "artist" => Some(ResourceType::Artist),
            "album" => Some(ResourceType::Album),
            "playlist" => Some(ResourceType::Playlist),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceType::Track => "Track",
            ResourceType::Artist => "Artist",
            ResourceType::Album => "Album",
            ResourceType::Playlist => "Playlist",
        };
        f.write_str(name)
    }
}

/// A Spotify resource reference taken from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    pub kind: ResourceType,
    pub id: String,
}

/// What the oEmbed endpoint (and for tracks the player page) told us.
#[derive(Debug, Clone)]
pub struct ResourceMetadata {
    pub title: String,
    pub raw_document: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTitle {
    pub track_title: String,
    pub artist: Option<String>,
}

/// Title and artist shown by the embedded player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackCredits {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OEmbedResponse {
    pub title: String,
    #[serde(default)]
    pub iframe_url: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<SearchMatch>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// A single Deezer search result. Only `link` is required; the remaining
/// fields differ per resource type and are kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub link: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl SearchMatch {
    /// Human-readable label of the match: track/album/playlist title or artist name.
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(&self.link)
    }
}
