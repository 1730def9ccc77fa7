use std::{str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::{
    error::ConvertError,
    types::{ResourceLink, ResourceType},
};

pub const SPOTIFY_URL: &str = "https://open.spotify.com";

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"open\.spotify\.com/(track|artist|album|playlist)/([a-zA-Z0-9]+)")
        .expect("link pattern is valid")
});

impl ResourceLink {
    /// Extracts resource type and id from anything containing
    /// `open.spotify.com/<type>/<id>`.
    ///
    /// # Example
    ///
    /// ```
    /// let link = ResourceLink::parse("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=x")?;
    /// assert_eq!(link.kind, ResourceType::Track);
    /// assert_eq!(link.id, "4uLU6hMCjMI75M1A2tKUQC");
    /// ```
    pub fn parse(input: &str) -> Result<Self, ConvertError> {
        let captures = LINK_PATTERN
            .captures(input)
            .ok_or_else(|| ConvertError::InvalidLink(input.trim().to_string()))?;

        let kind = ResourceType::from_path(&captures[1])
            .ok_or_else(|| ConvertError::InvalidLink(input.trim().to_string()))?;

        Ok(Self {
            kind,
            id: captures[2].to_string(),
        })
    }

    /// Canonical Spotify URL of the resource.
    pub fn spotify_url(&self) -> String {
        format!("{}/{}/{}", SPOTIFY_URL, self.kind.as_path(), self.id)
    }
}

impl FromStr for ResourceLink {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceLink::parse(s)
    }
}
