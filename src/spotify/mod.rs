//! # Spotify Module
//!
//! Everything needed to turn a Spotify link into searchable metadata:
//!
//! - [`link`] - recognizes `open.spotify.com/<type>/<id>` links
//! - [`metadata`] - fetches the oEmbed description (and the player page for tracks)
//! - [`embed`] - reads track credits out of the player page markup
//! - [`title`] - splits combined "title by artist" strings
//!
//! No Spotify API credentials are involved; the oEmbed endpoint and the
//! embed player are public.

pub mod embed;
pub mod link;
pub mod metadata;
pub mod title;

pub use embed::{EmbedExtractor, PlayerMarkupExtractor};
pub use metadata::MetadataFetcher;
pub use title::split_title;
