//! # Deezer Module
//!
//! Client for the public Deezer catalog search API
//! (`https://api.deezer.com/search/<type>`). Every search returns the first
//! entry of the relevance-ranked result list, or `None` when the list is
//! empty. An empty result is an expected outcome, not an error.

pub mod search;

pub use search::DeezerSearch;
