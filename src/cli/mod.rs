//! # CLI Module
//!
//! Command implementations behind the `deezlink` binary.
//!
//! - [`convert`] - converts a single Spotify link and prints the Deezer link
//! - [`serve`] - runs the converter web app on the configured address
//!
//! ## Usage Patterns
//!
//! ```bash
//! deezlink convert https://open.spotify.com/artist/4tZwfgrHOc3mvqYlEYSvVi
//! deezlink convert --open https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
//! deezlink serve --addr 0.0.0.0:8080
//! ```

mod convert;
mod serve;

pub use convert::TerminalPresenter;
pub use convert::convert;
pub use serve::serve;
