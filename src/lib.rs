//! Spotify to Deezer link converter library
//!
//! This library turns a Spotify resource link (track, artist, album or
//! playlist) into the matching Deezer link. It reads the Spotify oEmbed
//! metadata of the resource, derives a title and artist from it and runs a
//! typed query against the Deezer catalog search API. All outbound requests
//! travel through a configurable CORS relay.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local converter web app
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `convert` - The conversion pipeline tying all components together
//! - `deezer` - Deezer catalog search client
//! - `error` - Error taxonomy of a conversion
//! - `presenter` - Output surface abstraction and user-facing messages
//! - `proxy` - Relay-aware HTTP client
//! - `server` - Local HTTP server for the converter web app
//! - `spotify` - Link parsing, metadata fetching and title heuristics
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use deezlink::{config, convert::Converter};
//!
//! #[tokio::main]
//! async fn main() -> deezlink::Res<()> {
//!     config::load_env().await?;
//!     let converter = Converter::new(&config::Settings::from_env())?;
//!     let found = converter.convert("https://open.spotify.com/artist/4tZwfgrHOc3mvqYlEYSvVi").await?;
//!     println!("{}", found.link);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod convert;
pub mod deezer;
pub mod error;
pub mod presenter;
pub mod proxy;
pub mod server;
pub mod spotify;
pub mod types;

use std::sync::atomic::{AtomicBool, Ordering};

/// A convenient Result type alias for operations that may fail.
///
/// Used for the ambient plumbing (configuration, server start-up) where the
/// caller only reports the failure. Conversion results use
/// [`error::ConvertError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enables or disables output of the [`debug!`] macro.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// Returns whether [`debug!`] output is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Converting {}", link);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This macro will cause the program to exit with status 1 after printing
/// the message. Only the binary's start-up code uses it; a failed conversion
/// is reported through a presenter instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a dimmed diagnostic message when verbose output is enabled.
///
/// Verbose output is switched on by `--verbose` or `DEEZLINK_VERBOSE`.
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    if $crate::is_verbose() {
      use colored::Colorize;
      println!("[{}] {}", "-".dimmed(), std::format_args!($($arg)*).to_string().dimmed());
    }
  })
}
