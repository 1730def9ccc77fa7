//! # API Module
//!
//! HTTP endpoints of the local converter web app.
//!
//! ## Endpoints
//!
//! - [`index`] - `GET /`, the converter page: an input field, a convert
//!   button, a status line and an output panel with a copy action
//! - [`convert`] - `GET /convert?link=...`, runs one conversion and answers
//!   with JSON `{status, message, html, link}`
//! - [`health`] - `GET /health`, status and version for monitoring
//!
//! Every request runs its own conversion and writes only to its own
//! response, so concurrent conversions never touch each other's output.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use deezlink::{config::Settings, convert::Converter, server};
//!
//! let converter = Arc::new(Converter::new(&Settings::from_env())?);
//! let app = server::router(converter);
//! ```

mod convert;
mod health;
mod index;

pub use convert::{ConvertResponse, convert};
pub use health::health;
pub use index::index;
