use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tokio::net::TcpListener;

use crate::{Res, api, convert::Converter};

/// Routes of the converter web app.
pub fn router(converter: Arc<Converter>) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/convert", get(api::convert).layer(Extension(converter)))
}

pub async fn serve(listener: TcpListener, converter: Arc<Converter>) -> Res<()> {
    axum::serve(listener, router(converter)).await?;
    Ok(())
}
