use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, http::StatusCode, response::Json};
use serde::Serialize;

use crate::{
    convert::Converter,
    error::OutcomeKind,
    presenter::{CONVERTING_MESSAGE, FailureStatus, OPEN_LINK_LABEL, Presenter, success_html},
    types::SearchMatch,
};

#[derive(Debug, Clone, Serialize)]
pub struct ConvertResponse {
    pub status: &'static str,
    pub message: String,
    pub html: String,
    pub link: Option<String>,
}

/// Collects the outcome of one conversion into a [`ConvertResponse`].
struct JsonPresenter {
    response: ConvertResponse,
}

impl JsonPresenter {
    fn new() -> Self {
        Self {
            response: ConvertResponse {
                status: "converting",
                message: CONVERTING_MESSAGE.to_string(),
                html: CONVERTING_MESSAGE.to_string(),
                link: None,
            },
        }
    }
}

impl Presenter for JsonPresenter {
    fn converting(&mut self, _input: &str) {
        *self = Self::new();
    }

    fn success(&mut self, found: &SearchMatch) {
        self.response = ConvertResponse {
            status: OutcomeKind::Success.as_str(),
            message: OPEN_LINK_LABEL.to_string(),
            html: success_html(found),
            link: Some(found.link.clone()),
        };
    }

    fn failure(&mut self, status: &FailureStatus) {
        self.response = ConvertResponse {
            status: status.kind().as_str(),
            message: status.text(),
            html: status.html(),
            link: None,
        };
    }
}

/// `GET /convert?link=<spotify link>`
///
/// Always answers with a [`ConvertResponse`]; the HTTP status mirrors the
/// outcome (200 success, 400 invalid input, 404 not found, 502 relay error).
pub async fn convert(
    Query(params): Query<HashMap<String, String>>,
    Extension(converter): Extension<Arc<Converter>>,
) -> (StatusCode, Json<ConvertResponse>) {
    let link = params.get("link").map(String::as_str).unwrap_or_default();

    let mut presenter = JsonPresenter::new();
    let outcome = converter.run(link, &mut presenter).await;

    let code = match outcome {
        OutcomeKind::Success => StatusCode::OK,
        OutcomeKind::InvalidInput => StatusCode::BAD_REQUEST,
        OutcomeKind::NotFound(_) => StatusCode::NOT_FOUND,
        OutcomeKind::ProxyError => StatusCode::BAD_GATEWAY,
    };

    (code, Json(presenter.response))
}
