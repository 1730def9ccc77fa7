#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use deezlink::{config::Settings, convert::Converter};

#[derive(Clone)]
struct Route {
    prefix: String,
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

#[derive(Clone, Default)]
struct RelayState {
    routes: Arc<Mutex<Vec<Route>>>,
    hits: Arc<Mutex<Vec<(String, String)>>>,
}

/// Local stand-in for the CORS relay and the services behind it.
///
/// Requests arrive as `/<target url>`; the target is percent-decoded once and
/// answered by the registered route with the longest matching prefix.
pub struct FakeRelay {
    pub addr: SocketAddr,
    state: RelayState,
}

impl FakeRelay {
    pub async fn start() -> Self {
        let state = RelayState::default();
        let app = Router::new().fallback(relay).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn converter(&self) -> Converter {
        Converter::new(&Settings::with_proxy(self.base())).unwrap()
    }

    pub fn json(&self, prefix: &str, body: Value) -> &Self {
        self.route(prefix, StatusCode::OK, "application/json", body.to_string())
    }

    pub fn html(&self, prefix: &str, body: &str) -> &Self {
        self.route(prefix, StatusCode::OK, "text/html", body.to_string())
    }

    pub fn status(&self, prefix: &str, status: StatusCode) -> &Self {
        self.route(prefix, status, "text/plain", "relay says no".to_string())
    }

    pub fn route(
        &self,
        prefix: &str,
        status: StatusCode,
        content_type: &'static str,
        body: String,
    ) -> &Self {
        self.state.routes.lock().unwrap().push(Route {
            prefix: prefix.to_string(),
            status,
            content_type,
            body,
        });
        self
    }

    /// Decoded target URLs in request order.
    pub fn hits(&self) -> Vec<String> {
        self.state
            .hits
            .lock()
            .unwrap()
            .iter()
            .map(|(_, decoded)| decoded.clone())
            .collect()
    }

    /// Target URLs exactly as they arrived on the wire.
    pub fn raw_hits(&self) -> Vec<String> {
        self.state
            .hits
            .lock()
            .unwrap()
            .iter()
            .map(|(raw, _)| raw.clone())
            .collect()
    }
}

async fn relay(State(state): State<RelayState>, uri: Uri) -> Response {
    let raw = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/")
        .trim_start_matches('/')
        .to_string();
    let target = urlencoding::decode(&raw)
        .map(|t| t.into_owned())
        .unwrap_or_else(|_| raw.clone());

    state.hits.lock().unwrap().push((raw, target.clone()));

    let routes = state.routes.lock().unwrap().clone();
    match routes
        .iter()
        .filter(|r| target.starts_with(&r.prefix))
        .max_by_key(|r| r.prefix.len())
    {
        Some(r) => (
            r.status,
            [(header::CONTENT_TYPE, r.content_type)],
            r.body.clone(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "no route").into_response(),
    }
}

pub fn oembed(kind: &str, id: &str) -> String {
    format!(
        "https://open.spotify.com/oembed?url=https://open.spotify.com/{}/{}",
        kind, id
    )
}

pub fn player_page(title: &str, artist: &str) -> String {
    format!(
        r#"<html><body><div class="EmbedWidget">
  <div class="TitleAndSubtitle_title__Nwyku Type__TypeElement"><span><a data-encore-id="textLink" href="/track/x">{}</a></span></div>
  <div class="TitleAndSubtitle_subtitle__P1cxq"><a data-encore-id="textLink" href="/artist/y">{}</a></div>
</div></body></html>"#,
        title, artist
    )
}
