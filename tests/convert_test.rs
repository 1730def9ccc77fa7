mod common;

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use serde_json::json;

use deezlink::config::Settings;
use deezlink::convert::Converter;
use deezlink::error::{ConvertError, OutcomeKind};
use deezlink::presenter::{FailureStatus, Presenter};
use deezlink::types::{ResourceType, SearchMatch, TrackCredits};

use common::{FakeRelay, oembed, player_page};

#[derive(Default)]
struct RecordingPresenter {
    events: Vec<String>,
}

impl Presenter for RecordingPresenter {
    fn converting(&mut self, input: &str) {
        self.events.push(format!("converting {}", input));
    }

    fn success(&mut self, found: &SearchMatch) {
        self.events.push(format!("success {}", found.link));
    }

    fn failure(&mut self, status: &FailureStatus) {
        self.events.push(format!("failure {}", status.text()));
    }
}

fn deezer_hit(link: &str) -> serde_json::Value {
    json!({ "data": [ { "id": 1, "link": link }, { "id": 2, "link": "https://www.deezer.com/other" } ], "total": 2 })
}

#[tokio::test]
async fn test_artist_end_to_end() {
    let relay = FakeRelay::start().await;
    relay
        .json(&oembed("artist", "1234"), json!({ "title": "Daft Punk" }))
        .json(
            r#"https://api.deezer.com/search/artist?order=RANKING&q=artist:"Daft Punk""#,
            json!({ "data": [ { "id": 27, "name": "Daft Punk", "link": "https://www.deezer.com/artist/27" } ] }),
        );

    let found = relay
        .converter()
        .convert("https://open.spotify.com/artist/1234")
        .await
        .unwrap();

    assert_eq!(found.link, "https://www.deezer.com/artist/27");
    assert_eq!(found.label(), "Daft Punk");
    assert_eq!(relay.hits().len(), 2);
}

#[tokio::test]
async fn test_artist_end_to_end_through_presenter() {
    let relay = FakeRelay::start().await;
    relay
        .json(&oembed("artist", "1234"), json!({ "title": "Daft Punk" }))
        .json(
            "https://api.deezer.com/search/artist?",
            deezer_hit("https://www.deezer.com/artist/27"),
        );

    let mut presenter = RecordingPresenter::default();
    let outcome = relay
        .converter()
        .run("https://open.spotify.com/artist/1234", &mut presenter)
        .await;

    assert_eq!(outcome, OutcomeKind::Success);
    assert_eq!(
        presenter.events,
        vec![
            "converting https://open.spotify.com/artist/1234".to_string(),
            "success https://www.deezer.com/artist/27".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_album_splits_title_and_artist() {
    let relay = FakeRelay::start().await;
    relay
        .json(
            &oembed("album", "4m2880jivSbbyEGAKfITCa"),
            json!({ "title": "Random Access Memories by Daft Punk" }),
        )
        .json(
            r#"https://api.deezer.com/search/album?order=RANKING&q=artist:"Daft Punk" album:"Random Access Memories""#,
            deezer_hit("https://www.deezer.com/album/6575789"),
        );

    let found = relay
        .converter()
        .convert("https://open.spotify.com/album/4m2880jivSbbyEGAKfITCa")
        .await
        .unwrap();

    assert_eq!(found.link, "https://www.deezer.com/album/6575789");
}

#[tokio::test]
async fn test_playlist_uses_strict_search() {
    let relay = FakeRelay::start().await;
    relay
        .json(&oembed("playlist", "37i9dQZF1DXcBWIGoYBM5M"), json!({ "title": "Top Hits" }))
        .json(
            "https://api.deezer.com/search/playlist?strict=on&q=Top Hits",
            deezer_hit("https://www.deezer.com/playlist/1"),
        );

    let found = relay
        .converter()
        .convert("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M")
        .await
        .unwrap();

    assert_eq!(found.link, "https://www.deezer.com/playlist/1");
    assert!(!relay.hits()[1].contains("order="));
}

#[tokio::test]
async fn test_track_uses_player_page_credits() {
    let relay = FakeRelay::start().await;
    relay
        .json(
            &oembed("track", "abc"),
            json!({ "title": "Yesterday", "iframe_url": "https://open.spotify.com/embed/track/abc" }),
        )
        .html(
            "https://open.spotify.com/embed/track/abc",
            &player_page("Yesterday", "The Beatles"),
        )
        .json(
            r#"https://api.deezer.com/search/track?order=RANKING&q=track:"Yesterday" artist:"The Beatles""#,
            deezer_hit("https://www.deezer.com/track/116348128"),
        );

    let found = relay
        .converter()
        .convert("https://open.spotify.com/track/abc")
        .await
        .unwrap();

    assert_eq!(found.link, "https://www.deezer.com/track/116348128");

    let hits = relay.hits();
    assert_eq!(hits.len(), 3);
    assert!(hits[1].starts_with("https://open.spotify.com/embed/track/abc"));

    // the track query arrives percent-encoded exactly once
    let raw_search = &relay.raw_hits()[2];
    assert!(raw_search.contains("q=track%3A%22Yesterday%22%20artist%3A%22The%20Beatles%22"));
}

#[tokio::test]
async fn test_track_falls_back_to_oembed_title() {
    let relay = FakeRelay::start().await;
    relay
        .json(
            &oembed("track", "abc"),
            json!({ "title": "Yesterday by The Beatles", "iframe_url": "https://open.spotify.com/embed/track/abc" }),
        )
        .html("https://open.spotify.com/embed/track/abc", "<html><body></body></html>")
        .json(
            r#"https://api.deezer.com/search/track?order=RANKING&q=track:"Yesterday" artist:"The Beatles""#,
            deezer_hit("https://www.deezer.com/track/116348128"),
        );

    let found = relay
        .converter()
        .convert("https://open.spotify.com/track/abc")
        .await
        .unwrap();

    assert_eq!(found.link, "https://www.deezer.com/track/116348128");
}

#[tokio::test]
async fn test_track_without_artist_searches_title_only() {
    let relay = FakeRelay::start().await;
    relay
        .json(
            &oembed("track", "abc"),
            json!({ "title": "Intro", "iframe_url": "https://open.spotify.com/embed/track/abc" }),
        )
        .html("https://open.spotify.com/embed/track/abc", "<html></html>")
        .json(
            "https://api.deezer.com/search/track?",
            deezer_hit("https://www.deezer.com/track/1"),
        );

    relay
        .converter()
        .convert("https://open.spotify.com/track/abc")
        .await
        .unwrap();

    let search = &relay.hits()[2];
    assert!(search.ends_with(r#"q=track:"Intro""#), "{}", search);
    assert!(!search.contains("artist:"));
}

struct FixedCredits;

impl deezlink::spotify::EmbedExtractor for FixedCredits {
    fn extract(&self, _markup: &str) -> Option<TrackCredits> {
        Some(TrackCredits {
            title: "Around the World".to_string(),
            artist: "Daft Punk".to_string(),
        })
    }
}

#[tokio::test]
async fn test_custom_extractor_is_used() {
    let relay = FakeRelay::start().await;
    relay
        .json(
            &oembed("track", "abc"),
            json!({ "title": "ignored", "iframe_url": "https://open.spotify.com/embed/track/abc" }),
        )
        .html("https://open.spotify.com/embed/track/abc", "<html></html>")
        .json(
            r#"https://api.deezer.com/search/track?order=RANKING&q=track:"Around the World" artist:"Daft Punk""#,
            deezer_hit("https://www.deezer.com/track/3129407"),
        );

    let found = relay
        .converter()
        .with_extractor(FixedCredits)
        .convert("https://open.spotify.com/track/abc")
        .await
        .unwrap();

    assert_eq!(found.link, "https://www.deezer.com/track/3129407");
}

#[tokio::test]
async fn test_empty_result_is_not_found() {
    let relay = FakeRelay::start().await;
    relay
        .json(&oembed("artist", "1234"), json!({ "title": "Nobody Known" }))
        .json("https://api.deezer.com/search/artist?", json!({ "data": [], "total": 0 }));

    let result = relay
        .converter()
        .convert("https://open.spotify.com/artist/1234")
        .await;

    assert!(matches!(
        result,
        Err(ConvertError::NotFound(ResourceType::Artist))
    ));
}

#[tokio::test]
async fn test_missing_data_field_is_not_found() {
    let relay = FakeRelay::start().await;
    relay
        .json(&oembed("playlist", "p1"), json!({ "title": "Chill" }))
        .json("https://api.deezer.com/search/playlist?", json!({}));

    let result = relay
        .converter()
        .convert("https://open.spotify.com/playlist/p1")
        .await;

    assert!(matches!(
        result,
        Err(ConvertError::NotFound(ResourceType::Playlist))
    ));
}

#[tokio::test]
async fn test_not_found_through_presenter() {
    let relay = FakeRelay::start().await;
    relay
        .json(&oembed("album", "a1"), json!({ "title": "Unknown by Nobody" }))
        .json("https://api.deezer.com/search/album?", json!({ "data": [] }));

    let mut presenter = RecordingPresenter::default();
    let outcome = relay
        .converter()
        .run("https://open.spotify.com/album/a1", &mut presenter)
        .await;

    assert_eq!(outcome, OutcomeKind::NotFound(ResourceType::Album));
    assert_eq!(presenter.events[1], "failure Album not found on Deezer.");
}

#[tokio::test]
async fn test_invalid_input_makes_no_request() {
    let relay = FakeRelay::start().await;

    let mut presenter = RecordingPresenter::default();
    let outcome = relay
        .converter()
        .run("https://www.deezer.com/track/1", &mut presenter)
        .await;

    assert_eq!(outcome, OutcomeKind::InvalidInput);
    assert_eq!(
        presenter.events[1],
        "failure Please enter a valid Spotify link."
    );
    assert!(relay.hits().is_empty());
}

#[tokio::test]
async fn test_metadata_failure_is_proxy_error() {
    let relay = FakeRelay::start().await;
    relay.status(&oembed("artist", "1234"), StatusCode::FORBIDDEN);

    let result = relay
        .converter()
        .convert("https://open.spotify.com/artist/1234")
        .await;

    assert!(matches!(result, Err(ConvertError::Proxy { .. })));
    assert_eq!(relay.hits().len(), 1);
}

#[tokio::test]
async fn test_player_page_failure_is_proxy_error() {
    let relay = FakeRelay::start().await;
    relay
        .json(
            &oembed("track", "abc"),
            json!({ "title": "Yesterday", "iframe_url": "https://open.spotify.com/embed/track/abc" }),
        )
        .status(
            "https://open.spotify.com/embed/track/abc",
            StatusCode::TOO_MANY_REQUESTS,
        );

    let result = relay
        .converter()
        .convert("https://open.spotify.com/track/abc")
        .await;

    assert!(matches!(result, Err(ConvertError::Proxy { .. })));
}

#[tokio::test]
async fn test_search_failure_is_proxy_error_with_remediation() {
    let relay = FakeRelay::start().await;
    relay
        .json(&oembed("artist", "1234"), json!({ "title": "Daft Punk" }))
        .status(
            "https://api.deezer.com/search/artist?",
            StatusCode::INTERNAL_SERVER_ERROR,
        );

    let mut presenter = RecordingPresenter::default();
    let outcome = relay
        .converter()
        .run("https://open.spotify.com/artist/1234", &mut presenter)
        .await;

    assert_eq!(outcome, OutcomeKind::ProxyError);
    let message = &presenter.events[1];
    assert!(message.contains("CORS error detected"));
    assert!(message.contains(&format!("http://{}/corsdemo", relay.addr)));
}

#[tokio::test]
async fn test_unreachable_relay_is_proxy_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let converter = Converter::new(&Settings::with_proxy(format!("http://{}/", addr))).unwrap();
    let result = converter
        .convert("https://open.spotify.com/artist/1234")
        .await;

    match result {
        Err(ConvertError::Proxy { reason, .. }) => {
            assert!(reason.starts_with("connection failed"), "{}", reason);
        }
        other => panic!("expected proxy error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_silent_relay_times_out_as_proxy_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        // accept and hold connections without ever answering
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });

    let settings = Settings {
        proxy_url: format!("http://{}/", addr),
        timeout: Duration::from_secs(1),
    };
    let converter = Converter::new(&settings).unwrap();

    let started = Instant::now();
    let mut presenter = RecordingPresenter::default();
    let outcome = converter
        .run("https://open.spotify.com/artist/1234", &mut presenter)
        .await;

    assert_eq!(outcome, OutcomeKind::ProxyError);
    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(presenter.events[1].contains("CORS error detected"));

    match converter.convert("https://open.spotify.com/artist/1234").await {
        Err(ConvertError::Proxy { reason, .. }) => {
            assert!(reason.starts_with("timed out"), "{}", reason);
        }
        other => panic!("expected proxy error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_oembed_without_title_is_malformed() {
    let relay = FakeRelay::start().await;
    relay.json(&oembed("artist", "1234"), json!({ "html": "<iframe>" }));

    let result = relay
        .converter()
        .convert("https://open.spotify.com/artist/1234")
        .await;

    match result {
        Err(e @ ConvertError::MalformedMetadata { .. }) => {
            assert_eq!(e.outcome_kind(), OutcomeKind::NotFound(ResourceType::Artist));
        }
        other => panic!("expected malformed metadata, got {:?}", other),
    }
}

#[tokio::test]
async fn test_track_without_iframe_url_is_malformed() {
    let relay = FakeRelay::start().await;
    relay.json(&oembed("track", "abc"), json!({ "title": "Yesterday" }));

    let result = relay
        .converter()
        .convert("https://open.spotify.com/track/abc")
        .await;

    assert!(matches!(
        result,
        Err(ConvertError::MalformedMetadata {
            kind: ResourceType::Track,
            ..
        })
    ));
    assert_eq!(relay.hits().len(), 1);
}

#[tokio::test]
async fn test_blank_title_is_malformed() {
    let relay = FakeRelay::start().await;
    relay.json(&oembed("playlist", "p1"), json!({ "title": "   " }));

    let result = relay
        .converter()
        .convert("https://open.spotify.com/playlist/p1")
        .await;

    assert!(matches!(
        result,
        Err(ConvertError::MalformedMetadata { .. })
    ));
}
