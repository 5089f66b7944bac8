mod common;

use common::{FakeWindow, REDIRECT_URI, raw_track, test_config, test_session};
use musetunes::{
    session::{PENDING_SEARCH_KEY, SessionStorage, Window},
    spotify::search::{resume_pending, search},
};
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authorized_location() -> String {
    format!("{}#access_token=ABC123&token_type=Bearer&expires_in=3600", REDIRECT_URI)
}

#[tokio::test]
async fn test_search_normalizes_tracks_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("type", "track"))
        .and(query_param("q", "around the world"))
        .and(header("authorization", "Bearer ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": {
                "items": [
                    raw_track("t1", "Around the World", "Daft Punk", Some("https://i.scdn.co/image/a")),
                    raw_track("t2", "Around the World (Remix)", "Daft Punk", None),
                    raw_track("t3", "World Tour", "Someone Else", Some("https://i.scdn.co/image/c")),
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let window = FakeWindow::at(&authorized_location());
    let (session, storage) =
        test_session(test_config(&format!("{}/v1", mock_server.uri())), window);

    let tracks = search(&session, "around the world").await;

    assert_eq!(tracks.len(), 3);
    let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2", "t3"]);

    let first = &tracks[0];
    assert_eq!(first.name, "Around the World");
    assert_eq!(first.artist, "Daft Punk");
    assert_eq!(first.artist_id, "t1-artist");
    assert_eq!(first.album, "Around the World album");
    assert_eq!(first.album_id, "t1-album");
    assert_eq!(first.uri, "spotify:track:t1");
    assert_eq!(first.album_cover, "https://i.scdn.co/image/a");

    // no artwork is an empty string
    assert_eq!(tracks[1].album_cover, "");

    assert_eq!(storage.get(PENDING_SEARCH_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_search_without_token_keeps_term_pending() {
    let mock_server = MockServer::start().await;
    let window = FakeWindow::at(REDIRECT_URI);
    let (session, storage) = test_session(
        test_config(&format!("{}/v1", mock_server.uri())),
        window.clone(),
    );

    let tracks = search(&session, "daft punk").await;

    assert!(tracks.is_empty());
    assert_eq!(
        storage.get(PENDING_SEARCH_KEY).await.unwrap().as_deref(),
        Some("daft punk")
    );

    let navigations = window.navigations();
    assert_eq!(navigations.len(), 1);
    let state = Url::parse(&navigations[0])
        .unwrap()
        .query_pairs()
        .find(|(k, _)| k == "state")
        .map(|(_, v)| v.into_owned());
    assert_eq!(state.as_deref(), Some("daft punk"));

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_search_http_error_yields_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let window = FakeWindow::at(&authorized_location());
    let (session, _) = test_session(test_config(&format!("{}/v1", mock_server.uri())), window);

    assert!(search(&session, "daft punk").await.is_empty());
}

#[tokio::test]
async fn test_search_without_tracks_collection_yields_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "artists": {} })))
        .mount(&mock_server)
        .await;

    let window = FakeWindow::at(&authorized_location());
    let (session, _) = test_session(test_config(&format!("{}/v1", mock_server.uri())), window);

    assert!(search(&session, "daft punk").await.is_empty());
}

#[tokio::test]
async fn test_search_with_non_json_body_yields_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let window = FakeWindow::at(&authorized_location());
    let (session, _) = test_session(test_config(&format!("{}/v1", mock_server.uri())), window);

    assert!(search(&session, "daft punk").await.is_empty());
}

#[tokio::test]
async fn test_pending_search_resumes_after_redirect() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "daft punk"))
        .and(header("authorization", "Bearer ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": { "items": [raw_track("t1", "One More Time", "Daft Punk", None)] }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let window = FakeWindow::at(&authorized_location());
    let (session, storage) = test_session(
        test_config(&format!("{}/v1", mock_server.uri())),
        window.clone(),
    );
    storage.set(PENDING_SEARCH_KEY, "daft punk").await.unwrap();

    let tracks = resume_pending(&session).await.expect("pending search resumed");

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].name, "One More Time");
    assert_eq!(window.href(), REDIRECT_URI);
    assert!(window.navigations().is_empty());
    assert_eq!(storage.get(PENDING_SEARCH_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_nothing_to_resume_without_fragment_or_term() {
    let window = FakeWindow::at(REDIRECT_URI);
    let (session, storage) = test_session(test_config("http://localhost/v1"), window.clone());
    storage.set(PENDING_SEARCH_KEY, "daft punk").await.unwrap();
    assert!(resume_pending(&session).await.is_none());

    let window = FakeWindow::at(&authorized_location());
    let (session, _) = test_session(test_config("http://localhost/v1"), window.clone());
    assert!(resume_pending(&session).await.is_none());
    assert!(window.navigations().is_empty());
}
