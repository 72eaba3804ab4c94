#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use sleeper_previews::{PreviewsClient, RepoSource};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client whose content-API, raw-mirror, and league-API roots all point at
/// the mock server.
pub fn client_for(server: &MockServer) -> PreviewsClient {
    let base = Url::parse(&server.base_url()).unwrap();
    PreviewsClient::builder()
        .base_content_api(base.clone())
        .base_raw(base.clone())
        .base_league_api(base)
        .build()
        .unwrap()
}

pub fn source() -> RepoSource {
    RepoSource::new("o", "r", "main")
}

/// Mount a content-API directory listing with the given filenames.
pub fn mock_listing<'a>(server: &'a MockServer, dir: &str, names: &[&str]) -> Mock<'a> {
    let body: Vec<_> = names
        .iter()
        .map(|n| serde_json::json!({ "name": n, "type": "file" }))
        .collect();
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/repos/o/r/contents/{dir}"))
            .query_param("ref", "main");
        then.status(200)
            .header("content-type", "application/json")
            .body(serde_json::Value::Array(body).to_string());
    })
}

/// Mount a content-API file fetch for `path` returning `body`, or a 404 when
/// `body` is `None`.
pub fn mock_content_file<'a>(server: &'a MockServer, path: &str, body: Option<&str>) -> Mock<'a> {
    let body = body.map(str::to_string);
    server.mock(move |when, then| {
        when.method(GET)
            .path(format!("/repos/o/r/contents/{path}"))
            .query_param("ref", "main");
        match &body {
            Some(b) => then.status(200).body(b),
            None => then.status(404).body("{\"message\":\"Not Found\"}"),
        };
    })
}

/// Mount a raw-mirror file fetch for `path`.
pub fn mock_raw_file<'a>(server: &'a MockServer, path: &str, body: Option<&str>) -> Mock<'a> {
    let body = body.map(str::to_string);
    server.mock(move |when, then| {
        when.method(GET).path(format!("/o/r/main/{path}"));
        match &body {
            Some(b) => then.status(200).body(b),
            None => then.status(404).body("404: Not Found"),
        };
    })
}

/// Mount a league-API endpoint (cache-busting `t` param is always present,
/// so matching is by path only).
pub fn mock_league_json<'a>(
    server: &'a MockServer,
    path: &str,
    body: serde_json::Value,
) -> Mock<'a> {
    let path = format!("/{path}");
    server.mock(move |when, then| {
        when.method(GET).path(path.as_str());
        then.status(200)
            .header("content-type", "application/json")
            .body(body.to_string());
    })
}
