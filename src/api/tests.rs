//! Unit tests for API routing

use super::server::{parse_request_line, read_request_head, RequestHead, MAX_HEAD_BYTES};
use super::*;
use crate::events::{GameDate, HitEvent, Outcome};

fn dataset() -> Dataset {
    let event = |batter: &str, pitcher: &str, video: Option<&str>| HitEvent {
        batter: batter.to_string(),
        pitcher: pitcher.to_string(),
        game_date: GameDate::from_serial(44197.0).unwrap(),
        exit_speed: 101.37,
        launch_angle: 27.5,
        hit_distance: 350.0,
        exit_direction: 0.0,
        outcome: Outcome::HomeRun,
        video_link: video.map(str::to_string),
    };
    Dataset::from_events(vec![
        event("Ronald Acuna", "Zack Wheeler", Some("https://v/1")),
        event("Ozzie Albies", "Max Scherzer", None),
        event("Ronald Acuna", "Max Scherzer", None),
    ])
}

#[test]
fn test_batters_route() {
    let response = route(&dataset(), "GET", "/batters");
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!(["Ozzie Albies", "Ronald Acuna"]));
}

#[test]
fn test_api_prefix_is_accepted() {
    let ds = dataset();
    assert_eq!(
        route(&ds, "GET", "/api/batters"),
        route(&ds, "GET", "/batters")
    );
}

#[test]
fn test_search_without_batter_is_400() {
    let response = route(&dataset(), "GET", "/search");
    assert_eq!(response.status, 400);
    assert_eq!(response.body, json!({ "error": "Batter name is required" }));

    let response = route(&dataset(), "GET", "/search?batter=");
    assert_eq!(response.status, 400);
}

#[test]
fn test_search_unknown_batter_is_empty_200() {
    let response = route(&dataset(), "GET", "/search?batter=unknownperson");
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!([]));
}

#[test]
fn test_search_whitespace_batter_is_not_trimmed() {
    let response = route(&dataset(), "GET", "/search?batter=%20%20");
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!([]));

    let response = route(&dataset(), "GET", "/search?batter=%20Ronald%20Acuna");
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!([]));
}

#[test]
fn test_search_is_case_insensitive_and_decoded() {
    let response = route(&dataset(), "GET", "/search?batter=RONALD%20ACUNA");
    assert_eq!(response.status, 200);

    let rows = response.body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["BATTER"], "Ronald Acuna");
    assert_eq!(rows[0]["PITCHER"], "Zack Wheeler");
    assert_eq!(rows[0]["GAME_DATE"], "1/1/2021");
    assert_eq!(rows[0]["PLAY_OUTCOME"], "HomeRun");
    assert_eq!(rows[0]["HIT_DISTANCE"], 350.0);

    let plus = route(&dataset(), "GET", "/search?batter=ronald+acuna");
    assert_eq!(plus.body, response.body);
}

#[test]
fn test_pitchers_route() {
    let response = route(&dataset(), "GET", "/pitchers?batter=Ronald%20Acuna");
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!(["Max Scherzer", "Zack Wheeler"]));

    assert_eq!(route(&dataset(), "GET", "/pitchers").status, 400);
}

#[test]
fn test_videos_route() {
    let ds = dataset();
    let response = route(
        &ds,
        "GET",
        "/videos?batter=Ronald%20Acuna&pitcher=Zack%20Wheeler",
    );
    assert_eq!(response.status, 200);
    let cards = response.body.as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["title"], "Ronald Acuna vs Zack Wheeler");
    assert_eq!(cards[0]["link"], "https://v/1");

    let none = route(
        &ds,
        "GET",
        "/videos?batter=Ronald%20Acuna&pitcher=Max%20Scherzer",
    );
    assert_eq!(none.body, json!([]));
}

#[test]
fn test_videos_requires_pitcher() {
    let response = route(&dataset(), "GET", "/videos?batter=Ronald%20Acuna");
    assert_eq!(response.status, 400);
    assert_eq!(response.body, json!({ "error": "Pitcher name is required" }));
}

#[test]
fn test_unknown_route_and_method() {
    assert_eq!(route(&dataset(), "GET", "/players").status, 404);
    assert_eq!(route(&dataset(), "POST", "/batters").status, 405);
    assert_eq!(route(&dataset(), "GET", "search").status, 400);
}

#[test]
fn test_parse_request_line() {
    assert_eq!(
        parse_request_line("GET /search?batter=x HTTP/1.1\r\n"),
        Some(("GET", "/search?batter=x"))
    );
    assert_eq!(parse_request_line(""), None);
    assert_eq!(parse_request_line("GET /search"), None);
    assert_eq!(parse_request_line("GET / FTP/1.0"), None);
}

#[test]
fn test_http_response_framing() {
    let raw = ApiResponse::error(400, "Batter name is required").to_http();
    let (head, body) = raw.split_once("\r\n\r\n").unwrap();

    assert!(head.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert!(head.contains("Access-Control-Allow-Origin: *"));
    assert!(head.contains(&format!("Content-Length: {}", body.len())));
    assert_eq!(body, r#"{"error":"Batter name is required"}"#);
}

#[tokio::test]
async fn test_read_request_head_discards_headers() {
    let raw: &[u8] = b"GET /batters HTTP/1.1\r\nHost: localhost\r\n\r\n";
    let head = read_request_head(raw, std::time::Duration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(head, RequestHead::Line("GET /batters HTTP/1.1\r\n".to_string()));
}

#[tokio::test]
async fn test_read_request_head_caps_line_length() {
    let raw = vec![b'a'; MAX_HEAD_BYTES as usize + 100];
    let head = read_request_head(raw.as_slice(), std::time::Duration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(head, RequestHead::Incomplete);
}

#[tokio::test]
async fn test_read_request_head_times_out() {
    // The writer stays open but never sends a newline.
    let (mut client, server) = tokio::io::duplex(64);
    tokio::io::AsyncWriteExt::write_all(&mut client, b"GET /bat")
        .await
        .unwrap();
    let head = read_request_head(server, std::time::Duration::from_millis(20))
        .await
        .unwrap();
    assert_eq!(head, RequestHead::TimedOut);
    drop(client);
}

#[test]
fn test_timeout_reason_phrase() {
    assert_eq!(ApiResponse::error(408, "Request timeout").reason(), "Request Timeout");
}
