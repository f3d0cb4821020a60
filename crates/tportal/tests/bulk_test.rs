//! End-to-end tests for the server commands against a wiremock Traffic
//! Ops: login, CDN selection via `--cdn`, the update call, the re-fetch
//! that follows a successful update, and link-only commands.
#![allow(clippy::unwrap_used)]

use std::process::Output;

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

fn api_path(suffix: &str) -> String {
    format!("/api/1.3/{suffix}")
}

fn ok(response: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "response": response }))
}

/// Traffic Ops with a session, three CDNs and one server.
async fn traffic_ops() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("user/login")))
        .and(body_json(json!({ "u": "ops", "p": "s3cret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "alerts": [{ "level": "success", "text": "Successfully logged in." }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(api_path("user/logout")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "alerts": [] })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(api_path("cdns")))
        .respond_with(ok(json!([
            { "id": 3, "name": "cdn-east", "domainName": "east.example.net" },
            { "id": 7, "name": "cdn-west", "domainName": "west.example.net" },
            { "id": 9, "name": "cdn-lab", "domainName": "lab.example.net" },
        ])))
        .mount(&server)
        .await;

    server
}

fn servers_body() -> serde_json::Value {
    json!([{
        "id": 42,
        "hostName": "edge-01",
        "domainName": "west.example.net",
        "ipAddress": "10.0.0.42",
        "status": "REPORTED",
        "cdnName": "cdn-west",
        "cachegroup": "west-edge",
        "updPending": true,
    }])
}

/// Run `tportal` against `server` with isolated config and a scripted login.
async fn run(server: &MockServer, args: &[&str]) -> Output {
    let mut cmd = cargo_bin_cmd!("tportal");
    cmd.env("HOME", "/tmp/tportal-bulk-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/tportal-bulk-test-nonexistent")
        .env_remove("TPORTAL_PROFILE")
        .env_remove("TPORTAL_URL")
        .env_remove("TPORTAL_USERNAME")
        .env_remove("TPORTAL_OUTPUT")
        .env_remove("TPORTAL_INSECURE")
        .env_remove("TPORTAL_TIMEOUT")
        .env_remove("RUST_LOG")
        .env("TPORTAL_PASSWORD", "s3cret")
        .args(["--url", &server.uri(), "--username", "ops"])
        .args(args);
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ── Queue / clear ───────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_queue_updates_then_reprints_servers() {
    let server = traffic_ops().await;

    Mock::given(method("GET"))
        .and(path(api_path("servers")))
        .respond_with(ok(servers_body()))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(api_path("cdns/7/queue_update")))
        .and(body_json(json!({ "action": "queue" })))
        .respond_with(ok(json!({ "action": "queue", "cdnId": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(&server, &["servers", "queue-updates", "--cdn", "cdn-west"]).await;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stderr(&output).contains("Queued server updates on CDN 'cdn-west'"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("edge-01"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_clear_updates_for_cache_group() {
    let server = traffic_ops().await;

    Mock::given(method("GET"))
        .and(path(api_path("cachegroups/12")))
        .respond_with(ok(json!([{ "id": 12, "name": "west-edge" }])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(api_path("servers")))
        .and(query_param("cachegroup", "12"))
        .respond_with(ok(servers_body()))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(api_path("cachegroups/12/queue_update")))
        .and(body_json(json!({ "action": "dequeue", "cdnId": 7 })))
        .respond_with(ok(json!({ "action": "dequeue", "cdnId": 7, "cachegroupId": 12 })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(
        &server,
        &["servers", "clear-updates", "--cache-group", "12", "--cdn", "cdn-west"],
    )
    .await;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stderr(&output).contains("Cleared server updates on CDN 'cdn-west'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_cdn_name_fails_without_queueing() {
    let server = traffic_ops().await;

    Mock::given(method("GET"))
        .and(path(api_path("servers")))
        .respond_with(ok(servers_body()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(api_path("cdns/7/queue_update")))
        .respond_with(ok(json!({ "action": "queue", "cdnId": 7 })))
        .expect(0)
        .mount(&server)
        .await;

    let output = run(&server, &["servers", "queue-updates", "--cdn", "cdn-wset"]).await;

    assert_eq!(output.status.code(), Some(4), "{}", stderr(&output));
    assert!(stderr(&output).contains("cdn-wset"));
}

// ── Links ───────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_new_server_link_skips_server_fetch() {
    let server = traffic_ops().await;

    Mock::given(method("GET"))
        .and(path(api_path("servers")))
        .respond_with(ok(servers_body()))
        .expect(0)
        .mount(&server)
        .await;

    let output = run(&server, &["servers", "new"]).await;

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "/servers/new");
}
