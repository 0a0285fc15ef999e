//! End-to-end shell tests against a mock API server.

use ams_client::{AmsClient, ClientConfig};
use ams_console::{Outcome, Shell};
use ams_core::{Gateway, SessionStore};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn shell_for(server: &MockServer) -> (Shell, Arc<SessionStore>) {
    let session = Arc::new(SessionStore::in_memory());
    let client = AmsClient::new(
        ClientConfig::new(format!("{}/api/", server.uri())),
        Arc::clone(&session),
    )
    .expect("valid mock url");
    let gateway: Arc<dyn Gateway> = Arc::new(client);
    (Shell::new(gateway, Arc::clone(&session)), session)
}

async fn run(shell: &mut Shell, line: &str) -> String {
    match shell.execute(line).await {
        Outcome::Continue(text) => text,
        Outcome::Exit => panic!("Unexpected exit on {line:?}"),
    }
}

fn artist_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "dob": "1990-04-12",
        "gender": "m",
        "address": "Kathmandu",
        "first_release_year": 2012,
        "no_of_albums_released": 3
    })
}

async fn mount_login(server: &MockServer, role: &str) {
    Mock::given(method("POST"))
        .and(path("/api/users/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "refresh_token": "ref",
            "user": {"first_name": "Ada", "email": "ada@example.com", "role_type": role}
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_then_dashboard_and_nav() {
    let server = MockServer::start().await;
    mount_login(&server, "artist_manager").await;
    let (mut shell, session) = shell_for(&server);

    assert_eq!(run(&mut shell, "dashboard").await, "Unauthorized Access");

    let out = run(&mut shell, "login ada@example.com secret").await;
    assert!(out.starts_with("Welcome, Ada"));
    assert!(out.contains("/dashboard"));
    assert!(out.contains("Artist Manager Dashboard"));
    assert_eq!(session.access_token().as_deref(), Some("tok"));
    assert_eq!(shell.prompt(), "ams (artist_manager)> ");

    let nav = run(&mut shell, "nav").await;
    assert!(nav.contains("/songlist"));

    let crumbs = run(&mut shell, "breadcrumb /dashboard/music").await;
    assert_eq!(crumbs, "artist_manager > Dashboard (/dashboard) > Music");

    let out = run(&mut shell, "logout").await;
    assert!(out.starts_with("Logged out"));
    assert!(!session.is_authenticated());
    assert_eq!(run(&mut shell, "whoami").await, "Not logged in");
}

#[tokio::test]
async fn test_rejected_login_shows_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/login/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "nope"})))
        .mount(&server)
        .await;
    let (mut shell, _) = shell_for(&server);

    assert_eq!(
        run(&mut shell, "login ada@example.com wrong").await,
        "Invalid email or password. Please try again."
    );
}

#[tokio::test]
async fn test_artist_delete_flow_uses_token_and_does_not_refetch() {
    let server = MockServer::start().await;
    mount_login(&server, "super_admin").await;

    Mock::given(method("GET"))
        .and(path("/api/artists/"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artists": [artist_json(1, "Ada"), artist_json(5, "Grace"), artist_json(9, "Hedy")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/artists/5/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (mut shell, _) = shell_for(&server);
    run(&mut shell, "login ada@example.com secret").await;

    let listed = run(&mut shell, "artists list").await;
    assert!(listed.ends_with("Total: 3 artists"));

    let prompt = run(&mut shell, "artists delete 5").await;
    assert!(prompt.starts_with("Confirm Deletion"));

    let out = run(&mut shell, "artists confirm").await;
    assert!(out.starts_with("Deleted artist 5"));
    assert!(out.ends_with("Total: 2 artists"));
    assert!(!out.contains("Grace"));

    assert_eq!(
        run(&mut shell, "artists confirm").await,
        "No artist is awaiting deletion"
    );
}

#[tokio::test]
async fn test_pending_delete_does_not_survive_logout() {
    let server = MockServer::start().await;
    mount_login(&server, "super_admin").await;

    Mock::given(method("GET"))
        .and(path("/api/artists/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artists": [artist_json(1, "Ada"), artist_json(5, "Grace")]
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/artists/5/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let (mut shell, _) = shell_for(&server);
    run(&mut shell, "login ada@example.com secret").await;

    let prompt = run(&mut shell, "artists delete 5").await;
    assert!(prompt.starts_with("Confirm Deletion"));

    run(&mut shell, "logout").await;
    run(&mut shell, "login other@example.com secret").await;

    assert_eq!(
        run(&mut shell, "artists confirm").await,
        "No artist is awaiting deletion"
    );
}

#[tokio::test]
async fn test_login_sends_password_as_typed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/login/"))
        .and(body_json(json!({"email": "ada@example.com", "password": " pw "})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "user": {"first_name": "Ada", "email": "ada@example.com", "role_type": "artist"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (mut shell, session) = shell_for(&server);

    let out = run(&mut shell, "login ada@example.com ' pw '").await;
    assert!(out.starts_with("Welcome, Ada"));
    assert_eq!(session.access_token().as_deref(), Some("tok"));
}

#[tokio::test]
async fn test_add_song_by_artist_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/music/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"music": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/artists/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"artists": [artist_json(2, "Grace")]})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/music/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 30,
            "artist_id": 2,
            "title": "Night Song",
            "album_name": "Nights",
            "genre": "jazz"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (mut shell, _) = shell_for(&server);

    assert_eq!(run(&mut shell, "songs list").await, "No songs found");

    let out = run(
        &mut shell,
        r#"songs add --title "Night Song" --artist Grace --album Nights --genre jazz"#,
    )
    .await;
    assert_eq!(out, "Added song Night Song (30) by Grace");

    let listed = run(&mut shell, "songs list").await;
    assert!(listed.contains("Night Song"));
    assert!(listed.ends_with("Total: 1 songs"));
}

#[tokio::test]
async fn test_incomplete_artist_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/artists/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"artists": []})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/artists/"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (mut shell, _) = shell_for(&server);
    let out = run(&mut shell, "artists add --name Ada").await;
    assert_eq!(out, "Date of birth is required");
}

#[tokio::test]
async fn test_signup_mismatch_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/signup/"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (mut shell, _) = shell_for(&server);
    let out = run(
        &mut shell,
        "signup --first-name Ada --last-name Lovelace --email ada@example.com \
         --password a --confirm-password b --phone 980 --dob 1990-04-12 \
         --gender f --address London --role artist",
    )
    .await;

    assert_eq!(out, "Passwords do not match!");
}

#[tokio::test]
async fn test_unknown_command_and_exit() {
    let server = MockServer::start().await;
    let (mut shell, _) = shell_for(&server);

    let out = run(&mut shell, "dance").await;
    assert!(out.contains("error"));

    assert_eq!(shell.execute("exit").await, Outcome::Exit);
}
