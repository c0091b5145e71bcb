//! Integration tests for the backend client against a mock server.
//!
//! Each test starts a `wiremock` server, points an [`ApiClient`] at it, and
//! checks both what the client sends and how the page-level operations react.

use api::gallery::{create_and_refresh, delete_and_refresh, load_gallery};
use api::{login_redirect, submit_login, ApiClient, ImageUpload, LoginError, NewWork};
use serde_json::json;
use store::config::ApiConfig;
use store::{Credentials, KeyValueStore, MemoryStore, Session, SessionStore};
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig {
        base_url: server.uri(),
        ..ApiConfig::default()
    })
}

fn works_json(ids: &[u32]) -> serde_json::Value {
    ids.iter()
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Work {id}"),
                "imageUrl": format!("http://localhost:5678/images/{id}.png"),
                "categoryId": 1,
                "userId": 1,
                "category": { "id": 1, "name": "Objets" }
            })
        })
        .collect()
}

fn upload(title: &str) -> NewWork {
    NewWork {
        title: title.to_string(),
        category: 2,
        image: ImageUpload {
            file_name: "photo.png".to_string(),
            mime: "image/png".to_string(),
            bytes: b"fake-png-bytes".to_vec(),
        },
    }
}

#[tokio::test]
async fn test_load_gallery() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(200).set_body_json(works_json(&[1, 2, 3])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Objets" },
            { "id": 2, "name": "Appartements" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let state = load_gallery(&client_for(&server)).await;
    assert_eq!(state.works.len(), 3);
    assert_eq!(state.categories.len(), 2);
    assert_eq!(state.categories[1].name, "Appartements");
}

#[tokio::test]
async fn test_read_failures_yield_empty_collections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let state = load_gallery(&client_for(&server)).await;
    assert!(state.works.is_empty());
    assert!(state.categories.is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_yields_empty_gallery() {
    let client = ApiClient::new(ApiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        ..ApiConfig::default()
    });
    let state = load_gallery(&client).await;
    assert!(state.works.is_empty());
    assert!(state.categories.is_empty());
}

#[tokio::test]
async fn test_login_persists_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .and(body_json(json!({ "email": "sophie.bluel@test.tld", "password": "S0phie" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "userId": "u1", "token": "t1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryStore::new();
    let sessions = SessionStore::new(store.clone());
    let stored = submit_login(
        &client_for(&server),
        &sessions,
        &Credentials::new("sophie.bluel@test.tld", "S0phie"),
    )
    .await
    .unwrap();

    assert!(stored);
    assert_eq!(store.get("userId").as_deref(), Some("u1"));
    assert_eq!(store.get("token").as_deref(), Some("t1"));
    assert!(sessions.is_active());
}

#[tokio::test]
async fn test_login_navigates_to_gallery() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "userId": "u1", "token": "t1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryStore::new();
    let sessions = SessionStore::new(store.clone());
    let href = login_redirect(
        &client_for(&server),
        &sessions,
        &Credentials::new("sophie.bluel@test.tld", "S0phie"),
        "/",
    )
    .await
    .unwrap();

    assert_eq!(href, "/");
    assert_eq!(store.get("userId").as_deref(), Some("u1"));
    assert_eq!(store.get("token").as_deref(), Some("t1"));
}

#[tokio::test]
async fn test_failed_login_does_not_navigate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let sessions = SessionStore::new(MemoryStore::new());
    let result = login_redirect(
        &client_for(&server),
        &sessions,
        &Credentials::new("a@b.fr", "bad"),
        "/",
    )
    .await;
    assert!(matches!(result, Err(LoginError::Rejected(_))));
}

#[tokio::test]
async fn test_whitespace_email_is_sent_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .and(body_json(json!({ "email": " ", "password": "pw" })))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let sessions = SessionStore::new(MemoryStore::new());
    let err = submit_login(&client_for(&server), &sessions, &Credentials::new(" ", "pw"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoginError::Rejected(_)));
}

#[tokio::test]
async fn test_login_keeps_existing_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "userId": 2, "token": "new" })),
        )
        .mount(&server)
        .await;

    let sessions = SessionStore::new(MemoryStore::new());
    sessions.save_if_absent(&Session {
        user_id: "1".to_string(),
        token: "old".to_string(),
    });

    let stored = submit_login(&client_for(&server), &sessions, &Credentials::new("a@b.fr", "pw"))
        .await
        .unwrap();
    assert!(!stored);
    assert_eq!(sessions.token().as_deref(), Some("old"));
}

#[tokio::test]
async fn test_login_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let sessions = SessionStore::new(MemoryStore::new());
    let err = submit_login(&client_for(&server), &sessions, &Credentials::new("a@b.fr", "bad"))
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::Rejected(_)));
    assert_eq!(err.to_string(), "Erreur dans l’identifiant ou le mot de passe");
    assert!(!sessions.is_active());
}

#[tokio::test]
async fn test_login_requires_exactly_200() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "userId": "u1", "token": "t1" })),
        )
        .mount(&server)
        .await;

    let sessions = SessionStore::new(MemoryStore::new());
    let result =
        submit_login(&client_for(&server), &sessions, &Credentials::new("a@b.fr", "pw")).await;
    assert!(result.is_err());
    assert!(!sessions.is_active());
}

#[tokio::test]
async fn test_login_with_empty_password_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let sessions = SessionStore::new(MemoryStore::new());
    let err = submit_login(
        &client_for(&server),
        &sessions,
        &Credentials::new("sophie.bluel@test.tld", ""),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, LoginError::Invalid(_)));
    assert_eq!(err.to_string(), "Email ou Mot de passe non rempli");
}

#[tokio::test]
async fn test_delete_refreshes_works() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/works/2"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(200).set_body_json(works_json(&[1, 3])))
        .expect(1)
        .mount(&server)
        .await;

    let works = delete_and_refresh(&client_for(&server), 2, "t1").await;
    assert!(works.iter().all(|w| w.id != 2));
    assert_eq!(works.len(), 2);
}

#[tokio::test]
async fn test_failed_delete_still_refreshes() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/works/2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(200).set_body_json(works_json(&[1, 2, 3])))
        .expect(1)
        .mount(&server)
        .await;

    let works = delete_and_refresh(&client_for(&server), 2, "t1").await;
    assert_eq!(works.len(), 3);
}

#[tokio::test]
async fn test_create_uploads_multipart_and_refreshes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/works"))
        .and(header("authorization", "Bearer t1"))
        .and(body_string_contains("name=\"title\""))
        .and(body_string_contains("Abajour Tahina"))
        .and(body_string_contains("name=\"category\""))
        .and(body_string_contains("filename=\"photo.png\""))
        .and(body_string_contains("Content-Type: image/png"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(200).set_body_json(works_json(&[1, 2, 12])))
        .expect(1)
        .mount(&server)
        .await;

    let works = create_and_refresh(&client_for(&server), upload("Abajour Tahina"), "t1")
        .await
        .unwrap();
    assert!(works.iter().any(|w| w.id == 12));
}

#[tokio::test]
async fn test_failed_create_surfaces_message_without_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(200).set_body_json(works_json(&[])))
        .expect(0)
        .mount(&server)
        .await;

    let err = create_and_refresh(&client_for(&server), upload("T"), "expired")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.upload_message(), "envoi des données : Unauthorized(401)");
}
