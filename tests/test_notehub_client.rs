mod helpers;

use axum::http::Method;
use helpers::{note_json, StubServer};
use notehub::application::{NoteCreator, NoteRepository};
use notehub::domain::{DomainError, NoteDraft, NoteFilter, NoteTag};
use notehub::infrastructure::{ClientConfig, NotehubClient};
use serde_json::json;

fn page_json() -> serde_json::Value {
    json!({
        "notes": [note_json("n1", "Standup", "Meeting")],
        "page": 1,
        "perPage": 12,
        "totalPages": 1,
        "totalNotes": 1
    })
}

#[tokio::test]
async fn given_default_filter_when_listing_then_sends_page_and_per_page_only() {
    // Arrange
    let server = StubServer::start(200, page_json()).await;
    let client = server.client(Some("tok"));

    // Act
    let page = client.list_notes(&NoteFilter::default()).await.unwrap();

    // Assert
    let request = server.only_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/notes");
    assert_eq!(request.query.as_deref(), Some("page=1&perPage=12"));
    assert_eq!(page.notes.len(), 1);
    assert_eq!(page.notes[0].id, "n1");
    assert_eq!(page.notes[0].tag, NoteTag::Meeting);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.total_notes, 1);
}

#[tokio::test]
async fn given_empty_search_when_listing_then_omits_search_parameter() {
    // Arrange
    let server = StubServer::start(200, page_json()).await;
    let client = server.client(None);
    let mut filter = NoteFilter::new();
    filter.search = Some(String::new());

    // Act
    client.list_notes(&filter).await.unwrap();

    // Assert
    let query = server.only_request().query.unwrap_or_default();
    assert!(!query.contains("search"), "query was {query}");
}

#[tokio::test]
async fn given_page_two_of_five_with_search_when_listing_then_query_is_exact() {
    // Arrange
    let server = StubServer::start(200, page_json()).await;
    let client = server.client(None);
    let filter = NoteFilter::new().page(2).per_page(5).search("meeting");

    // Act
    client.list_notes(&filter).await.unwrap();

    // Assert
    assert_eq!(
        server.only_request().query.as_deref(),
        Some("page=2&perPage=5&search=meeting")
    );
}

#[tokio::test]
async fn given_response_with_only_notes_and_total_pages_when_listing_then_defaults_metadata() {
    // Arrange
    let server = StubServer::start(
        200,
        json!({ "notes": [], "totalPages": 0 }),
    )
    .await;
    let client = server.client(None);

    // Act
    let page = client.list_notes(&NoteFilter::new()).await.unwrap();

    // Assert
    assert!(page.notes.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.total_notes, 0);
}

#[tokio::test]
async fn given_draft_when_creating_then_posts_exactly_title_content_and_tag() {
    // Arrange
    let server = StubServer::start(201, note_json("srv-1", "T", "Todo")).await;
    let client = server.client(Some("tok"));
    let draft = NoteDraft::new("T", "C", NoteTag::Todo);

    // Act
    let note = client.create_note(&draft).await.unwrap();

    // Assert
    let request = server.only_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/api/notes");
    assert_eq!(request.query, None);
    assert_eq!(
        request.json_body(),
        json!({ "title": "T", "content": "C", "tag": "Todo" })
    );
    assert_eq!(note.id, "srv-1");
    assert_eq!(note.created_at.as_deref(), Some("2024-05-01T09:00:00.000Z"));
}

#[tokio::test]
async fn given_note_id_when_deleting_then_sends_delete_to_note_path() {
    // Arrange
    let server = StubServer::start(200, note_json("abc123", "Gone", "Work")).await;
    let client = server.client(Some("tok"));

    // Act
    let note = client.delete_note("abc123").await.unwrap();

    // Assert
    let request = server.only_request();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(request.path, "/api/notes/abc123");
    assert_eq!(note.id, "abc123");
    assert_eq!(note.title, "Gone");
}

#[tokio::test]
async fn given_token_when_sending_requests_then_uses_bearer_and_json_headers() {
    // Arrange
    let server = StubServer::start(200, page_json()).await;
    let client = server.client(Some("secret-token"));

    // Act
    client.list_notes(&NoteFilter::new()).await.unwrap();

    // Assert
    let request = server.only_request();
    assert_eq!(request.header("authorization"), Some("Bearer secret-token"));
    assert_eq!(request.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn given_no_token_when_sending_any_request_then_authorization_header_is_absent() {
    // Arrange
    let server = StubServer::start(200, note_json("x1", "Note", "Todo")).await;
    let client = server.client(None);

    // Act
    client.create_note(&NoteDraft::new("Note", "", NoteTag::Todo)).await.unwrap();
    client.delete_note("x1").await.unwrap();

    // Assert
    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    for request in requests {
        assert_eq!(request.header("authorization"), None);
        assert_eq!(request.header("content-type"), Some("application/json"));
    }
}

#[tokio::test]
async fn given_blank_token_when_sending_request_then_authorization_header_is_absent() {
    // Arrange
    let server = StubServer::start(200, page_json()).await;
    let client = server.client(Some("  "));

    // Act
    client.list_notes(&NoteFilter::new()).await.unwrap();

    // Assert
    assert_eq!(server.only_request().header("authorization"), None);
}

#[tokio::test]
async fn given_not_found_when_deleting_then_status_and_body_are_observable() {
    // Arrange
    let server = StubServer::start(404, json!({ "message": "Note not found" })).await;
    let client = server.client(Some("tok"));

    // Act
    let result = client.delete_note("missing").await;

    // Assert
    match result.expect_err("Delete should fail") {
        DomainError::Transport { status, body } => {
            assert_eq!(status, Some(404));
            assert!(body.contains("Note not found"));
        }
        other => panic!("Expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_server_error_when_listing_then_returns_transport_status() {
    // Arrange
    let server = StubServer::start(500, json!({ "message": "boom" })).await;
    let client = server.client(None);

    // Act
    let err = client
        .list_notes(&NoteFilter::new())
        .await
        .expect_err("List should fail");

    // Assert
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn given_server_error_when_creating_then_status_and_body_are_observable() {
    // Arrange
    let server = StubServer::start(500, json!({ "message": "Internal Server Error" })).await;
    let client = server.client(Some("tok"));

    // Act
    let result = client
        .create_note(&NoteDraft::new("Valid title", "Body", NoteTag::Todo))
        .await;

    // Assert
    match result.expect_err("Create should fail") {
        DomainError::Transport { status, body } => {
            assert_eq!(status, Some(500));
            assert!(body.contains("Internal Server Error"));
        }
        other => panic!("Expected Transport error, got {other:?}"),
    }
    assert_eq!(server.only_request().method, Method::POST);
}

#[tokio::test]
async fn given_unauthorized_when_creating_through_use_case_then_status_is_not_masked() {
    // Arrange
    let server = StubServer::start(401, json!({ "message": "Unauthorized" })).await;
    let creator = NoteCreator::new(server.client(None));

    // Act
    let err = creator
        .create_note(&NoteDraft::new("Valid title", "", NoteTag::Work))
        .await
        .expect_err("Create should fail");

    // Assert
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn given_malformed_success_body_when_listing_then_returns_unexpected_error() {
    // Arrange
    let server = StubServer::start_raw(200, "not json".to_string()).await;
    let client = server.client(None);

    // Act
    let err = client
        .list_notes(&NoteFilter::new())
        .await
        .expect_err("List should fail");

    // Assert
    match err {
        DomainError::Unexpected { message } => {
            assert_eq!(message, "Unexpected error while fetching notes")
        }
        other => panic!("Expected Unexpected error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_unreachable_server_when_listing_then_returns_transport_error_without_status() {
    // Arrange - nothing listens on port 9 of localhost
    let client = NotehubClient::new(&ClientConfig::new("http://127.0.0.1:9/api", None))
        .expect("Client should build");

    // Act
    let err = client
        .list_notes(&NoteFilter::new())
        .await
        .expect_err("List should fail");

    // Assert
    assert!(matches!(err, DomainError::Transport { status: None, .. }));
}
