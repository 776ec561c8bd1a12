// src/infrastructure/notehub.rs
use crate::application::NoteRepository;
use crate::constants::{DEFAULT_BASE_URL, NOTES_ENDPOINT};
use crate::domain::{DomainError, Note, NoteDraft, NoteFilter, NotesPage};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};

/// Connection settings handed to [`NotehubClient::new`]
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    /// The token, unless it is missing or blank
    fn usable_token(&self) -> Option<&str> {
        self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

/// HTTP client for the NoteHub notes collection
pub struct NotehubClient {
    client: reqwest::Client,
    notes_url: Url,
}

impl NotehubClient {
    pub fn new(config: &ClientConfig) -> Result<Self, DomainError> {
        let mut notes_url = Url::parse(&config.base_url).map_err(|e| {
            DomainError::unexpected(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;
        notes_url
            .path_segments_mut()
            .map_err(|_| {
                DomainError::unexpected(format!("Base URL cannot hold a path: {}", config.base_url))
            })?
            .pop_if_empty()
            .push(NOTES_ENDPOINT);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // No token means no header at all, never an empty or placeholder bearer value
        match config.usable_token() {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                    DomainError::unexpected("Access token contains characters not allowed in a header")
                })?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
                debug!("Authorization header configured");
            }
            None => {
                warn!("No API access token configured, requests will be sent unauthenticated");
            }
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| DomainError::unexpected(format!("Failed to build HTTP client: {}", e)))?;

        debug!(url = %notes_url, "Created NotehubClient");
        Ok(Self { client, notes_url })
    }

    pub fn notes_url(&self) -> &Url {
        &self.notes_url
    }

    /// URL of a single note; the id is encoded as one path segment
    pub fn note_url(&self, id: &str) -> Url {
        let mut url = self.notes_url.clone();
        // notes_url was checked to accept path segments in `new`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id);
        }
        url
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T, DomainError> {
        let response = request
            .send()
            .await
            .map_err(|e| send_failure(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(operation, error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            error!(operation, status = status.as_u16(), %body, "Notes API returned an error");
            return Err(DomainError::Transport {
                status: Some(status.as_u16()),
                body,
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                error!(operation, error = %e, "Failed to decode notes API response");
                unexpected(operation)
            } else {
                // The server answered 2xx, so only the connection failed
                error!(operation, %status, error = %e, "Failed to read notes API response");
                DomainError::Transport {
                    status: None,
                    body: e.to_string(),
                }
            }
        })
    }
}

fn unexpected(operation: &str) -> DomainError {
    DomainError::unexpected(format!("Unexpected error while {}", operation))
}

fn send_failure(operation: &'static str, e: reqwest::Error) -> DomainError {
    if e.is_builder() {
        error!(operation, error = %e, "Failed to build notes API request");
        return unexpected(operation);
    }
    let status = e.status().map(|s| s.as_u16());
    error!(operation, ?status, error = %e, "Notes API request failed");
    DomainError::Transport {
        status,
        body: e.to_string(),
    }
}

impl NoteRepository for NotehubClient {
    #[instrument(level = "debug", skip(self))]
    async fn list_notes(&self, filter: &NoteFilter) -> Result<NotesPage, DomainError> {
        let request = self.client.get(self.notes_url.clone()).query(filter);
        let page: NotesPage = self.execute("fetching notes", request).await?;

        debug!(
            notes = page.notes.len(),
            total_pages = page.total_pages,
            "Fetched notes page"
        );
        Ok(page)
    }

    #[instrument(level = "debug", skip(self))]
    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, DomainError> {
        let request = self.client.post(self.notes_url.clone()).json(draft);
        let note: Note = self.execute("creating a note", request).await?;

        debug!(note_id = %note.id, "Created note");
        Ok(note)
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete_note(&self, id: &str) -> Result<Note, DomainError> {
        let request = self.client.delete(self.note_url(id));
        let note: Note = self.execute("deleting a note", request).await?;

        debug!(note_id = %note.id, "Deleted note");
        Ok(note)
    }
}
