// src/util/testing.rs

use anyhow::Result;
use std::env;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteDraft, NoteFilter, NotesPage};

/// In-memory stand-in for the NoteHub API
///
/// Listing filters the configured notes by title or content and paginates
/// them the way the server does. Every call is recorded so tests can assert
/// on what reached the repository.
///
/// # Examples
///
/// ```
/// use notehub::util::testing::MockNoteRepository;
/// use notehub::domain::{Note, NoteTag};
///
/// let mock = MockNoteRepository::builder()
///     .with_note(Note {
///         id: "n1".to_string(),
///         title: "Groceries".to_string(),
///         content: "Milk, eggs".to_string(),
///         tag: NoteTag::Shopping,
///         created_at: None,
///         updated_at: None,
///     })
///     .with_delete_failure(500, "Internal Server Error")
///     .build();
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    list_failure: Option<(u16, String)>,
    create_failure: Option<(u16, String)>,
    delete_failure: Option<(u16, String)>,
    list_calls: Mutex<Vec<NoteFilter>>,
    create_calls: Mutex<Vec<NoteDraft>>,
    delete_calls: Mutex<Vec<String>>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    pub fn list_calls(&self) -> Vec<NoteFilter> {
        lock(&self.list_calls).clone()
    }

    pub fn create_calls(&self) -> Vec<NoteDraft> {
        lock(&self.create_calls).clone()
    }

    pub fn delete_calls(&self) -> Vec<String> {
        lock(&self.delete_calls).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn failure(configured: &Option<(u16, String)>) -> Result<(), DomainError> {
    match configured {
        Some((status, body)) => Err(DomainError::Transport {
            status: Some(*status),
            body: body.clone(),
        }),
        None => Ok(()),
    }
}

impl NoteRepository for MockNoteRepository {
    async fn list_notes(&self, filter: &NoteFilter) -> Result<NotesPage, DomainError> {
        lock(&self.list_calls).push(filter.clone());
        failure(&self.list_failure)?;

        let matching: Vec<Note> = match filter.search.as_deref() {
            None | Some("") => self.notes.clone(),
            Some(query) => {
                let query = query.to_lowercase();
                self.notes
                    .iter()
                    .filter(|n| {
                        n.title.to_lowercase().contains(&query)
                            || n.content.to_lowercase().contains(&query)
                    })
                    .cloned()
                    .collect()
            }
        };

        let per_page = filter.per_page.max(1) as usize;
        let total_notes = matching.len();
        let total_pages = total_notes.div_ceil(per_page);
        let start = (filter.page.saturating_sub(1) as usize) * per_page;
        let notes = matching.into_iter().skip(start).take(per_page).collect();

        Ok(NotesPage {
            notes,
            page: filter.page,
            per_page: filter.per_page,
            total_pages: total_pages as u32,
            total_notes: total_notes as u32,
        })
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, DomainError> {
        let mut calls = lock(&self.create_calls);
        calls.push(draft.clone());
        failure(&self.create_failure)?;

        Ok(Note {
            id: format!("note-{}", calls.len()),
            title: draft.title.clone(),
            content: draft.content.clone(),
            tag: draft.tag,
            created_at: Some("2024-01-01T00:00:00.000Z".to_string()),
            updated_at: Some("2024-01-01T00:00:00.000Z".to_string()),
        })
    }

    async fn delete_note(&self, id: &str) -> Result<Note, DomainError> {
        lock(&self.delete_calls).push(id.to_string());
        failure(&self.delete_failure)?;

        self.notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| DomainError::Transport {
                status: Some(404),
                body: "Note not found".to_string(),
            })
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    list_failure: Option<(u16, String)>,
    create_failure: Option<(u16, String)>,
    delete_failure: Option<(u16, String)>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            list_failure: None,
            create_failure: None,
            delete_failure: None,
        }
    }

    /// Add a note that can be listed and deleted
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make list_notes fail with the given HTTP status and body
    pub fn with_list_failure(mut self, status: u16, body: &str) -> Self {
        self.list_failure = Some((status, body.to_string()));
        self
    }

    /// Make create_note fail with the given HTTP status and body
    pub fn with_create_failure(mut self, status: u16, body: &str) -> Self {
        self.create_failure = Some((status, body.to_string()));
        self
    }

    /// Make delete_note fail with the given HTTP status and body
    pub fn with_delete_failure(mut self, status: u16, body: &str) -> Self {
        self.delete_failure = Some((status, body.to_string()));
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            list_failure: self.list_failure,
            create_failure: self.create_failure,
            delete_failure: self.delete_failure,
            list_calls: Mutex::new(vec![]),
            create_calls: Mutex::new(vec![]),
            delete_calls: Mutex::new(vec![]),
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "h2", "tower"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
