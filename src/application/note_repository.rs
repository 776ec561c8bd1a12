// src/application/note_repository.rs
use crate::domain::{DomainError, Note, NoteDraft, NoteFilter, NotesPage};

/// Remote store of notes
///
/// Every call is one round trip; implementations neither retry nor cache.
#[allow(async_fn_in_trait)]
pub trait NoteRepository {
    async fn list_notes(&self, filter: &NoteFilter) -> Result<NotesPage, DomainError>;

    /// Returns the created note with its server-assigned id and metadata
    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, DomainError>;

    /// Returns the note the server reports as deleted
    async fn delete_note(&self, id: &str) -> Result<Note, DomainError>;
}
