// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note and return the record the server removed
    pub async fn delete_note(&self, note_id: &str) -> Result<Note, DomainError> {
        if note_id.trim().is_empty() {
            return Err(DomainError::Validation(
                "Note id must not be empty".to_string(),
            ));
        }
        self.repository.delete_note(note_id).await
    }
}
