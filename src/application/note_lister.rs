// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, NoteFilter, NotesPage};

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List one page of notes, optionally narrowed by a search term
    ///
    /// # Arguments
    /// * `filter` - Page number, page size and optional search term
    ///
    /// # Returns
    /// The page exactly as reported by the server
    pub async fn list_notes(&self, filter: &NoteFilter) -> Result<NotesPage, DomainError> {
        filter.validate()?;
        self.repository.list_notes(filter).await
    }
}
