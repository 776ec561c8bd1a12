// src/application/note_creator.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteDraft};

pub struct NoteCreator<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteCreator<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validate a draft locally, then create it on the server
    pub async fn create_note(&self, draft: &NoteDraft) -> Result<Note, DomainError> {
        draft.validate()?;
        self.repository.create_note(draft).await
    }
}
