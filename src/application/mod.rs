// src/application/mod.rs
pub mod note_creator;
pub mod note_deleter;
pub mod note_lister;
pub mod note_repository;

pub use note_creator::NoteCreator;
pub use note_deleter::NoteDeleter;
pub use note_lister::NoteLister;
pub use note_repository::NoteRepository;
