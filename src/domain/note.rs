// src/domain/note.rs
use crate::constants::{
    CONTENT_MAX_CHARS, DEFAULT_PAGE, DEFAULT_PER_PAGE, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A note as stored by the server
///
/// Only ever built from a server response; local code never edits one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub tag: NoteTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NoteTag {
    #[default]
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

impl NoteTag {
    pub const ALL: [NoteTag; 5] = [
        NoteTag::Todo,
        NoteTag::Work,
        NoteTag::Personal,
        NoteTag::Meeting,
        NoteTag::Shopping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteTag::Todo => "Todo",
            NoteTag::Work => "Work",
            NoteTag::Personal => "Personal",
            NoteTag::Meeting => "Meeting",
            NoteTag::Shopping => "Shopping",
        }
    }
}

impl fmt::Display for NoteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<_> = NoteTag::ALL.iter().map(NoteTag::as_str).collect();
                DomainError::Validation(format!(
                    "Unknown tag '{}', expected one of: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}

/// The fields a client may send when creating a note
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, tag: NoteTag) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tag,
        }
    }

    /// Check the draft against the creation form's constraints
    pub fn validate(&self) -> Result<(), DomainError> {
        let title_len = self.title.chars().count();
        if title_len == 0 {
            return Err(DomainError::Validation("Title is required".to_string()));
        }
        if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&title_len) {
            return Err(DomainError::Validation(format!(
                "Title must be between {} and {} characters, got {}",
                TITLE_MIN_CHARS, TITLE_MAX_CHARS, title_len
            )));
        }

        let content_len = self.content.chars().count();
        if content_len > CONTENT_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "Content must be at most {} characters, got {}",
                CONTENT_MAX_CHARS, content_len
            )));
        }

        Ok(())
    }
}

/// Query parameters of a listing request
///
/// `search` is left out of the query entirely when it is absent or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteFilter {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "is_blank")]
    pub search: Option<String>,
}

fn is_blank(search: &Option<String>) -> bool {
    search.as_deref().map_or(true, str::is_empty)
}

impl Default for NoteFilter {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            search: None,
        }
    }
}

impl NoteFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the search term; an empty string clears it
    pub fn search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.is_empty() { None } else { Some(search) };
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.page == 0 {
            return Err(DomainError::Validation(
                "Page numbers start at 1".to_string(),
            ));
        }
        if self.per_page == 0 {
            return Err(DomainError::Validation(
                "Notes per page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// One page of the note collection plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesPage {
    pub notes: Vec<Note>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total_notes: u32,
}
