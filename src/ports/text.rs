// src/ports/text.rs
use crate::constants::PREVIEW_MAX_CHARS;
use crate::domain::{Note, NotesPage};
use crate::util::text::preview;
use std::fmt::Write;

/// Renders notes as plain text for the terminal
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_note(&self, note: &Note) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "ID:      {}", note.id);
        let _ = writeln!(out, "Tag:     {}", note.tag);
        let _ = writeln!(out, "Title:   {}", note.title);
        if let Some(created_at) = &note.created_at {
            let _ = writeln!(out, "Created: {}", created_at);
        }
        if !note.content.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", note.content);
        }
        out
    }

    pub fn render_page(&self, page: &NotesPage) -> String {
        if page.notes.is_empty() {
            return "No notes found.\n".to_string();
        }

        let mut out = String::new();
        for note in &page.notes {
            let snippet = preview(&note.content, PREVIEW_MAX_CHARS);
            if snippet.is_empty() {
                let _ = writeln!(out, "{}  [{}]  {}", note.id, note.tag, note.title);
            } else {
                let _ = writeln!(out, "{}  [{}]  {} - {}", note.id, note.tag, note.title, snippet);
            }
        }
        let _ = writeln!(
            out,
            "\nPage {} of {} ({} notes)",
            page.page, page.total_pages, page.total_notes
        );
        out
    }
}
