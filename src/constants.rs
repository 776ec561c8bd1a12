// src/constants.rs
//
// Application-wide constants shared by the domain, the HTTP client and the CLI.

/// Base address of the public NoteHub API.
///
/// Used when neither the config file nor `--base-url` provides one.
pub const DEFAULT_BASE_URL: &str = "https://notehub-public.goit.study/api";

/// Path segment of the notes collection, appended to the base address.
///
/// Used in: `infrastructure/notehub.rs`
pub const NOTES_ENDPOINT: &str = "notes";

/// Environment variable holding the API access token.
///
/// Read once by the composition root in `lib.rs`, never by the client itself.
pub const TOKEN_ENV_VAR: &str = "NOTEHUB_TOKEN";

/// First page of a listing. Pages are 1-based.
pub const DEFAULT_PAGE: u32 = 1;

/// Notes per page when the caller does not ask for a specific size.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Length limits enforced on a note before it is sent for creation.
pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 50;
pub const CONTENT_MAX_CHARS: usize = 500;

/// Maximum characters of note content shown in a listing line.
///
/// Used in: `ports/text.rs`
pub const PREVIEW_MAX_CHARS: usize = 40;
