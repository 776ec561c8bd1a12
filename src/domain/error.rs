// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Network failure (`status` is `None`) or a non-2xx answer from the server
    #[error("Transport error ({}): {body}", display_status(.status))]
    Transport { status: Option<u16>, body: String },
    #[error("{message}")]
    Unexpected { message: String },
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl DomainError {
    /// HTTP status of a transport failure, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            DomainError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        DomainError::Unexpected {
            message: message.into(),
        }
    }
}

fn display_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "no response".to_string(),
    }
}
