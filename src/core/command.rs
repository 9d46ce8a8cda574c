use thiserror::Error;
use crate::core::library::LibraryError;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{message}")]
    DuplicateKey {
        message: String,
    },
    #[error("{message}")]
    NotFound {
        message: String,
    },
    #[error("{message}")]
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    #[error("{message}")]
    Persistence {
        message: String,
        reason_code: Option<String>,
    },
    #[error("{message}")]
    Serialization {
        message: String,
    },
    #[error("{message}")]
    Warning {
        message: String,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let message = other.to_string();
        match other {
            LibraryError::DuplicateIsbn { .. } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::InvalidIsbnFormat { .. } => {
                CommandError::Validation { message, reason_code: Some("invalid_isbn_format".to_string()) }
            }
            LibraryError::InvalidYear { .. } => {
                CommandError::Validation { message, reason_code: Some("invalid_year".to_string()) }
            }
            LibraryError::YearParse { .. } => {
                CommandError::Validation { message, reason_code: Some("year_parse".to_string()) }
            }
            LibraryError::BookNotFound { .. } => {
                CommandError::NotFound { message }
            }
            LibraryError::PersistenceMissingFile { .. } => {
                CommandError::Warning { message }
            }
            LibraryError::PersistenceParse { .. } => {
                CommandError::Serialization { message }
            }
            LibraryError::PersistenceWrite { .. } => {
                CommandError::Persistence { message, reason_code: Some("write".to_string()) }
            }
            LibraryError::PersistenceRead { .. } => {
                CommandError::Persistence { message, reason_code: Some("read".to_string()) }
            }
        }
    }
}
