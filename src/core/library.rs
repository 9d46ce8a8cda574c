use std::path::{Path, PathBuf};
use thiserror::Error;

// LibraryError enumerates every recoverable outcome the catalog reports to its callers.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("ISBN {isbn} already exists in the catalog. Unable to add this book.")]
    DuplicateIsbn {
        isbn: String,
    },
    #[error("ISBN {isbn} is not valid. Make sure it follows the format XXX-X-XX-XXXXX-X.")]
    InvalidIsbnFormat {
        isbn: String,
    },
    #[error("Invalid year {year}. The publication year cannot be later than the current year ({current_year}).")]
    InvalidYear {
        year: i32,
        current_year: i32,
    },
    #[error("Book \"{title}\" not found.")]
    BookNotFound {
        title: String,
    },
    // raised by the collaborator when the year field is not an integer
    #[error("Year \"{text}\" is not a number: {reason}")]
    YearParse {
        text: String,
        reason: String,
    },
    #[error("Error while saving catalog to {}: {message}", .path.display())]
    PersistenceWrite {
        path: PathBuf,
        message: String,
    },
    #[error("File {} does not exist.", .path.display())]
    PersistenceMissingFile {
        path: PathBuf,
    },
    #[error("Error while reading catalog from {}: {message}", .path.display())]
    PersistenceRead {
        path: PathBuf,
        message: String,
    },
    #[error("Error while parsing catalog from {}: {message}", .path.display())]
    PersistenceParse {
        path: PathBuf,
        message: String,
    },
}

impl LibraryError {
    pub fn duplicate_isbn(isbn: &str) -> LibraryError {
        LibraryError::DuplicateIsbn { isbn: isbn.to_string() }
    }

    pub fn invalid_isbn_format(isbn: &str) -> LibraryError {
        LibraryError::InvalidIsbnFormat { isbn: isbn.to_string() }
    }

    pub fn invalid_year(year: i32, current_year: i32) -> LibraryError {
        LibraryError::InvalidYear { year, current_year }
    }

    pub fn not_found(title: &str) -> LibraryError {
        LibraryError::BookNotFound { title: title.to_string() }
    }

    pub fn year_parse(text: &str, reason: &str) -> LibraryError {
        LibraryError::YearParse { text: text.to_string(), reason: reason.to_string() }
    }

    pub fn write(path: &Path, message: &str) -> LibraryError {
        LibraryError::PersistenceWrite { path: path.to_path_buf(), message: message.to_string() }
    }

    pub fn missing_file(path: &Path) -> LibraryError {
        LibraryError::PersistenceMissingFile { path: path.to_path_buf() }
    }

    pub fn read(path: &Path, message: &str) -> LibraryError {
        LibraryError::PersistenceRead { path: path.to_path_buf(), message: message.to_string() }
    }

    pub fn parse(path: &Path, message: &str) -> LibraryError {
        LibraryError::PersistenceParse { path: path.to_path_buf(), message: message.to_string() }
    }

    // a missing catalog file is expected on first run
    pub fn is_warning(&self) -> bool {
        matches!(self, LibraryError::PersistenceMissingFile { .. })
    }
}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;
