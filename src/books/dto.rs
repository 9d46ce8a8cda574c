use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};

// BookDto carries the raw text of a book form, the year is not parsed yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub publisher: String,
    pub isbn: String,
    pub summary: String,
}

impl BookDto {
    pub fn new(title: &str, author: &str, year: &str, genre: &str,
               publisher: &str, isbn: &str, summary: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            genre: genre.to_string(),
            publisher: publisher.to_string(),
            isbn: isbn.to_string(),
            summary: summary.to_string(),
        }
    }

    pub fn parse_year(&self) -> LibraryResult<i32> {
        self.year.trim().parse::<i32>()
            .map_err(|err| LibraryError::year_parse(self.year.as_str(), err.to_string().as_str()))
    }

    pub fn build_book(&self) -> LibraryResult<BookEntity> {
        let year = self.parse_year()?;
        Ok(BookEntity::new(self.title.as_str(), self.author.as_str(), year, self.genre.as_str(),
                           self.publisher.as_str(), self.isbn.as_str(), self.summary.as_str()))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year.to_string(),
            genre: other.genre.to_string(),
            publisher: other.publisher.to_string(),
            isbn: other.isbn.to_string(),
            summary: other.summary.to_string(),
        }
    }
}
