use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookEntity is a catalog record. The isbn identifies it within a catalog and
// field order here is the field order of the persisted document. Files written
// with french keys are still readable, writes always use the english ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntity {
    #[serde(alias = "titre")]
    pub title: String,
    #[serde(alias = "auteur")]
    pub author: String,
    #[serde(alias = "annee")]
    pub year: i32,
    pub genre: String,
    #[serde(alias = "editeur")]
    pub publisher: String,
    pub isbn: String,
    #[serde(alias = "resume")]
    pub summary: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, year: i32, genre: &str,
               publisher: &str, isbn: &str, summary: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
            publisher: publisher.to_string(),
            isbn: isbn.to_string(),
            summary: summary.to_string(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> &str {
        self.isbn.as_str()
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}, Author: {}, Year: {}, Genre: {}, Publisher: {}, ISBN: {}, Summary: {}",
               self.title, self.author, self.year, self.genre, self.publisher, self.isbn, self.summary)
    }
}
