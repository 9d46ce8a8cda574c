use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

// raw form fields, the year is still text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub publisher: String,
    pub isbn: String,
    pub summary: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, year: &str, genre: &str,
               publisher: &str, isbn: &str, summary: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
            genre: genre.to_string(),
            publisher: publisher.to_string(),
            isbn: isbn.to_string(),
            summary: summary.to_string(),
        }
    }

    pub fn build_book(&self) -> LibraryResult<BookEntity> {
        BookDto::new(self.title.as_str(), self.author.as_str(), self.year.as_str(), self.genre.as_str(),
                     self.publisher.as_str(), self.isbn.as_str(), self.summary.as_str()).build_book()
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
    // whole catalog after the add
    pub catalog: String,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto, catalog: String) -> Self {
        Self {
            book,
            catalog,
        }
    }
}

impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        let dto = BookDto::from(&book);
        self.catalog_service.add_book(book)?;
        Ok(AddBookCommandResponse::new(dto, self.catalog_service.render_all()))
    }
}
