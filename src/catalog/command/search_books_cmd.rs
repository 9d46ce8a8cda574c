use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub query: String,
}

impl SearchBooksCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
    // one rendered line per match, each ending with a newline
    pub rendered: String,
}

impl<'a> Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'a> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let found = self.catalog_service.search(req.query.as_str());
        let rendered = found.iter().map(|b| format!("{}\n", b)).collect::<String>();
        Ok(SearchBooksCommandResponse {
            books: found.iter().map(BookDto::from).collect(),
            rendered,
        })
    }
}
