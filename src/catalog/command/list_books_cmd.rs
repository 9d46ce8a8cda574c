use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub count: usize,
    pub catalog: String,
}

impl<'a> Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'a> {
    fn execute(&mut self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        Ok(ListBooksCommandResponse {
            count: self.catalog_service.len(),
            catalog: self.catalog_service.render_all(),
        })
    }
}
