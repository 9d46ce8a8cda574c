use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> RemoveBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub title: String,
}

impl RemoveBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub message: String,
    pub catalog: String,
}

impl RemoveBookCommandResponse {
    pub fn new(message: String, catalog: String) -> Self {
        Self {
            message,
            catalog,
        }
    }
}

impl<'a> Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'a> {
    fn execute(&mut self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let message = self.catalog_service.remove_book(req.title.as_str())?;
        Ok(RemoveBookCommandResponse::new(message, self.catalog_service.render_all()))
    }
}
