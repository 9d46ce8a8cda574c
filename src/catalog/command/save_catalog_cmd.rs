use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SaveCatalogCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SaveCatalogCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveCatalogCommandRequest {
    pub path: PathBuf,
}

impl SaveCatalogCommandRequest {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SaveCatalogCommandResponse {
    pub path: PathBuf,
    pub count: usize,
}

impl<'a> Command<SaveCatalogCommandRequest, SaveCatalogCommandResponse> for SaveCatalogCommand<'a> {
    fn execute(&mut self, req: SaveCatalogCommandRequest) -> Result<SaveCatalogCommandResponse, CommandError> {
        let count = self.catalog_service.save(req.path.as_path())?;
        Ok(SaveCatalogCommandResponse { path: req.path, count })
    }
}
