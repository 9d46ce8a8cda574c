use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct LoadCatalogCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> LoadCatalogCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoadCatalogCommandRequest {
    pub path: PathBuf,
}

impl LoadCatalogCommandRequest {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoadCatalogCommandResponse {
    pub count: usize,
    pub catalog: String,
}

impl<'a> Command<LoadCatalogCommandRequest, LoadCatalogCommandResponse> for LoadCatalogCommand<'a> {
    fn execute(&mut self, req: LoadCatalogCommandRequest) -> Result<LoadCatalogCommandResponse, CommandError> {
        let count = self.catalog_service.load(req.path.as_path())?;
        Ok(LoadCatalogCommandResponse { count, catalog: self.catalog_service.render_all() })
    }
}
