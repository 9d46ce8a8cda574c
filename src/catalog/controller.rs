use tracing::warn;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::load_catalog_cmd::{LoadCatalogCommand, LoadCatalogCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::save_catalog_cmd::{SaveCatalogCommand, SaveCatalogCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, CliError};

// loads the data file of the configuration, a missing file starts an empty catalog
pub fn open_catalog(state: &AppState) -> Result<Box<dyn CatalogService>, CliError> {
    let mut svc = factory::create_catalog_service(&state.config);
    let req = LoadCatalogCommandRequest::new(state.config.data_file.clone());
    match LoadCatalogCommand::new(svc.as_mut()).execute(req) {
        Ok(_) => Ok(svc),
        Err(CommandError::Warning { message }) => {
            warn!("{}, starting with an empty catalog", message);
            Ok(svc)
        }
        Err(err) => Err(CliError::from(err)),
    }
}

fn save_catalog(state: &AppState, svc: &dyn CatalogService) -> Result<(), CliError> {
    let req = SaveCatalogCommandRequest::new(state.config.data_file.clone());
    let _ = SaveCatalogCommand::new(svc).execute(req)?;
    Ok(())
}

pub fn add_book(state: &AppState, svc: &mut dyn CatalogService,
                req: AddBookCommandRequest) -> Result<String, CliError> {
    let res = AddBookCommand::new(svc).execute(req)?;
    save_catalog(state, svc)?;
    Ok(res.catalog)
}

pub fn remove_book(state: &AppState, svc: &mut dyn CatalogService, title: &str) -> Result<String, CliError> {
    let res = RemoveBookCommand::new(svc).execute(RemoveBookCommandRequest::new(title))?;
    save_catalog(state, svc)?;
    Ok(format!("{}\n\n{}", res.message, res.catalog))
}

pub fn search_books(svc: &dyn CatalogService, query: &str) -> Result<String, CliError> {
    let res = SearchBooksCommand::new(svc).execute(SearchBooksCommandRequest::new(query))?;
    Ok(res.rendered.trim_end().to_string())
}

pub fn list_books(svc: &dyn CatalogService) -> Result<String, CliError> {
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default())?;
    Ok(res.catalog)
}
