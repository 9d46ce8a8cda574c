pub mod service;

use std::path::Path;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

// CatalogService owns an ordered collection of books. Mutations only happen
// through these operations and a failed operation leaves the collection as it was.
pub trait CatalogService {
    // exact, case-sensitive match
    fn isbn_exists(&self, isbn: &str) -> bool;

    // format check only, the check digit is not verified
    fn isbn_is_valid(&self, isbn: &str) -> bool;

    // evaluated against the current year at the moment of the call
    fn year_is_valid(&self, year: i32) -> bool;

    fn add_book(&mut self, book: BookEntity) -> LibraryResult<()>;

    // returns the confirmation message of the removal
    fn remove_book(&mut self, title: &str) -> LibraryResult<String>;

    fn search(&self, query: &str) -> Vec<BookEntity>;

    fn render_all(&self) -> String;

    fn save(&self, path: &Path) -> LibraryResult<usize>;

    // replaces the whole collection, returns the number of books loaded
    fn load(&mut self, path: &Path) -> LibraryResult<usize>;

    fn books(&self) -> &[BookEntity];

    fn len(&self) -> usize {
        self.books().len()
    }

    fn is_empty(&self) -> bool {
        self.books().is_empty()
    }
}
