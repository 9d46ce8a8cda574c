use std::path::Path;
use crate::core::library::LibraryResult;

// Repository persists a whole ordered collection of entities as a single document.
pub trait Repository<Entity> {
    // replaces the document at path with entities, returns number of entities written
    fn save_all(&self, path: &Path, entities: &[Entity]) -> LibraryResult<usize>;

    // reads every entity from the document at path
    fn load_all(&self, path: &Path) -> LibraryResult<Vec<Entity>>;
}
