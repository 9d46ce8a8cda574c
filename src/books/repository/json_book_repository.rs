use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// JsonBookRepository keeps the catalog as one indented JSON array.
#[derive(Debug, Default, Clone)]
pub struct JsonBookRepository {}

impl JsonBookRepository {
    pub fn new() -> Self {
        Self {}
    }

    // sibling of the target so that the final rename stays on the same file system
    fn staging_path(path: &Path) -> PathBuf {
        let name = path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "catalog".to_string());
        path.with_file_name(format!(".{}.tmp", name))
    }

    // a symlinked catalog is written through to the file it points at
    fn resolve_target(path: &Path) -> PathBuf {
        match fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_symlink() => {
                fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
            }
            _ => path.to_path_buf(),
        }
    }

    fn write_atomically(path: &Path, json: &str) -> std::io::Result<()> {
        let target = Self::resolve_target(path);
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let staging = Self::staging_path(&target);
        let res = fs::write(&staging, json)
            // the replaced file keeps its permissions
            .and_then(|_| match fs::metadata(&target) {
                Ok(meta) => fs::set_permissions(&staging, meta.permissions()),
                Err(_) => Ok(()),
            })
            .and_then(|_| fs::rename(&staging, &target));
        if let Err(err) = res {
            let _ = fs::remove_file(&staging);
            return Err(err);
        }
        Ok(())
    }
}

impl Repository<BookEntity> for JsonBookRepository {
    fn save_all(&self, path: &Path, entities: &[BookEntity]) -> LibraryResult<usize> {
        let json = serde_json::to_string_pretty(entities)
            .map_err(|err| LibraryError::write(path, err.to_string().as_str()))?;
        Self::write_atomically(path, json.as_str())
            .map_err(|err| LibraryError::write(path, err.to_string().as_str()))?;
        debug!("wrote {} bytes to {}", json.len(), path.display());
        Ok(entities.len())
    }

    fn load_all(&self, path: &Path) -> LibraryResult<Vec<BookEntity>> {
        let json = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => LibraryError::missing_file(path),
            _ => LibraryError::read(path, err.to_string().as_str()),
        })?;
        // a `null` document is an empty catalog
        let books: Option<Vec<BookEntity>> = serde_json::from_str(json.as_str())
            .map_err(|err| LibraryError::parse(path, err.to_string().as_str()))?;
        Ok(books.unwrap_or_default())
    }
}

impl BookRepository for JsonBookRepository {
    fn format(&self) -> &'static str {
        "json"
    }
}
