pub mod json_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

// BookRepository stores the ordered book collection of a catalog.
pub trait BookRepository: Repository<BookEntity> {
    // name of the storage format, used in logs
    fn format(&self) -> &'static str;
}
