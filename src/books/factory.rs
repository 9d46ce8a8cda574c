use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonBookRepository;

pub fn create_book_repository() -> Box<dyn BookRepository> {
    Box::new(JsonBookRepository::new())
}
