use std::path::Path;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::date::YearSource;

pub const EMPTY_CATALOG: &str = "No books in the catalog.";

lazy_static! {
    // 3, 1-5, 1-7, 1-7 and 1 ascii digits
    static ref ISBN_PATTERN: Regex = Regex::new(r"^[0-9]{3}-[0-9]{1,5}-[0-9]{1,7}-[0-9]{1,7}-[0-9]$")
        .expect("isbn pattern should compile");
}

pub struct CatalogServiceImpl {
    books: Vec<BookEntity>,
    book_repository: Box<dyn BookRepository>,
    year_source: Box<dyn YearSource>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>,
               year_source: Box<dyn YearSource>) -> Self {
        Self {
            books: vec![],
            book_repository,
            year_source,
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn isbn_exists(&self, isbn: &str) -> bool {
        self.books.iter().any(|b| b.id() == isbn)
    }

    fn isbn_is_valid(&self, isbn: &str) -> bool {
        ISBN_PATTERN.is_match(isbn)
    }

    fn year_is_valid(&self, year: i32) -> bool {
        year <= self.year_source.current_year()
    }

    fn add_book(&mut self, book: BookEntity) -> LibraryResult<()> {
        if self.isbn_exists(book.isbn.as_str()) {
            warn!("rejected book {:?}: duplicate isbn {}", book.title, book.isbn);
            return Err(LibraryError::duplicate_isbn(book.isbn.as_str()));
        }
        if !self.isbn_is_valid(book.isbn.as_str()) {
            warn!("rejected book {:?}: malformed isbn {}", book.title, book.isbn);
            return Err(LibraryError::invalid_isbn_format(book.isbn.as_str()));
        }
        if !self.year_is_valid(book.year) {
            let current_year = self.year_source.current_year();
            warn!("rejected book {:?}: year {} is after {}", book.title, book.year, current_year);
            return Err(LibraryError::invalid_year(book.year, current_year));
        }
        info!("added book {:?} with isbn {}", book.title, book.isbn);
        self.books.push(book);
        Ok(())
    }

    fn remove_book(&mut self, title: &str) -> LibraryResult<String> {
        let wanted = title.to_lowercase();
        match self.books.iter().position(|b| b.title.to_lowercase() == wanted) {
            Some(ndx) => {
                let removed = self.books.remove(ndx);
                info!("removed book {:?} with isbn {}", removed.title, removed.isbn);
                Ok(format!("Book \"{}\" removed successfully!", title))
            }
            None => {
                warn!("no book titled {:?} to remove", title);
                Err(LibraryError::not_found(title))
            }
        }
    }

    // title and author are case folded, the year is matched on its decimal text as is
    fn search(&self, query: &str) -> Vec<BookEntity> {
        let folded = query.to_lowercase();
        self.books.iter()
            .filter(|b| b.title.to_lowercase().contains(folded.as_str())
                || b.author.to_lowercase().contains(folded.as_str())
                || b.year.to_string().contains(query))
            .cloned()
            .collect()
    }

    fn render_all(&self) -> String {
        if self.books.is_empty() {
            return EMPTY_CATALOG.to_string();
        }
        self.books.iter()
            .map(|b| b.to_string())
            .collect::<Vec<String>>()
            .join("\n\n")
            .trim()
            .to_string()
    }

    fn save(&self, path: &Path) -> LibraryResult<usize> {
        match self.book_repository.save_all(path, &self.books) {
            Ok(count) => {
                info!("catalog saved to {} ({} books, {})", path.display(), count, self.book_repository.format());
                Ok(count)
            }
            Err(err) => {
                error!("{}", err);
                Err(err)
            }
        }
    }

    fn load(&mut self, path: &Path) -> LibraryResult<usize> {
        match self.book_repository.load_all(path) {
            Ok(books) => {
                self.books = books;
                info!("catalog loaded from {} ({} books)", path.display(), self.books.len());
                Ok(self.books.len())
            }
            Err(err) if err.is_warning() => {
                warn!("{}", err);
                Err(err)
            }
            Err(err) => {
                error!("{}", err);
                Err(err)
            }
        }
    }

    fn books(&self) -> &[BookEntity] {
        self.books.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use pretty_assertions::assert_eq;
    use crate::books::domain::model::BookEntity;
    use crate::books::factory::create_book_repository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::{CatalogServiceImpl, EMPTY_CATALOG};
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::utils::date::FixedYear;

    const CURRENT_YEAR: i32 = 2024;

    fn new_catalog() -> CatalogServiceImpl {
        CatalogServiceImpl::new(&Configuration::new(Path::new("books.json")),
                                create_book_repository(), Box::new(FixedYear(CURRENT_YEAR)))
    }

    fn book(title: &str, author: &str, year: i32, isbn: &str) -> BookEntity {
        BookEntity::new(title, author, year, "Novel", "Publisher", isbn, "Summary")
    }

    fn seeded_catalog() -> CatalogServiceImpl {
        let mut catalog = new_catalog();
        catalog.add_book(book("Dune", "Frank Herbert", 1965, "978-0-441-17271-9")).expect("should add");
        catalog.add_book(book("Klara and the Sun", "Kazuo Ishiguro", 2021, "978-0-571-36487-9")).expect("should add");
        catalog.add_book(book("Piranesi", "Susanna Clarke", 2020, "978-1-63557-563-7")).expect("should add");
        catalog.add_book(book("Dune Messiah", "Frank Herbert", 1969, "978-0-593-09823-5")).expect("should add");
        catalog
    }

    fn titles(books: &[BookEntity]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_should_add_book() {
        let mut catalog = new_catalog();
        catalog.add_book(book("Dune", "Frank Herbert", 1965, "123-4-567-8901-2")).expect("should add book");
        assert!(catalog.isbn_exists("123-4-567-8901-2"));
        assert_eq!(1, catalog.len());
    }

    #[test]
    fn test_should_match_isbn_exactly() {
        let catalog = seeded_catalog();
        assert!(catalog.isbn_exists("978-0-441-17271-9"));
        assert!(!catalog.isbn_exists("978-0-441-17271-9 "));
        assert!(!catalog.isbn_exists("9780441172719"));
    }

    #[test]
    fn test_should_reject_duplicate_isbn() {
        let mut catalog = seeded_catalog();
        let res = catalog.add_book(book("Other", "Someone", 2000, "978-0-441-17271-9"));
        assert!(matches!(res, Err(LibraryError::DuplicateIsbn { .. })));
        assert_eq!(4, catalog.len());
    }

    #[test]
    fn test_should_check_duplicate_before_format() {
        let mut catalog = new_catalog();
        // bypasses validation to get a malformed isbn into the collection
        catalog.books.push(book("Legacy", "Someone", 1900, "legacy"));
        let res = catalog.add_book(book("Other", "Someone", 3000, "legacy"));
        assert!(matches!(res, Err(LibraryError::DuplicateIsbn { .. })));
    }

    #[test]
    fn test_should_check_format_before_year() {
        let mut catalog = new_catalog();
        let res = catalog.add_book(book("Future", "Someone", CURRENT_YEAR + 10, "abc-1-2-3-4"));
        assert!(matches!(res, Err(LibraryError::InvalidIsbnFormat { .. })));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_should_validate_isbn_format() {
        let catalog = new_catalog();
        assert!(catalog.isbn_is_valid("123-4-567-8901-2"));
        assert!(catalog.isbn_is_valid("978-12345-1234567-1234567-0"));
        assert!(!catalog.isbn_is_valid("12-3-4-5-6"));
        assert!(!catalog.isbn_is_valid("123-456789-1-2-3"));
        assert!(!catalog.isbn_is_valid("abc-1-2-3-4"));
        assert!(!catalog.isbn_is_valid("123-4-567-8901-23"));
        assert!(!catalog.isbn_is_valid(" 123-4-567-8901-2"));
        assert!(!catalog.isbn_is_valid("123-4-567-8901-2\n"));
        assert!(!catalog.isbn_is_valid("١٢٣-4-567-8901-2"));
        assert!(!catalog.isbn_is_valid(""));
    }

    #[test]
    fn test_should_validate_year_against_current_year() {
        let catalog = new_catalog();
        assert!(catalog.year_is_valid(CURRENT_YEAR));
        assert!(!catalog.year_is_valid(CURRENT_YEAR + 1));
        assert!(catalog.year_is_valid(-300));
        assert!(catalog.year_is_valid(0));
    }

    #[test]
    fn test_should_reject_future_year() {
        let mut catalog = new_catalog();
        let res = catalog.add_book(book("Future", "Someone", CURRENT_YEAR + 1, "123-4-567-8901-2"));
        assert!(matches!(res, Err(LibraryError::InvalidYear { year: 2025, current_year: 2024 })));
        assert!(!catalog.isbn_exists("123-4-567-8901-2"));
        catalog.add_book(book("Now", "Someone", CURRENT_YEAR, "123-4-567-8901-2")).expect("should accept current year");
    }

    #[test]
    fn test_should_remove_book_ignoring_case() {
        let mut catalog = seeded_catalog();
        let message = catalog.remove_book("DUNE").expect("should remove book");
        assert_eq!("Book \"DUNE\" removed successfully!", message);
        assert_eq!(vec!["Klara and the Sun", "Piranesi", "Dune Messiah"], titles(catalog.books()));
    }

    #[test]
    fn test_should_remove_first_match_only() {
        let mut catalog = new_catalog();
        catalog.add_book(book("Emma", "Jane Austen", 1815, "111-1-1-1-1")).expect("should add");
        catalog.add_book(book("emma", "Someone Else", 2001, "222-2-2-2-2")).expect("should add");
        let _ = catalog.remove_book("Emma").expect("should remove book");
        assert_eq!(1, catalog.len());
        assert!(catalog.isbn_exists("222-2-2-2-2"));
    }

    #[test]
    fn test_should_not_remove_by_substring() {
        let mut catalog = seeded_catalog();
        let res = catalog.remove_book("Dun");
        assert!(matches!(res, Err(LibraryError::BookNotFound { .. })));
        assert_eq!(4, catalog.len());
    }

    #[test]
    fn test_should_report_missing_title_on_empty_catalog() {
        let mut catalog = new_catalog();
        let err = catalog.remove_book("Dune").expect_err("should not find book");
        assert!(matches!(err, LibraryError::BookNotFound { .. }));
        assert_eq!("Book \"Dune\" not found.", err.to_string());
    }

    #[test]
    fn test_should_search_title_and_author_ignoring_case() {
        let catalog = seeded_catalog();
        assert_eq!(vec!["Dune", "Dune Messiah"], titles(&catalog.search("dUNe")));
        assert_eq!(vec!["Dune", "Dune Messiah"], titles(&catalog.search("HERBERT")));
        assert_eq!(vec!["Klara and the Sun"], titles(&catalog.search("ishi")));
    }

    #[test]
    fn test_should_search_year_text() {
        let catalog = seeded_catalog();
        assert_eq!(vec!["Piranesi"], titles(&catalog.search("2020")));
        assert_eq!(vec!["Klara and the Sun", "Piranesi"], titles(&catalog.search("202")));
        assert_eq!(vec!["Dune", "Dune Messiah"], titles(&catalog.search("196")));
    }

    #[test]
    fn test_should_return_empty_search() {
        let catalog = seeded_catalog();
        assert!(catalog.search("tolkien").is_empty());
        assert!(new_catalog().search("").is_empty());
        assert_eq!(4, catalog.search("").len());
    }

    #[test]
    fn test_should_render_empty_catalog() {
        assert_eq!(EMPTY_CATALOG, new_catalog().render_all());
        assert_eq!("No books in the catalog.", new_catalog().render_all());
    }

    #[test]
    fn test_should_render_books_separated_by_blank_line() {
        let mut catalog = new_catalog();
        catalog.add_book(book("Dune", "Frank Herbert", 1965, "111-1-1-1-1")).expect("should add");
        catalog.add_book(book("Emma", "Jane Austen", 1815, "222-2-2-2-2")).expect("should add");
        assert_eq!("Title: Dune, Author: Frank Herbert, Year: 1965, Genre: Novel, Publisher: Publisher, ISBN: 111-1-1-1-1, Summary: Summary\n\n\
                    Title: Emma, Author: Jane Austen, Year: 1815, Genre: Novel, Publisher: Publisher, ISBN: 222-2-2-2-2, Summary: Summary",
                   catalog.render_all());
    }

    #[test]
    fn test_should_round_trip_catalog() {
        let dir = tempfile::tempdir().expect("should create dir");
        let path = dir.path().join("books.json");
        let catalog = seeded_catalog();
        assert_eq!(4, catalog.save(&path).expect("should save"));

        let mut loaded = new_catalog();
        assert_eq!(4, loaded.load(&path).expect("should load"));
        assert_eq!(catalog.books(), loaded.books());
    }

    #[test]
    fn test_should_replace_collection_on_load() {
        let dir = tempfile::tempdir().expect("should create dir");
        let path = dir.path().join("books.json");
        let mut saved = new_catalog();
        saved.add_book(book("Emma", "Jane Austen", 1815, "222-2-2-2-2")).expect("should add");
        let _ = saved.save(&path).expect("should save");

        let mut catalog = seeded_catalog();
        let _ = catalog.load(&path).expect("should load");
        assert_eq!(vec!["Emma"], titles(catalog.books()));
    }

    #[test]
    fn test_should_keep_books_when_file_is_missing() {
        let dir = tempfile::tempdir().expect("should create dir");
        let mut catalog = seeded_catalog();
        let before = catalog.books().to_vec();
        let res = catalog.load(&dir.path().join("absent.json"));
        assert!(matches!(res, Err(LibraryError::PersistenceMissingFile { .. })));
        assert_eq!(before, catalog.books());
    }

    #[test]
    fn test_should_keep_books_when_file_is_malformed() {
        let dir = tempfile::tempdir().expect("should create dir");
        let path = dir.path().join("books.json");
        fs::write(&path, "{\"title\": \"Dune\"}").expect("should write");
        let mut catalog = seeded_catalog();
        let before = catalog.books().to_vec();
        let res = catalog.load(&path);
        assert!(matches!(res, Err(LibraryError::PersistenceParse { .. })));
        assert_eq!(before, catalog.books());
    }

    #[test]
    fn test_should_empty_collection_on_null_document() {
        let dir = tempfile::tempdir().expect("should create dir");
        let path = dir.path().join("books.json");
        fs::write(&path, "null").expect("should write");
        let mut catalog = seeded_catalog();
        assert_eq!(0, catalog.load(&path).expect("should load"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_should_keep_books_and_file_when_save_fails() {
        let dir = tempfile::tempdir().expect("should create dir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").expect("should write");
        let catalog = seeded_catalog();
        let res = catalog.save(&blocker.join("books.json"));
        assert!(matches!(res, Err(LibraryError::PersistenceWrite { .. })));
        assert_eq!(4, catalog.len());
        assert_eq!("", fs::read_to_string(&blocker).expect("should read"));
    }

    #[test]
    fn test_should_keep_previous_file_when_save_fails() {
        let dir = tempfile::tempdir().expect("should create dir");
        let path = dir.path().join("books.json");
        let mut previous = new_catalog();
        previous.add_book(book("Emma", "Jane Austen", 1815, "222-2-2-2-2")).expect("should add");
        let _ = previous.save(&path).expect("should save");
        let before = fs::read_to_string(&path).expect("should read");
        fs::create_dir(dir.path().join(".books.json.tmp")).expect("should create dir");

        let catalog = seeded_catalog();
        let res = catalog.save(&path);
        assert!(matches!(res, Err(LibraryError::PersistenceWrite { .. })));
        assert_eq!(before, fs::read_to_string(&path).expect("should read"));
        assert_eq!(4, catalog.len());
    }
}
