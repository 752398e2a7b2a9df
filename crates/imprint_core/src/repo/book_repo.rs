//! Book registry contract and in-memory implementation.
//!
//! Mirrors the author registry: validate-then-append, duplicate ids
//! rejected, registration order preserved.

use crate::model::book::{Book, BookId};
use crate::repo::{RepoError, RepoResult};

/// Registry interface for book registration and lookup.
pub trait BookRepository {
    /// Registers one book and returns its stable id.
    fn add(&mut self, book: &Book) -> RepoResult<BookId>;
    /// Gets one book by id.
    fn get(&self, id: BookId) -> RepoResult<Option<Book>>;
    /// Returns whether a book with this id is registered.
    fn contains(&self, id: BookId) -> RepoResult<bool>;
    /// Lists all registered books in registration order.
    fn list(&self) -> RepoResult<Vec<Book>>;
}

/// Append-only in-memory book registry.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<Book>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Removes every registered book. External test harness resets only.
    pub fn clear(&mut self) {
        self.books.clear();
    }
}

impl BookRepository for MemoryBookRepository {
    fn add(&mut self, book: &Book) -> RepoResult<BookId> {
        book.validate()?;
        if self.books.iter().any(|known| known.id == book.id) {
            return Err(RepoError::DuplicateBook(book.id));
        }

        self.books.push(book.clone());
        Ok(book.id)
    }

    fn get(&self, id: BookId) -> RepoResult<Option<Book>> {
        Ok(self.books.iter().find(|book| book.id == id).cloned())
    }

    fn contains(&self, id: BookId) -> RepoResult<bool> {
        Ok(self.books.iter().any(|book| book.id == id))
    }

    fn list(&self) -> RepoResult<Vec<Book>> {
        Ok(self.books.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{BookRepository, MemoryBookRepository};
    use crate::model::book::Book;
    use crate::model::ValidationError;
    use crate::repo::RepoError;

    #[test]
    fn add_and_get_roundtrip() {
        let mut repo = MemoryBookRepository::new();
        let book = Book::new("The Dispossessed");
        let id = repo.add(&book).expect("valid book should register");

        let loaded = repo.get(id).unwrap().expect("book should be found");
        assert_eq!(loaded, book);
    }

    #[test]
    fn add_rejects_blank_title() {
        let mut repo = MemoryBookRepository::new();
        let err = repo
            .add(&Book::new(""))
            .expect_err("blank title must fail validation");

        assert_eq!(err, RepoError::Validation(ValidationError::BlankBookTitle));
        assert!(repo.is_empty());
    }
}
