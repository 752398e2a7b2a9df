//! Author registry contract and in-memory implementation.
//!
//! # Invariants
//! - `add` validates the record and rejects duplicate ids before appending.
//! - `list` returns authors in registration order.

use crate::model::author::{Author, AuthorId};
use crate::repo::{RepoError, RepoResult};

/// Registry interface for author registration and lookup.
pub trait AuthorRepository {
    /// Registers one author and returns its stable id.
    fn add(&mut self, author: &Author) -> RepoResult<AuthorId>;
    /// Gets one author by id.
    fn get(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    /// Returns whether an author with this id is registered.
    fn contains(&self, id: AuthorId) -> RepoResult<bool>;
    /// Lists all registered authors in registration order.
    fn list(&self) -> RepoResult<Vec<Author>>;
}

/// Append-only in-memory author registry.
#[derive(Debug, Default)]
pub struct MemoryAuthorRepository {
    authors: Vec<Author>,
}

impl MemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered authors.
    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Removes every registered author.
    ///
    /// Registries never prune themselves; this exists for external test
    /// harness resets only.
    pub fn clear(&mut self) {
        self.authors.clear();
    }
}

impl AuthorRepository for MemoryAuthorRepository {
    fn add(&mut self, author: &Author) -> RepoResult<AuthorId> {
        author.validate()?;
        if self.authors.iter().any(|known| known.id == author.id) {
            return Err(RepoError::DuplicateAuthor(author.id));
        }

        self.authors.push(author.clone());
        Ok(author.id)
    }

    fn get(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        Ok(self.authors.iter().find(|author| author.id == id).cloned())
    }

    fn contains(&self, id: AuthorId) -> RepoResult<bool> {
        Ok(self.authors.iter().any(|author| author.id == id))
    }

    fn list(&self) -> RepoResult<Vec<Author>> {
        Ok(self.authors.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthorRepository, MemoryAuthorRepository};
    use crate::model::author::Author;
    use crate::model::ValidationError;
    use crate::repo::RepoError;

    #[test]
    fn add_registers_exactly_once() {
        let mut repo = MemoryAuthorRepository::new();
        let author = Author::new("Ursula K. Le Guin");

        repo.add(&author).expect("valid author should register");
        let err = repo.add(&author).expect_err("duplicate id must be rejected");

        assert_eq!(err, RepoError::DuplicateAuthor(author.id));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn add_rejects_blank_name_without_registering() {
        let mut repo = MemoryAuthorRepository::new();
        let err = repo
            .add(&Author::new("   "))
            .expect_err("blank name must fail validation");

        assert_eq!(
            err,
            RepoError::Validation(ValidationError::BlankAuthorName)
        );
        assert!(repo.is_empty());
    }

    #[test]
    fn clear_empties_the_registry() {
        let mut repo = MemoryAuthorRepository::new();
        repo.add(&Author::new("Octavia Butler")).unwrap();

        repo.clear();
        assert!(repo.is_empty());
    }
}
