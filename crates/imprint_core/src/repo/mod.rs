//! Registry layer contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define use-case oriented access contracts for the three registries.
//! - Keep registry storage details out of service orchestration.
//!
//! # Invariants
//! - Registry writes must run the record's `validate()` before the append.
//! - Registries are append-only and preserve insertion order; an update
//!   replaces a contract in place without moving it.
//! - A failed write leaves the registry untouched.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::author::AuthorId;
use crate::model::book::BookId;
use crate::model::contract::ContractId;
use crate::model::ValidationError;

pub mod author_repo;
pub mod book_repo;
pub mod contract_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Registry error shared by all three entity repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Record failed its own `validate()` check.
    Validation(ValidationError),
    /// No registered author with this id.
    AuthorNotFound(AuthorId),
    /// No registered book with this id.
    BookNotFound(BookId),
    /// No registered contract with this id.
    ContractNotFound(ContractId),
    /// An author with this id is already registered.
    DuplicateAuthor(AuthorId),
    /// A book with this id is already registered.
    DuplicateBook(BookId),
    /// A contract with this id is already registered.
    DuplicateContract(ContractId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::BookNotFound(id) => write!(f, "book not found: {id}"),
            Self::ContractNotFound(id) => write!(f, "contract not found: {id}"),
            Self::DuplicateAuthor(id) => write!(f, "author already registered: {id}"),
            Self::DuplicateBook(id) => write!(f, "book already registered: {id}"),
            Self::DuplicateContract(id) => write!(f, "contract already registered: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
