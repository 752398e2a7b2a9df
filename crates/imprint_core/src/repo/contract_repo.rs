//! Contract registry contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide append/lookup/update/scan APIs over the contract registry.
//! - Own the linear-scan query semantics used by every relationship
//!   traversal.
//!
//! # Invariants
//! - Writes run `Contract::validate()` before touching storage.
//! - Scans return contracts in registration order; `update` replaces a
//!   record in place so amended contracts keep their position.
//! - Reference resolution against the author/book registries is the
//!   catalog service's responsibility, not the registry's.

use crate::model::author::AuthorId;
use crate::model::book::BookId;
use crate::model::contract::{Contract, ContractId};
use crate::repo::{RepoError, RepoResult};

/// Filter options for contract registry scans.
///
/// Filters AND together; the default query matches every contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractQuery {
    /// Keep only contracts signed by this author.
    pub author: Option<AuthorId>,
    /// Keep only contracts covering this book.
    pub book: Option<BookId>,
    /// Keep only contracts with exactly this date text.
    pub date: Option<String>,
}

impl ContractQuery {
    /// Query matching every contract signed by `author`.
    pub fn by_author(author: AuthorId) -> Self {
        Self {
            author: Some(author),
            ..Self::default()
        }
    }

    /// Query matching every contract covering `book`.
    pub fn by_book(book: BookId) -> Self {
        Self {
            book: Some(book),
            ..Self::default()
        }
    }

    /// Query matching every contract dated exactly `date`.
    pub fn by_date(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            ..Self::default()
        }
    }

    fn matches(&self, contract: &Contract) -> bool {
        if let Some(author) = self.author {
            if contract.author_id != author {
                return false;
            }
        }
        if let Some(book) = self.book {
            if contract.book_id != book {
                return false;
            }
        }
        if let Some(date) = self.date.as_deref() {
            if contract.date != date {
                return false;
            }
        }
        true
    }
}

/// Registry interface for contract storage and scans.
pub trait ContractRepository {
    /// Registers one contract and returns its stable id.
    fn add(&mut self, contract: &Contract) -> RepoResult<ContractId>;
    /// Gets one contract by id.
    fn get(&self, id: ContractId) -> RepoResult<Option<Contract>>;
    /// Replaces an existing contract in place.
    fn update(&mut self, contract: &Contract) -> RepoResult<()>;
    /// Scans the registry in registration order, keeping query matches.
    fn list(&self, query: &ContractQuery) -> RepoResult<Vec<Contract>>;
}

/// Append-only in-memory contract registry.
#[derive(Debug, Default)]
pub struct MemoryContractRepository {
    contracts: Vec<Contract>,
}

impl MemoryContractRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered contracts.
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Removes every registered contract. External test harness resets only.
    pub fn clear(&mut self) {
        self.contracts.clear();
    }
}

impl ContractRepository for MemoryContractRepository {
    fn add(&mut self, contract: &Contract) -> RepoResult<ContractId> {
        contract.validate()?;
        if self.contracts.iter().any(|known| known.id == contract.id) {
            return Err(RepoError::DuplicateContract(contract.id));
        }

        self.contracts.push(contract.clone());
        Ok(contract.id)
    }

    fn get(&self, id: ContractId) -> RepoResult<Option<Contract>> {
        Ok(self
            .contracts
            .iter()
            .find(|contract| contract.id == id)
            .cloned())
    }

    fn update(&mut self, contract: &Contract) -> RepoResult<()> {
        contract.validate()?;

        let slot = self
            .contracts
            .iter_mut()
            .find(|known| known.id == contract.id)
            .ok_or(RepoError::ContractNotFound(contract.id))?;
        *slot = contract.clone();
        Ok(())
    }

    fn list(&self, query: &ContractQuery) -> RepoResult<Vec<Contract>> {
        Ok(self
            .contracts
            .iter()
            .filter(|contract| query.matches(contract))
            .cloned()
            .collect())
    }
}
