//! Catalog composition root.
//!
//! # Responsibility
//! - Own the three registries and provide the registration, signing,
//!   traversal, aggregation, and amend use-cases.
//! - Resolve contract references against the author/book registries at
//!   signing and reassignment time.
//!
//! # Invariants
//! - Every contract reaching the contract registry references a registered
//!   author and a registered book.
//! - Amends replace the stored contract in place, so registry order is
//!   stable and changes are immediately visible to every query.
//! - Failed operations leave all three registries unchanged.

use log::info;

use crate::model::author::{Author, AuthorId};
use crate::model::book::{Book, BookId};
use crate::model::contract::{Contract, ContractId};
use crate::repo::author_repo::{AuthorRepository, MemoryAuthorRepository};
use crate::repo::book_repo::{BookRepository, MemoryBookRepository};
use crate::repo::contract_repo::{ContractQuery, ContractRepository, MemoryContractRepository};
use crate::repo::{RepoError, RepoResult};

/// Use-case service owning the author, book, and contract registries.
pub struct CatalogService<A: AuthorRepository, B: BookRepository, C: ContractRepository> {
    authors: A,
    books: B,
    contracts: C,
}

/// Catalog wired to the in-memory registries.
pub type MemoryCatalogService =
    CatalogService<MemoryAuthorRepository, MemoryBookRepository, MemoryContractRepository>;

impl MemoryCatalogService {
    /// Creates a catalog over fresh in-memory registries.
    ///
    /// Registries live as long as the catalog; building a new catalog is
    /// the reset path for test harnesses.
    pub fn in_memory() -> Self {
        Self::new(
            MemoryAuthorRepository::new(),
            MemoryBookRepository::new(),
            MemoryContractRepository::new(),
        )
    }
}

impl<A: AuthorRepository, B: BookRepository, C: ContractRepository> CatalogService<A, B, C> {
    /// Creates a catalog using the provided registry implementations.
    pub fn new(authors: A, books: B, contracts: C) -> Self {
        Self {
            authors,
            books,
            contracts,
        }
    }

    /// Registers a new author and returns its stable id.
    pub fn register_author(&mut self, name: impl Into<String>) -> RepoResult<AuthorId> {
        self.authors.add(&Author::new(name))
    }

    /// Registers a new book and returns its stable id.
    pub fn register_book(&mut self, title: impl Into<String>) -> RepoResult<BookId> {
        self.books.add(&Book::new(title))
    }

    /// Gets one author by id.
    pub fn author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.authors.get(id)
    }

    /// Gets one book by id.
    pub fn book(&self, id: BookId) -> RepoResult<Option<Book>> {
        self.books.get(id)
    }

    /// Gets one contract by id.
    pub fn contract(&self, id: ContractId) -> RepoResult<Option<Contract>> {
        self.contracts.get(id)
    }

    /// Signs a contract between a registered author and a registered book.
    ///
    /// # Contract
    /// - Fails with `AuthorNotFound`/`BookNotFound` on a dangling reference
    ///   and with `Validation` on a blank date; nothing is registered then.
    /// - On success appends to the contract registry and returns the new
    ///   stable contract id.
    pub fn sign_contract(
        &mut self,
        author_id: AuthorId,
        book_id: BookId,
        date: impl Into<String>,
        royalties: i64,
    ) -> RepoResult<ContractId> {
        self.require_author(author_id)?;
        self.require_book(book_id)?;

        let contract = Contract::new(author_id, book_id, date, royalties);
        let id = self.contracts.add(&contract)?;
        info!(
            "event=contract_signed module=catalog status=ok contract={id} author={author_id} book={book_id} royalties={royalties}"
        );
        Ok(id)
    }

    /// Returns this author's contracts in registration order.
    pub fn contracts_for_author(&self, author_id: AuthorId) -> RepoResult<Vec<Contract>> {
        self.require_author(author_id)?;
        self.contracts.list(&ContractQuery::by_author(author_id))
    }

    /// Returns the books this author has contracts for.
    ///
    /// Ordered like `contracts_for_author`; an author with several
    /// contracts for one book sees that book repeated.
    pub fn books_for_author(&self, author_id: AuthorId) -> RepoResult<Vec<Book>> {
        let contracts = self.contracts_for_author(author_id)?;
        contracts
            .into_iter()
            .map(|contract| {
                self.books
                    .get(contract.book_id)?
                    .ok_or(RepoError::BookNotFound(contract.book_id))
            })
            .collect()
    }

    /// Sums royalties across this author's contracts. Zero with none.
    pub fn total_royalties(&self, author_id: AuthorId) -> RepoResult<i64> {
        let contracts = self.contracts_for_author(author_id)?;
        Ok(contracts.iter().map(|contract| contract.royalties).sum())
    }

    /// Returns this book's contracts in registration order.
    pub fn contracts_for_book(&self, book_id: BookId) -> RepoResult<Vec<Contract>> {
        self.require_book(book_id)?;
        self.contracts.list(&ContractQuery::by_book(book_id))
    }

    /// Returns the authors holding contracts for this book.
    ///
    /// Ordered like `contracts_for_book`; duplicates preserved.
    pub fn authors_for_book(&self, book_id: BookId) -> RepoResult<Vec<Author>> {
        let contracts = self.contracts_for_book(book_id)?;
        contracts
            .into_iter()
            .map(|contract| {
                self.authors
                    .get(contract.author_id)?
                    .ok_or(RepoError::AuthorNotFound(contract.author_id))
            })
            .collect()
    }

    /// Returns every contract dated exactly `date`, across all authors and
    /// books, in registration order. Empty when nothing matches.
    pub fn contracts_by_date(&self, date: &str) -> RepoResult<Vec<Contract>> {
        self.contracts.list(&ContractQuery::by_date(date))
    }

    /// Amends a contract's date.
    pub fn amend_contract_date(
        &mut self,
        id: ContractId,
        date: impl Into<String>,
    ) -> RepoResult<()> {
        let mut contract = self.require_contract(id)?;
        contract.date = date.into();
        self.contracts.update(&contract)?;
        info!("event=contract_amended module=catalog status=ok contract={id} field=date");
        Ok(())
    }

    /// Amends a contract's royalty amount.
    pub fn amend_contract_royalties(&mut self, id: ContractId, royalties: i64) -> RepoResult<()> {
        let mut contract = self.require_contract(id)?;
        contract.royalties = royalties;
        self.contracts.update(&contract)?;
        info!("event=contract_amended module=catalog status=ok contract={id} field=royalties");
        Ok(())
    }

    /// Reassigns a contract to another registered author.
    pub fn reassign_contract_author(
        &mut self,
        id: ContractId,
        author_id: AuthorId,
    ) -> RepoResult<()> {
        self.require_author(author_id)?;
        let mut contract = self.require_contract(id)?;
        contract.author_id = author_id;
        self.contracts.update(&contract)?;
        info!("event=contract_amended module=catalog status=ok contract={id} field=author");
        Ok(())
    }

    /// Reassigns a contract to another registered book.
    pub fn reassign_contract_book(&mut self, id: ContractId, book_id: BookId) -> RepoResult<()> {
        self.require_book(book_id)?;
        let mut contract = self.require_contract(id)?;
        contract.book_id = book_id;
        self.contracts.update(&contract)?;
        info!("event=contract_amended module=catalog status=ok contract={id} field=book");
        Ok(())
    }

    fn require_author(&self, id: AuthorId) -> RepoResult<()> {
        if self.authors.contains(id)? {
            Ok(())
        } else {
            Err(RepoError::AuthorNotFound(id))
        }
    }

    fn require_book(&self, id: BookId) -> RepoResult<()> {
        if self.books.contains(id)? {
            Ok(())
        } else {
            Err(RepoError::BookNotFound(id))
        }
    }

    fn require_contract(&self, id: ContractId) -> RepoResult<Contract> {
        self.contracts
            .get(id)?
            .ok_or(RepoError::ContractNotFound(id))
    }
}
