//! Core domain logic for Imprint, an in-memory author/book/contract catalog.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::author::{Author, AuthorId};
pub use model::book::{Book, BookId};
pub use model::contract::{Contract, ContractId};
pub use model::ValidationError;
pub use repo::author_repo::{AuthorRepository, MemoryAuthorRepository};
pub use repo::book_repo::{BookRepository, MemoryBookRepository};
pub use repo::contract_repo::{ContractQuery, ContractRepository, MemoryContractRepository};
pub use repo::{RepoError, RepoResult};
pub use service::catalog_service::{CatalogService, MemoryCatalogService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
