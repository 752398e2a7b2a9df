//! Contract join entity.
//!
//! # Responsibility
//! - Record one author-book relationship with a signing date and royalties.
//!
//! # Invariants
//! - `id` is stable and never reused for another contract.
//! - `date` is non-blank opaque text; matched by exact string equality.
//! - `royalties` is a plain integer amount; zero and negative are allowed.
//! - `author_id`/`book_id` must resolve against their registries; that check
//!   needs registry visibility, so it lives in the service layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::author::AuthorId;
use crate::model::book::BookId;
use crate::model::ValidationError;

/// Stable identifier for a contract.
pub type ContractId = Uuid;

/// One signed author-book relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Stable global ID used for amends and lookups.
    pub id: ContractId,
    /// Signing author reference.
    pub author_id: AuthorId,
    /// Signed book reference.
    pub book_id: BookId,
    /// Signing date as opaque text, e.g. `1974-01-01`.
    pub date: String,
    /// Royalty amount. May be zero or negative.
    pub royalties: i64,
}

impl Contract {
    /// Creates a new contract with a generated stable ID.
    pub fn new(
        author_id: AuthorId,
        book_id: BookId,
        date: impl Into<String>,
        royalties: i64,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), author_id, book_id, date, royalties)
    }

    /// Creates a contract with a caller-provided stable ID.
    ///
    /// Does not validate; registration runs `validate()`.
    pub fn with_id(
        id: ContractId,
        author_id: AuthorId,
        book_id: BookId,
        date: impl Into<String>,
        royalties: i64,
    ) -> Self {
        Self {
            id,
            author_id,
            book_id,
            date: date.into(),
            royalties,
        }
    }

    /// Checks record-level invariants.
    ///
    /// Reference resolution is a registry concern and is checked at
    /// signing/reassignment time by the catalog service.
    ///
    /// # Errors
    /// - `ValidationError::NilContractId` when `id` is the nil uuid.
    /// - `ValidationError::BlankContractDate` when `date` trims to empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_nil() {
            return Err(ValidationError::NilContractId);
        }
        if self.date.trim().is_empty() {
            return Err(ValidationError::BlankContractDate);
        }
        Ok(())
    }
}
