//! Domain model for the author/book/contract catalog.
//!
//! # Responsibility
//! - Define the canonical entity records and their identity types.
//! - Own construction-time invariants via explicit `validate()` methods.
//!
//! # Invariants
//! - Every entity is identified by a stable, non-nil `Uuid`.
//! - Registered records are never mutated behind a query's back; contract
//!   changes go through explicit amend operations in the service layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author;
pub mod book;
pub mod contract;

/// Validation failure raised by model `validate()` checks.
///
/// One variant per trigger; repositories refuse to register a record whose
/// validation fails, so no partially valid record is ever observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author id is the nil uuid.
    NilAuthorId,
    /// Author name is empty or whitespace-only.
    BlankAuthorName,
    /// Book id is the nil uuid.
    NilBookId,
    /// Book title is empty or whitespace-only.
    BlankBookTitle,
    /// Contract id is the nil uuid.
    NilContractId,
    /// Contract date is empty or whitespace-only.
    BlankContractDate,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilAuthorId => write!(f, "author id must not be the nil uuid"),
            Self::BlankAuthorName => write!(f, "author name must not be blank"),
            Self::NilBookId => write!(f, "book id must not be the nil uuid"),
            Self::BlankBookTitle => write!(f, "book title must not be blank"),
            Self::NilContractId => write!(f, "contract id must not be the nil uuid"),
            Self::BlankContractDate => write!(f, "contract date must not be blank"),
        }
    }
}

impl Error for ValidationError {}
