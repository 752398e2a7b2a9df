//! Author entity.
//!
//! # Responsibility
//! - Define the author record linked to books through contracts.
//!
//! # Invariants
//! - `id` is stable and never reused for another author.
//! - `name` is non-blank; checked by `validate()` before registration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ValidationError;

/// Stable identifier for an author.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AuthorId = Uuid;

/// A writer who signs contracts for books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Stable global ID used for contract references and lookups.
    pub id: AuthorId,
    /// Display name. Non-blank after trim.
    pub name: String,
}

impl Author {
    /// Creates a new author with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an author with a caller-provided stable ID.
    ///
    /// Used when identity already exists externally (fixtures, imports).
    /// Does not validate; registration runs `validate()`.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `ValidationError::NilAuthorId` when `id` is the nil uuid.
    /// - `ValidationError::BlankAuthorName` when `name` trims to empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_nil() {
            return Err(ValidationError::NilAuthorId);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankAuthorName);
        }
        Ok(())
    }
}
