//! Book entity.
//!
//! # Invariants
//! - `id` is stable and never reused for another book.
//! - `title` is non-blank; checked by `validate()` before registration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ValidationError;

/// Stable identifier for a book.
pub type BookId = Uuid;

/// A literary work linked to authors through contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable global ID used for contract references and lookups.
    pub id: BookId,
    /// Title text. Non-blank after trim.
    pub title: String,
}

impl Book {
    /// Creates a new book with a generated stable ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a book with a caller-provided stable ID.
    ///
    /// Does not validate; registration runs `validate()`.
    pub fn with_id(id: BookId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `ValidationError::NilBookId` when `id` is the nil uuid.
    /// - `ValidationError::BlankBookTitle` when `title` trims to empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_nil() {
            return Err(ValidationError::NilBookId);
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankBookTitle);
        }
        Ok(())
    }
}
