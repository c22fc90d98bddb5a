//! The character store abstraction.
//!
//! The service talks to storage exclusively through [`CharacterStore`],
//! which exposes the five row-level primitives. Production uses
//! [`PgCharacterStore`]; tests can substitute [`MemoryCharacterStore`].

use async_trait::async_trait;
use roster_core::types::DbId;

use crate::models::character::{Character, NewCharacter, UpdateCharacter};

pub mod memory;
pub mod postgres;

pub use memory::MemoryCharacterStore;
pub use postgres::PgCharacterStore;

/// Errors surfaced by a character store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying database failed. Propagated as-is; the caller
    /// decides how to surface it.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row-level CRUD primitives over the `characters` table.
///
/// Every method is a single all-or-nothing storage call. Absence of a
/// row is reported through `Option`/`bool`, never as an error.
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// All rows in insertion order. Empty vec when the table is empty.
    async fn list(&self) -> Result<Vec<Character>, StoreError>;

    /// The row with the given id, or `None` if no such row exists.
    async fn get(&self, id: DbId) -> Result<Option<Character>, StoreError>;

    /// Insert a new row, returning it with the store-assigned id.
    async fn add(&self, input: &NewCharacter) -> Result<Character, StoreError>;

    /// Overwrite the three text fields of an existing row.
    ///
    /// Returns `false` when no row matched; a missing id never creates
    /// a row.
    async fn update(&self, id: DbId, input: &UpdateCharacter) -> Result<bool, StoreError>;

    /// Remove the row with the given id. Returns `false` when no row
    /// matched.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;
}
