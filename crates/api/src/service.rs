//! The character service.
//!
//! Sole mediator between the wire-facing transfer shape and the
//! persisted entity. Holds no state of its own; every call delegates to
//! the injected store, so concurrent requests see whatever isolation
//! the store provides.

use std::sync::Arc;

use roster_core::types::DbId;
use roster_db::models::character::{Character, CharacterResponse, NewCharacter, UpdateCharacter};
use roster_db::store::{CharacterStore, StoreError};

/// Orchestrates CRUD operations against a [`CharacterStore`].
///
/// The store handle is injected at construction; there is no ambient
/// or global store reference.
#[derive(Clone)]
pub struct CharacterService {
    store: Arc<dyn CharacterStore>,
}

impl CharacterService {
    pub fn new(store: Arc<dyn CharacterStore>) -> Self {
        Self { store }
    }

    /// All characters as transfer shapes, in insertion order. Empty vec
    /// when the store is empty.
    pub async fn list_all(&self) -> Result<Vec<CharacterResponse>, StoreError> {
        let characters = self.store.list().await?;
        Ok(characters
            .into_iter()
            .map(CharacterResponse::from)
            .collect())
    }

    /// The transfer shape for the given id, or `None` if no such row
    /// exists.
    pub async fn get(&self, id: DbId) -> Result<Option<CharacterResponse>, StoreError> {
        let character = self.store.get(id).await?;
        Ok(character.map(CharacterResponse::from))
    }

    /// Create a character, returning the full persisted entity
    /// including the store-assigned id.
    pub async fn add(&self, input: &NewCharacter) -> Result<Character, StoreError> {
        self.store.add(input).await
    }

    /// Overwrite an existing character's fields in place. Returns
    /// `false` when the id does not exist; no row is created.
    pub async fn update(&self, id: DbId, input: &UpdateCharacter) -> Result<bool, StoreError> {
        self.store.update(id, input).await
    }

    /// Remove a character. Returns `false` when the id does not exist.
    pub async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.store.delete(id).await
    }
}
