//! In-memory character store used as a test double.
//!
//! Implements the same contract as the PostgreSQL store: ids are
//! assigned sequentially starting at 1 and never reused, rows are kept
//! in insertion order.

use std::sync::Mutex;

use async_trait::async_trait;
use roster_core::types::DbId;

use crate::models::character::{Character, NewCharacter, UpdateCharacter};
use crate::store::{CharacterStore, StoreError};

#[derive(Default)]
struct Inner {
    rows: Vec<Character>,
    next_id: DbId,
}

/// Mutex-guarded vector store. Never returns [`StoreError`].
#[derive(Default)]
pub struct MemoryCharacterStore {
    inner: Mutex<Inner>,
}

impl MemoryCharacterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CharacterStore for MemoryCharacterStore {
    async fn list(&self) -> Result<Vec<Character>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.clone())
    }

    async fn get(&self, id: DbId) -> Result<Option<Character>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn add(&self, input: &NewCharacter) -> Result<Character, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let character = Character {
            id: inner.next_id,
            name: input.name.clone(),
            game: input.game.clone(),
            role: input.role.clone(),
        };
        inner.rows.push(character.clone());
        Ok(character)
    }

    async fn update(&self, id: DbId, input: &UpdateCharacter) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.iter_mut().find(|c| c.id == id) {
            Some(row) => {
                row.name = input.name.clone();
                row.game = input.game.clone();
                row.role = input.role.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|c| c.id != id);
        Ok(inner.rows.len() < before)
    }
}
