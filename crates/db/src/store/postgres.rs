//! PostgreSQL-backed character store.

use async_trait::async_trait;
use roster_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{Character, NewCharacter, UpdateCharacter};
use crate::store::{CharacterStore, StoreError};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, game, role";

/// Character store backed by a PostgreSQL connection pool.
///
/// Each operation is a single query; the pool handles per-call
/// connection scope and row-level isolation.
#[derive(Clone)]
pub struct PgCharacterStore {
    pool: PgPool,
}

impl PgCharacterStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterStore for PgCharacterStore {
    async fn list(&self) -> Result<Vec<Character>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id ASC");
        let characters = sqlx::query_as::<_, Character>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(characters)
    }

    async fn get(&self, id: DbId) -> Result<Option<Character>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(character)
    }

    async fn add(&self, input: &NewCharacter) -> Result<Character, StoreError> {
        let query = format!(
            "INSERT INTO characters (name, game, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.game)
            .bind(&input.role)
            .fetch_one(&self.pool)
            .await?;
        Ok(character)
    }

    async fn update(&self, id: DbId, input: &UpdateCharacter) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE characters SET name = $2, game = $3, role = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.game)
        .bind(&input.role)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
