//! Character entity model and DTOs.

use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub game: String,
    pub role: String,
}

/// Wire representation returned by list and get endpoints.
///
/// Deliberately carries no `id`; the identity is only exposed in the
/// create response and its `Location` header.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterResponse {
    pub name: String,
    pub game: String,
    pub role: String,
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        Self {
            name: character.name,
            game: character.game,
            role: character.role,
        }
    }
}

/// DTO for creating a new character.
///
/// Missing fields default to the empty string; no validation is applied.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCharacter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub game: String,
    #[serde(default)]
    pub role: String,
}

/// DTO for updating an existing character.
///
/// A PUT overwrites all three text fields in place; there is no partial
/// update. Missing fields default to the empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCharacter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub game: String,
    #[serde(default)]
    pub role: String,
}
