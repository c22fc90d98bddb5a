//! Handlers for the `/characters` resource.
//!
//! List and get return the identity-less transfer shape; create returns
//! the full entity so the client learns the assigned id (also echoed in
//! the `Location` header). Update and delete return 204 with no body.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderName, StatusCode};
use axum::Json;
use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_db::models::character::{Character, CharacterResponse, NewCharacter, UpdateCharacter};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/characters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CharacterResponse>>> {
    let characters = state.characters.list_all().await?;
    Ok(Json(characters))
}

/// GET /api/v1/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterResponse>> {
    let character = state
        .characters
        .get(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "character",
            id,
        }))?;
    Ok(Json(character))
}

/// POST /api/v1/characters
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewCharacter>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Character>)> {
    let character = state.characters.add(&input).await?;
    let location = format!("/api/v1/characters/{}", character.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(character)))
}

/// PUT /api/v1/characters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<StatusCode> {
    let updated = state.characters.update(id, &input).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "character",
            id,
        }))
    }
}

/// DELETE /api/v1/characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = state.characters.delete(id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "character",
            id,
        }))
    }
}
