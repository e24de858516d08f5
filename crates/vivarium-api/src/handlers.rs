//! REST endpoint handlers for the care API.
//!
//! The owner identity arrives in the `x-owner-id` header, placed there by
//! the session layer upstream -- issuing and verifying sessions is not this
//! service's job. Every handler resolves the owner first, then delegates
//! to the engine and lets [`ApiError`] shape the failure responses.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/pets` | Adopt a new pet |
//! | `GET` | `/api/pets` | List the owner's pets |
//! | `GET` | `/api/pets/active` | Snapshot of the active pet |
//! | `GET` | `/api/pets/{id}` | Full snapshot (runs decay) |
//! | `POST` | `/api/pets/{id}/activate` | Make this the active pet |
//! | `POST` | `/api/pets/{id}/feed` | Feed |
//! | `POST` | `/api/pets/{id}/pet` | Show affection |
//! | `POST` | `/api/pets/{id}/play` | Play |
//! | `POST` | `/api/pets/{id}/sleep` | Put to sleep |
//! | `POST` | `/api/pets/{id}/wake` | Wake up |
//! | `POST` | `/api/pets/{id}/item` | Apply an item's vital delta |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;
use vivarium_types::{ActionKind, ActionOutcome, OwnerId, PetId, PetSnapshot, VitalDelta};

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the authenticated owner ID.
const OWNER_HEADER: &str = "x-owner-id";

/// Resolve the owner from the session header.
fn owner_from(headers: &HeaderMap) -> Result<OwnerId, ApiError> {
    headers
        .get(OWNER_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .map(OwnerId::from)
        .ok_or(ApiError::InvalidOwner)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of `POST /api/pets`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePetRequest {
    /// Display name, 1 to 32 characters.
    #[validate(length(min = 1, max = 32))]
    pub name: String,
    /// Species tag (parsed against the closed set).
    pub species: String,
    /// Personality tag (parsed against the closed set).
    pub personality: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `POST /api/pets` -- adopt a new pet and return its first snapshot.
pub async fn create_pet(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<CreatePetRequest>,
) -> Result<Json<PetSnapshot>, ApiError> {
    let owner = owner_from(&headers)?;
    body.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let pet = state
        .service
        .create_pet(owner, body.name, &body.species, &body.personality)
        .await?;
    let snapshot = state.service.snapshot(owner, pet.id).await?;
    Ok(Json(snapshot))
}

/// `GET /api/pets` -- list the owner's pets as projections.
pub async fn list_pets(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<PetSnapshot>>, ApiError> {
    let owner = owner_from(&headers)?;
    Ok(Json(state.service.list_pets(owner).await?))
}

/// `GET /api/pets/active` -- snapshot of the owner's active pet.
pub async fn active_pet(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Option<PetSnapshot>>, ApiError> {
    let owner = owner_from(&headers)?;
    Ok(Json(state.service.active_pet(owner).await?))
}

/// `GET /api/pets/{id}` -- full snapshot, decay applied and persisted.
pub async fn get_pet(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<PetSnapshot>, ApiError> {
    let owner = owner_from(&headers)?;
    let snapshot = state.service.snapshot(owner, PetId::from(id)).await?;
    Ok(Json(snapshot))
}

/// `POST /api/pets/{id}/activate` -- make this the owner's active pet.
pub async fn activate_pet(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let owner = owner_from(&headers)?;
    state.service.set_active_pet(owner, PetId::from(id)).await?;
    Ok(Json(serde_json::json!({ "active": id })))
}

/// Shared body of the five action endpoints.
async fn act(
    state: &AppState,
    headers: &HeaderMap,
    id: Uuid,
    kind: ActionKind,
) -> Result<Json<ActionOutcome>, ApiError> {
    let owner = owner_from(headers)?;
    let outcome = state
        .service
        .resolve_action(owner, PetId::from(id), kind)
        .await?;
    Ok(Json(outcome))
}

/// `POST /api/pets/{id}/feed`.
pub async fn feed_pet(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<ActionOutcome>, ApiError> {
    act(&state, &headers, id, ActionKind::Feed).await
}

/// `POST /api/pets/{id}/pet`.
pub async fn pet_pet(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<ActionOutcome>, ApiError> {
    act(&state, &headers, id, ActionKind::Pet).await
}

/// `POST /api/pets/{id}/play`.
pub async fn play_with_pet(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<ActionOutcome>, ApiError> {
    act(&state, &headers, id, ActionKind::Play).await
}

/// `POST /api/pets/{id}/sleep`.
pub async fn sleep_pet(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<ActionOutcome>, ApiError> {
    act(&state, &headers, id, ActionKind::Sleep).await
}

/// `POST /api/pets/{id}/wake`.
pub async fn wake_pet(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<ActionOutcome>, ApiError> {
    act(&state, &headers, id, ActionKind::Wake).await
}

/// `POST /api/pets/{id}/item` -- apply an item's translated vital delta.
pub async fn use_item(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(delta): Json<VitalDelta>,
) -> Result<Json<ActionOutcome>, ApiError> {
    let owner = owner_from(&headers)?;
    let outcome = state
        .service
        .apply_item_effect(owner, PetId::from(id), delta)
        .await?;
    Ok(Json(outcome))
}
