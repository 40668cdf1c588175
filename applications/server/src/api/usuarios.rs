/// User API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
    validate,
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chatbot_core::types::Usuario;

fn check_required(usuario: &Usuario) -> Result<()> {
    validate::require("email", &usuario.email)?;
    validate::require("nombre", &usuario.nombre)?;
    Ok(())
}

/// GET /api/Usuario
pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Usuario>>> {
    let usuarios = state
        .usuarios
        .get_all()
        .await
        .map_err(|e| ServerError::storage("failed to list users", e))?;
    Ok(Json(usuarios))
}

/// GET /api/Usuario/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Usuario>> {
    let usuario = state
        .usuarios
        .get_by_id(&id)
        .await
        .map_err(|e| ServerError::storage("failed to fetch user", e))?
        .ok_or_else(|| ServerError::NotFound(format!("user {id} not found")))?;
    Ok(Json(usuario))
}

/// POST /api/Usuario
pub async fn create(
    State(state): State<AppState>,
    Json(usuario): Json<Usuario>,
) -> Result<impl IntoResponse> {
    check_required(&usuario)?;

    let usuario = state
        .usuarios
        .create(usuario)
        .await
        .map_err(|e| ServerError::storage("failed to create user", e))?;

    let location = format!("/api/Usuario/{}", usuario.id.as_deref().unwrap_or_default());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(usuario),
    ))
}

/// PUT /api/Usuario/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(usuario): Json<Usuario>,
) -> Result<StatusCode> {
    check_required(&usuario)?;

    let updated = state
        .usuarios
        .update(&id, usuario)
        .await
        .map_err(|e| ServerError::storage("failed to update user", e))?;
    if !updated {
        return Err(ServerError::NotFound(format!("user {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/Usuario/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let deleted = state
        .usuarios
        .delete(&id)
        .await
        .map_err(|e| ServerError::storage("failed to delete user", e))?;
    if !deleted {
        return Err(ServerError::NotFound(format!("user {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/Usuario/email/:email
pub async fn get_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Usuario>> {
    let usuario = state
        .usuarios
        .get_by_email(&email)
        .await
        .map_err(|e| ServerError::storage("failed to fetch user by email", e))?
        .ok_or_else(|| ServerError::NotFound(format!("user with email {email} not found")))?;
    Ok(Json(usuario))
}

/// GET /api/Usuario/dni/:dni
pub async fn get_by_dni(
    State(state): State<AppState>,
    Path(dni): Path<String>,
) -> Result<Json<Usuario>> {
    let usuario = state
        .usuarios
        .get_by_dni(&dni)
        .await
        .map_err(|e| ServerError::storage("failed to fetch user by dni", e))?
        .ok_or_else(|| ServerError::NotFound(format!("user with dni {dni} not found")))?;
    Ok(Json(usuario))
}

/// GET /api/Usuario/onboarding/:estado
pub async fn get_by_estado_onboarding(
    State(state): State<AppState>,
    Path(estado): Path<String>,
) -> Result<Json<Vec<Usuario>>> {
    let usuarios = state
        .usuarios
        .get_by_estado_onboarding(&estado)
        .await
        .map_err(|e| ServerError::storage("failed to list users by onboarding state", e))?;
    Ok(Json(usuarios))
}

/// GET /api/Usuario/activos
pub async fn get_activos(State(state): State<AppState>) -> Result<Json<Vec<Usuario>>> {
    let usuarios = state
        .usuarios
        .get_activos()
        .await
        .map_err(|e| ServerError::storage("failed to list active users", e))?;
    Ok(Json(usuarios))
}

/// GET /api/Usuario/departamento/:departamento
pub async fn get_by_departamento(
    State(state): State<AppState>,
    Path(departamento): Path<String>,
) -> Result<Json<Vec<Usuario>>> {
    let usuarios = state
        .usuarios
        .get_by_departamento(&departamento)
        .await
        .map_err(|e| ServerError::storage("failed to list users by department", e))?;
    Ok(Json(usuarios))
}
