/// Activity API routes
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
use chatbot_core::types::Actividad;

fn check_required(actividad: &Actividad) -> Result<()> {
    validate::require("titulo", &actividad.titulo)?;
    validate::require("descripcion", &actividad.descripcion)?;
    Ok(())
}

/// GET /api/Actividad
pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Actividad>>> {
    let actividades = state
        .actividades
        .get_all()
        .await
        .map_err(|e| ServerError::storage("failed to list activities", e))?;
    Ok(Json(actividades))
}

/// GET /api/Actividad/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Actividad>> {
    let actividad = state
        .actividades
        .get_by_id(&id)
        .await
        .map_err(|e| ServerError::storage("failed to fetch activity", e))?
        .ok_or_else(|| ServerError::NotFound(format!("activity {id} not found")))?;
    Ok(Json(actividad))
}

/// POST /api/Actividad
pub async fn create(
    State(state): State<AppState>,
    Json(actividad): Json<Actividad>,
) -> Result<impl IntoResponse> {
    check_required(&actividad)?;

    let actividad = state
        .actividades
        .create(actividad)
        .await
        .map_err(|e| ServerError::storage("failed to create activity", e))?;

    let location = format!("/api/Actividad/{}", actividad.id.as_deref().unwrap_or_default());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(actividad),
    ))
}

/// PUT /api/Actividad/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(actividad): Json<Actividad>,
) -> Result<StatusCode> {
    check_required(&actividad)?;

    let updated = state
        .actividades
        .update(&id, actividad)
        .await
        .map_err(|e| ServerError::storage("failed to update activity", e))?;
    if !updated {
        return Err(ServerError::NotFound(format!("activity {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/Actividad/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let deleted = state
        .actividades
        .delete(&id)
        .await
        .map_err(|e| ServerError::storage("failed to delete activity", e))?;
    if !deleted {
        return Err(ServerError::NotFound(format!("activity {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/Actividad/dia/:dia
pub async fn get_by_dia(
    State(state): State<AppState>,
    Path(dia): Path<i32>,
) -> Result<Json<Vec<Actividad>>> {
    let actividades = state
        .actividades
        .get_by_dia(dia)
        .await
        .map_err(|e| ServerError::storage("failed to list activities by day", e))?;
    Ok(Json(actividades))
}

/// GET /api/Actividad/tipo/:tipo
pub async fn get_by_tipo(
    State(state): State<AppState>,
    Path(tipo): Path<String>,
) -> Result<Json<Vec<Actividad>>> {
    let actividades = state
        .actividades
        .get_by_tipo(&tipo)
        .await
        .map_err(|e| ServerError::storage("failed to list activities by type", e))?;
    Ok(Json(actividades))
}

/// GET /api/Actividad/obligatorias
pub async fn get_obligatorias(State(state): State<AppState>) -> Result<Json<Vec<Actividad>>> {
    let actividades = state
        .actividades
        .get_obligatorias()
        .await
        .map_err(|e| ServerError::storage("failed to list mandatory activities", e))?;
    Ok(Json(actividades))
}
