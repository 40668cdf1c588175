/// Configuration API routes
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
use chatbot_core::types::Configuracion;

fn check_required(configuracion: &Configuracion) -> Result<()> {
    validate::require("nombre", &configuracion.nombre)?;
    validate::require("tipo", &configuracion.tipo)?;
    Ok(())
}

/// GET /api/Configuracion
pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Configuracion>>> {
    let configuraciones = state
        .configuraciones
        .get_all()
        .await
        .map_err(|e| ServerError::storage("failed to list configuration entries", e))?;
    Ok(Json(configuraciones))
}

/// GET /api/Configuracion/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Configuracion>> {
    let configuracion = state
        .configuraciones
        .get_by_id(&id)
        .await
        .map_err(|e| ServerError::storage("failed to fetch configuration entry", e))?
        .ok_or_else(|| ServerError::NotFound(format!("configuration {id} not found")))?;
    Ok(Json(configuracion))
}

/// POST /api/Configuracion
pub async fn create(
    State(state): State<AppState>,
    Json(configuracion): Json<Configuracion>,
) -> Result<impl IntoResponse> {
    check_required(&configuracion)?;

    let configuracion = state
        .configuraciones
        .create(configuracion)
        .await
        .map_err(|e| ServerError::storage("failed to create configuration entry", e))?;

    let location = format!(
        "/api/Configuracion/{}",
        configuracion.id.as_deref().unwrap_or_default()
    );
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(configuracion),
    ))
}

/// PUT /api/Configuracion/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(configuracion): Json<Configuracion>,
) -> Result<StatusCode> {
    check_required(&configuracion)?;

    let updated = state
        .configuraciones
        .update(&id, configuracion)
        .await
        .map_err(|e| ServerError::storage("failed to update configuration entry", e))?;
    if !updated {
        return Err(ServerError::NotFound(format!(
            "configuration {id} not found"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/Configuracion/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let deleted = state
        .configuraciones
        .delete(&id)
        .await
        .map_err(|e| ServerError::storage("failed to delete configuration entry", e))?;
    if !deleted {
        return Err(ServerError::NotFound(format!(
            "configuration {id} not found"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/Configuracion/tipo/:tipo
pub async fn get_by_tipo(
    State(state): State<AppState>,
    Path(tipo): Path<String>,
) -> Result<Json<Vec<Configuracion>>> {
    let configuraciones = state
        .configuraciones
        .get_by_tipo(&tipo)
        .await
        .map_err(|e| ServerError::storage("failed to list configuration entries by type", e))?;
    Ok(Json(configuraciones))
}

/// GET /api/Configuracion/activas
pub async fn get_activas(State(state): State<AppState>) -> Result<Json<Vec<Configuracion>>> {
    let configuraciones = state
        .configuraciones
        .get_activas()
        .await
        .map_err(|e| ServerError::storage("failed to list active configuration entries", e))?;
    Ok(Json(configuraciones))
}

/// GET /api/Configuracion/nombre/:nombre
pub async fn get_by_nombre(
    State(state): State<AppState>,
    Path(nombre): Path<String>,
) -> Result<Json<Configuracion>> {
    let configuracion = state
        .configuraciones
        .get_by_nombre(&nombre)
        .await
        .map_err(|e| ServerError::storage("failed to fetch configuration entry by name", e))?
        .ok_or_else(|| ServerError::NotFound(format!("configuration '{nombre}' not found")))?;
    Ok(Json(configuracion))
}
