/// Automated message API routes
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
use chatbot_core::types::MensajeAutomatico;

fn check_required(mensaje: &MensajeAutomatico) -> Result<()> {
    validate::require("titulo", &mensaje.titulo)?;
    validate::require("contenido", &mensaje.contenido)?;
    Ok(())
}

/// GET /api/MensajeAutomatico
pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<MensajeAutomatico>>> {
    let mensajes = state
        .mensajes_automaticos
        .get_all()
        .await
        .map_err(|e| ServerError::storage("failed to list automated messages", e))?;
    Ok(Json(mensajes))
}

/// GET /api/MensajeAutomatico/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MensajeAutomatico>> {
    let mensaje = state
        .mensajes_automaticos
        .get_by_id(&id)
        .await
        .map_err(|e| ServerError::storage("failed to fetch automated message", e))?
        .ok_or_else(|| ServerError::NotFound(format!("automated message {id} not found")))?;
    Ok(Json(mensaje))
}

/// POST /api/MensajeAutomatico
pub async fn create(
    State(state): State<AppState>,
    Json(mensaje): Json<MensajeAutomatico>,
) -> Result<impl IntoResponse> {
    check_required(&mensaje)?;

    let mensaje = state
        .mensajes_automaticos
        .create(mensaje)
        .await
        .map_err(|e| ServerError::storage("failed to create automated message", e))?;

    let location = format!(
        "/api/MensajeAutomatico/{}",
        mensaje.id.as_deref().unwrap_or_default()
    );
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(mensaje),
    ))
}

/// PUT /api/MensajeAutomatico/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mensaje): Json<MensajeAutomatico>,
) -> Result<StatusCode> {
    check_required(&mensaje)?;

    let updated = state
        .mensajes_automaticos
        .update(&id, mensaje)
        .await
        .map_err(|e| ServerError::storage("failed to update automated message", e))?;
    if !updated {
        return Err(ServerError::NotFound(format!(
            "automated message {id} not found"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/MensajeAutomatico/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let deleted = state
        .mensajes_automaticos
        .delete(&id)
        .await
        .map_err(|e| ServerError::storage("failed to delete automated message", e))?;
    if !deleted {
        return Err(ServerError::NotFound(format!(
            "automated message {id} not found"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/MensajeAutomatico/tipo/:tipo
pub async fn get_by_tipo(
    State(state): State<AppState>,
    Path(tipo): Path<String>,
) -> Result<Json<Vec<MensajeAutomatico>>> {
    let mensajes = state
        .mensajes_automaticos
        .get_by_tipo(&tipo)
        .await
        .map_err(|e| ServerError::storage("failed to list automated messages by type", e))?;
    Ok(Json(mensajes))
}

/// GET /api/MensajeAutomatico/activos
pub async fn get_activos(State(state): State<AppState>) -> Result<Json<Vec<MensajeAutomatico>>> {
    let mensajes = state
        .mensajes_automaticos
        .get_activos()
        .await
        .map_err(|e| ServerError::storage("failed to list active automated messages", e))?;
    Ok(Json(mensajes))
}
