/// Conversation API routes
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
use chatbot_core::types::{Conversacion, Mensaje};
use serde_json::json;

/// GET /api/Conversacion
pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Conversacion>>> {
    let conversaciones = state
        .conversaciones
        .get_all()
        .await
        .map_err(|e| ServerError::storage("failed to list conversations", e))?;
    Ok(Json(conversaciones))
}

/// GET /api/Conversacion/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Conversacion>> {
    let conversacion = state
        .conversaciones
        .get_by_id(&id)
        .await
        .map_err(|e| ServerError::storage("failed to fetch conversation", e))?
        .ok_or_else(|| ServerError::NotFound(format!("conversation {id} not found")))?;
    Ok(Json(conversacion))
}

/// POST /api/Conversacion
pub async fn create(
    State(state): State<AppState>,
    Json(conversacion): Json<Conversacion>,
) -> Result<impl IntoResponse> {
    validate::require("usuarioId", &conversacion.usuario_id)?;

    let conversacion = state
        .conversaciones
        .create(conversacion)
        .await
        .map_err(|e| ServerError::storage("failed to create conversation", e))?;

    let location = format!(
        "/api/Conversacion/{}",
        conversacion.id.as_deref().unwrap_or_default()
    );
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(conversacion),
    ))
}

/// PUT /api/Conversacion/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(conversacion): Json<Conversacion>,
) -> Result<StatusCode> {
    validate::require("usuarioId", &conversacion.usuario_id)?;

    let updated = state
        .conversaciones
        .update(&id, conversacion)
        .await
        .map_err(|e| ServerError::storage("failed to update conversation", e))?;
    if !updated {
        return Err(ServerError::NotFound(format!(
            "conversation {id} not found"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/Conversacion/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let deleted = state
        .conversaciones
        .delete(&id)
        .await
        .map_err(|e| ServerError::storage("failed to delete conversation", e))?;
    if !deleted {
        return Err(ServerError::NotFound(format!(
            "conversation {id} not found"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/Conversacion/usuario/:usuario_id
pub async fn get_by_usuario(
    State(state): State<AppState>,
    Path(usuario_id): Path<String>,
) -> Result<Json<Vec<Conversacion>>> {
    let conversaciones = state
        .conversaciones
        .get_by_usuario(&usuario_id)
        .await
        .map_err(|e| ServerError::storage("failed to list conversations by user", e))?;
    Ok(Json(conversaciones))
}

/// GET /api/Conversacion/activas
pub async fn get_activas(State(state): State<AppState>) -> Result<Json<Vec<Conversacion>>> {
    let conversaciones = state
        .conversaciones
        .get_activas()
        .await
        .map_err(|e| ServerError::storage("failed to list active conversations", e))?;
    Ok(Json(conversaciones))
}

/// GET /api/Conversacion/resueltas
pub async fn get_resueltas(State(state): State<AppState>) -> Result<Json<Vec<Conversacion>>> {
    let conversaciones = state
        .conversaciones
        .get_resueltas()
        .await
        .map_err(|e| ServerError::storage("failed to list resolved conversations", e))?;
    Ok(Json(conversaciones))
}

/// POST /api/Conversacion/:id/mensajes
///
/// Appends a message store-side; the conversation's message list is never
/// round-tripped through the handler.
pub async fn add_mensaje(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mensaje): Json<Mensaje>,
) -> Result<Json<serde_json::Value>> {
    validate::require("contenido", &mensaje.contenido)?;

    let appended = state
        .conversaciones
        .add_mensaje(&id, mensaje)
        .await
        .map_err(|e| ServerError::storage("failed to append message", e))?;
    if !appended {
        return Err(ServerError::NotFound(format!(
            "conversation {id} not found"
        )));
    }
    Ok(Json(json!({ "message": "message appended" })))
}
