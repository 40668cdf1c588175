/// Document API routes
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
use chatbot_core::types::Documento;

fn check_required(documento: &Documento) -> Result<()> {
    validate::require("titulo", &documento.titulo)?;
    validate::require("url", &documento.url)?;
    Ok(())
}

/// GET /api/Documento
pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Documento>>> {
    let documentos = state
        .documentos
        .get_all()
        .await
        .map_err(|e| ServerError::storage("failed to list documents", e))?;
    Ok(Json(documentos))
}

/// GET /api/Documento/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Documento>> {
    let documento = state
        .documentos
        .get_by_id(&id)
        .await
        .map_err(|e| ServerError::storage("failed to fetch document", e))?
        .ok_or_else(|| ServerError::NotFound(format!("document {id} not found")))?;
    Ok(Json(documento))
}

/// POST /api/Documento
pub async fn create(
    State(state): State<AppState>,
    Json(documento): Json<Documento>,
) -> Result<impl IntoResponse> {
    check_required(&documento)?;

    let documento = state
        .documentos
        .create(documento)
        .await
        .map_err(|e| ServerError::storage("failed to create document", e))?;

    let location = format!(
        "/api/Documento/{}",
        documento.id.as_deref().unwrap_or_default()
    );
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(documento),
    ))
}

/// PUT /api/Documento/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(documento): Json<Documento>,
) -> Result<StatusCode> {
    check_required(&documento)?;

    let updated = state
        .documentos
        .update(&id, documento)
        .await
        .map_err(|e| ServerError::storage("failed to update document", e))?;
    if !updated {
        return Err(ServerError::NotFound(format!("document {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/Documento/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let deleted = state
        .documentos
        .delete(&id)
        .await
        .map_err(|e| ServerError::storage("failed to delete document", e))?;
    if !deleted {
        return Err(ServerError::NotFound(format!("document {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/Documento/categoria/:categoria
pub async fn get_by_categoria(
    State(state): State<AppState>,
    Path(categoria): Path<String>,
) -> Result<Json<Vec<Documento>>> {
    let documentos = state
        .documentos
        .get_by_categoria(&categoria)
        .await
        .map_err(|e| ServerError::storage("failed to list documents by category", e))?;
    Ok(Json(documentos))
}

/// GET /api/Documento/tipo/:tipo
pub async fn get_by_tipo(
    State(state): State<AppState>,
    Path(tipo): Path<String>,
) -> Result<Json<Vec<Documento>>> {
    let documentos = state
        .documentos
        .get_by_tipo(&tipo)
        .await
        .map_err(|e| ServerError::storage("failed to list documents by type", e))?;
    Ok(Json(documentos))
}

/// GET /api/Documento/tag/:tag
pub async fn get_by_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Vec<Documento>>> {
    let documentos = state
        .documentos
        .get_by_tag(&tag)
        .await
        .map_err(|e| ServerError::storage("failed to list documents by tag", e))?;
    Ok(Json(documentos))
}
