/// FAQ API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
    validate,
};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chatbot_core::types::Faq;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

fn check_required(faq: &Faq) -> Result<()> {
    validate::require("pregunta", &faq.pregunta)?;
    validate::require("respuesta", &faq.respuesta)?;
    validate::require("categoria", &faq.categoria)?;
    Ok(())
}

/// GET /api/FAQ
pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Faq>>> {
    let faqs = state
        .faqs
        .get_all()
        .await
        .map_err(|e| ServerError::storage("failed to list faqs", e))?;
    Ok(Json(faqs))
}

/// GET /api/FAQ/:id
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Faq>> {
    let faq = state
        .faqs
        .get_by_id(&id)
        .await
        .map_err(|e| ServerError::storage("failed to fetch faq", e))?
        .ok_or_else(|| ServerError::NotFound(format!("faq {id} not found")))?;
    Ok(Json(faq))
}

/// POST /api/FAQ
pub async fn create(
    State(state): State<AppState>,
    Json(faq): Json<Faq>,
) -> Result<impl IntoResponse> {
    check_required(&faq)?;

    let faq = state
        .faqs
        .create(faq)
        .await
        .map_err(|e| ServerError::storage("failed to create faq", e))?;

    let location = format!("/api/FAQ/{}", faq.id.as_deref().unwrap_or_default());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(faq)))
}

/// PUT /api/FAQ/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(faq): Json<Faq>,
) -> Result<StatusCode> {
    check_required(&faq)?;

    let updated = state
        .faqs
        .update(&id, faq)
        .await
        .map_err(|e| ServerError::storage("failed to update faq", e))?;
    if !updated {
        return Err(ServerError::NotFound(format!("faq {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/FAQ/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let deleted = state
        .faqs
        .delete(&id)
        .await
        .map_err(|e| ServerError::storage("failed to delete faq", e))?;
    if !deleted {
        return Err(ServerError::NotFound(format!("faq {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/FAQ/search?query=...
///
/// A blank query is not an error; it returns the full list.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<Faq>>> {
    let faqs = state
        .faqs
        .search(&params.query)
        .await
        .map_err(|e| ServerError::storage("failed to search faqs", e))?;
    Ok(Json(faqs))
}
