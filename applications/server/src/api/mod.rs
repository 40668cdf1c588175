/// API route modules
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod actividades;
pub mod configuraciones;
pub mod conversaciones;
pub mod documentos;
pub mod faqs;
pub mod health;
pub mod mensajes_automaticos;
pub mod usuarios;

/// Build the application router.
///
/// Entity path segments keep the external labels the clients already use
/// (`/api/Actividad`, `/api/Conversacion/{id}/mensajes`, ...).
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        // Actividades
        .route(
            "/Actividad",
            get(actividades::get_all).post(actividades::create),
        )
        .route(
            "/Actividad/:id",
            get(actividades::get_by_id)
                .put(actividades::update)
                .delete(actividades::delete),
        )
        .route("/Actividad/dia/:dia", get(actividades::get_by_dia))
        .route("/Actividad/tipo/:tipo", get(actividades::get_by_tipo))
        .route("/Actividad/obligatorias", get(actividades::get_obligatorias))
        // Configuracion
        .route(
            "/Configuracion",
            get(configuraciones::get_all).post(configuraciones::create),
        )
        .route(
            "/Configuracion/:id",
            get(configuraciones::get_by_id)
                .put(configuraciones::update)
                .delete(configuraciones::delete),
        )
        .route(
            "/Configuracion/tipo/:tipo",
            get(configuraciones::get_by_tipo),
        )
        .route("/Configuracion/activas", get(configuraciones::get_activas))
        .route(
            "/Configuracion/nombre/:nombre",
            get(configuraciones::get_by_nombre),
        )
        // Conversaciones
        .route(
            "/Conversacion",
            get(conversaciones::get_all).post(conversaciones::create),
        )
        .route(
            "/Conversacion/:id",
            get(conversaciones::get_by_id)
                .put(conversaciones::update)
                .delete(conversaciones::delete),
        )
        .route(
            "/Conversacion/usuario/:usuario_id",
            get(conversaciones::get_by_usuario),
        )
        .route("/Conversacion/activas", get(conversaciones::get_activas))
        .route("/Conversacion/resueltas", get(conversaciones::get_resueltas))
        .route(
            "/Conversacion/:id/mensajes",
            axum::routing::post(conversaciones::add_mensaje),
        )
        // Documentos
        .route(
            "/Documento",
            get(documentos::get_all).post(documentos::create),
        )
        .route(
            "/Documento/:id",
            get(documentos::get_by_id)
                .put(documentos::update)
                .delete(documentos::delete),
        )
        .route(
            "/Documento/categoria/:categoria",
            get(documentos::get_by_categoria),
        )
        .route("/Documento/tipo/:tipo", get(documentos::get_by_tipo))
        .route("/Documento/tag/:tag", get(documentos::get_by_tag))
        // FAQs
        .route("/FAQ", get(faqs::get_all).post(faqs::create))
        .route(
            "/FAQ/:id",
            get(faqs::get_by_id).put(faqs::update).delete(faqs::delete),
        )
        .route("/FAQ/search", get(faqs::search))
        // Mensajes automaticos
        .route(
            "/MensajeAutomatico",
            get(mensajes_automaticos::get_all).post(mensajes_automaticos::create),
        )
        .route(
            "/MensajeAutomatico/:id",
            get(mensajes_automaticos::get_by_id)
                .put(mensajes_automaticos::update)
                .delete(mensajes_automaticos::delete),
        )
        .route(
            "/MensajeAutomatico/tipo/:tipo",
            get(mensajes_automaticos::get_by_tipo),
        )
        .route(
            "/MensajeAutomatico/activos",
            get(mensajes_automaticos::get_activos),
        )
        // Usuarios
        .route("/Usuario", get(usuarios::get_all).post(usuarios::create))
        .route(
            "/Usuario/:id",
            get(usuarios::get_by_id)
                .put(usuarios::update)
                .delete(usuarios::delete),
        )
        .route("/Usuario/email/:email", get(usuarios::get_by_email))
        .route("/Usuario/dni/:dni", get(usuarios::get_by_dni))
        .route(
            "/Usuario/onboarding/:estado",
            get(usuarios::get_by_estado_onboarding),
        )
        .route("/Usuario/activos", get(usuarios::get_activos))
        .route(
            "/Usuario/departamento/:departamento",
            get(usuarios::get_by_departamento),
        );

    Router::new()
        .nest("/api", api)
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
