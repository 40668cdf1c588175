/// Boundary validation tests
///
/// Required-field rejection happens before any store access, so this suite
/// runs without a live deployment.
mod common;

use axum::http::StatusCode;
use common::{body_json, get_request, json_request, test_app};
use serde_json::json;
use tower::util::ServiceExt;

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_activity_rejects_whitespace_title() {
    let app = test_app().await;

    let request = json_request(
        "POST",
        "/api/Actividad",
        json!({ "titulo": "   ", "descripcion": "Bienvenida" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("titulo"));
    // The fault description only appears on 500 responses.
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn create_activity_rejects_missing_description() {
    let app = test_app().await;

    // Absent fields land as their defaults, so "missing" and "blank" both
    // surface as the same rejection.
    let request = json_request("POST", "/api/Actividad", json!({ "titulo": "Inducción" }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("descripcion"));
}

#[tokio::test]
async fn update_validates_before_delegation() {
    let app = test_app().await;

    // Even a malformed id is not looked at until the payload passes.
    let request = json_request(
        "PUT",
        "/api/Actividad/not-an-id",
        json!({ "titulo": "", "descripcion": "x" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_configuration_requires_name_and_type() {
    let app = test_app().await;

    for payload in [
        json!({ "nombre": " ", "tipo": "chatbot" }),
        json!({ "nombre": "horario", "tipo": "" }),
    ] {
        let request = json_request("POST", "/api/Configuracion", payload);
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn create_conversation_requires_user_id() {
    let app = test_app().await;

    let request = json_request("POST", "/api/Conversacion", json!({ "usuarioId": "  " }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("usuarioId"));
}

#[tokio::test]
async fn create_document_requires_title_and_url() {
    let app = test_app().await;

    for payload in [
        json!({ "titulo": "", "url": "https://example.com/manual.pdf" }),
        json!({ "titulo": "Manual", "url": "   " }),
    ] {
        let request = json_request("POST", "/api/Documento", payload);
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn create_faq_requires_question_answer_and_category() {
    let app = test_app().await;

    for payload in [
        json!({ "pregunta": " ", "respuesta": "r", "categoria": "c" }),
        json!({ "pregunta": "p", "respuesta": "\t", "categoria": "c" }),
        json!({ "pregunta": "p", "respuesta": "r" }),
    ] {
        let request = json_request("POST", "/api/FAQ", payload);
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn create_automated_message_requires_content() {
    let app = test_app().await;

    let request = json_request(
        "POST",
        "/api/MensajeAutomatico",
        json!({ "titulo": "Bienvenida", "contenido": "" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_user_requires_email_and_name() {
    let app = test_app().await;

    for payload in [
        json!({ "email": "", "nombre": "Ana" }),
        json!({ "email": "ana.perez@example.com", "nombre": "   " }),
    ] {
        let request = json_request("POST", "/api/Usuario", payload);
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn append_message_rejects_blank_content() {
    let app = test_app().await;

    let request = json_request(
        "POST",
        "/api/Conversacion/64b5f0a1c2d3e4f5a6b7c8d9/mensajes",
        json!({ "tipo": "usuario", "contenido": "   " }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("contenido"));
}
