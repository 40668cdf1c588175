/// Chatbot conversation domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chatbot conversation: an append-only list of messages owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Conversacion {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub usuario_id: String,

    /// Ordered message history. Appends happen store-side, never by
    /// read-modify-write.
    pub mensajes: Vec<Mensaje>,

    pub fecha_inicio: DateTime<Utc>,
    /// Refreshed on every update and message append.
    pub fecha_ultima_mensaje: DateTime<Utc>,

    pub activa: bool,
    /// Satisfaction score, if the user rated the conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satisfaccion: Option<i32>,
    pub resuelto: bool,
}

impl Default for Conversacion {
    fn default() -> Self {
        Self {
            id: None,
            usuario_id: String::new(),
            mensajes: Vec::new(),
            fecha_inicio: Utc::now(),
            fecha_ultima_mensaje: Utc::now(),
            activa: true,
            satisfaccion: None,
            resuelto: false,
        }
    }
}

/// One message inside a conversation. No identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mensaje {
    /// usuario or bot.
    pub tipo: String,
    pub contenido: String,
    pub timestamp: DateTime<Utc>,
    /// FAQ the bot answered from, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_relacionada: Option<String>,
}

impl Default for Mensaje {
    fn default() -> Self {
        Self {
            tipo: String::new(),
            contenido: String::new(),
            timestamp: Utc::now(),
            faq_relacionada: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_document_layout() {
        let conversacion: Conversacion =
            serde_json::from_value(json!({ "usuarioId": "u-123" })).unwrap();

        assert_eq!(conversacion.usuario_id, "u-123");
        assert!(conversacion.mensajes.is_empty());
        assert!(conversacion.activa);
        assert!(!conversacion.resuelto);
        assert!(conversacion.satisfaccion.is_none());
    }

    #[test]
    fn mensaje_round_trip() {
        let mensaje = Mensaje {
            tipo: "bot".to_string(),
            contenido: "Hola, ¿en qué puedo ayudarte?".to_string(),
            faq_relacionada: Some("64b5f0a1c2d3e4f5a6b7c8d9".to_string()),
            ..Mensaje::default()
        };

        let value = serde_json::to_value(&mensaje).unwrap();
        assert_eq!(value["faqRelacionada"], "64b5f0a1c2d3e4f5a6b7c8d9");

        let back: Mensaje = serde_json::from_value(value).unwrap();
        assert_eq!(back, mensaje);
    }
}
