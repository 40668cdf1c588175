/// System configuration domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named configuration entry.
///
/// The `configuracion` payload is an arbitrary nested key-value document; it
/// is opaque to every layer of the backend and passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuracion {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// chatbot, notificaciones, seguridad or general.
    pub tipo: String,
    pub nombre: String,
    pub descripcion: String,

    /// Opaque configuration payload.
    pub configuracion: serde_json::Value,

    pub activo: bool,

    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: DateTime<Utc>,

    /// User that last touched the entry.
    pub modificado_por: String,
}

impl Default for Configuracion {
    fn default() -> Self {
        Self {
            id: None,
            tipo: String::new(),
            nombre: String::new(),
            descripcion: String::new(),
            configuracion: serde_json::Value::Object(serde_json::Map::new()),
            activo: true,
            fecha_creacion: Utc::now(),
            fecha_actualizacion: Utc::now(),
            modificado_por: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn opaque_payload_round_trips_untouched() {
        let payload = json!({
            "mensajeBienvenida": "Hola",
            "reintentos": 3,
            "horario": { "inicio": "08:00", "fin": "18:00" }
        });
        let entrada: Configuracion = serde_json::from_value(json!({
            "nombre": "chatbot-horario",
            "tipo": "chatbot",
            "configuracion": payload.clone()
        }))
        .unwrap();

        assert_eq!(entrada.configuracion, payload);
        assert!(entrada.activo, "activo defaults to true");

        let out = serde_json::to_value(&entrada).unwrap();
        assert_eq!(out["configuracion"], payload);
    }

    #[test]
    fn payload_defaults_to_empty_object() {
        let entrada: Configuracion = serde_json::from_str("{}").unwrap();
        assert_eq!(entrada.configuracion, json!({}));
    }
}
