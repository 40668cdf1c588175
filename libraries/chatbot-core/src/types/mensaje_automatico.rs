/// Automated chatbot message domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled or triggered message the chatbot sends on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MensajeAutomatico {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub titulo: String,
    pub contenido: String,

    /// bienvenida, recordatorio, motivacional, informativo or reenganche.
    pub tipo: String,

    /// Onboarding day that triggers the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dia_gatillo: Option<i32>,

    /// alta, media or baja.
    pub prioridad: String,
    /// Delivery channels: chatbot, email.
    pub canal: Vec<String>,
    pub activo: bool,

    /// todos or inactivos.
    pub segmento: String,
    /// Send time, `HH:mm`.
    pub hora_envio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condicion: Option<String>,

    pub fecha_creacion: DateTime<Utc>,
    pub creado_por: String,
}

impl Default for MensajeAutomatico {
    fn default() -> Self {
        Self {
            id: None,
            titulo: String::new(),
            contenido: String::new(),
            tipo: String::new(),
            dia_gatillo: None,
            prioridad: String::new(),
            canal: Vec::new(),
            activo: true,
            segmento: String::new(),
            hora_envio: String::new(),
            condicion: None,
            fecha_creacion: Utc::now(),
            creado_por: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trigger_day_is_optional() {
        let mensaje: MensajeAutomatico = serde_json::from_value(json!({
            "titulo": "Bienvenida",
            "contenido": "¡Bienvenido al equipo!",
            "tipo": "bienvenida",
            "canal": ["chatbot", "email"]
        }))
        .unwrap();

        assert!(mensaje.dia_gatillo.is_none());
        assert!(mensaje.activo);

        let value = serde_json::to_value(&mensaje).unwrap();
        assert!(value.get("diaGatillo").is_none());
        assert_eq!(value["horaEnvio"], "");
    }
}
