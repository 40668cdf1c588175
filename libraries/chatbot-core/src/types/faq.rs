/// Frequently asked question domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A frequently asked question the chatbot answers from.
///
/// `subcategoria`, `prioridad`, `creadoPor` and `respuestaLarga` serialize as
/// explicit nulls when unset; the persisted documents carry them that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Faq {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub pregunta: String,
    /// Short answer.
    pub respuesta: String,
    pub categoria: String,
    pub subcategoria: Option<String>,

    /// Exact-match search keywords.
    pub palabras_clave: Vec<String>,

    /// alta, media or baja.
    pub prioridad: Option<String>,
    pub activa: bool,

    /// How often the chatbot served this answer.
    pub veces_usada: i32,
    pub rating: f64,

    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: DateTime<Utc>,
    pub creado_por: Option<String>,

    /// Extended answer, when the short one is not enough.
    pub respuesta_larga: Option<String>,
    pub documentos_relacionados: Vec<String>,
    pub actividades_relacionadas: Vec<String>,
}

impl Default for Faq {
    fn default() -> Self {
        Self {
            id: None,
            pregunta: String::new(),
            respuesta: String::new(),
            categoria: String::new(),
            subcategoria: None,
            palabras_clave: Vec::new(),
            prioridad: None,
            activa: true,
            veces_usada: 0,
            rating: 0.0,
            fecha_creacion: Utc::now(),
            fecha_actualizacion: Utc::now(),
            creado_por: None,
            respuesta_larga: None,
            documentos_relacionados: Vec::new(),
            actividades_relacionadas: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_nullables_serialize_as_null() {
        let value = serde_json::to_value(Faq::default()).unwrap();
        assert_eq!(value["subcategoria"], serde_json::Value::Null);
        assert_eq!(value["respuestaLarga"], serde_json::Value::Null);
        // ... while the identifier is omitted entirely.
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn deserializes_with_defaults() {
        let faq: Faq = serde_json::from_value(json!({
            "pregunta": "¿Dónde está el comedor?",
            "respuesta": "En el piso 2.",
            "categoria": "facilidades",
            "palabrasClave": ["comedor", "almuerzo"]
        }))
        .unwrap();

        assert!(faq.activa);
        assert_eq!(faq.veces_usada, 0);
        assert_eq!(faq.rating, 0.0);
        assert_eq!(faq.palabras_clave, vec!["comedor", "almuerzo"]);
    }
}
