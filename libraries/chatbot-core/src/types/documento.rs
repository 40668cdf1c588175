/// Onboarding document domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document (or web resource) surfaced to new hires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Documento {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub titulo: String,
    pub descripcion: String,
    pub url: String,

    /// PDF, Formulario Web, Portal Web or Mapa Interactivo.
    pub tipo: String,
    pub categoria: String,
    pub subcategoria: String,
    pub tags: Vec<String>,

    /// Emoji shown next to the document.
    pub icono: String,
    #[serde(rename = "tamaño", skip_serializing_if = "Option::is_none")]
    pub tamano: Option<String>,
    pub idioma: String,
    pub version: String,
    /// Target audience.
    pub publico: String,
    pub obligatorio: bool,

    pub fecha_publicacion: DateTime<Utc>,
    pub fecha_actualizacion: DateTime<Utc>,
    pub autor: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub descargas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accesos: Option<i32>,
    pub valoracion: i32,
}

impl Default for Documento {
    fn default() -> Self {
        Self {
            id: None,
            titulo: String::new(),
            descripcion: String::new(),
            url: String::new(),
            tipo: String::new(),
            categoria: String::new(),
            subcategoria: String::new(),
            tags: Vec::new(),
            icono: String::new(),
            tamano: None,
            idioma: String::new(),
            version: String::new(),
            publico: String::new(),
            obligatorio: false,
            fecha_publicacion: Utc::now(),
            fecha_actualizacion: Utc::now(),
            autor: String::new(),
            descargas: None,
            accesos: None,
            valoracion: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_field_keeps_its_accented_label() {
        let documento = Documento {
            titulo: "Manual de bienvenida".to_string(),
            tamano: Some("2.4 MB".to_string()),
            ..Documento::default()
        };

        let value = serde_json::to_value(&documento).unwrap();
        assert_eq!(value["tamaño"], "2.4 MB");
        assert!(value.get("tamano").is_none());

        let back: Documento = serde_json::from_value(value).unwrap();
        assert_eq!(back.tamano.as_deref(), Some("2.4 MB"));
    }

    #[test]
    fn counters_are_omitted_until_set() {
        let value = serde_json::to_value(Documento::default()).unwrap();
        assert!(value.get("descargas").is_none());
        assert!(value.get("accesos").is_none());
        assert_eq!(value["valoracion"], 0);
    }
}
