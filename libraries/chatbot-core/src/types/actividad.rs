/// Onboarding activity domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled onboarding activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Actividad {
    /// Store identifier, absent until first persisted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub titulo: String,
    pub descripcion: String,

    /// Onboarding day the activity is scheduled on.
    pub dia: i32,
    pub duracion_horas: f64,

    /// Start time, `HH:mm`.
    pub hora_inicio: String,
    /// End time, `HH:mm`.
    pub hora_fin: String,

    pub lugar: String,
    /// presencial, virtual, hibrido or flexible.
    pub modalidad: String,
    /// induccion, logistica, capacitacion, reunion, evaluacion, taller or integracion.
    pub tipo: String,
    pub categoria: String,

    pub responsable: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_responsable: Option<String>,

    pub capacidad_maxima: i32,
    pub obligatorio: bool,

    /// Materials participants must bring.
    pub materiales_necesarios: Vec<String>,
    /// Materials handed out during the activity.
    pub materiales_proporcionados: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparacion_previa: Option<String>,

    /// Ids of follow-up activities.
    pub actividades_siguientes: Vec<String>,
    pub estado: String,

    /// Stamped by the access layer at create time.
    pub fecha_creacion: DateTime<Utc>,
}

impl Default for Actividad {
    fn default() -> Self {
        Self {
            id: None,
            titulo: String::new(),
            descripcion: String::new(),
            dia: 0,
            duracion_horas: 0.0,
            hora_inicio: String::new(),
            hora_fin: String::new(),
            lugar: String::new(),
            modalidad: String::new(),
            tipo: String::new(),
            categoria: String::new(),
            responsable: String::new(),
            email_responsable: None,
            capacidad_maxima: 0,
            obligatorio: false,
            materiales_necesarios: Vec::new(),
            materiales_proporcionados: Vec::new(),
            preparacion_previa: None,
            actividades_siguientes: Vec::new(),
            estado: "activo".to_string(),
            fecha_creacion: Utc::now(),
        }
    }
}
