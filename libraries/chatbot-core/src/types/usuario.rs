/// User domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A new hire going through onboarding.
///
/// The embedded records ([`Direccion`], [`Supervisor`], [`Preferencias`],
/// [`Estadisticas`]) have no identity or lifecycle of their own; they live
/// and die with the user document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Usuario {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub nombre: String,
    pub apellidos: String,
    pub nombre_completo: String,
    pub email: String,
    pub telefono: String,
    pub dni: String,

    pub fecha_nacimiento: DateTime<Utc>,
    pub edad: i32,
    pub genero: String,
    pub estado_civil: String,
    pub direccion: Direccion,

    // Position
    pub area: String,
    pub departamento: String,
    pub puesto: String,
    pub nivel: String,
    pub tipo_contrato: String,
    pub fecha_ingreso: DateTime<Utc>,
    pub dias_desde_ingreso: i32,
    pub supervisor: Supervisor,

    // Onboarding progress
    pub estado_onboarding: String,
    /// Percentage, 0-100.
    pub progreso_onboarding: i32,
    pub actividades_completadas: Vec<String>,
    pub actividades_pendientes: Vec<String>,
    pub documentos_entregados: Vec<String>,
    pub documentos_pendientes: Vec<String>,
    pub cursos_asignados: Vec<String>,
    pub cursos_completados: Vec<String>,
    pub certificaciones: Vec<String>,
    pub favoritos_chat: Vec<String>,

    pub preferencias: Preferencias,
    pub estadisticas: Estadisticas,

    pub activo: bool,
    pub verificado: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primer_login: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultimo_login: Option<DateTime<Utc>>,

    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: DateTime<Utc>,
    pub creado_por: String,
}

impl Default for Usuario {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            apellidos: String::new(),
            nombre_completo: String::new(),
            email: String::new(),
            telefono: String::new(),
            dni: String::new(),
            fecha_nacimiento: Utc::now(),
            edad: 0,
            genero: String::new(),
            estado_civil: String::new(),
            direccion: Direccion::default(),
            area: String::new(),
            departamento: String::new(),
            puesto: String::new(),
            nivel: String::new(),
            tipo_contrato: String::new(),
            fecha_ingreso: Utc::now(),
            dias_desde_ingreso: 0,
            supervisor: Supervisor::default(),
            estado_onboarding: String::new(),
            progreso_onboarding: 0,
            actividades_completadas: Vec::new(),
            actividades_pendientes: Vec::new(),
            documentos_entregados: Vec::new(),
            documentos_pendientes: Vec::new(),
            cursos_asignados: Vec::new(),
            cursos_completados: Vec::new(),
            certificaciones: Vec::new(),
            favoritos_chat: Vec::new(),
            preferencias: Preferencias::default(),
            estadisticas: Estadisticas::default(),
            activo: true,
            verificado: false,
            primer_login: None,
            ultimo_login: None,
            fecha_creacion: Utc::now(),
            fecha_actualizacion: Utc::now(),
            creado_por: String::new(),
        }
    }
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Direccion {
    pub calle: String,
    pub distrito: String,
    pub ciudad: String,
    pub pais: String,
    pub codigo_postal: String,
}

/// The user's supervisor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supervisor {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub puesto: String,
}

/// Notification and UI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferencias {
    pub notificaciones: bool,
    pub notificaciones_email: bool,
    pub notificaciones_push: bool,
    pub idioma: String,
    pub tema_oscuro: bool,
}

impl Default for Preferencias {
    fn default() -> Self {
        Self {
            notificaciones: true,
            notificaciones_email: true,
            notificaciones_push: true,
            idioma: "es".to_string(),
            tema_oscuro: false,
        }
    }
}

/// Chatbot usage counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Estadisticas {
    pub mensajes_enviados: i32,
    pub preguntas_realizadas: i32,
    pub documentos_descargados: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultima_interaccion: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satisfaccion_promedio: Option<f64>,
}
