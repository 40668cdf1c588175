//! Chatbot Admin Storage
//!
//! Document-store access layer for the chatbot onboarding backend.
//!
//! One store per entity, each owning a typed handle to its collection.
//! Stores translate operations into single store-side queries and own no
//! business logic beyond identifier validation and timestamp stamping;
//! required-field validation belongs to the HTTP boundary.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatbot_storage::{connect, ActividadStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = connect("mongodb://localhost:27017", "chatbot_admin").await?;
//! let actividades = ActividadStore::new(&db);
//!
//! let todas = actividades.get_all().await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod error;

pub mod oid;

// Vertical slices, one per collection
pub mod actividades;
pub mod configuraciones;
pub mod conversaciones;
pub mod documentos;
pub mod faqs;
pub mod mensajes_automaticos;
pub mod usuarios;

pub use actividades::ActividadStore;
pub use configuraciones::ConfiguracionStore;
pub use conversaciones::ConversacionStore;
pub use documentos::DocumentoStore;
pub use error::{Result, StorageError};
pub use faqs::FaqStore;
pub use mensajes_automaticos::MensajeAutomaticoStore;
pub use usuarios::UsuarioStore;

use mongodb::{bson::doc, options::ClientOptions, Client, Database};

/// Connect to the document store and return a handle to `database`.
///
/// The deployment is pinged once before returning, so an unreachable or
/// misconfigured store fails here, at startup, rather than on the first
/// request.
///
/// # Errors
///
/// Returns [`StorageError::Connection`] if the URI does not parse or the
/// deployment does not answer the ping.
pub async fn connect(uri: &str, database: &str) -> Result<Database> {
    let mut options = ClientOptions::parse(uri)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;
    options.app_name = Some("chatbot-admin".to_string());

    let client =
        Client::with_options(options).map_err(|e| StorageError::Connection(e.to_string()))?;
    let db = client.database(database);

    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    tracing::info!(database, "document store connected");
    Ok(db)
}
