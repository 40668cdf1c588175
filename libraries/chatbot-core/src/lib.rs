//! Chatbot Admin Core
//!
//! Domain types for the chatbot onboarding management backend.
//!
//! This crate defines the seven document entities (activities, configuration,
//! conversations, documents, FAQs, automated messages, users) and their
//! embedded substructures. Field labels follow the persisted document layout
//! (`titulo`, `fechaCreacion`, ...), so the same serde shape travels over
//! HTTP and into the store.
//!
//! # Example
//!
//! ```rust
//! use chatbot_core::types::Actividad;
//!
//! let actividad = Actividad {
//!     titulo: "Inducción".to_string(),
//!     descripcion: "Bienvenida al equipo".to_string(),
//!     dia: 1,
//!     obligatorio: true,
//!     ..Actividad::default()
//! };
//! assert!(actividad.id.is_none());
//! ```

#![forbid(unsafe_code)]

pub mod types;
