/// Shared application state
use chatbot_storage::{
    ActividadStore, ConfiguracionStore, ConversacionStore, DocumentoStore, FaqStore,
    MensajeAutomaticoStore, UsuarioStore,
};
use mongodb::Database;

/// Application state shared across all handlers.
///
/// One store per entity, constructed once from the shared database handle
/// and handed to handlers explicitly — there is no ambient registry.
/// Collection handles are cheap shared references, so cloning the state per
/// request clones no connections.
#[derive(Clone)]
pub struct AppState {
    pub actividades: ActividadStore,
    pub configuraciones: ConfiguracionStore,
    pub conversaciones: ConversacionStore,
    pub documentos: DocumentoStore,
    pub faqs: FaqStore,
    pub mensajes_automaticos: MensajeAutomaticoStore,
    pub usuarios: UsuarioStore,
}

impl AppState {
    pub fn new(db: &Database) -> Self {
        Self {
            actividades: ActividadStore::new(db),
            configuraciones: ConfiguracionStore::new(db),
            conversaciones: ConversacionStore::new(db),
            documentos: DocumentoStore::new(db),
            faqs: FaqStore::new(db),
            mensajes_automaticos: MensajeAutomaticoStore::new(db),
            usuarios: UsuarioStore::new(db),
        }
    }
}
