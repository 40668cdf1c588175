mod actividad;
mod configuracion;
mod conversacion;
mod documento;
mod faq;
mod mensaje_automatico;
mod usuario;

pub use actividad::Actividad;
pub use configuracion::Configuracion;
pub use conversacion::{Conversacion, Mensaje};
pub use documento::Documento;
pub use faq::Faq;
pub use mensaje_automatico::MensajeAutomatico;
pub use usuario::{Direccion, Estadisticas, Preferencias, Supervisor, Usuario};
