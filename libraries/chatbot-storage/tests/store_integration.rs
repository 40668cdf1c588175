/// Document-store integration suite.
///
/// Live tests are skipped unless `MONGODB_URI` points at a reachable
/// deployment (e.g. `MONGODB_URI=mongodb://localhost:27017 cargo test`).
/// Every live test works in its own database, dropped on entry.
use chatbot_core::types::{Actividad, Configuracion, Conversacion, Faq, Mensaje, Usuario};
use chatbot_storage::{
    oid, ActividadStore, ConfiguracionStore, ConversacionStore, FaqStore, UsuarioStore,
};
use serde_json::json;

async fn live_db(db_name: &str) -> Option<mongodb::Database> {
    let uri = std::env::var("MONGODB_URI").ok()?;
    let client = mongodb::Client::with_uri_str(&uri).await.unwrap();
    let db = client.database(db_name);
    db.drop().await.unwrap();
    Some(db)
}

fn actividad(titulo: &str) -> Actividad {
    Actividad {
        titulo: titulo.to_string(),
        descripcion: "Bienvenida".to_string(),
        dia: 1,
        obligatorio: true,
        ..Actividad::default()
    }
}

#[tokio::test]
async fn malformed_ids_short_circuit_without_store_access() {
    // Lazily-connecting client against a closed port: if any of these
    // operations reached the store they would fault, so the instant
    // Ok(None)/Ok(false) outcomes prove the id check happens first.
    let client = mongodb::Client::with_uri_str("mongodb://127.0.0.1:1")
        .await
        .unwrap();
    let db = client.database("chatbot_never_touched");

    let actividades = ActividadStore::new(&db);
    assert!(actividades.get_by_id("nope").await.unwrap().is_none());
    assert!(!actividades.update("nope", actividad("x")).await.unwrap());
    assert!(!actividades.delete("").await.unwrap());

    let conversaciones = ConversacionStore::new(&db);
    assert!(!conversaciones
        .add_mensaje("not-an-id", Mensaje::default())
        .await
        .unwrap());
}

#[tokio::test]
async fn create_then_get_round_trip() {
    let Some(db) = live_db("chatbot_store_roundtrip").await else {
        eprintln!("MONGODB_URI not set, skipping");
        return;
    };
    let store = ActividadStore::new(&db);

    let created = store.create(actividad("Inducción")).await.unwrap();
    let id = created.id.clone().expect("id assigned on create");
    assert_eq!(oid::normalize(&id).as_deref(), Some(id.as_str()));

    let fetched = store.get_by_id(&id).await.unwrap().expect("persisted");
    assert_eq!(fetched, created);

    // Case variants of the id address the same document.
    let upper = id.to_uppercase();
    assert!(store.get_by_id(&upper).await.unwrap().is_some());
}

#[tokio::test]
async fn opaque_configuration_payload_round_trips() {
    let Some(db) = live_db("chatbot_store_configuracion").await else {
        eprintln!("MONGODB_URI not set, skipping");
        return;
    };
    let store = ConfiguracionStore::new(&db);

    let payload = json!({
        "mensajeBienvenida": "Hola",
        "reintentos": 3,
        "horario": { "inicio": "08:00", "fin": "18:00" }
    });
    let created = store
        .create(Configuracion {
            nombre: "chatbot-horario".to_string(),
            tipo: "chatbot".to_string(),
            configuracion: payload.clone(),
            ..Configuracion::default()
        })
        .await
        .unwrap();

    let fetched = store
        .get_by_nombre("chatbot-horario")
        .await
        .unwrap()
        .expect("addressable by name");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.configuracion, payload);
}

#[tokio::test]
async fn update_pins_identifier_and_replaces() {
    let Some(db) = live_db("chatbot_store_update").await else {
        eprintln!("MONGODB_URI not set, skipping");
        return;
    };
    let store = ActividadStore::new(&db);

    let created = store.create(actividad("Inducción")).await.unwrap();
    let id = created.id.clone().unwrap();

    // The replacement carries a different id; it must not win.
    let mut replacement = actividad("Inducción actualizada");
    replacement.id = Some(oid::generate());
    replacement.obligatorio = false;

    assert!(store.update(&id, replacement).await.unwrap());

    let fetched = store.get_by_id(&id).await.unwrap().unwrap();
    assert_eq!(fetched.id.as_deref(), Some(id.as_str()));
    assert_eq!(fetched.titulo, "Inducción actualizada");
    assert!(!fetched.obligatorio);
}

#[tokio::test]
async fn identical_replacement_reports_not_modified() {
    let Some(db) = live_db("chatbot_store_noop").await else {
        eprintln!("MONGODB_URI not set, skipping");
        return;
    };
    let store = ActividadStore::new(&db);

    let created = store.create(actividad("Inducción")).await.unwrap();
    let id = created.id.clone().unwrap();

    // Replacing a document with itself modifies nothing, and the store
    // reports it that way: the caller cannot tell it from not-found.
    let stored = store.get_by_id(&id).await.unwrap().unwrap();
    assert!(!store.update(&id, stored).await.unwrap());
}

#[tokio::test]
async fn unknown_ids_mutate_nothing() {
    let Some(db) = live_db("chatbot_store_unknown").await else {
        eprintln!("MONGODB_URI not set, skipping");
        return;
    };
    let store = ActividadStore::new(&db);

    store.create(actividad("Inducción")).await.unwrap();
    let phantom = oid::generate();

    assert!(!store.update(&phantom, actividad("otra")).await.unwrap());
    assert!(!store.delete(&phantom).await.unwrap());
    assert_eq!(store.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_is_effective_once() {
    let Some(db) = live_db("chatbot_store_delete").await else {
        eprintln!("MONGODB_URI not set, skipping");
        return;
    };
    let store = ActividadStore::new(&db);

    let created = store.create(actividad("Inducción")).await.unwrap();
    let id = created.id.unwrap();

    assert!(store.delete(&id).await.unwrap());
    assert!(!store.delete(&id).await.unwrap());
    assert!(store.get_by_id(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn mandatory_activity_scenario() {
    let Some(db) = live_db("chatbot_store_obligatorias").await else {
        eprintln!("MONGODB_URI not set, skipping");
        return;
    };
    let store = ActividadStore::new(&db);

    let mut opcional = actividad("Visita guiada");
    opcional.obligatorio = false;
    store.create(opcional).await.unwrap();
    let created = store.create(actividad("Inducción")).await.unwrap();
    let id = created.id.unwrap();

    let obligatorias = store.get_obligatorias().await.unwrap();
    assert_eq!(obligatorias.len(), 1);
    assert_eq!(obligatorias[0].id.as_deref(), Some(id.as_str()));

    assert!(store.delete(&id).await.unwrap());
    assert!(store.get_obligatorias().await.unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_appends_preserve_all_messages() {
    let Some(db) = live_db("chatbot_store_appends").await else {
        eprintln!("MONGODB_URI not set, skipping");
        return;
    };
    let store = ConversacionStore::new(&db);

    let created = store
        .create(Conversacion {
            usuario_id: "u-1".to_string(),
            ..Conversacion::default()
        })
        .await
        .unwrap();
    let id = created.id.unwrap();

    let mut handles = Vec::new();
    for n in 0..10 {
        let store = store.clone();
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            store
                .add_mensaje(
                    &id,
                    Mensaje {
                        tipo: "usuario".to_string(),
                        contenido: format!("mensaje {n}"),
                        ..Mensaje::default()
                    },
                )
                .await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().unwrap());
    }

    let fetched = store.get_by_id(&id).await.unwrap().unwrap();
    assert_eq!(fetched.mensajes.len(), 10, "no append may be lost");

    // The conversation timestamp is whichever append committed last.
    assert!(fetched
        .mensajes
        .iter()
        .any(|m| m.timestamp == fetched.fecha_ultima_mensaje));
}

#[tokio::test]
async fn faq_search_unions_without_duplicates() {
    let Some(db) = live_db("chatbot_store_faqs").await else {
        eprintln!("MONGODB_URI not set, skipping");
        return;
    };
    let store = FaqStore::new(&db);

    let faq = |pregunta: &str, respuesta: &str, palabras: &[&str]| Faq {
        pregunta: pregunta.to_string(),
        respuesta: respuesta.to_string(),
        categoria: "general".to_string(),
        palabras_clave: palabras.iter().map(|s| s.to_string()).collect(),
        ..Faq::default()
    };

    // Matches via the question, the answer, the keyword list, and (for the
    // first one) two branches at once.
    store
        .create(faq("Horario de oficina", "De 9 a 18.", &["horario"]))
        .await
        .unwrap();
    store
        .create(faq("¿Cuándo abren?", "El horario es de 9 a 18.", &[]))
        .await
        .unwrap();
    store
        .create(faq("¿Cuándo cierran?", "A las 18.", &["horario"]))
        .await
        .unwrap();
    store
        .create(faq("¿Dónde está el comedor?", "En el piso 2.", &["comedor"]))
        .await
        .unwrap();

    let hits = store.search("horario").await.unwrap();
    assert_eq!(hits.len(), 3);
    let mut ids: Vec<_> = hits.iter().map(|f| f.id.clone().unwrap()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3, "multi-branch matches come back once");

    // Blank query behaves as the unfiltered listing.
    let blank = store.search("   ").await.unwrap();
    assert_eq!(blank.len(), store.get_all().await.unwrap().len());
}

#[tokio::test]
async fn user_point_lookups() {
    let Some(db) = live_db("chatbot_store_usuarios").await else {
        eprintln!("MONGODB_URI not set, skipping");
        return;
    };
    let store = UsuarioStore::new(&db);

    store
        .create(Usuario {
            nombre: "Ana".to_string(),
            email: "ana.perez@example.com".to_string(),
            dni: "12345678".to_string(),
            departamento: "TI".to_string(),
            ..Usuario::default()
        })
        .await
        .unwrap();

    let por_email = store
        .get_by_email("ana.perez@example.com")
        .await
        .unwrap()
        .expect("addressable by email");
    assert_eq!(por_email.nombre, "Ana");

    assert!(store.get_by_dni("12345678").await.unwrap().is_some());
    assert!(store.get_by_dni("99999999").await.unwrap().is_none());
    assert_eq!(store.get_by_departamento("TI").await.unwrap().len(), 1);
}
