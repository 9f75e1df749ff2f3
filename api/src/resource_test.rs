use super::*;
use crate::testing::{self, FakeBackend};

fn speaker_draft(nombre: &str) -> ConferencistaDraft {
    ConferencistaDraft {
        nombre: nombre.to_owned(),
        apellido: "Hopper".to_owned(),
        email: Some("grace@example.com".to_owned()),
        telefono: None,
        especialidad: Some("Compiladores".to_owned()),
    }
}

// =============================================================
// Round trips against the fake backend
// =============================================================

#[tokio::test]
async fn create_then_list_includes_server_assigned_row() {
    let backend = FakeBackend::default();
    let (http, _, _) = testing::signed_in(&backend);
    let speakers = http.resource::<Conferencista>();

    let created = speakers.create(&speaker_draft("Grace")).await.unwrap();
    let listed = speakers.list().await.unwrap();

    assert!(created.id > 0);
    let row = listed.iter().find(|c| c.id == created.id).unwrap();
    assert_eq!(row.nombre, "Grace");
    assert_eq!(row.apellido, "Hopper");
    assert_eq!(row.email.as_deref(), Some("grace@example.com"));
    assert_eq!(row.especialidad.as_deref(), Some("Compiladores"));
}

#[tokio::test]
async fn delete_then_list_excludes_row() {
    let backend = FakeBackend::default();
    let kept = backend.seed_auditorio("Sala A", 40);
    let gone = backend.seed_auditorio("Sala B", 80);
    let (http, _, _) = testing::signed_in(&backend);
    let venues = http.resource::<Auditorio>();

    venues.delete(gone.id).await.unwrap();
    let ids: Vec<i64> = venues.list().await.unwrap().iter().map(Entity::id).collect();

    assert_eq!(ids, vec![kept.id]);
}

#[tokio::test]
async fn update_returns_server_representation() {
    let backend = FakeBackend::default();
    let venue = backend.seed_auditorio("Sala A", 40);
    let (http, _, _) = testing::signed_in(&backend);

    let draft = AuditorioDraft { nombre: "Sala A+".to_owned(), capacidad: 60, ubicacion: Some("Piso 2".to_owned()) };
    let updated = http.resource::<Auditorio>().update(venue.id, &draft).await.unwrap();

    assert_eq!(updated.id, venue.id);
    assert_eq!(updated.capacidad, 60);
    assert_eq!(updated.ubicacion.as_deref(), Some("Piso 2"));
}

#[tokio::test]
async fn reservation_embeds_referenced_rows() {
    let backend = FakeBackend::default();
    let speaker = backend.seed_conferencista("Ada", "Lovelace");
    let venue = backend.seed_auditorio("Aula Magna", 300);
    let (http, _, _) = testing::signed_in(&backend);

    let draft = ReservaDraft {
        conferencista_id: speaker.id,
        auditorio_id: venue.id,
        fecha: "2026-05-10T09:00".to_owned(),
        tema: Some("Máquinas analíticas".to_owned()),
    };
    let created = http.resource::<Reserva>().create(&draft).await.unwrap();

    assert_eq!(created.conferencista, speaker);
    assert_eq!(created.auditorio, venue);
}

// =============================================================
// Client-side preconditions
// =============================================================

#[tokio::test]
async fn reservation_with_zero_speaker_never_hits_network() {
    let backend = FakeBackend::default();
    let (http, _, _) = testing::signed_in(&backend);

    let draft = ReservaDraft { conferencista_id: 0, auditorio_id: 3, fecha: "2026-05-10T09:00".to_owned(), tema: None };
    let err = http.resource::<Reserva>().create(&draft).await.unwrap_err();

    assert_eq!(err, ApiError::Validation(crate::types::MISSING_RESERVATION_REFS));
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn save_update_on_reservations_is_refused_locally() {
    let backend = FakeBackend::default();
    let (http, _, _) = testing::signed_in(&backend);

    let draft = ReservaDraft { conferencista_id: 1, auditorio_id: 2, fecha: "2026-05-10T09:00".to_owned(), tema: None };
    let err = http.resource::<Reserva>().save(SaveMode::Update(5), &draft).await.unwrap_err();

    assert_eq!(err, ApiError::Validation(READ_ONLY_COLLECTION));
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn save_dispatches_by_mode() {
    let backend = FakeBackend::default();
    let (http, _, _) = testing::signed_in(&backend);
    let speakers = http.resource::<Conferencista>();

    let created = speakers.save(SaveMode::Create, &speaker_draft("Grace")).await.unwrap();
    let renamed = speakers.save(SaveMode::Update(created.id), &speaker_draft("Gracie")).await.unwrap();

    assert_eq!(renamed.id, created.id);
    assert_eq!(renamed.nombre, "Gracie");
    let methods: Vec<Method> = backend.requests().iter().map(|r| r.method).collect();
    assert_eq!(methods, vec![Method::Post, Method::Put]);
}
