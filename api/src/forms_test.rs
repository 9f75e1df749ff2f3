use super::*;
use crate::testing::{self, FakeBackend};
use crate::types::MISSING_RESERVATION_REFS;

// =============================================================
// ConferencistaForm
// =============================================================

#[test]
fn conferencista_blank_optionals_become_none() {
    let form = ConferencistaForm {
        nombre: " Ada ".to_owned(),
        apellido: "Lovelace".to_owned(),
        email: "   ".to_owned(),
        telefono: String::new(),
        especialidad: "Cálculo".to_owned(),
    };
    let draft = form.to_draft().unwrap();
    assert_eq!(draft.nombre, "Ada");
    assert_eq!(draft.email, None);
    assert_eq!(draft.telefono, None);
    assert_eq!(draft.especialidad.as_deref(), Some("Cálculo"));
}

#[test]
fn conferencista_requires_names() {
    let form = ConferencistaForm { nombre: "Ada".to_owned(), ..Default::default() };
    assert_eq!(form.to_draft(), Err(MISSING_REQUIRED));
}

// =============================================================
// AuditorioForm
// =============================================================

#[test]
fn auditorio_capacity_must_be_positive_integer() {
    for raw in ["", "0", "-3", "12.5", "abc"] {
        let form = AuditorioForm { nombre: "Sala".to_owned(), capacidad: raw.to_owned(), ubicacion: String::new() };
        assert_eq!(form.to_draft(), Err(INVALID_CAPACITY), "{raw:?}");
    }
}

#[test]
fn auditorio_from_entity_round_trips_fields() {
    let row = Auditorio {
        id: 3,
        nombre: "Aula Magna".to_owned(),
        capacidad: 250,
        ubicacion: None,
        created_at: String::new(),
        updated_at: String::new(),
    };
    let form = AuditorioForm::from_entity(&row);
    assert_eq!(form.capacidad, "250");
    assert_eq!(form.ubicacion, "");
    assert_eq!(form.to_draft().unwrap(), AuditorioDraft { nombre: "Aula Magna".to_owned(), capacidad: 250, ubicacion: None });
}

// =============================================================
// ReservaForm
// =============================================================

#[test]
fn reserva_default_form_has_no_selection() {
    assert_eq!(ReservaForm::default().to_draft(), Err(MISSING_RESERVATION_REFS));
}

#[test]
fn reserva_form_builds_draft() {
    let form = ReservaForm { conferencista_id: 1, auditorio_id: 2, fecha: "2026-05-10T09:00".to_owned(), tema: "IA".to_owned() };
    let draft = form.to_draft().unwrap();
    assert_eq!(draft.tema.as_deref(), Some("IA"));
}

// =============================================================
// Reservations page fan-out
// =============================================================

#[tokio::test]
async fn load_reservations_page_joins_three_lists() {
    let backend = FakeBackend::default();
    let speaker = backend.seed_conferencista("Ada", "Lovelace");
    let venue = backend.seed_auditorio("Aula Magna", 300);
    backend.seed_reserva(speaker.id, venue.id, "2026-05-10T09:00");
    let (http, _, _) = testing::signed_in(&backend);

    let (reservas, options) = load_reservations_page(&http).await.unwrap();

    assert_eq!(reservas.len(), 1);
    assert_eq!(options.conferencistas, vec![speaker]);
    assert_eq!(options.auditorios, vec![venue]);
    assert_eq!(backend.request_count(), 3);
}

#[tokio::test]
async fn load_reservations_page_fails_as_a_whole() {
    let backend = FakeBackend::default();
    let (http, _, _) = testing::signed_in(&backend);
    backend.set_offline(true);
    assert!(load_reservations_page(&http).await.is_err());
}
