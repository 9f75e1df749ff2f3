//! In-memory fake of the REST API for unit tests.
//!
//! [`FakeBackend`] implements [`Transport`] by routing requests against
//! in-memory tables, enforcing bearer auth the way the real server does and
//! refusing to delete rows still referenced by a reservation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::token_store::MemoryTokenStore;
use crate::transport::{HttpRequest, HttpResponse, Method, Navigator, Transport};
use crate::types::{
    Auditorio, AuditorioDraft, Conferencista, ConferencistaDraft, Reserva, ReservaDraft, User,
};

pub const BASE_URL: &str = "http://fake.test/api";
pub const DEMO_EMAIL: &str = "demo@demo.com";
pub const DEMO_CLAVE: &str = "Demo1234!";
pub const DEMO_TOKEN: &str = "t1";
const STAMP: &str = "2026-01-01T00:00:00.000Z";

pub type TestClient = HttpClient<FakeBackend, MemoryTokenStore, RecordingNavigator>;

pub fn demo_user() -> User {
    User { id: 1, nombre: "Demo".to_owned(), apellido: "User".to_owned(), email: DEMO_EMAIL.to_owned() }
}

#[derive(Default)]
struct State {
    requests: Vec<HttpRequest>,
    valid_token: Option<String>,
    offline: bool,
    next_id: i64,
    conferencistas: Vec<Conferencista>,
    auditorios: Vec<Auditorio>,
    reservas: Vec<Reserva>,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Rc<RefCell<State>>,
}

impl FakeBackend {
    /// Backend that accepts `token` as a live session.
    pub fn with_session(token: &str) -> Self {
        let backend = Self::default();
        backend.state.borrow_mut().valid_token = Some(token.to_owned());
        backend
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.borrow_mut().offline = offline;
    }

    pub fn expire_session(&self) {
        self.state.borrow_mut().valid_token = None;
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.borrow().requests.len()
    }

    pub fn seed_conferencista(&self, nombre: &str, apellido: &str) -> Conferencista {
        let mut state = self.state.borrow_mut();
        let row = Conferencista {
            id: next_id(&mut state),
            nombre: nombre.to_owned(),
            apellido: apellido.to_owned(),
            email: None,
            telefono: None,
            especialidad: None,
            created_at: STAMP.to_owned(),
            updated_at: STAMP.to_owned(),
        };
        state.conferencistas.push(row.clone());
        row
    }

    pub fn seed_auditorio(&self, nombre: &str, capacidad: u32) -> Auditorio {
        let mut state = self.state.borrow_mut();
        let row = Auditorio {
            id: next_id(&mut state),
            nombre: nombre.to_owned(),
            capacidad,
            ubicacion: None,
            created_at: STAMP.to_owned(),
            updated_at: STAMP.to_owned(),
        };
        state.auditorios.push(row.clone());
        row
    }

    pub fn seed_reserva(&self, conferencista_id: i64, auditorio_id: i64, fecha: &str) -> Reserva {
        let draft = ReservaDraft { conferencista_id, auditorio_id, fecha: fecha.to_owned(), tema: None };
        let mut state = self.state.borrow_mut();
        insert_reserva(&mut state, draft).expect("seeded reservation must reference seeded rows")
    }

    fn route(&self, request: &HttpRequest) -> HttpResponse {
        let path = request.url.strip_prefix(BASE_URL).unwrap_or(&request.url).to_owned();
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        let mut state = self.state.borrow_mut();

        if path == "/auth/login" && request.method == Method::Post {
            return login(&mut state, request.body.as_ref());
        }

        let expected = state.valid_token.as_ref().map(|t| format!("Bearer {t}"));
        if expected.is_none() || request.header("Authorization") != expected.as_deref() {
            return respond(401, &json!({ "error": { "message": "No autorizado" } }));
        }

        let id = segments.get(1).and_then(|s| s.parse::<i64>().ok());
        // PUT only touches the keys it receives, like the real server.
        let sent = |key: &str| request.body.as_ref().and_then(|b| b.get(key)).is_some();
        match (request.method, segments.first().copied(), id) {
            (Method::Post, Some("auth"), _) if path == "/auth/logout" => {
                state.valid_token = None;
                respond(200, &json!({ "data": null }))
            }
            (Method::Get, Some("auth"), _) if path == "/auth/me" => {
                respond(200, &json!({ "status": "ok", "data": { "user": demo_user() } }))
            }
            (Method::Get, Some("conferencistas"), None) => data(&state.conferencistas),
            (Method::Get, Some("auditorios"), None) => data(&state.auditorios),
            (Method::Get, Some("reservas"), None) => data(&state.reservas),
            (Method::Post, Some("conferencistas"), None) => {
                match parse::<ConferencistaDraft>(request.body.as_ref()) {
                    Some(d) if !d.nombre.is_empty() => {
                        let row = Conferencista {
                            id: next_id(&mut state),
                            nombre: d.nombre,
                            apellido: d.apellido,
                            email: d.email,
                            telefono: d.telefono,
                            especialidad: d.especialidad,
                            created_at: STAMP.to_owned(),
                            updated_at: STAMP.to_owned(),
                        };
                        state.conferencistas.push(row.clone());
                        data(&row)
                    }
                    _ => bad_request(),
                }
            }
            (Method::Post, Some("auditorios"), None) => match parse::<AuditorioDraft>(request.body.as_ref()) {
                Some(d) if d.capacidad > 0 => {
                    let row = Auditorio {
                        id: next_id(&mut state),
                        nombre: d.nombre,
                        capacidad: d.capacidad,
                        ubicacion: d.ubicacion,
                        created_at: STAMP.to_owned(),
                        updated_at: STAMP.to_owned(),
                    };
                    state.auditorios.push(row.clone());
                    data(&row)
                }
                _ => bad_request(),
            },
            (Method::Post, Some("reservas"), None) => {
                match parse::<ReservaDraft>(request.body.as_ref()).and_then(|d| insert_reserva(&mut state, d)) {
                    Some(row) => data(&row),
                    None => bad_request(),
                }
            }
            (Method::Put, Some("conferencistas"), Some(id)) => {
                let Some(d) = parse::<ConferencistaDraft>(request.body.as_ref()) else {
                    return bad_request();
                };
                match state.conferencistas.iter_mut().find(|c| c.id == id) {
                    Some(row) => {
                        row.nombre = d.nombre;
                        row.apellido = d.apellido;
                        if sent("email") {
                            row.email = d.email;
                        }
                        if sent("telefono") {
                            row.telefono = d.telefono;
                        }
                        if sent("especialidad") {
                            row.especialidad = d.especialidad;
                        }
                        data(&row.clone())
                    }
                    None => not_found(),
                }
            }
            (Method::Put, Some("auditorios"), Some(id)) => {
                let Some(d) = parse::<AuditorioDraft>(request.body.as_ref()) else {
                    return bad_request();
                };
                match state.auditorios.iter_mut().find(|a| a.id == id) {
                    Some(row) => {
                        row.nombre = d.nombre;
                        row.capacidad = d.capacidad;
                        if sent("ubicacion") {
                            row.ubicacion = d.ubicacion;
                        }
                        data(&row.clone())
                    }
                    None => not_found(),
                }
            }
            (Method::Delete, Some("conferencistas"), Some(id)) => {
                if state.reservas.iter().any(|r| r.conferencista_id == id) {
                    return conflict("El conferencista tiene reservas");
                }
                remove_by(&mut state.conferencistas, |c| c.id == id)
            }
            (Method::Delete, Some("auditorios"), Some(id)) => {
                if state.reservas.iter().any(|r| r.auditorio_id == id) {
                    return conflict("El auditorio tiene reservas");
                }
                remove_by(&mut state.auditorios, |a| a.id == id)
            }
            (Method::Delete, Some("reservas"), Some(id)) => remove_by(&mut state.reservas, |r| r.id == id),
            _ => not_found(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        if self.state.borrow().offline {
            return Err(ApiError::Transport("connection refused".to_owned()));
        }
        self.state.borrow_mut().requests.push(request.clone());
        Ok(self.route(&request))
    }
}

/// Navigator that counts redirects instead of navigating.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    hits: Rc<Cell<usize>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> usize {
        self.hits.get()
    }
}

impl Navigator for RecordingNavigator {
    fn to_login(&self) {
        self.hits.set(self.hits.get() + 1);
    }
}

/// Client wired to `backend`, returning shared handles to its store and navigator.
pub fn client(backend: &FakeBackend, store: MemoryTokenStore) -> (TestClient, MemoryTokenStore, RecordingNavigator) {
    let navigator = RecordingNavigator::default();
    let http = HttpClient::new(&ApiConfig::with_base_url(BASE_URL), backend.clone(), store.clone(), navigator.clone());
    (http, store, navigator)
}

/// Client already holding a session the backend accepts.
pub fn signed_in(backend: &FakeBackend) -> (TestClient, MemoryTokenStore, RecordingNavigator) {
    backend.state.borrow_mut().valid_token = Some(DEMO_TOKEN.to_owned());
    client(backend, MemoryTokenStore::with_token(DEMO_TOKEN))
}

fn login(state: &mut State, body: Option<&Value>) -> HttpResponse {
    let email = body.and_then(|b| b.get("email")).and_then(Value::as_str);
    let clave = body.and_then(|b| b.get("clave")).and_then(Value::as_str);
    if email == Some(DEMO_EMAIL) && clave == Some(DEMO_CLAVE) {
        state.valid_token = Some(DEMO_TOKEN.to_owned());
        return respond(200, &json!({ "data": { "token": DEMO_TOKEN, "user": demo_user() } }));
    }
    respond(401, &json!({ "error": { "message": "Credenciales inválidas" } }))
}

fn insert_reserva(state: &mut State, draft: ReservaDraft) -> Option<Reserva> {
    let conferencista = state.conferencistas.iter().find(|c| c.id == draft.conferencista_id)?.clone();
    let auditorio = state.auditorios.iter().find(|a| a.id == draft.auditorio_id)?.clone();
    let row = Reserva {
        id: next_id(state),
        conferencista_id: conferencista.id,
        auditorio_id: auditorio.id,
        fecha: draft.fecha,
        tema: draft.tema,
        conferencista,
        auditorio,
        created_at: STAMP.to_owned(),
        updated_at: STAMP.to_owned(),
    };
    state.reservas.push(row.clone());
    Some(row)
}

fn next_id(state: &mut State) -> i64 {
    state.next_id += 1;
    state.next_id
}

fn parse<T: serde::de::DeserializeOwned>(body: Option<&Value>) -> Option<T> {
    body.and_then(|b| serde_json::from_value(b.clone()).ok())
}

fn remove_by<T>(rows: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> HttpResponse {
    let before = rows.len();
    rows.retain(|r| !pred(r));
    if rows.len() == before { not_found() } else { respond(200, &json!({ "data": null })) }
}

fn data<T: serde::Serialize>(payload: &T) -> HttpResponse {
    respond(200, &json!({ "data": payload }))
}

fn respond(status: u16, body: &Value) -> HttpResponse {
    HttpResponse { status, body: body.to_string() }
}

fn bad_request() -> HttpResponse {
    respond(400, &json!({ "error": { "message": "Datos inválidos" } }))
}

fn not_found() -> HttpResponse {
    respond(404, &json!({ "error": { "message": "No encontrado" } }))
}

fn conflict(message: &str) -> HttpResponse {
    respond(409, &json!({ "error": { "message": message } }))
}
