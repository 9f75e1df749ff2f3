//! Wire DTOs for the REST API.
//!
//! DESIGN
//! ======
//! Field names follow the server's JSON (`nombre`, `capacidad`, camelCase
//! timestamps and foreign keys). Identifiers are always server-assigned; the
//! client never fabricates one.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated account as returned by `/auth/login` and `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
}

impl User {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

/// Speaker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conferencista {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub especialidad: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Conferencista {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

/// Venue with a seating capacity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auditorio {
    pub id: i64,
    pub nombre: String,
    pub capacidad: u32,
    #[serde(default)]
    pub ubicacion: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Reservation of a venue for a speaker.
///
/// The server always embeds the referenced speaker and venue on read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reserva {
    pub id: i64,
    pub conferencista_id: i64,
    pub auditorio_id: i64,
    pub fecha: String,
    #[serde(default)]
    pub tema: Option<String>,
    pub conferencista: Conferencista,
    pub auditorio: Auditorio,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Create/update payload for [`Conferencista`].
///
/// Optional fields always serialize; `None` goes out as `null` so an update
/// clears a field the user blanked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferencistaDraft {
    pub nombre: String,
    pub apellido: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub especialidad: Option<String>,
}

/// Create/update payload for [`Auditorio`]. `ubicacion: None` serializes as
/// `null`, like the speaker draft's optional fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditorioDraft {
    pub nombre: String,
    pub capacidad: u32,
    pub ubicacion: Option<String>,
}

/// Create payload for [`Reserva`]. Reservations cannot be updated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservaDraft {
    pub conferencista_id: i64,
    pub auditorio_id: i64,
    pub fecha: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tema: Option<String>,
}

pub const MISSING_RESERVATION_REFS: &str = "Debes seleccionar un conferencista y un auditorio.";
pub const MISSING_RESERVATION_DATE: &str = "Debes indicar la fecha y hora de la reserva.";

impl ReservaDraft {
    /// Reject drafts that would reference no speaker or no venue.
    ///
    /// # Errors
    ///
    /// Returns the user-facing validation message when either foreign key is
    /// zero or the date is blank.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.conferencista_id == 0 || self.auditorio_id == 0 {
            return Err(MISSING_RESERVATION_REFS);
        }
        if self.fecha.trim().is_empty() {
            return Err(MISSING_RESERVATION_DATE);
        }
        Ok(())
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub clave: &'a str,
}

/// Payload of a successful `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Payload of `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

/// Success envelope wrapping every response payload. Sibling fields are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error envelope: `{ "error": { "message": "..." } }`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorEnvelope {
    /// Extract the server-provided message from a raw response body, if any.
    #[must_use]
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|e| e.error)
            .and_then(|e| e.message)
            .filter(|m| !m.trim().is_empty())
    }
}
