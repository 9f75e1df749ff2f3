//! Form descriptors for the three management pages.
//!
//! Fields are kept as the raw strings/ids the inputs produce; conversion and
//! required-field checks happen in `to_draft`.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::crud::{CrudMessages, EntityForm};
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::token_store::TokenStore;
use crate::transport::{Navigator, Transport};
use crate::types::{Auditorio, AuditorioDraft, Conferencista, ConferencistaDraft, Reserva, ReservaDraft};

pub const MISSING_REQUIRED: &str = "Completa los campos obligatorios.";
pub const INVALID_CAPACITY: &str = "La capacidad debe ser un número entero positivo.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConferencistaForm {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: String,
    pub especialidad: String,
}

impl EntityForm for ConferencistaForm {
    type Entity = Conferencista;
    const MESSAGES: CrudMessages = CrudMessages {
        load_failed: "No se pudo cargar la lista de conferencistas.",
        save_failed: "No se pudo guardar el conferencista. Revisa los datos.",
        delete_failed: "No se pudo eliminar el conferencista.",
        created: "Conferencista creado correctamente",
        updated: "Conferencista actualizado correctamente",
        deleted: "Conferencista eliminado correctamente",
        confirm_delete: "¿Deseas eliminar este conferencista?",
    };

    fn from_entity(row: &Conferencista) -> Self {
        Self {
            nombre: row.nombre.clone(),
            apellido: row.apellido.clone(),
            email: row.email.clone().unwrap_or_default(),
            telefono: row.telefono.clone().unwrap_or_default(),
            especialidad: row.especialidad.clone().unwrap_or_default(),
        }
    }

    fn to_draft(&self) -> Result<ConferencistaDraft, &'static str> {
        Ok(ConferencistaDraft {
            nombre: required(&self.nombre)?,
            apellido: required(&self.apellido)?,
            email: optional(&self.email),
            telefono: optional(&self.telefono),
            especialidad: optional(&self.especialidad),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditorioForm {
    pub nombre: String,
    /// Raw numeric input.
    pub capacidad: String,
    pub ubicacion: String,
}

impl EntityForm for AuditorioForm {
    type Entity = Auditorio;
    const MESSAGES: CrudMessages = CrudMessages {
        load_failed: "No se pudo cargar la lista de auditorios.",
        save_failed: "No se pudo guardar el auditorio. Revisa los datos.",
        delete_failed: "No se pudo eliminar el auditorio.",
        created: "Auditorio creado correctamente",
        updated: "Auditorio actualizado correctamente",
        deleted: "Auditorio eliminado correctamente",
        confirm_delete: "¿Deseas eliminar este auditorio?",
    };

    fn from_entity(row: &Auditorio) -> Self {
        Self {
            nombre: row.nombre.clone(),
            capacidad: row.capacidad.to_string(),
            ubicacion: row.ubicacion.clone().unwrap_or_default(),
        }
    }

    fn to_draft(&self) -> Result<AuditorioDraft, &'static str> {
        let nombre = required(&self.nombre)?;
        let capacidad = match self.capacidad.trim().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return Err(INVALID_CAPACITY),
        };
        Ok(AuditorioDraft { nombre, capacidad, ubicacion: optional(&self.ubicacion) })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservaForm {
    /// `0` = nothing selected.
    pub conferencista_id: i64,
    /// `0` = nothing selected.
    pub auditorio_id: i64,
    pub fecha: String,
    pub tema: String,
}

impl EntityForm for ReservaForm {
    type Entity = Reserva;
    const MESSAGES: CrudMessages = CrudMessages {
        load_failed: "No se pudieron cargar los datos de reservas.",
        save_failed: "No se pudo crear la reserva.",
        delete_failed: "No se pudo eliminar la reserva.",
        created: "Reserva creada correctamente",
        updated: "Reserva actualizada correctamente",
        deleted: "Reserva eliminada correctamente",
        confirm_delete: "¿Deseas eliminar esta reserva?",
    };

    fn from_entity(row: &Reserva) -> Self {
        Self {
            conferencista_id: row.conferencista_id,
            auditorio_id: row.auditorio_id,
            fecha: row.fecha.clone(),
            tema: row.tema.clone().unwrap_or_default(),
        }
    }

    fn to_draft(&self) -> Result<ReservaDraft, &'static str> {
        let draft = ReservaDraft {
            conferencista_id: self.conferencista_id,
            auditorio_id: self.auditorio_id,
            fecha: self.fecha.trim().to_owned(),
            tema: optional(&self.tema),
        };
        draft.validate()?;
        Ok(draft)
    }
}

/// Selection lists for the reservation form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservaOptions {
    pub conferencistas: Vec<Conferencista>,
    pub auditorios: Vec<Auditorio>,
}

/// Load reservations plus both selection lists as three concurrent requests.
///
/// # Errors
///
/// The first failing request's error; nothing partial is returned.
pub async fn load_reservations_page<T, S, N>(
    http: &HttpClient<T, S, N>,
) -> Result<(Vec<Reserva>, ReservaOptions), ApiError>
where
    T: Transport,
    S: TokenStore,
    N: Navigator,
{
    let reservas = http.resource::<Reserva>();
    let conferencistas = http.resource::<Conferencista>();
    let auditorios = http.resource::<Auditorio>();
    let (reservas, conferencistas, auditorios) =
        futures::try_join!(reservas.list(), conferencistas.list(), auditorios.list())?;
    Ok((reservas, ReservaOptions { conferencistas, auditorios }))
}

fn required(value: &str) -> Result<String, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(MISSING_REQUIRED) } else { Ok(trimmed.to_owned()) }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
