//! Dashboard statistics.
//!
//! Counts are the lengths of three independently fetched lists, recomputed on
//! every visit.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::token_store::TokenStore;
use crate::transport::{Navigator, Transport};
use crate::types::{Auditorio, Conferencista, Reserva};

pub const DASHBOARD_LOAD_FAILED: &str = "No se pudieron cargar las estadísticas del dashboard.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub conferencistas: usize,
    pub auditorios: usize,
    pub reservas: usize,
}

impl DashboardCounts {
    /// Fetch all three collections concurrently and count them.
    ///
    /// # Errors
    ///
    /// The first failing request's error.
    pub async fn fetch<T, S, N>(http: &HttpClient<T, S, N>) -> Result<Self, ApiError>
    where
        T: Transport,
        S: TokenStore,
        N: Navigator,
    {
        let conferencistas = http.resource::<Conferencista>();
        let auditorios = http.resource::<Auditorio>();
        let reservas = http.resource::<Reserva>();
        let (conferencistas, auditorios, reservas) =
            futures::try_join!(conferencistas.list(), auditorios.list(), reservas.list())?;
        Ok(Self {
            conferencistas: conferencistas.len(),
            auditorios: auditorios.len(),
            reservas: reservas.len(),
        })
    }
}
