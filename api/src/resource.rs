//! Typed resource clients for the three CRUD collections.
//!
//! DESIGN
//! ======
//! One generic [`Resource`] replaces a hand-written client per entity. The
//! entity type carries its collection path and draft type; only entities
//! marked [`Updatable`] expose `update`, which keeps `PUT /reservas/:id` (not
//! offered by the server) unrepresentable.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpClient, json_body};
use crate::token_store::TokenStore;
use crate::transport::{Method, Navigator, Transport};
use crate::types::{Auditorio, AuditorioDraft, Conferencista, ConferencistaDraft, Reserva, ReservaDraft};

/// A server-owned record living under a REST collection.
pub trait Entity: DeserializeOwned + Clone + std::fmt::Debug + 'static {
    /// Collection path relative to the API base URL.
    const PATH: &'static str;
    /// Whether the collection accepts `PUT /<path>/:id`.
    const UPDATABLE: bool;
    type Draft: Serialize + Clone + std::fmt::Debug;

    fn id(&self) -> i64;

    /// Client-side precondition checked before any network call.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message describing why the draft is refused.
    fn check_draft(_draft: &Self::Draft) -> Result<(), &'static str> {
        Ok(())
    }
}

/// Marker for collections with an update endpoint.
pub trait Updatable: Entity {}

/// Whether a save creates a new row or replaces an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update(i64),
}

pub const READ_ONLY_COLLECTION: &str = "Este registro no se puede editar.";

impl Entity for Conferencista {
    const PATH: &'static str = "/conferencistas";
    const UPDATABLE: bool = true;
    type Draft = ConferencistaDraft;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Updatable for Conferencista {}

impl Entity for Auditorio {
    const PATH: &'static str = "/auditorios";
    const UPDATABLE: bool = true;
    type Draft = AuditorioDraft;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Updatable for Auditorio {}

impl Entity for Reserva {
    const PATH: &'static str = "/reservas";
    const UPDATABLE: bool = false;
    type Draft = ReservaDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn check_draft(draft: &ReservaDraft) -> Result<(), &'static str> {
        draft.validate()
    }
}

/// Client for one collection, borrowing the shared pipeline.
pub struct Resource<'a, E, T, S, N> {
    http: &'a HttpClient<T, S, N>,
    entity: PhantomData<E>,
}

impl<T, S, N> HttpClient<T, S, N>
where
    T: Transport,
    S: TokenStore,
    N: Navigator,
{
    pub fn resource<E: Entity>(&self) -> Resource<'_, E, T, S, N> {
        Resource { http: self, entity: PhantomData }
    }
}

impl<E, T, S, N> Resource<'_, E, T, S, N>
where
    E: Entity,
    T: Transport,
    S: TokenStore,
    N: Navigator,
{
    /// `GET /<path>`.
    ///
    /// # Errors
    ///
    /// Any pipeline error.
    pub async fn list(&self) -> Result<Vec<E>, ApiError> {
        self.http.data(Method::Get, E::PATH, None).await
    }

    /// `POST /<path>`; returns the server's representation.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] if the draft fails the entity's precondition
    /// (no request is sent), otherwise any pipeline error.
    pub async fn create(&self, draft: &E::Draft) -> Result<E, ApiError> {
        E::check_draft(draft).map_err(ApiError::Validation)?;
        self.http.data(Method::Post, E::PATH, Some(json_body(draft)?)).await
    }

    /// `DELETE /<path>/:id`.
    ///
    /// # Errors
    ///
    /// Any pipeline error.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.http.empty(Method::Delete, &item_path(E::PATH, id), None).await
    }

    /// Create or update depending on `mode`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] for an update on a read-only collection,
    /// otherwise whatever create/update return.
    pub async fn save(&self, mode: SaveMode, draft: &E::Draft) -> Result<E, ApiError> {
        match mode {
            SaveMode::Create => self.create(draft).await,
            SaveMode::Update(id) if E::UPDATABLE => self.put(id, draft).await,
            SaveMode::Update(_) => Err(ApiError::Validation(READ_ONLY_COLLECTION)),
        }
    }

    async fn put(&self, id: i64, draft: &E::Draft) -> Result<E, ApiError> {
        E::check_draft(draft).map_err(ApiError::Validation)?;
        self.http.data(Method::Put, &item_path(E::PATH, id), Some(json_body(draft)?)).await
    }
}

impl<E, T, S, N> Resource<'_, E, T, S, N>
where
    E: Updatable,
    T: Transport,
    S: TokenStore,
    N: Navigator,
{
    /// `PUT /<path>/:id`; returns the server's representation.
    ///
    /// # Errors
    ///
    /// Any pipeline error.
    pub async fn update(&self, id: i64, draft: &E::Draft) -> Result<E, ApiError> {
        self.put(id, draft).await
    }
}

fn item_path(collection: &str, id: i64) -> String {
    format!("{collection}/{id}")
}
