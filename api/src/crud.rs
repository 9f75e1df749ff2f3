//! Generic list/edit/delete controller shared by every management page.
//!
//! DESIGN
//! ======
//! Page state lives in [`CrudState`] and only changes through the step
//! methods below, so a reactive UI can hold it in a signal and run the network
//! call between `begin_*` and `finish_*` without borrowing across an await.
//! [`CrudController`] strings the same steps together for callers that can
//! hold `&mut CrudState` for the whole operation (CLI, tests).
//!
//! Consistency is "re-fetch the full list after every successful mutation";
//! nothing is merged or updated optimistically.

#[cfg(test)]
#[path = "crud_test.rs"]
mod crud_test;

use std::marker::PhantomData;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::resource::{Entity, Resource, SaveMode};
use crate::token_store::TokenStore;
use crate::transport::{Navigator, Transport};

/// User-facing strings for one management page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrudMessages {
    pub load_failed: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub confirm_delete: &'static str,
}

/// Field descriptor for an entity's create/edit form.
pub trait EntityForm: Clone + Default + std::fmt::Debug {
    type Entity: Entity;
    const MESSAGES: CrudMessages;

    /// Copy a listed row into form fields for editing.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Build the request payload from the current fields.
    ///
    /// # Errors
    ///
    /// Returns the message to show when a required field is missing.
    fn to_draft(&self) -> Result<<Self::Entity as Entity>::Draft, &'static str>;
}

pub type DraftOf<F> = <<F as EntityForm>::Entity as Entity>::Draft;

/// A validated save, ready to send.
#[derive(Clone, Debug)]
pub struct Submission<D> {
    pub mode: SaveMode,
    pub draft: D,
}

/// Local state of one management page.
#[derive(Clone, Debug)]
pub struct CrudState<F: EntityForm> {
    pub items: Vec<F::Entity>,
    pub form: F,
    /// `None` = create mode.
    pub editing_id: Option<i64>,
    pub submitting: bool,
    pub error: Option<String>,
    /// Last success message, for a transient notice.
    pub notice: Option<&'static str>,
}

impl<F: EntityForm> Default for CrudState<F> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            form: F::default(),
            editing_id: None,
            submitting: false,
            error: None,
            notice: None,
        }
    }
}

impl<F: EntityForm> CrudState<F> {
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Replace the rows with a fresh list. A successful fetch also clears a
    /// stale load error.
    pub fn loaded(&mut self, items: Vec<F::Entity>) {
        self.items = items;
        if self.error.as_deref() == Some(F::MESSAGES.load_failed) {
            self.error = None;
        }
    }

    /// Record a failed list fetch. Previously shown rows are left as they were.
    pub fn load_failed(&mut self, err: &ApiError) {
        self.fail(err, F::MESSAGES.load_failed);
    }

    /// Switch to edit mode for `id`. Returns `false` if the row is not listed.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        let Some(row) = self.items.iter().find(|row| row.id() == id) else {
            return false;
        };
        self.form = F::from_entity(row);
        self.editing_id = Some(id);
        true
    }

    /// Reset the form and return to create mode.
    pub fn cancel_edit(&mut self) {
        self.form = F::default();
        self.editing_id = None;
    }

    /// Validate and mark the form as submitting.
    ///
    /// Returns `None` when a submission is already in flight or validation
    /// failed (the message is stored in `error`).
    pub fn begin_submit(&mut self) -> Option<Submission<DraftOf<F>>> {
        if self.submitting {
            return None;
        }
        self.notice = None;
        let draft = match self.form.to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                self.error = Some(message.to_owned());
                return None;
            }
        };
        self.error = None;
        self.submitting = true;
        let mode = self.editing_id.map_or(SaveMode::Create, SaveMode::Update);
        Some(Submission { mode, draft })
    }

    /// Apply the save result. On success the form resets; on failure it is
    /// kept for correction.
    pub fn finish_submit(&mut self, mode: SaveMode, result: Result<(), ApiError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.cancel_edit();
                self.notice = Some(match mode {
                    SaveMode::Create => F::MESSAGES.created,
                    SaveMode::Update(_) => F::MESSAGES.updated,
                });
            }
            Err(err) => self.fail(&err, F::MESSAGES.save_failed),
        }
    }

    pub fn begin_delete(&mut self) {
        self.error = None;
        self.notice = None;
    }

    pub fn finish_delete(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.notice = Some(F::MESSAGES.deleted),
            Err(err) => self.fail(&err, F::MESSAGES.delete_failed),
        }
    }

    fn fail(&mut self, err: &ApiError, generic: &'static str) {
        match err {
            // The response interceptor already cleared the session and left.
            ApiError::Unauthorized { .. } => {}
            ApiError::Validation(message) => self.error = Some((*message).to_owned()),
            _ => self.error = Some(generic.to_owned()),
        }
    }
}

/// Drives [`CrudState`] against one collection.
pub struct CrudController<'a, F, T, S, N>
where
    F: EntityForm,
{
    resource: Resource<'a, F::Entity, T, S, N>,
    form: PhantomData<F>,
}

impl<'a, F, T, S, N> CrudController<'a, F, T, S, N>
where
    F: EntityForm,
    T: Transport,
    S: TokenStore,
    N: Navigator,
{
    pub fn new(http: &'a HttpClient<T, S, N>) -> Self {
        Self { resource: http.resource::<F::Entity>(), form: PhantomData }
    }

    /// Fetch the full list into `state`.
    pub async fn load(&self, state: &mut CrudState<F>) {
        match self.resource.list().await {
            Ok(items) => state.loaded(items),
            Err(err) => state.load_failed(&err),
        }
    }

    /// Submit the form; on success re-fetch the list. Returns whether the
    /// save went through.
    pub async fn submit(&self, state: &mut CrudState<F>) -> bool {
        let Some(submission) = state.begin_submit() else {
            return false;
        };
        let result = self.resource.save(submission.mode, &submission.draft).await.map(|_| ());
        let saved = result.is_ok();
        state.finish_submit(submission.mode, result);
        if saved {
            self.load(state).await;
        }
        saved
    }

    /// Delete `id` after `confirm` approves the page's prompt; on success
    /// re-fetch the list. Returns whether the row was deleted.
    pub async fn delete(&self, state: &mut CrudState<F>, id: i64, confirm: impl FnOnce(&'static str) -> bool) -> bool {
        if !confirm(F::MESSAGES.confirm_delete) {
            return false;
        }
        state.begin_delete();
        let result = self.resource.delete(id).await;
        let deleted = result.is_ok();
        state.finish_delete(result);
        if deleted {
            self.load(state).await;
        }
        deleted
    }
}
