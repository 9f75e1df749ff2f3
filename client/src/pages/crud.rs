//! Signal-driven wrappers around `api::crud::CrudState`.
//!
//! Each helper applies the synchronous `begin_*` step immediately, runs the
//! request on the browser event loop, then applies `finish_*`. A successful
//! mutation calls `reload`, which re-fetches whatever the page lists.

use api::crud::{CrudState, EntityForm};
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
const NOTICE_SECS: u64 = 3;

/// Fetch the page's collection into `state`.
pub(crate) fn load<F>(state: RwSignal<CrudState<F>>)
where
    F: EntityForm + Send + Sync + 'static,
    F::Entity: Send + Sync,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let http = crate::net::browser::client();
        let result = http.resource::<F::Entity>().list().await;
        state.update(|s| match result {
            Ok(items) => s.loaded(items),
            Err(err) => {
                log::warn!("list {} failed: {err}", <F::Entity as api::resource::Entity>::PATH);
                s.load_failed(&err);
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = state;
}

/// Validate and save the form; create or update follows `editing_id`.
pub(crate) fn submit<F>(state: RwSignal<CrudState<F>>, reload: impl Fn() + 'static)
where
    F: EntityForm + Send + Sync + 'static,
    F::Entity: Send + Sync,
{
    let mut pending = None;
    state.update(|s| pending = s.begin_submit());
    let Some(submission) = pending else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let http = crate::net::browser::client();
        let result = http
            .resource::<F::Entity>()
            .save(submission.mode, &submission.draft)
            .await
            .map(|_| ());
        let saved = result.is_ok();
        state.update(|s| s.finish_submit(submission.mode, result));
        if saved {
            reload();
            dismiss_notice(state);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (submission, reload);
}

/// Ask for confirmation, then delete `id`. The list is re-fetched only when
/// the delete succeeded.
pub(crate) fn delete<F>(state: RwSignal<CrudState<F>>, id: i64, reload: impl Fn() + 'static)
where
    F: EntityForm + Send + Sync + 'static,
    F::Entity: Send + Sync,
{
    if !crate::util::browser::confirm(F::MESSAGES.confirm_delete) {
        return;
    }
    state.update(CrudState::begin_delete);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let http = crate::net::browser::client();
        let result = http.resource::<F::Entity>().delete(id).await;
        let deleted = result.is_ok();
        state.update(|s| s.finish_delete(result));
        if deleted {
            reload();
            dismiss_notice(state);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (id, reload);
}

/// Load row `id` into the form and scroll it into view.
pub(crate) fn edit<F>(state: RwSignal<CrudState<F>>, id: i64)
where
    F: EntityForm + Send + Sync + 'static,
    F::Entity: Send + Sync,
{
    let mut found = false;
    state.update(|s| found = s.begin_edit(id));
    if found {
        crate::util::browser::scroll_to_top();
    }
}

#[cfg(feature = "hydrate")]
fn dismiss_notice<F>(state: RwSignal<CrudState<F>>)
where
    F: EntityForm + Send + Sync + 'static,
    F::Entity: Send + Sync,
{
    let shown = state.with_untracked(|s| s.notice);
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(NOTICE_SECS)).await;
        state.update(|s| {
            if s.notice == shown {
                s.notice = None;
            }
        });
    });
}
