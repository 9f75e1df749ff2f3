//! Dashboard: greeting plus one count per collection.
//!
//! Counts are fetched fresh on every visit; any failure shows a single static
//! message and leaves the placeholders in place.

use api::Session;
use api::dashboard::DashboardCounts;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let counts = RwSignal::new(None::<DashboardCounts>);
    let error = RwSignal::new(None::<&'static str>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match DashboardCounts::fetch(&crate::net::browser::client()).await {
            Ok(fetched) => counts.set(Some(fetched)),
            Err(err) if err.is_unauthorized() => {}
            Err(err) => {
                log::warn!("dashboard counts failed: {err}");
                error.set(Some(api::dashboard::DASHBOARD_LOAD_FAILED));
            }
        }
    });

    let stat = move |pick: fn(&DashboardCounts) -> usize| {
        move || counts.get().map_or_else(|| "...".to_owned(), |c| pick(&c).to_string())
    };
    let user_name = move || session.read().user.as_ref().map(api::types::User::full_name).unwrap_or_default();

    view! {
        <section class="dashboard-page">
            <header class="dashboard-page__header">
                <h1 class="dashboard-page__title">"Dashboard"</h1>
                <p class="dashboard-page__subtitle">
                    "Bienvenido, " <strong>{user_name}</strong>
                </p>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="dashboard-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <div class="dashboard-page__stats-grid">
                <article class="dashboard-page__stat-card">
                    <p class="dashboard-page__stat-label">"Conferencistas"</p>
                    <p class="dashboard-page__stat-value">{stat(|c| c.conferencistas)}</p>
                </article>
                <article class="dashboard-page__stat-card">
                    <p class="dashboard-page__stat-label">"Auditorios"</p>
                    <p class="dashboard-page__stat-value">{stat(|c| c.auditorios)}</p>
                </article>
                <article class="dashboard-page__stat-card">
                    <p class="dashboard-page__stat-label">"Reservas"</p>
                    <p class="dashboard-page__stat-value">{stat(|c| c.reservas)}</p>
                </article>
            </div>
        </section>
    }
}
