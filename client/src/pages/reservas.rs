//! Reservation scheduling: create form with speaker/venue selectors plus
//! listing with delete. Reservations have no edit mode.
//!
//! The listing and both selector lists load together and fail together; every
//! successful mutation reloads all three.

use api::crud::CrudState;
use api::forms::{ReservaForm, ReservaOptions};
use leptos::prelude::*;

use crate::components::feedback::Feedback;
use crate::pages::crud;
use crate::util::format;

type State = CrudState<ReservaForm>;

fn load_all(state: RwSignal<State>, options: RwSignal<ReservaOptions>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::forms::load_reservations_page(&crate::net::browser::client()).await {
            Ok((reservas, loaded)) => {
                options.set(loaded);
                state.update(|s| s.loaded(reservas));
            }
            Err(err) => {
                log::warn!("reservations page load failed: {err}");
                state.update(|s| s.load_failed(&err));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (state, options);
}

/// Selector value to id; the placeholder option and junk map to `0`.
fn selected_id(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}

#[component]
pub fn ReservasPage() -> impl IntoView {
    let state = RwSignal::new(State::default());
    let options = RwSignal::new(ReservaOptions::default());
    load_all(state, options);

    let reload = move || load_all(state, options);
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        crud::submit(state, reload);
    };
    let submitting = move || state.with(|s| s.submitting);

    view! {
        <section class="management-page reservas-page">
            <header class="management-page__header">
                <h1 class="management-page__title">"Reservas"</h1>
                <p class="management-page__subtitle">"Programa reservas de auditorios para conferencias."</p>
            </header>

            <Feedback
                error=Signal::derive(move || state.with(|s| s.error.clone()))
                notice=Signal::derive(move || state.with(|s| s.notice))
            />

            <section class="management-page__panel">
                <h2 class="management-page__panel-title">"Nueva reserva"</h2>
                <form class="management-page__form" on:submit=on_submit>
                    <div class="management-page__grid">
                        <div class="management-page__field">
                            <label for="conferencistaId">"Conferencista *"</label>
                            <select
                                id="conferencistaId"
                                prop:value=move || state.with(|s| s.form.conferencista_id.to_string())
                                on:change=move |ev| {
                                    state.update(|s| s.form.conferencista_id = selected_id(&event_target_value(&ev)));
                                }
                            >
                                <option value="0">"Selecciona un conferencista"</option>
                                {move || {
                                    options
                                        .read()
                                        .conferencistas
                                        .iter()
                                        .map(|c| view! { <option value=c.id.to_string()>{c.full_name()}</option> })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                        <div class="management-page__field">
                            <label for="auditorioId">"Auditorio *"</label>
                            <select
                                id="auditorioId"
                                prop:value=move || state.with(|s| s.form.auditorio_id.to_string())
                                on:change=move |ev| {
                                    state.update(|s| s.form.auditorio_id = selected_id(&event_target_value(&ev)));
                                }
                            >
                                <option value="0">"Selecciona un auditorio"</option>
                                {move || {
                                    options
                                        .read()
                                        .auditorios
                                        .iter()
                                        .map(|a| {
                                            let label = format!("{} (Capacidad: {})", a.nombre, a.capacidad);
                                            view! { <option value=a.id.to_string()>{label}</option> }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                        <div class="management-page__field">
                            <label for="fecha">"Fecha y hora *"</label>
                            <input
                                id="fecha"
                                type="datetime-local"
                                required
                                prop:value=move || state.with(|s| s.form.fecha.clone())
                                on:input=move |ev| state.update(|s| s.form.fecha = event_target_value(&ev))
                            />
                        </div>
                        <div class="management-page__field management-page__field--full">
                            <label for="tema">"Tema"</label>
                            <input
                                id="tema"
                                placeholder="Tema de la conferencia"
                                prop:value=move || state.with(|s| s.form.tema.clone())
                                on:input=move |ev| state.update(|s| s.form.tema = event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="management-page__actions">
                        <button
                            class="management-page__btn management-page__btn--primary"
                            type="submit"
                            disabled=submitting
                        >
                            {move || if submitting() { "Guardando..." } else { "Guardar reserva" }}
                        </button>
                    </div>
                </form>
            </section>

            <section class="management-page__panel">
                <h2 class="management-page__panel-title">
                    "Listado (" {move || state.with(|s| s.items.len())} ")"
                </h2>
                <Show
                    when=move || state.with(|s| !s.items.is_empty())
                    fallback=|| view! { <p class="management-page__empty">"No hay reservas registradas."</p> }
                >
                    <div class="management-page__table-wrap">
                        <table class="management-page__table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Conferencista"</th>
                                    <th>"Auditorio"</th>
                                    <th>"Fecha"</th>
                                    <th>"Tema"</th>
                                    <th>"Acciones"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || state.with(|s| s.items.clone())
                                    key=|row| row.id
                                    children=move |row| {
                                        let id = row.id;
                                        view! {
                                            <tr>
                                                <td>"#" {id}</td>
                                                <td>{row.conferencista.full_name()}</td>
                                                <td>{row.auditorio.nombre}</td>
                                                <td>{format::fecha(&row.fecha)}</td>
                                                <td>{format::optional(row.tema.as_deref())}</td>
                                                <td>
                                                    <button
                                                        class="management-page__btn management-page__btn--danger"
                                                        type="button"
                                                        on:click=move |_| crud::delete(state, id, reload)
                                                    >
                                                        "Eliminar"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </section>
        </section>
    }
}
