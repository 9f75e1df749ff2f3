//! Venue management: create/edit form plus listing with edit and delete.

use api::crud::CrudState;
use api::forms::AuditorioForm;
use leptos::prelude::*;

use crate::components::feedback::Feedback;
use crate::pages::crud;
use crate::util::format;

type State = CrudState<AuditorioForm>;

#[component]
pub fn AuditoriosPage() -> impl IntoView {
    let state = RwSignal::new(State::default());
    crud::load(state);

    let reload = move || crud::load(state);
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        crud::submit(state, reload);
    };

    let editing = move || state.with(State::is_editing);
    let submitting = move || state.with(|s| s.submitting);

    view! {
        <section class="management-page auditorios-page">
            <header class="management-page__header">
                <h1 class="management-page__title">"Auditorios"</h1>
                <p class="management-page__subtitle">"Administra los espacios disponibles para conferencias."</p>
            </header>

            <Feedback
                error=Signal::derive(move || state.with(|s| s.error.clone()))
                notice=Signal::derive(move || state.with(|s| s.notice))
            />

            <section class="management-page__panel">
                <h2 class="management-page__panel-title">
                    {move || if editing() { "Editar auditorio" } else { "Nuevo auditorio" }}
                </h2>
                <form class="management-page__form" on:submit=on_submit>
                    <div class="management-page__grid">
                        <div class="management-page__field">
                            <label for="nombre">"Nombre *"</label>
                            <input
                                id="nombre"
                                required
                                prop:value=move || state.with(|s| s.form.nombre.clone())
                                on:input=move |ev| state.update(|s| s.form.nombre = event_target_value(&ev))
                            />
                        </div>
                        <div class="management-page__field">
                            <label for="capacidad">"Capacidad *"</label>
                            <input
                                id="capacidad"
                                type="number"
                                min="1"
                                required
                                prop:value=move || state.with(|s| s.form.capacidad.clone())
                                on:input=move |ev| state.update(|s| s.form.capacidad = event_target_value(&ev))
                            />
                        </div>
                        <div class="management-page__field management-page__field--full">
                            <label for="ubicacion">"Ubicación"</label>
                            <input
                                id="ubicacion"
                                prop:value=move || state.with(|s| s.form.ubicacion.clone())
                                on:input=move |ev| state.update(|s| s.form.ubicacion = event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="management-page__actions">
                        <button
                            class="management-page__btn management-page__btn--primary"
                            type="submit"
                            disabled=submitting
                        >
                            {move || match (submitting(), editing()) {
                                (true, _) => "Guardando...",
                                (false, true) => "Actualizar",
                                (false, false) => "Guardar auditorio",
                            }}
                        </button>
                        <Show when=editing>
                            <button
                                class="management-page__btn"
                                type="button"
                                on:click=move |_| state.update(State::cancel_edit)
                            >
                                "Cancelar"
                            </button>
                        </Show>
                    </div>
                </form>
            </section>

            <section class="management-page__panel">
                <h2 class="management-page__panel-title">
                    "Listado (" {move || state.with(|s| s.items.len())} ")"
                </h2>
                <Show
                    when=move || state.with(|s| !s.items.is_empty())
                    fallback=|| view! { <p class="management-page__empty">"No hay auditorios registrados."</p> }
                >
                    <div class="management-page__table-wrap">
                        <table class="management-page__table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Nombre"</th>
                                    <th>"Capacidad"</th>
                                    <th>"Ubicación"</th>
                                    <th>"Acciones"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || state.with(|s| s.items.clone())
                                    key=|row| (row.id, row.updated_at.clone())
                                    children=move |row| {
                                        let id = row.id;
                                        view! {
                                            <tr>
                                                <td>"#" {id}</td>
                                                <td>{row.nombre}</td>
                                                <td>{row.capacidad}</td>
                                                <td>{format::optional(row.ubicacion.as_deref())}</td>
                                                <td class="management-page__row-actions">
                                                    <button
                                                        class="management-page__btn"
                                                        type="button"
                                                        on:click=move |_| crud::edit(state, id)
                                                    >
                                                        "Editar"
                                                    </button>
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
