//! Speaker management: create/edit form plus listing with edit and delete.

use api::crud::CrudState;
use api::forms::ConferencistaForm;
use leptos::prelude::*;

use crate::components::feedback::Feedback;
use crate::pages::crud;
use crate::util::format;

type State = CrudState<ConferencistaForm>;

#[component]
pub fn ConferencistasPage() -> impl IntoView {
    let state = RwSignal::new(State::default());
    crud::load(state);

    let reload = move || crud::load(state);
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        crud::submit(state, reload);
    };

    let field = move |read: fn(&ConferencistaForm) -> String, write: fn(&mut ConferencistaForm, String)| {
        (
            move || state.with(|s| read(&s.form)),
            move |ev: leptos::ev::Event| state.update(|s| write(&mut s.form, event_target_value(&ev))),
        )
    };
    let (nombre, set_nombre) = field(|f| f.nombre.clone(), |f, v| f.nombre = v);
    let (apellido, set_apellido) = field(|f| f.apellido.clone(), |f, v| f.apellido = v);
    let (email, set_email) = field(|f| f.email.clone(), |f, v| f.email = v);
    let (telefono, set_telefono) = field(|f| f.telefono.clone(), |f, v| f.telefono = v);
    let (especialidad, set_especialidad) = field(|f| f.especialidad.clone(), |f, v| f.especialidad = v);

    let editing = move || state.with(State::is_editing);
    let submitting = move || state.with(|s| s.submitting);

    view! {
        <section class="management-page conferencistas-page">
            <header class="management-page__header">
                <h1 class="management-page__title">"Conferencistas"</h1>
                <p class="management-page__subtitle">"Administra los conferencistas registrados."</p>
            </header>

            <Feedback
                error=Signal::derive(move || state.with(|s| s.error.clone()))
                notice=Signal::derive(move || state.with(|s| s.notice))
            />

            <section class="management-page__panel">
                <h2 class="management-page__panel-title">
                    {move || if editing() { "Editar conferencista" } else { "Nuevo conferencista" }}
                </h2>
                <form class="management-page__form" on:submit=on_submit>
                    <div class="management-page__grid">
                        <div class="management-page__field">
                            <label for="nombre">"Nombre *"</label>
                            <input id="nombre" required prop:value=nombre on:input=set_nombre/>
                        </div>
                        <div class="management-page__field">
                            <label for="apellido">"Apellido *"</label>
                            <input id="apellido" required prop:value=apellido on:input=set_apellido/>
                        </div>
                        <div class="management-page__field">
                            <label for="email">"Email"</label>
                            <input id="email" type="email" prop:value=email on:input=set_email/>
                        </div>
                        <div class="management-page__field">
                            <label for="telefono">"Teléfono"</label>
                            <input id="telefono" prop:value=telefono on:input=set_telefono/>
                        </div>
                        <div class="management-page__field management-page__field--full">
                            <label for="especialidad">"Especialidad"</label>
                            <input id="especialidad" prop:value=especialidad on:input=set_especialidad/>
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
                                (false, false) => "Guardar conferencista",
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
                    fallback=|| view! { <p class="management-page__empty">"No hay conferencistas registrados."</p> }
                >
                    <div class="management-page__table-wrap">
                        <table class="management-page__table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Nombre"</th>
                                    <th>"Email"</th>
                                    <th>"Teléfono"</th>
                                    <th>"Especialidad"</th>
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
                                                <td>{row.full_name()}</td>
                                                <td>{format::optional(row.email.as_deref())}</td>
                                                <td>{format::optional(row.telefono.as_deref())}</td>
                                                <td>{format::optional(row.especialidad.as_deref())}</td>
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
