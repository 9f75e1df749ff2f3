//! Fallback for unknown routes.

use api::guard::HOME_ROUTE;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <h1>"404"</h1>
            <p>"La página que buscas no existe."</p>
            <A href=HOME_ROUTE>"Volver al inicio"</A>
        </section>
    }
}
