//! Authenticated shell: navbar, collapsible sidebar, routed content.

use api::Session;
use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

#[component]
pub fn AppLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let sidebar_open = RwSignal::new(true);

    let user_name = move || session.read().user.as_ref().map(api::types::User::full_name).unwrap_or_default();
    let user_email = move || session.read().user.as_ref().map(|u| u.email.clone()).unwrap_or_default();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let http = crate::net::browser::client();
            http.auth().logout().await;
            session.update(|s| s.logout(http.store()));
            // The private guard sees the cleared token and moves to /login.
        });
    };

    view! {
        <div class="layout">
            <header class="navbar">
                <div class="navbar-left">
                    <button
                        class="btn-toggle"
                        on:click=move |_| sidebar_open.update(|open| *open = !*open)
                        title=move || if sidebar_open.get() { "Ocultar menú" } else { "Mostrar menú" }
                    >
                        {move || if sidebar_open.get() { "✕" } else { "☰" }}
                    </button>
                    <span class="navbar-brand">"Sistema Conferencias"</span>
                </div>
                <div class="navbar-user">
                    <div class="user-info">
                        <span class="user-name">{user_name}</span>
                        <span class="user-email">{user_email}</span>
                    </div>
                    <button class="btn-logout" on:click=on_logout>
                        "Cerrar sesión"
                    </button>
                </div>
            </header>

            <div class="layout-body">
                <aside class=move || if sidebar_open.get() { "sidebar sidebar-open" } else { "sidebar sidebar-closed" }>
                    <nav>
                        <A href="/" exact=true attr:class="nav-item">
                            <span class="nav-label">"Inicio"</span>
                        </A>
                        <A href="/conferencias" attr:class="nav-item">
                            <span class="nav-label">"Conferencistas"</span>
                        </A>
                        <A href="/auditorios" attr:class="nav-item">
                            <span class="nav-label">"Auditorios"</span>
                        </A>
                        <A href="/reservas" attr:class="nav-item">
                            <span class="nav-label">"Reservas"</span>
                        </A>
                    </nav>
                </aside>

                <main class="content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
