//! Root application component with routing and context providers.

use api::Session;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::guards::{PrivateRoute, PublicRoute};
use crate::components::layout::AppLayout;
use crate::pages::{
    auditorios::AuditoriosPage, conferencistas::ConferencistasPage, dashboard::DashboardPage,
    login::LoginPage, not_found::NotFoundPage, reservas::ReservasPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session signal and resolves it once from the stored token
/// before any guard decides.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let restored = Session::restore(&crate::net::browser::client()).await;
        session.set(restored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/conferencias.css"/>
        <Title text="Sistema Conferencias"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }
                />
                <ParentRoute
                    path=StaticSegment("")
                    view=|| view! { <PrivateRoute><AppLayout/></PrivateRoute> }
                >
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("conferencias") view=ConferencistasPage/>
                    <Route path=StaticSegment("auditorios") view=AuditoriosPage/>
                    <Route path=StaticSegment("reservas") view=ReservasPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
