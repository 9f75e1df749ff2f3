//! Route gating on top of `api::guard`.
//!
//! While the session is still resolving nothing is rendered but a placeholder,
//! so a returning user never sees the login screen flash.

use api::Session;
use api::guard::{self, GuardKind, GuardOutcome};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

fn guarded(kind: GuardKind, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let outcome = Memo::new(move |_| guard::evaluate(kind, &session.read()));
    let navigate = use_navigate();

    Effect::new(move || {
        if let GuardOutcome::Redirect(to) = outcome.get() {
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || outcome.get() == GuardOutcome::Render
            fallback=move || {
                view! {
                    <div class="route-pending">
                        {move || if outcome.get() == GuardOutcome::Loading { "Cargando..." } else { "" }}
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Only visitors without a token; others go to `/`.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::Public, children)
}

/// Only visitors with a token; others go to `/login`.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::Private, children)
}
