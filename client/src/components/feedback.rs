//! Inline error and success banners for management pages.

use leptos::prelude::*;

#[component]
pub fn Feedback(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] notice: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="management-page__error" role="alert">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
        <Show when=move || notice.get().is_some()>
            <div class="management-page__notice" role="status">
                {move || notice.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
