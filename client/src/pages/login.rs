//! Login page: email + password exchanged for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use api::Session;
use leptos::prelude::*;

/// Shown when either field is blank; the request is not sent.
const MISSING_CREDENTIALS: &str = "Ingresa tu correo y contraseña.";

/// Trim the email and require both fields. The password is sent as typed.
fn validate_credentials(email: &str, clave: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || clave.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), clave.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let email = RwSignal::new(String::new());
    let clave = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, clave_value) = match validate_credentials(&email.get(), &clave.get()) {
            Ok(pair) => pair,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use api::auth::{DEFAULT_LOGIN_ERROR, LoginOutcome};

            let http = crate::net::browser::client();
            match http.auth().login(&email_value, &clave_value).await {
                Ok(LoginOutcome::Accepted(resp)) => {
                    log::info!("Inicio de sesión exitoso");
                    // The public guard moves on to the dashboard.
                    session.update(|s| s.login(http.store(), resp.token, resp.user));
                }
                Ok(LoginOutcome::Rejected { message }) => error.set(Some(message)),
                Err(err) => {
                    log::warn!("login request failed: {err}");
                    error.set(Some(DEFAULT_LOGIN_ERROR.to_owned()));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, email_value, clave_value);
    };

    view! {
        <div class="login-wrapper">
            <div class="login-card">
                <h1>"Bienvenido"</h1>
                <p>"Ingresa tus credenciales para continuar"</p>

                <Show when=move || error.get().is_some()>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Correo electrónico"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="demo@demo.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="clave">"Contraseña"</label>
                        <input
                            id="clave"
                            type="password"
                            placeholder="••••••••"
                            required
                            prop:value=move || clave.get()
                            on:input=move |ev| clave.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn-login" disabled=move || busy.get()>
                        {move || if busy.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
