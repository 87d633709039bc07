//! Login page: shared-password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::util::auth::{AppRoute, install_route_guard};

const EMPTY_PASSWORD_MESSAGE: &str = "Enter the password.";

/// Reject blank input before calling the server. The value itself is sent
/// untrimmed; whitespace is significant to the password check.
fn validate_password_input(raw: &str) -> Result<String, &'static str> {
    if raw.trim().is_empty() {
        return Err(EMPTY_PASSWORD_MESSAGE);
    }
    Ok(raw.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    install_route_guard(AppRoute::Login, use_navigate());

    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = match validate_password_input(&password.get()) {
            Ok(v) => v,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Checking password...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&value).await {
                Ok(()) => {
                    crate::state::auth::mark_authenticated();
                    crate::util::auth::hard_redirect(AppRoute::Home.path());
                }
                Err(e) => {
                    info.set(e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = value;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Imagen"</h1>
                <p class="login-card__subtitle">"Enter the shared password to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
