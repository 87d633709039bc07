//! Home page: prompt form, generated image, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route. The guard sends unauthenticated
//! visitors to `/login`; logout clears the persisted flag and goes back
//! there.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::GeneratedImage;
use crate::state::auth::clear_authenticated;
use crate::util::auth::{AppRoute, hard_redirect, install_route_guard};

const EMPTY_PROMPT_MESSAGE: &str = "Enter a prompt first.";

fn validate_prompt_input(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EMPTY_PROMPT_MESSAGE);
    }
    Ok(trimmed.to_owned())
}

#[component]
pub fn HomePage() -> impl IntoView {
    install_route_guard(AppRoute::Home, use_navigate());

    let prompt = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let image = RwSignal::new(None::<GeneratedImage>);

    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = match validate_prompt_input(&prompt.get()) {
            Ok(v) => v,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Generating image...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_image(&value).await {
                Ok(generated) => {
                    image.set(Some(generated));
                    info.set(String::new());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = value;
    };

    let on_logout = move |_| {
        clear_authenticated();
        hard_redirect(AppRoute::Login.path());
    };

    view! {
        <div class="home-page">
            <header class="home-header">
                <h1>"Imagen"</h1>
                <button class="logout-button" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <form class="prompt-form" on:submit=on_generate>
                <textarea
                    class="prompt-input"
                    rows="3"
                    placeholder="Describe the image you want..."
                    prop:value=move || prompt.get()
                    on:input=move |ev| prompt.set(event_target_value(&ev))
                ></textarea>
                <button class="prompt-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Generating..." } else { "Generate" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="home-message">{move || info.get()}</p>
            </Show>
            {move || {
                image
                    .get()
                    .and_then(|generated| {
                        let src = generated.src()?;
                        let alt = generated.prompt.clone();
                        let caption = generated.prompt;
                        Some(
                            view! {
                                <figure class="generated-image">
                                    <img src=src alt=alt/>
                                    <figcaption>{caption}</figcaption>
                                </figure>
                            },
                        )
                    })
            }}
        </div>
    }
}
