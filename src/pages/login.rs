//! Login page with an email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthGateway;
use crate::state::session::SessionState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let gateway = AuthGateway::new(session);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let navigate = use_navigate();
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            error.set(None);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let address = email.get_untracked();
                match gateway.login(address.trim(), &password.get_untracked()).await {
                    // The guard finishes the job from "/": a pending first
                    // login is redirected to the change-password page.
                    Ok(_) => navigate("/", NavigateOptions::default()),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (gateway, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <h1>"Gestion Boissons"</h1>
            <p>"Inventaire des boissons"</p>
            <form class="login-form" on:submit=submit>
                <label class="form__label">
                    "Email"
                    <input
                        class="form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Mot de passe"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Se connecter"
                </button>
            </form>
        </div>
    }
}
