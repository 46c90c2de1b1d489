//! Mandatory (and voluntary) password-change page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthGateway;
use crate::state::session::SessionState;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let gateway = AuthGateway::new(session);

    let first_login =
        move || session.with(|s| s.current().is_some_and(|c| c.user.first_login));

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let navigate = use_navigate();
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if new_password.get_untracked() != confirm.get_untracked() {
            error.set(Some("les mots de passe ne correspondent pas".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(user_id) = session.with_untracked(|s| s.current().map(|c| c.user.id)) else {
                return;
            };
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            error.set(None);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = gateway
                    .change_password(
                        user_id,
                        &old_password.get_untracked(),
                        &new_password.get_untracked(),
                    )
                    .await;
                match result {
                    // first_login is now cleared, so the dashboard is
                    // reachable again.
                    Ok(()) => navigate("/", NavigateOptions::default()),
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
        <div class="change-password-page">
            <h1>"Changement de mot de passe"</h1>
            <Show when=first_login>
                <p class="form__notice">
                    "Première connexion : vous devez changer votre mot de passe avant de continuer."
                </p>
            </Show>
            <form class="change-password-form" on:submit=submit>
                <label class="form__label">
                    "Ancien mot de passe"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || old_password.get()
                        on:input=move |ev| old_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Nouveau mot de passe"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Confirmation"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Valider"
                </button>
            </form>
        </div>
    }
}
