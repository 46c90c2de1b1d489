//! Top navigation bar. Hidden while logged out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthGateway;
use crate::nav::routes::{RouteName, meta};
use crate::state::session::{Role, SessionState};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let gateway = AuthGateway::new(session);
    let navigate = use_navigate();

    let is_manager =
        move || session.with(|s| s.current().is_some_and(|c| c.user.role == Role::Manager));
    let user_email = move || {
        session.with(|s| s.current().map(|c| c.user.email.clone()).unwrap_or_default())
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                gateway.logout().await;
                navigate(meta(RouteName::Login).path, NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (gateway, &navigate);
        }
    };

    view! {
        <Show when=move || session.with(|s| s.current().is_some())>
            {
                let on_logout = on_logout.clone();
                view! {
                    <nav class="navbar">
                        <span class="navbar__brand">"Gestion Boissons"</span>
                        <A href="/">"Tableau de bord"</A>
                        <A href="/boisson">"Boissons"</A>
                        <A href="/lot">"Lots"</A>
                        <A href="/mouvement">"Mouvements"</A>
                        <A href="/fournisseur">"Fournisseurs"</A>
                        <Show when=is_manager>
                            <A href="/utilisateur">"Utilisateurs"</A>
                        </Show>
                        <span class="navbar__user">{user_email}</span>
                        <button class="btn" on:click=on_logout>
                            "Déconnexion"
                        </button>
                    </nav>
                }
            }
        </Show>
    }
}
