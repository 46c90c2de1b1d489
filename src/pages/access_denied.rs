//! Access-denied page. Requires auth but no specific role, so every
//! authenticated user the guard sends here can actually land.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AccessDeniedPage() -> impl IntoView {
    view! {
        <div class="access-denied-page">
            <h1>"Accès refusé"</h1>
            <p>"Vous n'avez pas les droits nécessaires pour consulter cette page."</p>
            <A href="/">"Retour au tableau de bord"</A>
        </div>
    }
}
