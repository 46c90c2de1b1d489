//! Route wrapper effecting navigation-guard decisions.
//!
//! Every routed page is wrapped in [`Guarded`]; the guard itself stays a
//! pure function, this component owns the one side effect (the redirect).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::nav::guard::{self, Decision};
use crate::nav::routes::{self, RouteName};
use crate::state::session::SessionState;

/// Render `children` only while the guard allows `route`; otherwise
/// navigate to the decided redirect target.
#[component]
pub fn Guarded(route: RouteName, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Re-evaluated whenever the session changes (login, logout, password
    // change), so a page the user sits on is re-checked too.
    let decision =
        Memo::new(move |_| session.with(|s| guard::evaluate(routes::meta(route), s.current())));

    let navigate = use_navigate();
    Effect::new(move || {
        if let Decision::RedirectTo(target) = decision.get() {
            navigate(routes::meta(target).path, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || decision.get() == Decision::Proceed>
            {children()}
        </Show>
    }
}
