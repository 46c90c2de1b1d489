//! Stock movements page.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn MouvementsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let mouvements = LocalResource::new(move || {
        let token = session.with(|s| s.token().map(str::to_owned));
        async move { crate::net::inventaire::fetch_mouvements(token.as_deref()).await }
    });

    view! {
        <div class="mouvements-page">
            <h1>"Mouvements"</h1>
            <Suspense fallback=move || view! { <p>"Chargement..."</p> }>
                {move || {
                    mouvements
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Type"</th>
                                                <th>"Date"</th>
                                                <th>"Quantité"</th>
                                                <th>"Boisson"</th>
                                                <th>"Utilisateur"</th>
                                                <th>"Raison"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|m| {
                                                    view! {
                                                        <tr>
                                                            <td>{m.type_mouvement}</td>
                                                            <td>{m.date_mouvement}</td>
                                                            <td>{m.quantite}</td>
                                                            <td>{m.boisson_nom.unwrap_or_default()}</td>
                                                            <td>{m.utilisateur_email.unwrap_or_default()}</td>
                                                            <td>{m.raison.unwrap_or_default()}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="form__error">{err.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
