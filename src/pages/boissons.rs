//! Beverage catalogue page.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn BoissonsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let boissons = LocalResource::new(move || {
        let token = session.with(|s| s.token().map(str::to_owned));
        async move { crate::net::boissons::fetch_all(token.as_deref()).await }
    });

    view! {
        <div class="boissons-page">
            <h1>"Boissons"</h1>
            <Suspense fallback=move || view! { <p>"Chargement..."</p> }>
                {move || {
                    boissons
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Nom"</th>
                                                <th>"Description"</th>
                                                <th>"Prix unitaire"</th>
                                                <th>"Seuil d'alerte"</th>
                                                <th>"Statut"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|b| {
                                                    view! {
                                                        <tr>
                                                            <td>{b.nom}</td>
                                                            <td>{b.description.unwrap_or_default()}</td>
                                                            <td>{format!("{:.2}", b.prix_unitaire)}</td>
                                                            <td>{b.seuil_alerte}</td>
                                                            <td>{if b.is_active { "Actif" } else { "Inactif" }}</td>
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
