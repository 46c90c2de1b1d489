//! Suppliers page.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn FournisseursPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let fournisseurs = LocalResource::new(move || {
        let token = session.with(|s| s.token().map(str::to_owned));
        async move { crate::net::fournisseurs::fetch_all(token.as_deref()).await }
    });

    view! {
        <div class="fournisseurs-page">
            <h1>"Fournisseurs"</h1>
            <Suspense fallback=move || view! { <p>"Chargement..."</p> }>
                {move || {
                    fournisseurs
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Nom"</th>
                                                <th>"Email"</th>
                                                <th>"Téléphone"</th>
                                                <th>"Adresse"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|f| {
                                                    view! {
                                                        <tr>
                                                            <td>{f.nom}</td>
                                                            <td>{f.email.unwrap_or_default()}</td>
                                                            <td>{f.telephone.unwrap_or_default()}</td>
                                                            <td>{f.adresse.unwrap_or_default()}</td>
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
