//! Stock lots page.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn LotsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let lots = LocalResource::new(move || {
        let token = session.with(|s| s.token().map(str::to_owned));
        async move { crate::net::inventaire::fetch_lots(token.as_deref()).await }
    });

    view! {
        <div class="lots-page">
            <h1>"Lots"</h1>
            <Suspense fallback=move || view! { <p>"Chargement..."</p> }>
                {move || {
                    lots.get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Numéro"</th>
                                                <th>"Boisson"</th>
                                                <th>"Quantité"</th>
                                                <th>"Entrée"</th>
                                                <th>"Péremption"</th>
                                                <th>"Vendable"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|lot| {
                                                    let boisson =
                                                        lot.boisson.map(|b| b.nom).unwrap_or_default();
                                                    view! {
                                                        <tr>
                                                            <td>{lot.numero_lot}</td>
                                                            <td>{boisson}</td>
                                                            <td>
                                                                {format!(
                                                                    "{} / {}",
                                                                    lot.quantite_actuelle,
                                                                    lot.quantite_initiale,
                                                                )}
                                                            </td>
                                                            <td>{lot.date_entree}</td>
                                                            <td>{lot.date_peremption}</td>
                                                            <td>{if lot.vendable { "Oui" } else { "Non" }}</td>
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
