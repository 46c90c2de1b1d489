//! User administration page (Manager only, enforced by the guard).

use leptos::prelude::*;

use crate::net::types::Utilisateur;
use crate::state::session::SessionState;

#[component]
pub fn UtilisateursPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let utilisateurs = LocalResource::new(move || {
        let token = session.with(|s| s.token().map(str::to_owned));
        async move { crate::net::utilisateurs::fetch_all(token.as_deref()).await }
    });

    view! {
        <div class="utilisateurs-page">
            <h1>"Utilisateurs"</h1>
            <Suspense fallback=move || view! { <p>"Chargement..."</p> }>
                {move || {
                    utilisateurs
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Nom"</th>
                                                <th>"Email"</th>
                                                <th>"Rôle"</th>
                                                <th>"Statut"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|u| {
                                                    view! {
                                                        <UtilisateurRow
                                                            utilisateur=u
                                                            utilisateurs=utilisateurs
                                                        />
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

#[component]
fn UtilisateurRow(
    utilisateur: Utilisateur,
    utilisateurs: LocalResource<
        Result<Vec<Utilisateur>, crate::net::error::ApiError>,
    >,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let id = utilisateur.id;
    let is_active = utilisateur.is_active;

    let toggle = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = id else {
                return;
            };
            let token = session.with_untracked(|s| s.token().map(str::to_owned));
            let utilisateurs = utilisateurs.clone();
            leptos::task::spawn_local(async move {
                if crate::net::utilisateurs::set_status(id, !is_active, token.as_deref())
                    .await
                    .is_ok()
                {
                    utilisateurs.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &utilisateurs, id);
        }
    };

    view! {
        <tr>
            <td>{format!("{} {}", utilisateur.first_name, utilisateur.last_name)}</td>
            <td>{utilisateur.email}</td>
            <td>{format!("{:?}", utilisateur.role)}</td>
            <td>{if is_active { "Actif" } else { "Désactivé" }}</td>
            <td>
                <button class="btn" on:click=toggle>
                    {if is_active { "Désactiver" } else { "Activer" }}
                </button>
            </td>
        </tr>
    }
}
