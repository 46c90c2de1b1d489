//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{guarded::Guarded, navbar::Navbar};
use crate::nav::routes::RouteName;
use crate::pages::{
    access_denied::AccessDeniedPage, boissons::BoissonsPage,
    change_password::ChangePasswordPage, dashboard::DashboardPage,
    fournisseurs::FournisseursPage, login::LoginPage, lots::LotsPage,
    mouvements::MouvementsPage, utilisateurs::UtilisateursPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Hydrates the session store from persisted storage once, provides it via
/// context, and wires every route through the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::hydrated());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/gestion-boissons-ui.css"/>
        <Title text="Gestion Boissons"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page introuvable.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| {
                            view! {
                                <Guarded route=RouteName::Dashboard>
                                    <DashboardPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("boisson")
                        view=|| {
                            view! {
                                <Guarded route=RouteName::Boissons>
                                    <BoissonsPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("lot")
                        view=|| {
                            view! {
                                <Guarded route=RouteName::Lots>
                                    <LotsPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("mouvement")
                        view=|| {
                            view! {
                                <Guarded route=RouteName::Mouvements>
                                    <MouvementsPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("fournisseur")
                        view=|| {
                            view! {
                                <Guarded route=RouteName::Fournisseurs>
                                    <FournisseursPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("utilisateur")
                        view=|| {
                            view! {
                                <Guarded route=RouteName::Utilisateurs>
                                    <UtilisateursPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| {
                            view! {
                                <Guarded route=RouteName::Login>
                                    <LoginPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("change-password")
                        view=|| {
                            view! {
                                <Guarded route=RouteName::ChangePassword>
                                    <ChangePasswordPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("access-denied")
                        view=|| {
                            view! {
                                <Guarded route=RouteName::AccessDenied>
                                    <AccessDeniedPage/>
                                </Guarded>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
