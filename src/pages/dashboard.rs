//! Dashboard page: stock alerts and movement trends.

use leptos::prelude::*;

use crate::net::types::{MovementTrendDto, StockAlertDto, Trend};
use crate::state::session::SessionState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let stats = LocalResource::new(move || {
        let token = session.with(|s| s.token().map(str::to_owned));
        async move { crate::net::stats::fetch_dashboard(token.as_deref()).await }
    });

    view! {
        <div class="dashboard-page">
            <h1>"Tableau de bord"</h1>
            <Suspense fallback=move || view! { <p>"Chargement des statistiques..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|result| match result {
                            Ok(stats) => {
                                let alerts = stats.stock_alerts.unwrap_or_default();
                                let trends = stats.movement_trends.unwrap_or_default();
                                view! {
                                    <div class="dashboard-page__sections">
                                        <StockAlerts alerts=alerts/>
                                        <MovementTrends trends=trends/>
                                    </div>
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
fn StockAlerts(alerts: Vec<StockAlertDto>) -> impl IntoView {
    view! {
        <section class="dashboard-page__alerts">
            <h2>"Alertes de stock"</h2>
            {if alerts.is_empty() {
                view! { <p>"Aucune alerte."</p> }.into_any()
            } else {
                view! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Boisson"</th>
                                <th>"Stock"</th>
                                <th>"Seuil"</th>
                                <th>"Sévérité"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {alerts
                                .into_iter()
                                .map(|a| {
                                    view! {
                                        <tr>
                                            <td>{a.beverage_name}</td>
                                            <td>{a.current_stock_level}</td>
                                            <td>{a.threshold_level}</td>
                                            <td>{a.alert_severity_level}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}
        </section>
    }
}

#[component]
fn MovementTrends(trends: Vec<MovementTrendDto>) -> impl IntoView {
    view! {
        <section class="dashboard-page__trends">
            <h2>"Tendances des mouvements"</h2>
            <ul>
                {trends
                    .into_iter()
                    .map(|t| {
                        let direction = match t.trend {
                            Trend::Up => "en hausse",
                            Trend::Down => "en baisse",
                            Trend::Stable => "stable",
                        };
                        view! {
                            <li>{format!("{} : {} mouvements ({direction})", t.period, t.total_movements)}</li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
