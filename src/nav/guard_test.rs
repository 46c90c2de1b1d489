use super::*;
use crate::nav::routes::{ROUTES, meta};
use crate::state::session::{CurrentUser, Role};

fn session(role: Role, first_login: bool) -> Session {
    Session {
        token: "tok".to_owned(),
        user: CurrentUser {
            id: 1,
            first_name: "Awa".to_owned(),
            last_name: "Diop".to_owned(),
            email: "awa@example.test".to_owned(),
            role,
            is_active: true,
            first_login,
        },
    }
}

/// Every session shape the guard can be asked about.
fn session_matrix() -> Vec<Option<Session>> {
    vec![
        None,
        Some(session(Role::Manager, false)),
        Some(session(Role::Employee, false)),
        Some(session(Role::Unknown, false)),
        Some(session(Role::Manager, true)),
        Some(session(Role::Employee, true)),
    ]
}

// =============================================================
// Rule 1: forced password change dominates
// =============================================================

#[test]
fn first_login_redirects_every_other_route_to_change_password() {
    let s = session(Role::Employee, true);
    for route in ROUTES {
        if route.name == RouteName::ChangePassword {
            continue;
        }
        assert_eq!(
            evaluate(route, Some(&s)),
            Decision::RedirectTo(RouteName::ChangePassword),
            "{:?}",
            route.name
        );
    }
}

#[test]
fn first_login_even_escapes_via_public_login_route_is_blocked() {
    // The login route requires no auth, yet it must not break the flow.
    let s = session(Role::Manager, true);
    assert_eq!(
        evaluate(meta(RouteName::Login), Some(&s)),
        Decision::RedirectTo(RouteName::ChangePassword)
    );
}

#[test]
fn first_login_may_reach_change_password() {
    let s = session(Role::Employee, true);
    assert_eq!(evaluate(meta(RouteName::ChangePassword), Some(&s)), Decision::Proceed);
}

// =============================================================
// Rule 2: completed flow cannot be revisited
// =============================================================

#[test]
fn completed_first_login_is_bounced_from_change_password() {
    let s = session(Role::Manager, false);
    assert_eq!(
        evaluate(meta(RouteName::ChangePassword), Some(&s)),
        Decision::RedirectTo(RouteName::Dashboard)
    );
}

// =============================================================
// Rule 3: authentication requirement
// =============================================================

#[test]
fn unauthenticated_protected_routes_redirect_to_login() {
    for route in ROUTES {
        if !route.requires_auth {
            continue;
        }
        assert_eq!(
            evaluate(route, None),
            Decision::RedirectTo(RouteName::Login),
            "{:?}",
            route.name
        );
    }
}

#[test]
fn unauthenticated_login_route_proceeds() {
    assert_eq!(evaluate(meta(RouteName::Login), None), Decision::Proceed);
}

// =============================================================
// Rule 4: role authorization
// =============================================================

#[test]
fn employee_is_denied_on_manager_only_route() {
    let s = session(Role::Employee, false);
    assert_eq!(
        evaluate(meta(RouteName::Utilisateurs), Some(&s)),
        Decision::RedirectTo(RouteName::AccessDenied)
    );
}

#[test]
fn manager_passes_manager_only_route() {
    let s = session(Role::Manager, false);
    assert_eq!(evaluate(meta(RouteName::Utilisateurs), Some(&s)), Decision::Proceed);
}

#[test]
fn unknown_role_fails_closed_on_role_gated_route() {
    let s = session(Role::Unknown, false);
    assert_eq!(
        evaluate(meta(RouteName::Utilisateurs), Some(&s)),
        Decision::RedirectTo(RouteName::AccessDenied)
    );
}

#[test]
fn unknown_role_still_reaches_unrestricted_routes() {
    let s = session(Role::Unknown, false);
    assert_eq!(evaluate(meta(RouteName::Boissons), Some(&s)), Decision::Proceed);
}

// =============================================================
// Rule 5: login page redirect for authenticated users
// =============================================================

#[test]
fn authenticated_user_on_login_route_goes_to_dashboard() {
    let s = session(Role::Manager, false);
    assert_eq!(
        evaluate(meta(RouteName::Login), Some(&s)),
        Decision::RedirectTo(RouteName::Dashboard)
    );
}

// =============================================================
// Global properties
// =============================================================

#[test]
fn evaluation_is_idempotent() {
    for sess in session_matrix() {
        for route in ROUTES {
            let first = evaluate(route, sess.as_ref());
            let second = evaluate(route, sess.as_ref());
            assert_eq!(first, second, "{:?}", route.name);
        }
    }
}

#[test]
fn redirect_targets_always_evaluate_to_proceed() {
    for sess in session_matrix() {
        for route in ROUTES {
            if let Decision::RedirectTo(target) = evaluate(route, sess.as_ref()) {
                assert_eq!(
                    evaluate(meta(target), sess.as_ref()),
                    Decision::Proceed,
                    "loop via {:?} -> {target:?}",
                    route.name
                );
            }
        }
    }
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn scenario_unauthenticated_dashboard_request() {
    assert_eq!(
        evaluate(meta(RouteName::Dashboard), None),
        Decision::RedirectTo(RouteName::Login)
    );
}

#[test]
fn scenario_first_login_requests_boisson() {
    let s = session(Role::Employee, true);
    assert_eq!(
        evaluate(meta(RouteName::Boissons), Some(&s)),
        Decision::RedirectTo(RouteName::ChangePassword)
    );
}

#[test]
fn scenario_employee_requests_utilisateur_page() {
    let s = session(Role::Employee, false);
    assert_eq!(
        evaluate(meta(RouteName::Utilisateurs), Some(&s)),
        Decision::RedirectTo(RouteName::AccessDenied)
    );
}

#[test]
fn scenario_manager_requests_login_page() {
    let s = session(Role::Manager, false);
    assert_eq!(
        evaluate(meta(RouteName::Login), Some(&s)),
        Decision::RedirectTo(RouteName::Dashboard)
    );
}
