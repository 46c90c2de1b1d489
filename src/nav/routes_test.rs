use super::*;

const ALL_NAMES: &[RouteName] = &[
    RouteName::Login,
    RouteName::ChangePassword,
    RouteName::Dashboard,
    RouteName::AccessDenied,
    RouteName::Boissons,
    RouteName::Lots,
    RouteName::Mouvements,
    RouteName::Fournisseurs,
    RouteName::Utilisateurs,
];

#[test]
fn table_covers_every_name_exactly_once() {
    assert_eq!(ROUTES.len(), ALL_NAMES.len());
    for name in ALL_NAMES {
        assert_eq!(ROUTES.iter().filter(|r| r.name == *name).count(), 1, "{name:?}");
    }
}

#[test]
fn meta_lookup_agrees_with_table() {
    for route in ROUTES {
        assert_eq!(meta(route.name), route);
    }
}

#[test]
fn paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn login_is_the_only_public_route() {
    for route in ROUTES {
        assert_eq!(route.requires_auth, route.name != RouteName::Login, "{:?}", route.name);
    }
}

// Redirect targets must be reachable for anyone the guard can send there.
#[test]
fn redirect_targets_carry_no_role_restriction() {
    for name in [RouteName::ChangePassword, RouteName::Dashboard, RouteName::AccessDenied] {
        assert!(meta(name).allowed_roles.is_none(), "{name:?}");
    }
    assert!(!meta(RouteName::Login).requires_auth);
}
