//! Static route table consumed by the navigation guard.
//!
//! Redirect targets are consistent by construction: `login` is public;
//! `change-password`, `dashboard` and `access-denied` require authentication
//! but carry no role restriction, so any authenticated user reaches them.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::Role;

/// Stable route identifiers, used as redirect targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Login,
    ChangePassword,
    Dashboard,
    AccessDenied,
    Boissons,
    Lots,
    Mouvements,
    Fournisseurs,
    Utilisateurs,
}

/// Per-route metadata the guard evaluates.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub name: RouteName,
    pub path: &'static str,
    pub requires_auth: bool,
    /// `None` means any authenticated role.
    pub allowed_roles: Option<&'static [Role]>,
}

const MANAGER_ONLY: &[Role] = &[Role::Manager];

const LOGIN: RouteMeta = RouteMeta {
    name: RouteName::Login,
    path: "/login",
    requires_auth: false,
    allowed_roles: None,
};

const CHANGE_PASSWORD: RouteMeta = RouteMeta {
    name: RouteName::ChangePassword,
    path: "/change-password",
    requires_auth: true,
    allowed_roles: None,
};

const DASHBOARD: RouteMeta = RouteMeta {
    name: RouteName::Dashboard,
    path: "/",
    requires_auth: true,
    allowed_roles: None,
};

const ACCESS_DENIED: RouteMeta = RouteMeta {
    name: RouteName::AccessDenied,
    path: "/access-denied",
    requires_auth: true,
    allowed_roles: None,
};

const BOISSONS: RouteMeta = RouteMeta {
    name: RouteName::Boissons,
    path: "/boisson",
    requires_auth: true,
    allowed_roles: None,
};

const LOTS: RouteMeta = RouteMeta {
    name: RouteName::Lots,
    path: "/lot",
    requires_auth: true,
    allowed_roles: None,
};

const MOUVEMENTS: RouteMeta = RouteMeta {
    name: RouteName::Mouvements,
    path: "/mouvement",
    requires_auth: true,
    allowed_roles: None,
};

const FOURNISSEURS: RouteMeta = RouteMeta {
    name: RouteName::Fournisseurs,
    path: "/fournisseur",
    requires_auth: true,
    allowed_roles: None,
};

const UTILISATEURS: RouteMeta = RouteMeta {
    name: RouteName::Utilisateurs,
    path: "/utilisateur",
    requires_auth: true,
    allowed_roles: Some(MANAGER_ONLY),
};

/// Every navigable route, in menu order.
pub const ROUTES: &[RouteMeta] = &[
    DASHBOARD,
    BOISSONS,
    LOTS,
    MOUVEMENTS,
    FOURNISSEURS,
    UTILISATEURS,
    LOGIN,
    CHANGE_PASSWORD,
    ACCESS_DENIED,
];

/// Metadata lookup by name. Total; never panics.
pub const fn meta(name: RouteName) -> &'static RouteMeta {
    match name {
        RouteName::Login => &LOGIN,
        RouteName::ChangePassword => &CHANGE_PASSWORD,
        RouteName::Dashboard => &DASHBOARD,
        RouteName::AccessDenied => &ACCESS_DENIED,
        RouteName::Boissons => &BOISSONS,
        RouteName::Lots => &LOTS,
        RouteName::Mouvements => &MOUVEMENTS,
        RouteName::Fournisseurs => &FOURNISSEURS,
        RouteName::Utilisateurs => &UTILISATEURS,
    }
}
