//! The navigation guard: one decision per attempted page transition.
//!
//! Rules are evaluated in a fixed order and short-circuit. Getting the order
//! wrong either opens a hole (a public route escaping the forced
//! password-change flow) or builds a redirect loop, so the order lives here
//! in one place instead of nested conditionals spread over pages.
//!
//! The guard never fails and performs no I/O; ambiguity is resolved by
//! denying (fail-closed).

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::nav::authorize;
use crate::nav::routes::{RouteMeta, RouteName};
use crate::state::session::Session;

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    RedirectTo(RouteName),
}

/// Decide whether navigating to `target` is allowed under `session`.
pub fn evaluate(target: &RouteMeta, session: Option<&Session>) -> Decision {
    if let Some(session) = session {
        // A pending first login dominates every other rule, including the
        // auth requirement: even a public route cannot escape the mandatory
        // password change.
        if session.user.first_login && target.name != RouteName::ChangePassword {
            return Decision::RedirectTo(RouteName::ChangePassword);
        }
        // The flow cannot be revisited once complete.
        if !session.user.first_login && target.name == RouteName::ChangePassword {
            return Decision::RedirectTo(RouteName::Dashboard);
        }
    }

    if target.requires_auth && session.is_none() {
        return Decision::RedirectTo(RouteName::Login);
    }

    if let Some(roles) = target.allowed_roles {
        match session {
            Some(session) if authorize::is_allowed(session.user.role, Some(roles)) => {}
            Some(_) => return Decision::RedirectTo(RouteName::AccessDenied),
            // A role allow-list implies authentication, whatever the
            // route's own requires_auth flag says.
            None => return Decision::RedirectTo(RouteName::Login),
        }
    }

    if session.is_some() && target.name == RouteName::Login {
        return Decision::RedirectTo(RouteName::Dashboard);
    }

    Decision::Proceed
}
