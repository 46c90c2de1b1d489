//! Role membership check for route allow-lists.

#[cfg(test)]
#[path = "authorize_test.rs"]
mod authorize_test;

use crate::state::session::Role;

/// Whether `role` may enter a route restricted to `allowed`.
///
/// An absent or empty allow-list means "any authenticated role". Pure and
/// total; there is no error path.
pub fn is_allowed(role: Role, allowed: Option<&[Role]>) -> bool {
    allowed.is_none_or(|roles| roles.is_empty() || roles.contains(&role))
}
