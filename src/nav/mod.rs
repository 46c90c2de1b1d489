//! Navigation authorization: route metadata, role checks, and the guard.
//!
//! DESIGN
//! ======
//! The guard is a pure function from `(route, session)` to a decision, so it
//! is unit-testable without a router or network. Effecting the redirect is
//! left to the `Guarded` component wrapping each routed page.

pub mod authorize;
pub mod guard;
pub mod routes;
