//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only process-wide state the frontend owns is the session (bearer
//! token + current-user snapshot). It lives in a [`session::SessionState`]
//! provided via context as an `RwSignal`, so pages and the navigation guard
//! read one explicit store instead of ambient globals.

pub mod session;
