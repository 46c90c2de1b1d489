//! Reusable UI components.

pub mod guarded;
pub mod navbar;
