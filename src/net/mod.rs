//! Network layer: transport plumbing and thin wrappers per API feature.
//!
//! Status codes are turned into the closed [`error::ApiError`] taxonomy once,
//! at the transport boundary; callers never probe raw responses. The bearer
//! token is applied per request by [`http`], not through an ambient default
//! header.

pub mod auth;
pub mod boissons;
pub mod error;
pub mod fournisseurs;
pub mod http;
pub mod inventaire;
pub mod stats;
pub mod types;
pub mod utilisateurs;
