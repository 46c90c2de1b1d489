//! Page views, one per route. Thin by design: domain logic lives on the
//! server, navigation policy in `nav`, session writes in `net::auth`.

pub mod access_denied;
pub mod boissons;
pub mod change_password;
pub mod dashboard;
pub mod fournisseurs;
pub mod login;
pub mod lots;
pub mod mouvements;
pub mod utilisateurs;
