//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates list/form state
//! transitions to `api::crud`.

pub mod auditorios;
pub mod conferencistas;
pub(crate) mod crud;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod reservas;
