//! Typed client core for the conference-scheduling REST API.
//!
//! This crate owns the wire representation and the client-side session
//! lifecycle shared by the Leptos `client` and the `cli`. Network I/O is
//! abstracted behind [`transport::Transport`] so the browser (`gloo-net`) and
//! native (`reqwest`) edges plug in their own HTTP stacks.
//!
//! DATA FLOW
//! =========
//! page state -> [`resource::Resource`] -> [`http::HttpClient`] (bearer
//! attached) -> transport -> `{data}` envelope -> typed entity -> page state.

pub mod auth;
pub mod config;
pub mod crud;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod guard;
pub mod http;
pub mod resource;
pub mod session;
pub mod token_store;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ApiError;
pub use http::HttpClient;
pub use session::Session;
