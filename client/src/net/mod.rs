//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` plugs the browser's HTTP stack, storage and navigation into the
//! `api` crate's request pipeline.

pub mod browser;
