//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome and route gating while reading the shared
//! session signal from Leptos context.

pub mod feedback;
pub mod guards;
pub mod layout;
