//! Window helpers (delete confirmation, scroll-to-form) and the cell
//! formatting used by the speaker, venue and reservation tables.

pub mod browser;
pub mod format;
