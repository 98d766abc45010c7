//! Command queue and worker runtime between the UI and the client core.

pub mod commands;
pub mod runtime;
