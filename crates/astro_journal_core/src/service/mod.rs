//! Application use-case layer.
//!
//! # Responsibility
//! - Own the canonical in-memory state and mediate every mutation through the
//!   persistence gateway and content provider.
//! - Host the journal screen's validation and save-or-update routing.

pub mod app_store;
pub mod journal_flow;
