//! Persistence gateway over the local key-value store.
//!
//! # Responsibility
//! - Translate journal and sign operations into whole-value key writes.
//! - Recover read failures locally with empty/default values.
//!
//! # Invariants
//! - Entry ids are unique in the stored list.
//! - The entries list is rewritten whole under a single-writer lock.

pub mod journal_repo;
