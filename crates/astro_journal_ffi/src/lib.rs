//! Flutter-facing bindings for the astrology journal core.

pub mod api;
