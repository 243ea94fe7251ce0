//! Typed domain model for the League of Legends remote APIs.
//!
//! Decoded payload records keep their foreign keys as plain identifiers;
//! each identifier field exposes one resolution operation that takes the
//! matching collaborator client (catalog or live) and returns the full
//! entity. Transport, auth and rate limiting live behind the client
//! traits in [`service`] and are not part of this crate.

pub mod model;
pub mod service;
