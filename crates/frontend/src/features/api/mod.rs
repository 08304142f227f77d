//! Per-route JSON handlers served by the frontend process itself.
//!
//! They answer the same contract as the standalone API for the two routes
//! the pages need, backed by the same repository.

pub mod handlers;
pub mod routes;
