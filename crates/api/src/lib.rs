//! Deckhand API server library.
//!
//! Exposes the building blocks (config, state, error handling, status
//! resolution, routes) so integration tests and the binary entrypoint
//! can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod resolver;
pub mod routes;
pub mod state;
