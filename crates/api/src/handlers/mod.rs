//! Request handlers.
//!
//! Each submodule provides the async handler functions for one
//! resource. Handlers delegate to the repositories and the status
//! resolver and map errors via [`crate::error::AppError`].

pub mod health;
pub mod intake;
pub mod status;
