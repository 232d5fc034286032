//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument. Every mutation is a
//! single autocommitted statement, so a crash between two calls
//! leaves the registry in a valid intermediate state.

pub mod identity_repo;
pub mod job_repo;

pub use identity_repo::IdentityRepo;
pub use job_repo::JobRepo;
