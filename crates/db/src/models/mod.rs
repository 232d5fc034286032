//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct
//! matching the database row, plus the insert DTO where one exists.

pub mod identity;
pub mod job;
pub mod status;
