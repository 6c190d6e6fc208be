//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` + `Validate` payload DTO as received over the wire
//! - A validated write model produced from the payload and handed to the gateway

pub mod album;
pub mod artist;
pub mod track;
pub mod user;
