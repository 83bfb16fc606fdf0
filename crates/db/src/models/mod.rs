//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row.
//!   Serialization uses the camelCase wire names the HTTP surface exposes.
//! - A `Deserialize` create DTO for the corresponding POST body.

pub mod dead_letter;
pub mod event;
pub mod notification;
pub mod user;
