//! Domain model structs and DTOs.
//!
//! The todo module contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO with tri-state nullable fields for patches

pub mod todo;
