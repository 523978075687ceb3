//! Domain types, validation, and calendar-date rules for the todo system.
//!
//! This crate is deliberately free of database and HTTP dependencies so the
//! server and client crates can share the same domain rules.

pub mod dates;
pub mod error;
pub mod todos;
pub mod types;
