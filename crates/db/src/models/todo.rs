//! Todo entity and its create/update DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use doable_core::types::{DbId, Timestamp};

/// Task priority. Stored as the PostgreSQL `priority` enum, so no value
/// outside these three can ever be persisted or read back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "priority")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A row from the `todos` table.
///
/// `due_date` is day-granular (`DATE` column); the timestamps are full
/// instants. `created_at` is set once at insert and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new todo.
///
/// Only `title` is required; `completed` is always false on creation and
/// `priority` defaults to Medium. The due date accepts either a date-only
/// string or a full timestamp (truncated to its literal calendar date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "doable_core::dates::opt_calendar_date::deserialize"
    )]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

/// DTO for partially updating a todo.
///
/// The nullable columns (`description`, `due_date`) are tri-state: a missing
/// key leaves the column unchanged, an explicit `null` clears it, and a
/// value sets it. The non-nullable fields are plain options where a missing
/// key means "leave unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "doable_core::dates::patch_field"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "doable_core::dates::patch_calendar_date::deserialize"
    )]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}
