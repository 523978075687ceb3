//! Repository for the `todos` table.

use sqlx::PgPool;

use doable_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Column list for todos queries.
const COLUMNS: &str = "id, title, description, completed, due_date, priority, created_at, updated_at";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Create a new todo, returning the created row.
    ///
    /// `completed` and the timestamps come from the column defaults; an
    /// unspecified priority falls back to Medium.
    pub async fn create(pool: &PgPool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, description, due_date, priority)
             VALUES ($1, $2, $3, COALESCE($4, 'Medium'::priority))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_date)
            .bind(input.priority)
            .fetch_one(pool)
            .await
    }

    /// Find a todo by its ID. A missing row is `Ok(None)`, not an error.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all todos, most recently created first.
    ///
    /// Rows sharing a `created_at` are ordered by id descending, so the
    /// ordering is stable and newer inserts still sort first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Partially update a todo by ID, returning the updated row.
    ///
    /// Non-nullable fields use `COALESCE` so only provided values change.
    /// `description` and `due_date` are tri-state (`Option<Option<T>>`):
    /// the CASE arms apply the inner value (possibly NULL, clearing the
    /// column) only when the field was present in the input. `updated_at`
    /// is refreshed unconditionally. The whole update is one conditional
    /// statement; `Ok(None)` means no row matched the id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let description_provided = input.description.is_some();
        let description_value = input.description.as_ref().and_then(|v| v.as_deref());
        let due_date_provided = input.due_date.is_some();
        let due_date_value = input.due_date.flatten();

        let query = format!(
            "UPDATE todos SET
                title       = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                completed   = COALESCE($5, completed),
                due_date    = CASE WHEN $6 THEN $7 ELSE due_date END,
                priority    = COALESCE($8, priority),
                updated_at  = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(description_provided)
            .bind(description_value)
            .bind(input.completed)
            .bind(due_date_provided)
            .bind(due_date_value)
            .bind(input.priority)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
