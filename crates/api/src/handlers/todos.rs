//! Handlers for the todo CRUD endpoints.
//!
//! Validation runs before any repository call, so an invalid input never
//! touches the database. Not-found is decided by the repository's row
//! count, never by a separate existence check.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use doable_core::error::CoreError;
use doable_core::todos::validate_title;
use doable_core::types::DbId;
use doable_db::models::todo::{CreateTodo, UpdateTodo};
use doable_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{DataResponse, DeleteResult};
use crate::state::AppState;

/// GET /api/v1/todos
///
/// List all todos, most recently created first.
pub async fn list_todos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let todos = TodoRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: todos }))
}

/// GET /api/v1/todos/{id}
///
/// Fetch a single todo. A missing id yields `{ "data": null }`, not a 404;
/// get-by-id of an absent row is an ordinary answer, not a failure.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: todo }))
}

/// POST /api/v1/todos
///
/// Create a new todo. The title must be non-empty; everything else is
/// optional (description and due date default to null, priority to Medium).
pub async fn create_todo(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title)
        .map_err(|msg| CoreError::Validation(format!("title: {msg}")))?;

    let todo = TodoRepo::create(&state.pool, &input).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: todo })))
}

/// PUT /api/v1/todos/{id}
///
/// Partially update a todo. Absent fields are left unchanged; explicit
/// nulls clear the nullable fields. Fails with 404 when the id matches no
/// row.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateTodo>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_title(title)
            .map_err(|msg| CoreError::Validation(format!("title: {msg}")))?;
    }

    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    tracing::info!(todo_id = todo.id, "Todo updated");

    Ok(Json(DataResponse { data: todo }))
}

/// DELETE /api/v1/todos/{id}
///
/// Remove a todo. Fails with 404 when the id matches no row.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TodoRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Todo", id }));
    }

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Json(DataResponse {
        data: DeleteResult { success: true },
    }))
}
