//! Request extractors.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use doable_core::error::CoreError;

use crate::error::AppError;

/// JSON body extractor that reports rejections through the standard error
/// envelope.
///
/// The stock `axum::Json` rejection is a plain-text 422. A body that fails
/// to deserialize (malformed JSON, a bad date, an unknown priority) is an
/// invalid input like any other, so it becomes a 400 `VALIDATION_ERROR`
/// response carrying the deserializer's message.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Core(CoreError::Validation(rejection.body_text()))),
        }
    }
}
