use crate::services::catalog::CatalogError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(err) = self.0.downcast_ref::<CatalogError>() {
            let status = match err {
                CatalogError::DuplicateSku(_) => StatusCode::BAD_REQUEST,
                CatalogError::NotFound => StatusCode::NOT_FOUND,
                CatalogError::Db(_) | CatalogError::Storage(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            if status != StatusCode::INTERNAL_SERVER_ERROR {
                let body = Json(serde_json::json!({ "detail": err.to_string() }));
                return (status, body).into_response();
            }
        }

        tracing::error!("Application error: {:?}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": "Internal server error" })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
