use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Coarse classification of an engine failure, derived from the sqlx error
/// structure only — never from matching on message text. The raw message
/// always travels alongside it, so callers that still key on the engine's
/// wording keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ConstraintViolation,
    NotFound,
    DataAccess,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{message}")]
    DataAccess { kind: ErrorKind, message: String },
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => {
                let kind = if db_err.is_foreign_key_violation()
                    || db_err.is_unique_violation()
                    || db_err.is_check_violation()
                {
                    ErrorKind::ConstraintViolation
                } else {
                    ErrorKind::DataAccess
                };
                AppError::DataAccess {
                    kind,
                    // The engine's own message, unmodified. Trigger-raised
                    // rejections (SIGNAL) arrive here too.
                    message: db_err.message().to_string(),
                }
            }
            sqlx::Error::RowNotFound => AppError::DataAccess {
                kind: ErrorKind::NotFound,
                message: err.to_string(),
            },
            _ => AppError::DataAccess {
                kind: ErrorKind::DataAccess,
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every engine failure surfaces as a 500 whose body carries the raw
        // message; there is no separate 4xx path at this boundary.
        let AppError::DataAccess { kind, message } = self;
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": message, "kind": kind })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn engine_failure_is_500_with_raw_message() {
        let err = AppError::DataAccess {
            kind: ErrorKind::ConstraintViolation,
            message: "Cannot delete or update a parent row: a foreign key constraint fails"
                .to_string(),
        };
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Cannot delete or update a parent row: a foreign key constraint fails"
        );
        assert_eq!(body["kind"], "constraint_violation");
    }

    #[tokio::test]
    async fn row_not_found_classifies_as_not_found() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["kind"], "not_found");
        assert!(body["error"].as_str().unwrap().contains("no rows"));
    }

    #[tokio::test]
    async fn connectivity_failure_classifies_as_data_access() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        let (_, body) = body_json(err).await;
        assert_eq!(body["kind"], "data_access");
    }
}
