//! HTTP error mapping.
//!
//! # Design
//! Handlers return `AppError`; `IntoResponse` turns it into a status code and
//! a JSON `ErrorBody`. Not-found is the only failure the store side can
//! produce. Validation failures come from the body checks that run before
//! the store is touched.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use problems_core::ValidationErrors;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use utoipa::ToSchema;

/// JSON body of every 4xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    /// Failed validation messages keyed by field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("problem {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

impl AppError {
    pub fn not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        debug!(%id, "problem not found");
        AppError::NotFound(id)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        let body = match self {
            AppError::NotFound(_) => ErrorBody {
                code: "NOT_FOUND".to_string(),
                message,
                errors: None,
            },
            AppError::Validation(errors) => ErrorBody {
                code: "VALIDATION_FAILED".to_string(),
                message,
                errors: Some(errors.into_errors()),
            },
        };
        (status, Json(body)).into_response()
    }
}
