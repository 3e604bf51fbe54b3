/**
 * Error Conversion
 *
 * Renders `BackendError` as the JSON error envelope and maps axum
 * extractor rejections onto `BackendError::Validation`, so malformed
 * bodies and query strings get the same envelope as every other failure.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Workspace not found",
 *   "status": 404,
 *   "error": "optional diagnostic"
 * }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::backend::error::types::BackendError;

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            message: self.message(),
            status: status.as_u16(),
            error: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(format!("Invalid query parameters: {}", rejection.body_text()))
    }
}
