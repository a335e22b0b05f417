/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers and middleware can
 * return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * Server faults are logged here with their cause and sent with the generic
 * message only.
 */

use axum::{
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use crate::backend::error::types::BackendError;

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        }

        let body = ErrorBody {
            error: self.message(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}
