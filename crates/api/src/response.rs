//! The `{code, data, message}` envelope every API response is wrapped in.
//!
//! `code` mirrors the HTTP status; `200` is the only success value. Handlers
//! return [`ApiResponse::ok`] and errors are rendered by
//! [`AppError`](crate::error::AppError) into the same shape with `data: null`.

use axum::Json;
use serde::Serialize;

pub const SUCCESS_CODE: u16 = 200;
pub const SUCCESS_MESSAGE: &str = "success";

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap `data` in a success envelope.
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            code: SUCCESS_CODE,
            data,
            message: SUCCESS_MESSAGE.to_string(),
        })
    }
}

/// Envelope for mutations whose payload is just "done".
pub fn ok_true() -> Json<ApiResponse<bool>> {
    ApiResponse::ok(true)
}

/// Envelope carrying `null` data.
pub fn ok_empty() -> Json<ApiResponse<Option<()>>> {
    ApiResponse::ok(None)
}
