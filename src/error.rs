// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use snafu::Snafu;

use crate::token::{AuthError, IssueError};

/// API 错误类型
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Unauthorized: {}", source))]
    Unauthorized { source: AuthError },

    #[snafu(display("Bad request: {}", message))]
    BadRequest { message: String },

    #[snafu(display("Token issuance failed: {}", source))]
    Issue { source: IssueError },
}

/// API 错误响应格式
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            Error::Unauthorized { source } => {
                tracing::warn!(kind = source.kind(), "request rejected: {}", source);
                (
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized",
                    "Invalid or missing token".to_string(),
                )
            }
            Error::BadRequest { message } => {
                tracing::warn!("bad request: {}", message);
                (StatusCode::BAD_REQUEST, "BadRequest", message.clone())
            }
            Error::Issue { source } => {
                tracing::error!("{}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "Failed to issue token".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<AuthError> for Error {
    fn from(source: AuthError) -> Self {
        Error::Unauthorized { source }
    }
}

/// Result type for API handlers
pub type Result<T> = std::result::Result<T, Error>;
