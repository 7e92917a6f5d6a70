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
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::header::AUTHORIZATION;

use crate::error::Result;
use crate::state::AppState;
use crate::token::{AuthError, MalformedTokenSnafu, MissingTokenSnafu};

/// Bearer Token 认证中间件
///
/// Validates the `Authorization: Bearer <token>` header and only then
/// hands the request on. Claims are not forwarded to the handler.
pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|v| v.to_str().unwrap_or_default());

    let token = extract_bearer(header)?;
    state.tokens.validate(token, chrono::Utc::now())?;

    Ok(next.run(request).await)
}

/// 从 Authorization 头中解析 Bearer Token
fn extract_bearer(header: Option<&str>) -> std::result::Result<&str, AuthError> {
    let header = match header.map(str::trim) {
        None | Some("") => return MissingTokenSnafu.fail(),
        Some(value) => value,
    };

    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => MalformedTokenSnafu {
            reason: "Authorization header format must be Bearer {token}",
        }
        .fail(),
    }
}
