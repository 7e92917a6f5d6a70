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

use axum::{extract::State, http::header, response::IntoResponse};
use snafu::ResultExt;

use crate::error::{self, Result};
use crate::state::AppState;

/// 签发 Token
///
/// Returns a fresh admin token as plain text.
pub async fn logon(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let token = state
        .tokens
        .issue(chrono::Utc::now())
        .context(error::IssueSnafu)?;

    tracing::info!("Issued admin token");

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], token))
}
