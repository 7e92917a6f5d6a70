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

use std::path::Path;

use axum::{Router, middleware, routing::get};
use tower_http::services::{ServeDir, ServeFile};

use crate::{handlers, middleware::auth::require_token, state::AppState};

/// 公开路由 (无需认证)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handlers::status::status))
        .route("/logon", get(handlers::auth::logon))
}

/// 产品路由 (需要 Bearer Token)
///
/// The gate is layered on the method router, so an unsupported method is
/// answered with 405 before any token check.
pub fn product_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        "/products",
        get(handlers::products::list_products)
            .post(handlers::products::add_product)
            .route_layer(middleware::from_fn_with_state(state, require_token)),
    )
}

/// 首页与静态资源
pub fn asset_routes(views_dir: &Path, static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(views_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
}
