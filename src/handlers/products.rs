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

use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::error::{Error, Result};
use crate::products::{NewProduct, Product};
use crate::state::AppState;

/// 列出所有产品 (按插入顺序)
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.products.list().await)
}

/// 添加产品
///
/// The body is parsed whatever its content type; any client-supplied id is
/// replaced with the next id in the sequence.
pub async fn add_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>)> {
    let new: NewProduct = serde_json::from_slice(&body).map_err(|e| Error::BadRequest {
        message: format!("Invalid product payload: {}", e),
    })?;

    let product = state.products.add(new.name).await;
    tracing::info!(id = product.id, name = %product.name, "Product added");

    Ok((StatusCode::ACCEPTED, Json(product)))
}
