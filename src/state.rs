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

use std::sync::Arc;

use crate::products::ProductStore;
use crate::token::TokenService;

/// 应用状态
///
/// 启动时构建一次, 每个请求持有一份克隆
#[derive(Clone)]
pub struct AppState {
    /// Token 签发与验证
    pub tokens: Arc<TokenService>,
    /// 共享的产品列表
    pub products: ProductStore,
}

impl AppState {
    pub fn new(jwt_secret: &[u8], products: ProductStore) -> Self {
        Self {
            tokens: Arc::new(TokenService::new(jwt_secret)),
            products,
        }
    }

    /// 创建带初始产品的应用状态
    pub fn seeded(jwt_secret: &[u8]) -> Self {
        Self::new(jwt_secret, ProductStore::seeded())
    }
}
