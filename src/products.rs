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

use std::fmt;
use std::sync::Arc;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Product as exposed on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Create request body. The client-supplied id is accepted but ignored.
///
/// Field names match case-insensitively, `null` values leave the field at
/// its default, unknown fields are skipped and a bare `null` body yields an
/// empty product.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NewProduct {
    pub id: Option<i64>,
    pub name: String,
}

impl<'de> Deserialize<'de> for NewProduct {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NewProductVisitor)
    }
}

struct NewProductVisitor;

impl<'de> Visitor<'de> for NewProductVisitor {
    type Value = NewProduct;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a product object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<NewProduct, E> {
        Ok(NewProduct::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<NewProduct, A::Error> {
        let mut product = NewProduct::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("id") {
                if let Some(id) = map.next_value::<Option<i64>>()? {
                    product.id = Some(id);
                }
            } else if key.eq_ignore_ascii_case("name") {
                if let Some(name) = map.next_value::<Option<String>>()? {
                    product.name = name;
                }
            } else {
                map.next_value::<de::IgnoredAny>()?;
            }
        }
        Ok(product)
    }
}

/// Entries present at startup.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(0, "Ogurets"),
        Product::new(1, "Pomidor"),
        Product::new(2, "Banan"),
    ]
}

/// Append-only product sequence shared by all requests.
///
/// Id assignment and the append happen under a single write guard, so
/// concurrent inserts never observe the same last id.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    items: Arc<RwLock<Vec<Product>>>,
}

impl ProductStore {
    pub fn new(items: Vec<Product>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    /// Snapshot in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        self.items.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Append `name` with id `last.id + 1`, or `0` when the sequence is empty.
    pub async fn add(&self, name: String) -> Product {
        let mut items = self.items.write().await;
        let id = items.last().map_or(0, |last| last.id + 1);
        let product = Product { id, name };
        items.push(product.clone());
        product
    }
}
