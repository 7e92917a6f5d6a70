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

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::token::TokenService;

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod products;
pub mod routes;
pub mod server;
pub mod state;
pub mod token;


/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    server::run(config).await
}

/// Issue a token for the configured secret without starting the server.
pub fn issue_token(config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    let secret = config.signing_secret()?;
    let token = TokenService::new(&secret).issue(chrono::Utc::now())?;
    Ok(token)
}
