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
use std::path::PathBuf;

use clap::Args;
use snafu::Snafu;

pub const DEFAULT_PORT: u16 = 3000;

/// Used when no secret is configured. Tokens signed with it are only fit
/// for local development.
pub const DEVELOPMENT_SECRET: &str = "product-api-secret-change-me-in-production";

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("JWT secret must not be empty"))]
    EmptySecret,
}

/// Server configuration, read from flags or the environment
#[derive(Clone, Args)]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Secret used to sign and verify tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,

    /// Directory holding index.html, served at /
    #[arg(long, env = "VIEWS_DIR", default_value = "./views")]
    pub views_dir: PathBuf,

    /// Directory served under /static/
    #[arg(long, env = "STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            jwt_secret: None,
            views_dir: PathBuf::from("./views"),
            static_dir: PathBuf::from("./static"),
        }
    }
}

impl Config {
    /// Secret bytes for the token service.
    ///
    /// Falls back to [`DEVELOPMENT_SECRET`] when unset; an explicitly
    /// empty secret is rejected.
    pub fn signing_secret(&self) -> Result<Vec<u8>, Error> {
        match self.jwt_secret.as_deref() {
            Some("") => EmptySecretSnafu.fail(),
            Some(secret) => Ok(secret.as_bytes().to_vec()),
            None => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                Ok(DEVELOPMENT_SECRET.as_bytes().to_vec())
            }
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("views_dir", &self.views_dir)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}
