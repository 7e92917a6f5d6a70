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

use clap::{Parser, Subcommand};
use product_api::config::Config;
use product_api::{init_tracing, issue_token, run};

shadow_rs::shadow!(build);

#[derive(Parser)]
#[command(name = "product-api")]
#[command(about = "Token-gated product API", long_about = None)]
#[command(version = build::CLAP_LONG_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Server {
        #[command(flatten)]
        config: Config,
    },

    /// Print a freshly issued token for the configured secret
    Token {
        #[command(flatten)]
        config: Config,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Server { config } => run(config).await?,
        Commands::Token { config } => println!("{}", issue_token(&config)?),
    }

    Ok(())
}
