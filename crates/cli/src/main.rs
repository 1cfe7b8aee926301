//! SKU Picker CLI - Exercise the picker adapter from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Check the configured installation parameters
//! sku-picker validate
//!
//! # List the second page of SKUs matching "shirt"
//! sku-picker search shirt --offset 20
//!
//! # Load previews for stored SKU codes
//! sku-picker previews TSHIRTMM000000FFFFFFXLXX BABYONBU000000E63E7412MX
//! ```
//!
//! # Commands
//!
//! - `validate` - Validate installation parameters and obtain a token
//! - `search` - Fetch one page of products, as the picker would
//! - `previews` - Fetch products by SKU code, with placeholders for missing ones
//!
//! Configuration is read from the environment; see `sku_picker::config`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "sku-picker")]
#[command(author, version, about = "Commerce Layer SKU picker tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate installation parameters and obtain an access token
    Validate {
        /// Only check the parameters, without contacting Commerce Layer
        #[arg(long)]
        offline: bool,
    },
    /// Fetch one page of products
    Search {
        /// Name or code filter (omit to list everything)
        #[arg(default_value = "")]
        query: String,

        /// Zero-based offset of the first product
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },
    /// Fetch products by SKU code
    Previews {
        /// SKU codes to look up
        #[arg(required = true)]
        skus: Vec<String>,
    },
}

/// Initialize tracing on stderr, keeping stdout for command output.
///
/// Defaults to info level for the picker crates if `RUST_LOG` is not set.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sku_picker=info,sku_picker_cli=info".into());

    let json = std::env::var("SKU_PICKER_LOG_FORMAT").is_ok_and(|format| format == "json");
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Validate { offline } => commands::validate::run(offline).await?,
        Commands::Search { query, offset } => commands::search::run(&query, offset).await?,
        Commands::Previews { skus } => commands::previews::run(&skus).await?,
    }
    Ok(())
}
