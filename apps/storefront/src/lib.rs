//! # BeesyBoutique Storefront
//!
//! Terminal front end for the storefront core.
//!
//! ## Module Organization
//! ```text
//! beesy_storefront/
//! ├── lib.rs          ◄─── You are here (flags, logging, run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Owned session + dispatch
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Product queries
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── navigation.rs ◄─ View switching
//! ├── shell.rs        ◄─── Line parser + event loop
//! ├── render.rs       ◄─── Text views
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod shell;
pub mod state;

use std::io;

use beesy_core::Catalog;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::StorefrontError;
use shell::{OutputMode, Shell};
use state::ConfigState;

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(name = "beesy-storefront", version, about = "BeesyBoutique plant shop in your terminal")]
pub struct Cli {
    /// Print each reply as a JSON line instead of rendered text
    #[arg(long)]
    pub json: bool,

    /// Store name shown in the header (overrides BEESY_STORE_NAME)
    #[arg(long, value_name = "NAME")]
    pub store_name: Option<String>,
}

impl Cli {
    /// Environment config with flag overrides applied.
    pub fn config(&self) -> ConfigState {
        let mut config = ConfigState::from_env();
        if let Some(name) = &self.store_name {
            config.store_name = name.clone();
        }
        config
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

/// Runs the storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse flags (clap)                                                  │
/// │  2. Initialize logging (stderr, RUST_LOG or "info,beesy=debug")         │
/// │  3. Load config (BEESY_* env, then flags)                               │
/// │  4. Build the catalog and a fresh session                               │
/// │  5. Read commands from stdin until `quit` or EOF                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), StorefrontError> {
    let cli = Cli::parse();

    init_tracing();

    let config = cli.config();
    let catalog = Catalog::plants();
    info!(
        store = %config.store_name,
        products = catalog.len(),
        json = cli.json,
        "Starting storefront"
    );

    let mut shell = Shell::new(catalog, config, cli.output_mode());
    shell.run(io::stdin().lock(), io::stdout().lock())
}

/// Logs go to stderr so stdout carries only the storefront itself.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,beesy=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
