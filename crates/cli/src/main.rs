//! Naked Pineapple cart CLI - Offline tools for the cart engine.
//!
//! # Usage
//!
//! ```bash
//! # Replay an action log against an empty cart
//! np-cart replay --actions actions.json
//!
//! # Replay against a saved snapshot
//! np-cart replay --actions actions.json --cart cart.json --currency CAD
//!
//! # Check a cart snapshot for invariant violations
//! np-cart check --cart cart.json
//! ```
//!
//! # Commands
//!
//! - `replay` - Apply a JSON array of cart actions and print the resulting cart
//! - `check` - Print invariant violations; exits non-zero if there are any
//!
//! Logs go to stderr (`RUST_LOG` controls the level); results go to stdout.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pineapple_cart_core::DEFAULT_CURRENCY_CODE;

mod commands;
mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "np-cart")]
#[command(author, version, about = "Naked Pineapple cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a JSON array of actions and print the resulting cart
    Replay {
        /// File holding a JSON array of cart actions
        #[arg(short, long)]
        actions: PathBuf,

        /// Cart snapshot to start from (defaults to an empty cart)
        #[arg(short, long)]
        cart: Option<PathBuf>,

        /// Currency for empty carts
        #[arg(long, default_value = DEFAULT_CURRENCY_CODE)]
        currency: String,
    },
    /// Check a cart snapshot against the engine invariants
    Check {
        /// Cart snapshot file
        #[arg(short, long)]
        cart: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pineapple_cart_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Replay {
            actions,
            cart,
            currency,
        } => commands::replay::run(&actions, cart.as_deref(), &currency, &mut stdout),
        Commands::Check { cart } => commands::check::run(&cart, &mut stdout),
    }
}
