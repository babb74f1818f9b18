//! # Shoecart Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  $ shoecart add 3                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  main.rs ────► parse flags, hand off to the library                    │
//! │  lib.rs ─────► logging, config, storage, catalog, CartStore            │
//! │  commands/ ──► get_cart, add_to_cart, remove_from_cart, ...            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stdout: cart table (or JSON)     stderr: toasts + logs                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::process::ExitCode;

use shoecart_storefront::cli::Cli;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    shoecart_storefront::run(Cli::parse())
}
