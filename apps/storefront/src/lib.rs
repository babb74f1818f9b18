//! # Shoecart Storefront Library
//!
//! Cart store, notifications and the command layer of the shoe store, plus
//! the `shoecart` CLI host that drives them.
//!
//! ## Module Organization
//! ```text
//! shoecart_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap flags and subcommands
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartStore (stock checks, persistence, toasts)
//! │   └── config.rs   ◄─── AppConfig (env + defaults, currency format)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── cart.rs     ◄─── get_cart, add_to_cart, remove_from_cart, ...
//! ├── toast.rs        ◄─── Toast, ToastSink, ToastLog, TracingToasts
//! ├── messages.rs     ◄─── Locale and the localized toast texts
//! └── error.rs        ◄─── CartError (→ toast), AppError (host)
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod messages;
pub mod state;
pub mod toast;

use directories::ProjectDirs;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shoecart_catalog::CatalogClient;
use shoecart_db::{Database, DbConfig, LocalStorage, MemoryStorage};

use cli::{Cli, Command};
use commands::cart::CartResponse;
use error::{AppError, AppResult};
use state::{AppConfig, CartStore, StoreOptions};
use toast::{ToastLog, TracingToasts};

/// Runs one CLI invocation.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • SHOECART_* env vars, then CLI flags                               │
/// │                                                                         │
/// │  3. Open Local Storage ───────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, migrations (or memory with --ephemeral)     │
/// │                                                                         │
/// │  4. Hydrate CartStore ────────────────────────────────────────────────► │
/// │     • Restore "@RocketShoes:cart"                                       │
/// │                                                                         │
/// │  5. Run Command, print cart, print toasts ────────────────────────────► │
/// │     • exit 1 when any toast was shown                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> ExitCode {
    init_tracing();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: could not start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(execute(cli)) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "shoecart failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> AppResult<ExitCode> {
    let mut config = AppConfig::from_env()?;
    cli.apply(&mut config);
    info!(api_url = %config.api_url, locale = %config.locale, "Starting shoecart");

    let catalog = Arc::new(CatalogClient::new(config.catalog())?);

    let (storage, db): (Arc<dyn LocalStorage>, Option<Database>) = if cli.ephemeral {
        info!("Using in-memory local storage");
        (Arc::new(MemoryStorage::new()), None)
    } else {
        let db_path = get_database_path(&config)?;
        info!(?db_path, "Database path determined");

        let db = Database::new(DbConfig::new(db_path)).await?;
        (Arc::new(db.local_storage()), Some(db))
    };

    let toasts = ToastLog::new();
    let store = CartStore::hydrate(
        catalog,
        storage,
        Arc::new((TracingToasts, toasts.clone())),
        StoreOptions {
            storage_key: config.storage_key.clone(),
            messages: config.messages(),
        },
    )
    .await;

    let response = match cli.command.clone().unwrap_or(Command::Show) {
        Command::Show => commands::cart::get_cart(&store),
        Command::Add { id } => commands::cart::add_to_cart(&store, id).await,
        Command::Remove { id } => commands::cart::remove_from_cart(&store, id).await,
        Command::Update { id, amount } => {
            commands::cart::update_cart_item(&store, id, amount).await
        }
    };

    let shown = toasts.drain();
    for toast in &shown {
        eprintln!("{}", toast);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_cart(&config, &response));
    }

    if let Some(db) = db {
        db.close().await;
    }

    Ok(if shown.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Plain-text cart listing.
pub fn render_cart(config: &AppConfig, response: &CartResponse) -> String {
    let mut out = String::new();

    if response.items.is_empty() {
        out.push_str("(empty cart)\n");
        return out;
    }

    for item in &response.items {
        let _ = writeln!(
            out,
            "#{:<4} {:<48} {:>3} x {:>12} = {:>12}",
            item.id.get(),
            item.title,
            item.amount,
            config.format_currency(item.price),
            config.format_currency(item.line_total()),
        );
    }

    let _ = writeln!(
        out,
        "{} item(s), {} unit(s), subtotal {}",
        response.totals.item_count,
        response.totals.total_quantity,
        config.format_currency(response.totals.subtotal),
    );

    out
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shoecart=trace` - Show trace for shoecart crates only
/// - Default: `info,shoecart=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shoecart=debug,sqlx=warn"));

    // stdout carries the cart; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.shoecart.shoecart/shoecart.db`
/// - **Windows**: `%APPDATA%\shoecart\shoecart\data\shoecart.db`
/// - **Linux**: `~/.local/share/shoecart/shoecart.db`
///
/// `SHOECART_DB_PATH` or `--db` override this.
fn get_database_path(config: &AppConfig) -> AppResult<PathBuf> {
    if let Some(path) = &config.db_path {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "shoecart", "shoecart").ok_or(AppError::DataDir)?;
    let data_dir = proj_dirs.data_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("shoecart.db"))
}
