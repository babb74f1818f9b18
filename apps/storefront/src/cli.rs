//! Command-line surface of the `shoecart` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::messages::Locale;
use crate::state::AppConfig;

/// Shoe store cart backed by local storage and the stock service.
#[derive(Debug, Parser)]
#[command(name = "shoecart", version, about)]
pub struct Cli {
    /// Stock service base URL [env: SHOECART_API_URL]
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds [env: SHOECART_TIMEOUT_SECS]
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Local storage database file [env: SHOECART_DB_PATH]
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Toast and price language: pt-BR or en [env: SHOECART_LOCALE]
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Keep the cart in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Print the cart as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the cart (default)
    Show,

    /// Add one unit of a product
    Add {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Remove a product from the cart
    Remove {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Set the quantity of a product in the cart
    Update {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

impl Cli {
    /// Applies flags on top of the environment-derived configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(path) = &self.db {
            config.db_path = Some(path.clone());
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_update_with_negative_amount() {
        let cli = Cli::try_parse_from(["shoecart", "update", "3", "-1"]).unwrap();

        assert!(matches!(
            cli.command,
            Some(Command::Update { id: 3, amount: -1 })
        ));
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "shoecart",
            "--api-url",
            "http://stock.test",
            "--locale",
            "en",
            "add",
            "1",
            "--timeout-secs",
            "2",
        ])
        .unwrap();
        let mut config = AppConfig::default();

        cli.apply(&mut config);

        assert_eq!(config.api_url, "http://stock.test");
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert!(matches!(cli.command, Some(Command::Add { id: 1 })));
    }

    #[test]
    fn test_rejects_unknown_locale() {
        assert!(Cli::try_parse_from(["shoecart", "--locale", "fr"]).is_err());
    }
}
