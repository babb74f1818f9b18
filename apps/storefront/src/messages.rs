//! # Localized Messages
//!
//! The four fixed strings a shopper can see. Anything more specific stays
//! in the logs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for toasts and prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    /// BCP 47 tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Accepts `pt-BR`, `pt_BR`, `pt`, `en`, `en-US` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

/// Toast texts for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Messages {
    pub add_failure: &'static str,
    pub remove_failure: &'static str,
    pub update_failure: &'static str,
    pub out_of_stock: &'static str,
}

impl Messages {
    pub const PT_BR: Messages = Messages {
        add_failure: "Erro na adição do produto",
        remove_failure: "Erro na remoção do produto",
        update_failure: "Erro na alteração de quantidade do produto",
        out_of_stock: "Quantidade solicitada fora de estoque",
    };

    pub const EN: Messages = Messages {
        add_failure: "Could not add the product",
        remove_failure: "Could not remove the product",
        update_failure: "Could not change the product quantity",
        out_of_stock: "Requested quantity is out of stock",
    };

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::PtBr => Messages::PT_BR,
            Locale::En => Messages::EN,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Messages::PT_BR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("pt-BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("pt_br".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default_messages_are_portuguese() {
        let messages = Messages::default();
        assert_eq!(messages.add_failure, "Erro na adição do produto");
        assert_eq!(messages.out_of_stock, "Quantidade solicitada fora de estoque");
        assert_eq!(Messages::for_locale(Locale::En), Messages::EN);
    }
}
