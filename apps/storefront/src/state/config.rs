//! # Configuration State
//!
//! Storefront settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--store-name`)
//! 2. Environment variables (`BEESY_*`)
//! 3. Defaults (this file)
//!
//! Read-only after initialization.

use beesy_core::{Money, STORE_NAME};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown as the header brand and landing headline.
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Shell prompt
    pub prompt: String,
}

impl Default for ConfigState {
    /// Store "BeesyBoutique", dollars, `> ` prompt.
    fn default() -> Self {
        ConfigState {
            store_name: STORE_NAME.to_string(),
            currency_symbol: "$".to_string(),
            prompt: "> ".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BEESY_STORE_NAME`: Override store name
    /// - `BEESY_CURRENCY_SYMBOL`: Override currency symbol (e.g. "€")
    /// - `BEESY_PROMPT`: Override shell prompt
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable
    /// source. Blank store name or symbol values are ignored; the prompt
    /// may be set to the empty string.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(store_name) = var("BEESY_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = var("BEESY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(prompt) = lookup("BEESY_PROMPT") {
            config.prompt = prompt;
        }

        config
    }

    /// Formats an amount as a currency string, always two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use beesy_core::Money;
    /// use beesy_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(7800)), "$78.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.cents() < 0 { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(2800)), "$28.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("BEESY_STORE_NAME", "Fern Gully"),
            ("BEESY_CURRENCY_SYMBOL", "€"),
        ]));

        assert_eq!(config.store_name, "Fern Gully");
        assert_eq!(config.format_currency(Money::from_major(22)), "€22.00");
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = ConfigState::from_lookup(lookup(&[("BEESY_STORE_NAME", "  ")]));
        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_blank_symbol_and_empty_prompt() {
        let config = ConfigState::from_lookup(lookup(&[
            ("BEESY_CURRENCY_SYMBOL", "  "),
            ("BEESY_PROMPT", ""),
        ]));

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.prompt, "");
        assert_eq!(config.store_name, STORE_NAME);
    }
}
