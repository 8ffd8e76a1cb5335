//! # Configuration State
//!
//! Stores session configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPCART_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use shopcart_core::Money;
use std::env;
use std::str::FromStr;

/// Largest accepted `SHOPCART_CURRENCY_DECIMALS`.
pub const MAX_CURRENCY_DECIMALS: u8 = 4;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigState {
    /// Currency code (ISO 4217), for logs and the JSON view
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places the stored amounts carry
    pub currency_decimals: u8,

    /// Inserted between groups of three digits
    pub thousands_separator: String,

    /// Placed between whole and fractional part
    pub decimal_separator: String,

    /// How responses are written to stdout
    pub output: OutputFormat,
}

/// Output mode for responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,

    /// One JSON object per response
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("SHOPCART_OUTPUT".to_string())),
        }
    }
}

impl Default for ConfigState {
    /// Colombian peso display: `$ 120.000`.
    fn default() -> Self {
        ConfigState {
            currency_code: "COP".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 0,
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPCART_CURRENCY_CODE`
    /// - `SHOPCART_CURRENCY_SYMBOL`
    /// - `SHOPCART_CURRENCY_DECIMALS` (0-4)
    /// - `SHOPCART_THOUSANDS_SEPARATOR`
    /// - `SHOPCART_DECIMAL_SEPARATOR`
    /// - `SHOPCART_OUTPUT` (`text` or `json`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(code) = lookup("SHOPCART_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Some(symbol) = lookup("SHOPCART_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("SHOPCART_CURRENCY_DECIMALS") {
            config.currency_decimals = decimals
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|d| *d <= MAX_CURRENCY_DECIMALS)
                .ok_or_else(|| ConfigError::InvalidValue("SHOPCART_CURRENCY_DECIMALS".to_string()))?;
        }

        if let Some(sep) = lookup("SHOPCART_THOUSANDS_SEPARATOR") {
            config.thousands_separator = sep;
        }

        if let Some(sep) = lookup("SHOPCART_DECIMAL_SEPARATOR") {
            config.decimal_separator = sep;
        }

        if let Some(output) = lookup("SHOPCART_OUTPUT") {
            config.output = output.parse()?;
        }

        Ok(config)
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_cli::state::ConfigState;
    /// use shopcart_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::new(1_234_567)), "$ 1.234.567");
    /// ```
    pub fn format_currency(&self, money: Money) -> String {
        let amount = money.amount();
        let divisor = 10_u64.pow(u32::from(self.currency_decimals));
        let abs = amount.unsigned_abs();
        let whole = abs / divisor;
        let frac = abs % divisor;

        let mut out = String::new();
        if amount < 0 {
            out.push('-');
        }
        out.push_str(&self.currency_symbol);
        out.push(' ');
        out.push_str(&group_thousands(whole, &self.thousands_separator));

        if self.currency_decimals > 0 {
            out.push_str(&self.decimal_separator);
            out.push_str(&format!(
                "{:0width$}",
                frac,
                width = usize::from(self.currency_decimals)
            ));
        }

        out
    }
}

fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }

    out
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ConfigState, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_format_currency_default() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::new(120_000)), "$ 120.000");
        assert_eq!(config.format_currency(Money::new(95_000)), "$ 95.000");
        assert_eq!(config.format_currency(Money::new(999)), "$ 999");
        assert_eq!(config.format_currency(Money::new(0)), "$ 0");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::new(-1_500)), "-$ 1.500");
    }

    #[test]
    fn test_format_currency_with_decimals() {
        let config = config_from(&[
            ("SHOPCART_CURRENCY_DECIMALS", "2"),
            ("SHOPCART_THOUSANDS_SEPARATOR", ","),
            ("SHOPCART_DECIMAL_SEPARATOR", "."),
        ])
        .unwrap();
        assert_eq!(config.format_currency(Money::new(123_456_789)), "$ 1,234,567.89");
        assert_eq!(config.format_currency(Money::new(5)), "$ 0.05");
    }

    #[test]
    fn test_format_currency_extremes() {
        let config = ConfigState::default();
        assert_eq!(
            config.format_currency(Money::new(i64::MIN)),
            "-$ 9.223.372.036.854.775.808"
        );
    }

    #[test]
    fn test_from_lookup_defaults() {
        assert_eq!(config_from(&[]).unwrap(), ConfigState::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = config_from(&[
            ("SHOPCART_CURRENCY_CODE", "USD"),
            ("SHOPCART_CURRENCY_SYMBOL", "US$"),
            ("SHOPCART_OUTPUT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.currency_symbol, "US$");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        assert_eq!(
            config_from(&[("SHOPCART_CURRENCY_DECIMALS", "9")]),
            Err(ConfigError::InvalidValue(
                "SHOPCART_CURRENCY_DECIMALS".to_string()
            ))
        );
        assert!(config_from(&[("SHOPCART_CURRENCY_DECIMALS", "two")]).is_err());
        assert!(config_from(&[("SHOPCART_OUTPUT", "xml")]).is_err());
    }
}
