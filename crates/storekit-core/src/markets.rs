use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A storefront locale: ISO 639-1 language plus ISO 3166-1 country.
///
/// Displays as `en-US`; URL paths are prefixed with `/en-US`. Switching
/// locale is a full navigation to the prefixed path, never a client-side
/// state change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// Lowercase language code, e.g. `"en"`.
    pub language: String,
    /// Uppercase country code, e.g. `"US"`.
    pub country: String,
}

impl Locale {
    #[must_use]
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            country: country.into().to_uppercase(),
        }
    }

    /// Parses `"en-US"`-style strings. Case-insensitive on both halves.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (language, country) = s.split_once('-')?;
        if language.len() != 2 || country.len() != 2 {
            return None;
        }
        if !language.chars().all(|c| c.is_ascii_alphabetic())
            || !country.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }
        Some(Self::new(language, country))
    }

    /// The path prefix for this locale, e.g. `"/en-US"`.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!("/{self}")
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.language, self.country)
    }
}

/// One storefront market as configured in the markets YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    /// Display name shown in the country selector, e.g. `"United States (USD $)"`.
    pub label: String,
    pub locale: Locale,
    /// ISO 4217 currency code, e.g. `"USD"`.
    pub currency: String,
}

#[derive(Debug, Deserialize)]
pub struct MarketsFile {
    pub markets: Vec<Market>,
}

impl MarketsFile {
    /// Finds the market for a given locale, if configured.
    #[must_use]
    pub fn market_for(&self, locale: &Locale) -> Option<&Market> {
        self.markets.iter().find(|m| m.locale == *locale)
    }
}

/// Load and validate the markets configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation (empty label, empty market list, duplicate locale).
pub fn load_markets(path: &Path) -> Result<MarketsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::MarketsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let markets_file: MarketsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::MarketsFileParse)?;

    validate_markets(&markets_file)?;

    Ok(markets_file)
}

fn validate_markets(markets_file: &MarketsFile) -> Result<(), ConfigError> {
    if markets_file.markets.is_empty() {
        return Err(ConfigError::Validation(
            "markets file must define at least one market".to_string(),
        ));
    }

    let mut seen_locales = HashSet::new();
    for market in &markets_file.markets {
        if market.label.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "market '{}' has an empty label",
                market.locale
            )));
        }

        if market.currency.len() != 3 {
            return Err(ConfigError::Validation(format!(
                "market '{}' has invalid currency code '{}'",
                market.locale, market.currency
            )));
        }

        if !seen_locales.insert(market.locale.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate market locale: '{}'",
                market.locale
            )));
        }
    }

    Ok(())
}
