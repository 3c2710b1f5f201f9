use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide storefront configuration, loaded from `STOREKIT_*`
/// environment variables.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub env: Environment,
    pub log_level: String,
    /// Path to the markets YAML file consumed by [`crate::load_markets`].
    pub markets_path: PathBuf,
    /// Base URL of the storefront API the checkout client talks to.
    pub storefront_base_url: String,
    /// Debounce window for the price slider commit, in milliseconds.
    pub debounce_ms: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
