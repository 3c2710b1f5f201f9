use thiserror::Error;

pub mod app_config;
pub mod cart;
pub mod config;
pub mod filters;
pub mod markets;
pub mod products;

pub use app_config::{Environment, StoreConfig};
pub use cart::{CartIntent, CartLine, CartSnapshot};
pub use config::{load_store_config, load_store_config_from_env};
pub use filters::{applied_filters_with_labels, AppliedFilter, ProductFilter};
pub use markets::{load_markets, Locale, Market, MarketsFile};
pub use products::{ProductOption, ProductVariant, SelectedOption};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read markets file {path}: {source}")]
    MarketsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse markets file: {0}")]
    MarketsFileParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
