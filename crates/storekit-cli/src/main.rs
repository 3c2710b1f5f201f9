use std::path::PathBuf;

use clap::{Parser, Subcommand};
use storekit_checkout::{ShippingClient, ShippingRateRequest};
use storekit_core::{applied_filters_with_labels, load_markets, load_store_config};
use storekit_filters::{decode_filters, parse_query};

#[derive(Debug, Parser)]
#[command(name = "storekit-cli")]
#[command(about = "Storekit storefront state toolkit CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode the filter predicates carried by a collection query string.
    Filters {
        /// Query string, with or without the leading `?`.
        #[arg(long)]
        query: String,
    },
    /// Validate a markets YAML file and list its locales.
    Markets {
        #[arg(long, env = "STOREKIT_MARKETS_PATH")]
        path: PathBuf,
    },
    /// Request a shipping estimate from a live storefront endpoint.
    Shipping {
        /// Overrides the configured `STOREKIT_STOREFRONT_BASE_URL`.
        #[arg(long)]
        endpoint: Option<String>,
        #[arg(long)]
        country: String,
        #[arg(long)]
        province: Option<String>,
        #[arg(long)]
        zip: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Filters { query } => {
            let filters = decode_filters(&parse_query(&query));
            if filters.is_empty() {
                println!("no filters");
            }
            for applied in applied_filters_with_labels(&filters) {
                println!("{}", applied.label);
            }
        }
        Commands::Markets { path } => {
            let file = load_markets(&path)?;
            for market in &file.markets {
                println!("{}  {}  {}", market.locale, market.currency, market.label);
            }
        }
        Commands::Shipping {
            endpoint,
            country,
            province,
            zip,
        } => {
            let config = load_store_config()?;
            let client = ShippingClient::new(config.request_timeout_secs, &config.user_agent)?;
            let endpoint = endpoint.unwrap_or(config.storefront_base_url);
            let request = ShippingRateRequest {
                country_code: country,
                province_code: province,
                zip,
            };
            let options = client.estimate(&endpoint, &request).await?;
            if options.is_empty() {
                println!("no delivery options");
            }
            for option in options {
                println!("{}  {}  {}", option.handle, option.title, option.estimated_cost);
            }
        }
    }

    Ok(())
}
