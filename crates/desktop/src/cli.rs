//! Command-line front-end.
//!
//! Field values are passed through as raw strings, exactly like text boxes on
//! a form, so blank and malformed input is reported by the workflows.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use stocktrack_infra::{CatalogStore, JsonCatalogStore, JsonOrderLog, OrderLog};
use stocktrack_observability::LogFormat;
use stocktrack_products::ProductSelection;

use crate::config::DesktopConfig;
use crate::error::WorkflowError;
use crate::inventory::Inventory;
use crate::outcome::CURRENCY;

#[derive(Debug, Parser)]
#[command(name = "stocktrack", author, version, about = "Stock tracking for a small product catalog", long_about = None)]
pub struct Args {
    /// Catalog file, overriding STOCKTRACK_CATALOG_FILE (falls back to urunler.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Order log file, overriding STOCKTRACK_ORDERS_FILE (falls back to siparisler.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub orders: Option<PathBuf>,

    /// Log output, text or json, overriding STOCKTRACK_LOG_FORMAT
    #[arg(long, global = true, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every product in the catalog
    List,

    /// Show one of the well-known products (name such as `tablet`, or 101-109)
    Info { selection: Option<String> },

    /// Create an order and take its quantity out of stock
    Order {
        #[arg(long, default_value = "")]
        order_id: String,
        #[arg(long, default_value = "")]
        product_id: String,
        #[arg(long, default_value = "")]
        quantity: String,
    },

    /// Calculate the price of a quantity without ordering
    Quote {
        #[arg(long, default_value = "")]
        product_id: String,
        #[arg(long, default_value = "")]
        quantity: String,
    },

    /// Overwrite the stock count of a product
    SetStock {
        #[arg(long, default_value = "")]
        product_id: String,
        #[arg(long = "stock", default_value = "")]
        new_stock: String,
    },
}

impl Args {
    /// Environment configuration with command-line overrides applied.
    pub fn config(&self) -> DesktopConfig {
        let mut config = DesktopConfig::from_env();
        if let Some(path) = &self.catalog {
            config = config.with_catalog_path(path);
        }
        if let Some(path) = &self.orders {
            config = config.with_orders_path(path);
        }
        if let Some(format) = self.log_format {
            config = config.with_log_format(format);
        }
        config
    }

    pub fn run(self) -> anyhow::Result<()> {
        let config = self.config();
        stocktrack_observability::init(config.log_format);
        for warning in &config.warnings {
            tracing::warn!(%warning, "ignoring configuration value");
        }
        tracing::debug!(?config, "starting");

        let mut inventory = Inventory::open(
            JsonCatalogStore::new(&config.catalog_path),
            JsonOrderLog::new(&config.orders_path),
        )
        .with_context(|| format!("failed to load catalog from {}", config.catalog_path.display()))?;

        if let Some(issue) = inventory.load_issue() {
            eprintln!("warning: {issue}");
        }

        let output = self.command.execute(&mut inventory)?;
        println!("{output}");
        Ok(())
    }
}

impl Command {
    /// Run against `inventory` and render the success message.
    pub fn execute<C: CatalogStore, L: OrderLog>(
        self,
        inventory: &mut Inventory<C, L>,
    ) -> Result<String, WorkflowError> {
        match self {
            Command::List => Ok(render_list(inventory)),
            Command::Info { selection } => {
                let selection = selection
                    .map(|raw| raw.parse::<ProductSelection>())
                    .transpose()?;
                inventory.product_info(selection)
            }
            Command::Order {
                order_id,
                product_id,
                quantity,
            } => inventory
                .place_order(&order_id, &product_id, &quantity)
                .map(|placed| placed.to_string()),
            Command::Quote {
                product_id,
                quantity,
            } => inventory
                .quote(&product_id, &quantity)
                .map(|quote| quote.to_string()),
            Command::SetStock {
                product_id,
                new_stock,
            } => inventory
                .update_stock(&product_id, &new_stock)
                .map(|updated| updated.to_string()),
        }
    }
}

fn render_list<C: CatalogStore, L: OrderLog>(inventory: &Inventory<C, L>) -> String {
    let products = inventory.products();
    if products.is_empty() {
        return "No products.".to_string();
    }

    let width = products.iter().map(|p| p.name().len()).max().unwrap_or(0);
    let mut out = String::new();
    for p in products {
        let _ = writeln!(
            out,
            "{:>5}  {:<width$}  {:>10} {CURRENCY}  stock {}",
            p.id_typed(),
            p.name(),
            p.price().to_string(),
            p.stock(),
        );
    }
    out.truncate(out.trim_end().len());
    out
}
