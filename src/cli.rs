use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "catalog-cli",
    version,
    about = "Browse the dummyjson product catalog from the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API root to query (default: https://dummyjson.com)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (default: transport default)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive product browser
    Browse,

    /// Print the full product list
    List {
        /// Max number of products to print
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Search products by keyword
    Search {
        /// Search term (e.g., "phone", "mascara")
        query: String,

        /// Max number of results to print
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show details for one product
    Product {
        /// Numeric product ID
        id: u64,
    },
}
