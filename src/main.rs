mod cli;

use anyhow::{Context, Result};
use catalog_cli::api::{CatalogApi, CatalogClient};
use catalog_cli::config::AppConfig;
use catalog_cli::output;
use catalog_cli::screens::list::{EMPTY_CATALOG, EMPTY_SEARCH};
use catalog_cli::ui;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use std::sync::{Arc, Mutex};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.base_url.clone(), cli.timeout, cli.debug)?;

    let log_file = match cli.command {
        Commands::Browse => Some(config.log_file()),
        _ => None,
    };
    init_tracing(config.debug, log_file.as_deref())?;

    let client = CatalogClient::new(&config).context("Failed to build HTTP client")?;
    tracing::debug!(base_url = %client.base_url(), "Catalog client ready");

    match cli.command {
        Commands::Browse => {
            ui::runtime::run(&config, Arc::new(client))
                .await
                .context("Terminal UI failed")?;
        }
        Commands::List { limit } => {
            install_interrupt_handler()?;
            cmd_list(&client, limit).await?;
        }
        Commands::Search { query, limit } => {
            install_interrupt_handler()?;
            cmd_search(&client, &query, limit).await?;
        }
        Commands::Product { id } => {
            install_interrupt_handler()?;
            cmd_product(&client, id).await?;
        }
    }

    Ok(())
}

fn init_tracing(debug: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = if debug {
        "catalog_cli=debug"
    } else {
        "catalog_cli=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    match log_file {
        // The TUI owns the terminal, so its logs go to a file instead of stderr.
        Some(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nInterrupted.");
        std::process::exit(130);
    })
    .context("Failed to set Ctrl+C handler")
}

async fn cmd_list(client: &CatalogClient, limit: Option<usize>) -> Result<()> {
    let mut products = client
        .list_products()
        .await
        .context("Failed to load products")?;
    if let Some(limit) = limit {
        products.truncate(limit);
    }
    print!(
        "{}",
        output::format_product_list("Products", &products, EMPTY_CATALOG)
    );
    Ok(())
}

async fn cmd_search(client: &CatalogClient, query: &str, limit: Option<usize>) -> Result<()> {
    // A blank query behaves like the unfiltered list.
    if query.trim().is_empty() {
        return cmd_list(client, limit).await;
    }

    let mut products = client
        .search_products(query)
        .await
        .context("Failed to search products")?;
    if let Some(limit) = limit {
        products.truncate(limit);
    }
    let heading = format!("Search results for \"{}\"", query.trim());
    print!(
        "{}",
        output::format_product_list(&heading, &products, EMPTY_SEARCH)
    );
    Ok(())
}

async fn cmd_product(client: &CatalogClient, id: u64) -> Result<()> {
    let product = client
        .get_product(id)
        .await
        .with_context(|| format!("Failed to load product {}", id))?;
    print!("{}", output::format_product_detail(&product));
    Ok(())
}
