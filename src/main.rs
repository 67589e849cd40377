//! Contact Book - Main entry point
//!
//! Opens the configured address book and prints it page by page.

use anyhow::Result;
use contact_book::{AddressBook, Config, JsonFileStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can feed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only, stdout is for the listing)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Opening address book at {}",
        config.contacts_file.display()
    );

    let store = JsonFileStore::new(&config.contacts_file);
    let book = AddressBook::open(store)?;

    if book.is_empty() {
        println!("AddressBook is empty!");
        return Ok(());
    }

    for (index, page) in book.paginate(config.page_size)?.enumerate() {
        println!("--- Page {} ---", index + 1);
        println!("{}", page);
    }

    Ok(())
}
