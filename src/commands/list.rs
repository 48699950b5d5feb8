//! List command implementation.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;

/// Run the list command. Read-only, no root required.
pub fn run(config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let manager = super::manager_from(&config);

    let list = manager.list()?;
    if list.is_empty() {
        println!("Blocklist is empty.");
        return Ok(());
    }

    println!("Blocklist ({} entries):", list.len());
    for entry in list.iter() {
        println!("  {}", entry);
    }

    Ok(())
}
