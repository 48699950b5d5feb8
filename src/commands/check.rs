//! Check command implementation.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::manager::Outcome;

/// Run the check command. Read-only, no root required.
pub fn run(ip_str: &str, config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let manager = super::manager_from(&config);

    match manager.check(ip_str)? {
        Outcome::Blocked(entry) => println!("IP {} is BLOCKED", entry),
        Outcome::NotBlocked(entry) => println!("IP {} is NOT blocked", entry),
        _ => unreachable!("check only reports blocked or not blocked"),
    }

    Ok(())
}
