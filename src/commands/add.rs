//! Add command implementation.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::firewall::check_root;
use crate::lock::LockGuard;
use crate::manager::Outcome;

/// Run the add command
pub fn run(ip_str: &str, config_path: &Path) -> Result<()> {
    check_root()?;

    let config = Config::load_or_default(config_path)?;

    // Acquire lock to prevent concurrent blocklist mutations
    let _lock = LockGuard::acquire(&config.lock_file())?;

    let manager = super::manager_from(&config);
    match manager.add(ip_str)? {
        Outcome::Blocked(entry) => {
            println!("[OK] Blocked {}", entry);
            Ok(())
        }
        Outcome::AlreadyBlocked(entry) => {
            println!("{} is already in the blocklist", entry);
            Ok(())
        }
        Outcome::FirewallApplyFailed { entry, diagnostic } => {
            anyhow::bail!(
                "{} was added to the blocklist but the UFW rule failed to apply: {}",
                entry,
                diagnostic
            )
        }
        _ => unreachable!("add never reports remove outcomes"),
    }
}
