//! Remove command implementation.

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::firewall::check_root;
use crate::lock::LockGuard;
use crate::manager::Outcome;

/// Run the remove command
pub fn run(ip_str: &str, config_path: &Path) -> Result<()> {
    check_root()?;

    let config = Config::load_or_default(config_path)?;

    // Acquire lock to prevent concurrent blocklist mutations
    let _lock = LockGuard::acquire(&config.lock_file())?;

    let manager = super::manager_from(&config);
    match manager.remove(ip_str)? {
        Outcome::Unblocked(entry) => {
            println!("[OK] Unblocked {}", entry);
            Ok(())
        }
        Outcome::NotBlocked(entry) => {
            println!("{} is not in the blocklist", entry);
            Ok(())
        }
        Outcome::FirewallApplyFailed { entry, diagnostic } => {
            anyhow::bail!(
                "{} was removed from the blocklist but the UFW rule failed to delete: {}",
                entry,
                diagnostic
            )
        }
        _ => unreachable!("remove never reports add outcomes"),
    }
}
