//! CLI command implementations.

use crate::audit::FileAudit;
use crate::config::Config;
use crate::firewall::UfwFirewall;
use crate::manager::BlocklistManager;
use crate::store::BlocklistStore;

pub mod add;
pub mod check;
pub mod list;
pub mod remove;

/// Build the manager wired to the configured paths and UFW binary.
fn manager_from(config: &Config) -> BlocklistManager {
    BlocklistManager::new(
        BlocklistStore::new(&config.blocklist_file),
        Box::new(UfwFirewall::new(&config.ufw_path)),
        Box::new(FileAudit::new(&config.log_file)),
    )
}
