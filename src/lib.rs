//! # ufwban - Persistent IP blocklist manager backed by UFW
//!
//! Maintains an ordered, duplicate-free list of blocked IP addresses in
//! a JSON file and mirrors every change into UFW deny rules. The list
//! records the operator's *desired* state: a mutation is persisted
//! first, then enforced, and a failed enforcement is reported without
//! rolling the persisted change back.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                       ufwban                           │
//! ├────────────────────────────────────────────────────────┤
//! │  CLI (clap)                                            │
//! │    └── Commands: add, remove, check, list, version     │
//! ├────────────────────────────────────────────────────────┤
//! │  Config (serde_yaml)                                   │
//! │    └── blocklist_file, log_file, ufw_path              │
//! ├────────────────────────────────────────────────────────┤
//! │  BlocklistManager                                      │
//! │    ├── BlocklistStore (serde_json, atomic rename)      │
//! │    ├── Firewall trait ── UfwFirewall (CommandExecutor) │
//! │    └── AuditSink trait ── FileAudit                    │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutating commands hold an exclusive file lock for the whole
//! load-mutate-save cycle; saves go through tempfile + rename so
//! readers never observe a partial document.
//!
//! ## Example Usage
//!
//! ```no_run
//! use ufwban::audit::FileAudit;
//! use ufwban::firewall::{check_root, UfwFirewall};
//! use ufwban::manager::{BlocklistManager, Outcome};
//! use ufwban::store::BlocklistStore;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Mutations require the privileges UFW itself needs
//!     check_root()?;
//!
//!     let manager = BlocklistManager::new(
//!         BlocklistStore::new("/var/lib/ufwban/blocklist.json"),
//!         Box::new(UfwFirewall::new("ufw")),
//!         Box::new(FileAudit::new("/var/log/ufwban.log")),
//!     );
//!
//!     match manager.add("203.0.113.9")? {
//!         Outcome::Blocked(entry) => println!("blocked {}", entry),
//!         Outcome::AlreadyBlocked(entry) => println!("{} already blocked", entry),
//!         outcome => println!("{:?}", outcome),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`audit`] - Append-only audit trail (injected sink)
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`config`] - Configuration parsing and validation
//! - [`error`] - Error taxonomy
//! - [`exec`] - Command execution abstraction (mockable)
//! - [`firewall`] - UFW backend and privilege check
//! - [`lock`] - File locking for concurrent execution prevention
//! - [`manager`] - Blocklist operations and outcomes
//! - [`store`] - Data model and JSON persistence
//! - [`validation`] - IP address validation

pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod firewall;
pub mod lock;
pub mod manager;
pub mod store;
pub mod validation;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::{Result, UfwbanError};
pub use manager::{BlocklistManager, Outcome};
pub use store::{BlockEntry, Blocklist, BlocklistStore};
