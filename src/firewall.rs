//! Firewall rule application via the UFW command.

use thiserror::Error;

use crate::error::{Result, UfwbanError};
use crate::exec::{args_to_strings, CommandExecutor, RealCommandExecutor};
use crate::store::BlockEntry;

/// Failure reported by the firewall command.
///
/// Carries the diagnostic captured from the command, typically its
/// standard error output.
#[derive(Debug, Error)]
#[error("{diagnostic}")]
pub struct FirewallError {
    pub diagnostic: String,
}

/// Trait for firewall backends.
///
/// Each call maps to exactly one invocation of the underlying command;
/// failures are reported to the caller, never retried.
pub trait Firewall: Send + Sync {
    /// Install a deny rule for the address.
    fn block(&self, entry: &BlockEntry) -> std::result::Result<(), FirewallError>;

    /// Delete the deny rule for the address.
    fn unblock(&self, entry: &BlockEntry) -> std::result::Result<(), FirewallError>;
}

/// UFW-backed implementation shelling out to the configured binary.
pub struct UfwFirewall<E: CommandExecutor = RealCommandExecutor> {
    executor: E,
    ufw_path: String,
}

impl UfwFirewall {
    /// Create a backend that runs the real UFW binary.
    pub fn new(ufw_path: &str) -> Self {
        Self::with_executor(RealCommandExecutor::new(), ufw_path)
    }
}

impl<E: CommandExecutor> UfwFirewall<E> {
    /// Create a backend with a custom executor (used by tests).
    pub fn with_executor(executor: E, ufw_path: &str) -> Self {
        Self {
            executor,
            ufw_path: ufw_path.to_string(),
        }
    }

    fn run(&self, args: Vec<String>) -> std::result::Result<(), FirewallError> {
        let output = self
            .executor
            .execute(&self.ufw_path, &args)
            .map_err(|e| FirewallError {
                diagnostic: format!("Failed to execute {}: {}", self.ufw_path, e),
            })?;

        if output.success {
            return Ok(());
        }

        let stderr = output.stderr.trim();
        let diagnostic = if stderr.is_empty() {
            match output.code {
                Some(code) => format!("{} exited with code {}", self.ufw_path, code),
                None => format!("{} terminated by signal", self.ufw_path),
            }
        } else {
            stderr.to_string()
        };
        Err(FirewallError { diagnostic })
    }
}

impl<E: CommandExecutor> Firewall for UfwFirewall<E> {
    fn block(&self, entry: &BlockEntry) -> std::result::Result<(), FirewallError> {
        let ip = entry.to_string();
        self.run(args_to_strings(&["deny", "from", &ip]))
    }

    fn unblock(&self, entry: &BlockEntry) -> std::result::Result<(), FirewallError> {
        let ip = entry.to_string();
        self.run(args_to_strings(&["--force", "delete", "deny", "from", &ip]))
    }
}

/// Check if running as root (effective UID == 0)
///
/// UFW refuses to modify rules without root, so mutating commands are
/// gated on the same requirement before any state is touched.
pub fn check_root() -> Result<()> {
    // SAFETY: geteuid() is a simple syscall that reads the effective user ID.
    // It has no preconditions, never fails, and doesn't modify any state.
    // The returned value is a plain integer that's safe to compare.
    let euid = unsafe { libc::geteuid() };

    if euid != 0 {
        return Err(UfwbanError::Privilege);
    }
    Ok(())
}
