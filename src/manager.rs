//! Blocklist operations: validate, persist, enforce.

use crate::audit::AuditSink;
use crate::error::Result;
use crate::firewall::Firewall;
use crate::store::{BlockEntry, Blocklist, BlocklistStore};
use crate::validation::validate_address;

/// Result of a blocklist operation.
///
/// Expected conditions are reported as outcomes rather than errors so
/// callers can map them to messages and exit codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The address is blocked: entry persisted, deny rule applied.
    Blocked(BlockEntry),
    /// The entry was already present; nothing changed, no rule applied.
    AlreadyBlocked(BlockEntry),
    /// The entry was removed and the deny rule deleted.
    Unblocked(BlockEntry),
    /// The address is not in the blocklist.
    NotBlocked(BlockEntry),
    /// The list change was persisted but the firewall command failed.
    ///
    /// The persisted change is kept, so the list records the desired
    /// state. The diagnostic carries the command's captured stderr.
    FirewallApplyFailed {
        entry: BlockEntry,
        diagnostic: String,
    },
}

/// Coordinates the persisted blocklist with the firewall backend.
///
/// Every mutation follows the same sequence: validate the input, load
/// the list, update it, persist it, then apply the firewall rule. The
/// firewall is only invoked after the list change is safely on disk,
/// and each rule change invokes the command exactly once.
pub struct BlocklistManager {
    store: BlocklistStore,
    firewall: Box<dyn Firewall>,
    audit: Box<dyn AuditSink>,
}

impl BlocklistManager {
    pub fn new(
        store: BlocklistStore,
        firewall: Box<dyn Firewall>,
        audit: Box<dyn AuditSink>,
    ) -> Self {
        Self {
            store,
            firewall,
            audit,
        }
    }

    /// Block an address: persist it, then install the deny rule.
    pub fn add(&self, input: &str) -> Result<Outcome> {
        let entry = self.validate(input)?;
        let mut list = self.store.load()?;

        if !list.insert(entry) {
            self.audit.record(&format!("IP already blocked: {}", entry));
            return Ok(Outcome::AlreadyBlocked(entry));
        }
        self.store.save(&list)?;

        match self.firewall.block(&entry) {
            Ok(()) => {
                self.audit.record(&format!("Blocked IP: {}", entry));
                Ok(Outcome::Blocked(entry))
            }
            Err(e) => {
                self.audit
                    .record(&format!("Failed to apply block for {}: {}", entry, e));
                Ok(Outcome::FirewallApplyFailed {
                    entry,
                    diagnostic: e.diagnostic,
                })
            }
        }
    }

    /// Unblock an address: remove it from the list, then delete the rule.
    pub fn remove(&self, input: &str) -> Result<Outcome> {
        let entry = self.validate(input)?;
        let mut list = self.store.load()?;

        if !list.remove(&entry) {
            self.audit
                .record(&format!("IP not in blocklist: {}", entry));
            return Ok(Outcome::NotBlocked(entry));
        }
        self.store.save(&list)?;

        match self.firewall.unblock(&entry) {
            Ok(()) => {
                self.audit.record(&format!("Unblocked IP: {}", entry));
                Ok(Outcome::Unblocked(entry))
            }
            Err(e) => {
                self.audit
                    .record(&format!("Failed to delete rule for {}: {}", entry, e));
                Ok(Outcome::FirewallApplyFailed {
                    entry,
                    diagnostic: e.diagnostic,
                })
            }
        }
    }

    /// Report whether an address is currently listed. Never mutates
    /// state and never touches the firewall.
    pub fn check(&self, input: &str) -> Result<Outcome> {
        let entry = self.validate(input)?;
        let list = self.store.load()?;

        if list.contains(&entry) {
            Ok(Outcome::Blocked(entry))
        } else {
            Ok(Outcome::NotBlocked(entry))
        }
    }

    /// Current blocklist contents, in insertion order.
    pub fn list(&self) -> Result<Blocklist> {
        self.store.load()
    }

    fn validate(&self, input: &str) -> Result<BlockEntry> {
        match validate_address(input) {
            Ok(entry) => Ok(entry),
            Err(e) => {
                self.audit
                    .record(&format!("Invalid IP address rejected: {}", input));
                Err(e)
            }
        }
    }
}
