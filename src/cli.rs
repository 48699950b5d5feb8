//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ufwban")]
#[command(author, version, about = "Persistent IP blocklist manager backed by UFW")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "/etc/ufwban/config.yaml", global = true)]
    pub config: PathBuf,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Block an IP address (persist it and apply a UFW deny rule)
    Add {
        /// IP address to block
        ip: String,
    },

    /// Unblock an IP address (remove it and delete the UFW rule)
    Remove {
        /// IP address to unblock
        ip: String,
    },

    /// Check whether an IP address is in the blocklist
    Check {
        /// IP address to check
        ip: String,
    },

    /// List all blocked IP addresses
    List,

    /// Show version
    Version,
}
