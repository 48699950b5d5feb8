//! Integration tests for the ufwban binary.
//!
//! Tests that require root privileges are marked with #[ignore].
//! Run with: `sudo cargo test -- --ignored`

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper to get the path to the compiled binary
fn get_binary_path() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps directory
    path.push("ufwban");
    path
}

/// Check if running as root
fn is_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

/// Run ufwban and return output
fn run_ufwban(args: &[&str]) -> Output {
    let binary = get_binary_path();
    Command::new(&binary)
        .args(args)
        .output()
        .expect("Failed to execute ufwban")
}

/// Write a config pointing every path into the test directory.
/// `ufw_path` lets root tests substitute a harmless binary for ufw.
fn write_config(dir: &TempDir, ufw_path: &str) -> PathBuf {
    let config_path = dir.path().join("config.yaml");
    let contents = format!(
        "blocklist_file: {}\nlog_file: {}\nufw_path: {}\n",
        dir.path().join("blocklist.json").display(),
        dir.path().join("ufwban.log").display(),
        ufw_path,
    );
    fs::write(&config_path, contents).unwrap();
    config_path
}

fn blocklist_contents(dir: &TempDir) -> Vec<String> {
    let content = fs::read_to_string(dir.path().join("blocklist.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_version_command() {
    let output = run_ufwban(&["version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ufwban"));
}

#[test]
fn test_help_command() {
    let output = run_ufwban(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("blocklist"));
    assert!(stdout.contains("add"));
    assert!(stdout.contains("remove"));
}

#[test]
fn test_unknown_command_fails() {
    let output = run_ufwban(&["flush"]);
    assert!(!output.status.success());
}

#[test]
fn test_check_invalid_ip_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "/bin/true");

    let output = run_ufwban(&["check", "not-an-ip", "--config", config.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid IP address"));
}

#[test]
fn test_check_unlisted_ip() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "/bin/true");

    let output = run_ufwban(&["check", "192.0.2.1", "--config", config.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("IP 192.0.2.1 is NOT blocked"));
}

#[test]
fn test_check_listed_ip() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "/bin/true");
    fs::write(dir.path().join("blocklist.json"), r#"["192.0.2.1"]"#).unwrap();

    let output = run_ufwban(&["check", "192.0.2.1", "--config", config.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("IP 192.0.2.1 is BLOCKED"));
}

#[test]
fn test_list_empty_blocklist() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "/bin/true");

    let output = run_ufwban(&["list", "--config", config.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Blocklist is empty."));
}

#[test]
fn test_list_shows_entries_in_order() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "/bin/true");
    fs::write(
        dir.path().join("blocklist.json"),
        r#"["203.0.113.7", "2001:db8::1"]"#,
    )
    .unwrap();

    let output = run_ufwban(&["list", "--config", config.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Blocklist (2 entries):"));
    let v4_pos = stdout.find("203.0.113.7").unwrap();
    let v6_pos = stdout.find("2001:db8::1").unwrap();
    assert!(v4_pos < v6_pos);
}

#[test]
fn test_list_malformed_file_fails_without_reset() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "/bin/true");
    fs::write(dir.path().join("blocklist.json"), "{ corrupted").unwrap();

    let output = run_ufwban(&["list", "--config", config.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse"));
    // The malformed file must survive untouched
    assert_eq!(
        fs::read_to_string(dir.path().join("blocklist.json")).unwrap(),
        "{ corrupted"
    );
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, "ufw_path: ''").unwrap();

    let output = run_ufwban(&["list", "--config", config_path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ufw_path"));
}

#[test]
fn test_add_requires_root() {
    if is_root() {
        eprintln!("Skipping test_add_requires_root: running as root");
        return;
    }

    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "/bin/true");

    let output = run_ufwban(&["add", "192.0.2.1", "--config", config.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("root privileges"));
    // Nothing was persisted
    assert!(!dir.path().join("blocklist.json").exists());
}

#[test]
fn test_remove_requires_root() {
    if is_root() {
        eprintln!("Skipping test_remove_requires_root: running as root");
        return;
    }

    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "/bin/true");
    fs::write(dir.path().join("blocklist.json"), r#"["192.0.2.1"]"#).unwrap();

    let output = run_ufwban(&["remove", "192.0.2.1", "--config", config.to_str().unwrap()]);
    assert!(!output.status.success());
    assert_eq!(blocklist_contents(&dir), vec!["192.0.2.1"]);
}

#[test]
#[ignore] // Requires root
fn test_add_check_remove_cycle() {
    if !is_root() {
        eprintln!("Skipping test_add_check_remove_cycle: requires root");
        return;
    }

    let dir = TempDir::new().unwrap();
    // /bin/true stands in for ufw so the host firewall is untouched
    let config = write_config(&dir, "/bin/true");
    let config = config.to_str().unwrap();

    let output = run_ufwban(&["add", "192.168.1.10", "--config", config]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[OK] Blocked 192.168.1.10"));
    assert_eq!(blocklist_contents(&dir), vec!["192.168.1.10"]);

    let output = run_ufwban(&["add", "192.168.1.10", "--config", config]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("already in the blocklist"));
    assert_eq!(blocklist_contents(&dir), vec!["192.168.1.10"]);

    let output = run_ufwban(&["check", "192.168.1.10", "--config", config]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("is BLOCKED"));

    let output = run_ufwban(&["remove", "192.168.1.10", "--config", config]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[OK] Unblocked 192.168.1.10"));
    assert!(blocklist_contents(&dir).is_empty());

    // The audit log recorded the whole cycle
    let log = fs::read_to_string(dir.path().join("ufwban.log")).unwrap();
    assert!(log.contains("Blocked IP: 192.168.1.10"));
    assert!(log.contains("Unblocked IP: 192.168.1.10"));
}

#[test]
#[ignore] // Requires root
fn test_add_with_failing_firewall_keeps_entry() {
    if !is_root() {
        eprintln!("Skipping test_add_with_failing_firewall_keeps_entry: requires root");
        return;
    }

    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "/bin/false");

    let output = run_ufwban(&["add", "10.0.0.5", "--config", config.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to apply"));
    // Documented behavior: the entry stays persisted
    assert_eq!(blocklist_contents(&dir), vec!["10.0.0.5"]);
}

#[test]
#[ignore] // Requires root and an installed ufw
fn test_end_to_end_with_real_ufw() {
    if !is_root() {
        eprintln!("Skipping test_end_to_end_with_real_ufw: requires root");
        return;
    }
    if Command::new("ufw").arg("--version").output().is_err() {
        eprintln!("Skipping test_end_to_end_with_real_ufw: ufw not installed");
        return;
    }

    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "ufw");
    let config = config.to_str().unwrap();

    // 192.0.2.0/24 is TEST-NET-1, safe to deny briefly
    let output = run_ufwban(&["add", "192.0.2.77", "--config", config]);
    assert!(output.status.success());
    assert_eq!(blocklist_contents(&dir), vec!["192.0.2.77"]);

    let output = run_ufwban(&["remove", "192.0.2.77", "--config", config]);
    assert!(output.status.success());
    assert!(blocklist_contents(&dir).is_empty());
}
