//! OS-specific paths and post-update hooks.
//!
//! The core never branches on platform identity; it receives ready paths
//! from here.

use std::path::PathBuf;
use std::process::Command;

/// Path to the system hosts file.
/// If HOSTBLOCK_HOSTS_FILE is set (e.g. in tests), that path is used.
pub fn hosts_file_path() -> PathBuf {
    if let Ok(path) = std::env::var("HOSTBLOCK_HOSTS_FILE") {
        return PathBuf::from(path);
    }
    if cfg!(windows) {
        let root = std::env::var("SystemRoot").unwrap_or_else(|_| r"C:\Windows".into());
        PathBuf::from(root).join(r"System32\drivers\etc\hosts")
    } else {
        PathBuf::from("/etc/hosts")
    }
}

/// Flush the OS DNS cache so hosts-file changes take effect immediately.
/// Best effort; failures are ignored.
pub fn flush_dns() {
    if cfg!(windows) {
        let _ = Command::new("ipconfig").arg("/flushdns").output();
    } else if cfg!(target_os = "macos") {
        let _ = Command::new("dscacheutil").arg("-flushcache").output();
        let _ = Command::new("killall").args(["-HUP", "mDNSResponder"]).output();
    }
}
