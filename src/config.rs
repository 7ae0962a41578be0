//! Settings loading and path resolution.
//!
//! Supports HOSTBLOCK_HOME env var override for testing.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Domain;

/// Paths for hostblock data.
#[derive(Debug, Clone)]
pub struct Paths {
    pub config_dir: PathBuf,
    pub settings_file: PathBuf,
    pub blocklist_file: PathBuf,
    pub hosts_file: PathBuf,
}

impl Paths {
    /// Build paths from base directory (e.g. ProjectDirs config dir or HOSTBLOCK_HOME).
    pub fn from_base(base: PathBuf) -> Self {
        let settings_file = base.join("settings.toml");
        let blocklist_file = base.join("blocklist");
        Self {
            config_dir: base,
            settings_file,
            blocklist_file,
            hosts_file: crate::platform::hosts_file_path(),
        }
    }

    /// Paths for testing: use a temp dir as base.
    pub fn for_test(base: impl AsRef<Path>) -> Self {
        Self::from_base(base.as_ref().to_path_buf())
    }

    /// Get default hostblock paths (respects HOSTBLOCK_HOME).
    pub fn default_paths() -> Self {
        let base = if let Ok(home) = std::env::var("HOSTBLOCK_HOME") {
            PathBuf::from(home)
        } else if let Some(dirs) = directories::ProjectDirs::from("com", "hostblock", "hostblock") {
            dirs.config_dir().to_path_buf()
        } else {
            PathBuf::from(".hostblock")
        };
        Self::from_base(base)
    }
}

/// settings.toml structure. Every key is optional.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// Redirect target written into block entries.
    #[serde(default = "default_address")]
    pub address: String,
    /// Flush the OS DNS cache after block/unblock.
    #[serde(default = "default_flush_dns")]
    pub flush_dns: bool,
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_flush_dns() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            address: default_address(),
            flush_dns: default_flush_dns(),
        }
    }
}

impl Settings {
    /// Load settings (with shared lock when the file exists). A missing
    /// file yields the defaults; a malformed one is an error.
    pub fn load(paths: &Paths) -> Result<Settings> {
        if paths.settings_file.is_file() {
            let mut file = fs::OpenOptions::new().read(true).open(&paths.settings_file)?;
            fs2::FileExt::lock_shared(&file)?;
            use std::io::Read;
            let mut s = String::new();
            file.read_to_string(&mut s)?;
            let settings: Settings = toml::from_str(&s)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings (with exclusive lock). Creates parent dirs if needed.
    pub fn save(&self, paths: &Paths) -> Result<()> {
        if let Some(p) = paths.settings_file.parent() {
            fs::create_dir_all(p)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&paths.settings_file)?;
        fs2::FileExt::lock_exclusive(&file)?;
        let s = toml::to_string_pretty(self)?;
        use std::io::Write;
        file.write_all(s.as_bytes())?;
        Ok(())
    }
}

/// Built-in default blocklist, injected into HostnameSource by the CLI
/// layer. Used whenever the blocklist file is absent or empty.
pub fn default_domains() -> Vec<Domain> {
    [
        "amazon.com",
        "amazon.de",
        "blog.fefe.de",
        "facebook.com",
        "heise.de",
        "news.ycombinator.com",
        "rnz.de",
        "spiegel.de",
        "spon.de",
        "twitter.com",
        "youtube.com",
    ]
    .into_iter()
    .map(Domain::new)
    .collect()
}
