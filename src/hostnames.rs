//! Resolve the working set of hostnames for one invocation.

use std::path::PathBuf;

use crate::domain::Domain;
use crate::linefile::LineFile;

/// Produces the hostnames to manage: the user's blocklist file when it
/// has content, else an injected default list.
pub struct HostnameSource {
    blocklist: LineFile,
    defaults: Vec<Domain>,
}

impl HostnameSource {
    pub fn new(blocklist_path: impl Into<PathBuf>, defaults: Vec<Domain>) -> Self {
        Self {
            blocklist: LineFile::new(blocklist_path),
            defaults,
        }
    }

    /// Base domains: blocklist file when present and non-empty, else the
    /// defaults in full. Never merged; a failed read counts as absent.
    pub fn domains(&self) -> Vec<Domain> {
        match self.blocklist.read_lines() {
            Ok(lines) if !lines.is_empty() => lines.into_iter().map(Domain::new).collect(),
            _ => self.defaults.clone(),
        }
    }

    /// Expanded working set, blocklist order preserved, duplicates kept.
    pub fn hostnames(&self) -> Vec<String> {
        self.domains()
            .iter()
            .flat_map(|domain| domain.variants())
            .collect()
    }
}
