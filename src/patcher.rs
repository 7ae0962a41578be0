//! Block/unblock orchestration over the managed hosts file.

use crate::entry::BlockEntry;
use crate::hostnames::HostnameSource;
use crate::linefile::{LineFile, LineFileError};

/// Applies blocklist patches to one managed file. Stateless across
/// calls; every operation recomputes the working set and re-reads disk.
pub struct HostsPatcher {
    file: LineFile,
    entry: BlockEntry,
    source: HostnameSource,
}

impl HostsPatcher {
    pub fn new(file: LineFile, entry: BlockEntry, source: HostnameSource) -> Self {
        Self {
            file,
            entry,
            source,
        }
    }

    /// Append one block entry per managed hostname and return how many
    /// were written. Repeat calls append again; the hosts format
    /// tolerates duplicate mappings to the same address.
    pub fn block(&self) -> Result<usize, LineFileError> {
        let entries: Vec<String> = self
            .source
            .hostnames()
            .iter()
            .map(|hostname| self.entry.line(hostname))
            .collect();
        let count = entries.len();
        self.file.append_lines(entries)?;
        Ok(count)
    }

    /// Drop every line mentioning a managed hostname and rewrite the
    /// file. Matching is by substring, so unrelated lines that contain a
    /// managed name are removed too.
    pub fn unblock(&self) -> Result<(), LineFileError> {
        let hostnames = self.source.hostnames();
        let kept: Vec<String> = self
            .file
            .read_lines()?
            .into_iter()
            .filter(|line| !hostnames.iter().any(|hostname| line.contains(hostname.as_str())))
            .collect();
        self.file.write_lines(kept)
    }

    /// Current content of the managed file.
    pub fn print(&self) -> Result<String, LineFileError> {
        self.file.content()
    }

    /// The effective hostname working set.
    pub fn hostnames(&self) -> Vec<String> {
        self.source.hostnames()
    }
}
