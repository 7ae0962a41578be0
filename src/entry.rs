//! Block entry formatting.

/// Formats hosts-file lines pointing hostnames at a redirect address.
#[derive(Debug, Clone)]
pub struct BlockEntry {
    address: String,
}

impl BlockEntry {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    /// One hosts-file line: "<address> <hostname>".
    pub fn line(&self, hostname: &str) -> String {
        format!("{} {}", self.address, hostname)
    }
}
