//! Base domains and their blockable hostname variants.

/// A base domain to block (e.g. "example.com").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain(String);

impl Domain {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    // True for www.heise.de, false for heise.de.
    fn has_subdomain(&self) -> bool {
        self.0.split('.').count() > 2
    }

    /// Hostname variants to manage: the domain itself, plus the "www."
    /// form when the domain has no subdomain yet. Returns a fresh
    /// iterator on every call.
    pub fn variants(&self) -> impl Iterator<Item = String> {
        let www = (!self.has_subdomain()).then(|| format!("www.{}", self.0));
        std::iter::once(self.0.clone()).chain(www)
    }
}
