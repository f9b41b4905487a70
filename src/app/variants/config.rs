//! Variant listing options

/// Caller-supplied inclusion policy for variant enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Descend into version directories; when false, stop at configurations
    pub include_versions: bool,
    /// Keep versions written before the secondary marker file existed
    pub include_old_format_versions: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            include_versions: true,
            include_old_format_versions: false,
        }
    }
}

impl ListOptions {
    /// Options that stop at the configuration level
    pub fn configs_only() -> Self {
        Self {
            include_versions: false,
            ..Default::default()
        }
    }

    /// Enable or disable version-level descent
    pub fn with_versions(mut self, enabled: bool) -> Self {
        self.include_versions = enabled;
        self
    }

    /// Enable or disable old-format versions
    pub fn with_old_format_versions(mut self, enabled: bool) -> Self {
        self.include_old_format_versions = enabled;
        self
    }

    /// Decide whether a version directory that has the primary marker qualifies
    pub fn accepts(&self, has_secondary_marker: bool) -> bool {
        has_secondary_marker || self.include_old_format_versions
    }
}
