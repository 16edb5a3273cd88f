use std::collections::BTreeSet;

use crate::constants::{DEFAULT_EXTENSION, DEFAULT_RETAIN_ATTRIBUTES, DEFAULT_RETAIN_TAGS};

/// Immutable corpus configuration: the file extension used to filter
/// candidate files, and the tag/attribute whitelists honored by the
/// markup stripper.
///
/// Each reader owns its own configuration, so differently-configured
/// readers can coexist in one process.
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    /// Files without this suffix are excluded from both listings.
    pub extension: String,
    /// Tags whose whitelisted attribute values survive stripping.
    pub retain_tags: BTreeSet<String>,
    /// Attribute names whose values survive stripping, for retained tags.
    pub retain_attributes: BTreeSet<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        CorpusConfig {
            extension: DEFAULT_EXTENSION.to_string(),
            retain_tags: DEFAULT_RETAIN_TAGS.iter().map(|s| s.to_string()).collect(),
            retain_attributes: DEFAULT_RETAIN_ATTRIBUTES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl CorpusConfig {
    /// Replace the required file extension (include the leading dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Add a tag whose whitelisted attributes should be retained.
    pub fn retain_tag(mut self, tag: impl Into<String>) -> Self {
        self.retain_tags.insert(tag.into());
        self
    }

    /// Add an attribute name whose values should be retained.
    pub fn retain_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.retain_attributes.insert(attribute.into());
        self
    }
}
