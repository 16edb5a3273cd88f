use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CorpusConfig;
use crate::corpus::types::{Document, FileGroup};
use crate::corpus::{pairing, strip};
use crate::error::Result;

/// Capability contract a corpus exposes to the document-reading loop:
/// enumerate its file groups and strip markup from source text.
pub trait CorpusSource {
    /// One group per source document, annotation files attached.
    fn file_listing(&self) -> Result<Vec<FileGroup>>;

    /// Cleans raw source text, preserving character offsets.
    fn strip_text(&self, original: &str) -> Result<String>;
}

/// An ERE corpus rooted at a directory containing `data/source/` and
/// `data/ere/`.
#[derive(Debug, Clone)]
pub struct EreCorpus {
    root: PathBuf,
    config: CorpusConfig,
}

impl EreCorpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, CorpusConfig::default())
    }

    pub fn with_config(root: impl Into<PathBuf>, config: CorpusConfig) -> Self {
        EreCorpus {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }
}

impl CorpusSource for EreCorpus {
    fn file_listing(&self) -> Result<Vec<FileGroup>> {
        pairing::list_file_groups(&self.root, &self.config)
    }

    fn strip_text(&self, original: &str) -> Result<String> {
        strip::strip_markup(original, &self.config)
    }
}

/// Reads every document a corpus source lists, stripping markup from each.
///
/// A failed listing aborts. A document that cannot be read or stripped is
/// logged and skipped; the remaining documents are unaffected.
pub fn read_documents<S: CorpusSource>(source: &S) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for group in source.file_listing()? {
        let raw = match fs::read_to_string(&group.source) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("could not read {:?}: {e}", group.source);
                continue;
            }
        };
        let text = match source.strip_text(&raw) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("could not strip {:?}: {e}", group.source);
                continue;
            }
        };
        documents.push(Document {
            source: group.source,
            annotations: group.annotations,
            text,
        });
    }
    Ok(documents)
}
