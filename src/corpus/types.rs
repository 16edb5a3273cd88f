use std::path::PathBuf;

/// A source document together with its annotation files.
///
/// Annotation files share the source file's name stem and are listed in
/// discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub source: PathBuf,
    pub annotations: Vec<PathBuf>,
}

impl FileGroup {
    /// All paths in the group, source first.
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        std::iter::once(&self.source).chain(self.annotations.iter())
    }
}

/// A source document with markup stripped, ready for annotation parsing.
#[derive(Debug, Clone)]
pub struct Document {
    pub source: PathBuf,
    pub annotations: Vec<PathBuf>,
    /// Stripped text; character offsets match the raw source file.
    pub text: String,
}
