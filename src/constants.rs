// Centralized corpus defaults
pub const DEFAULT_EXTENSION: &str = ".xml";
pub const DEFAULT_RETAIN_TAGS: [&str; 2] = ["quote", "post"];
pub const DEFAULT_RETAIN_ATTRIBUTES: [&str; 2] = ["orig_author", "author"];

/// Subdirectory of the corpus root holding source documents.
pub const SOURCE_SUBDIR: &str = "data/source";
/// Subdirectory of the corpus root holding annotation files.
pub const ANNOTATION_SUBDIR: &str = "data/ere";
