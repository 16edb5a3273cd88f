pub mod config;
pub mod constants;
pub mod corpus;
pub mod error;
pub mod reader;

// Re-export the flat API most callers want
pub use config::CorpusConfig;
pub use corpus::pairing;
pub use corpus::strip;
pub use corpus::types::{Document, FileGroup};
pub use error::{Error, Result};
pub use reader::{CorpusSource, EreCorpus, read_documents};
