use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::config::CorpusConfig;
use crate::constants::{ANNOTATION_SUBDIR, SOURCE_SUBDIR};
use crate::corpus::types::FileGroup;
use crate::error::{Error, Result};

/// Pairs each source document under `data/source/` with the annotation
/// files under `data/ere/` whose names start with the source file's stem.
///
/// Both listings are filtered to `config.extension` and sorted so that
/// results are stable across runs. Each annotation file is claimed by at
/// most one source file: once matched it leaves the candidate list, so a
/// stem that is a prefix of another stem cannot claim the longer stem's
/// annotations twice.
pub fn list_file_groups(corpus_root: &Path, config: &CorpusConfig) -> Result<Vec<FileGroup>> {
    if !corpus_root.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("corpus root {corpus_root:?} does not exist"),
        )));
    }
    let source_dir = corpus_root.join(SOURCE_SUBDIR);
    let annotation_dir = corpus_root.join(ANNOTATION_SUBDIR);
    if !source_dir.is_dir() {
        return Err(Error::CorpusLayout {
            root: corpus_root.to_path_buf(),
            missing: SOURCE_SUBDIR,
        });
    }
    if !annotation_dir.is_dir() {
        return Err(Error::CorpusLayout {
            root: corpus_root.to_path_buf(),
            missing: ANNOTATION_SUBDIR,
        });
    }

    let sources = files_with_extension(&source_dir, &config.extension)?;
    let mut candidates = files_with_extension(&annotation_dir, &config.extension)?;

    let mut groups = Vec::with_capacity(sources.len());
    for source in sources {
        let Some(stem) = file_stem(&source, &config.extension) else {
            continue;
        };
        let mut annotations = Vec::new();
        candidates.retain(|candidate| {
            let matched = candidate
                .file_name()
                .map(|n| n.to_string_lossy().starts_with(&stem))
                .unwrap_or(false);
            if matched {
                annotations.push(candidate.clone());
            }
            !matched
        });
        groups.push(FileGroup {
            source,
            annotations,
        });
    }
    Ok(groups)
}

/// Recursively lists files under `dir` whose names end with `extension`,
/// sorted by path.
fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();
    let walker = WalkBuilder::new(dir)
        .follow_links(false)
        // Corpora are plain data trees; gitignore/hidden filtering does not apply
        .standard_filters(false)
        .build();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_some_and(|ft| ft.is_file())
            && entry.file_name().to_string_lossy().ends_with(extension)
        {
            results.push(entry.into_path());
        }
    }
    results.sort();
    Ok(results)
}

/// Filename with the matched extension removed.
fn file_stem(path: &Path, extension: &str) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    name.strip_suffix(extension).map(|s| s.to_string())
}
