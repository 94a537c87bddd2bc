//! Reading documents and noise words from disk.
//!
//! Any unreadable source aborts the whole pass with [`Error::MissingSource`];
//! a partial index is never returned.
use crate::error::{Error, Result};
use crate::index::{IndexBuilder, KeywordIndex};
use crate::noise::NoiseWords;
use crate::tokenizer::tokens;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// A document to index: the identifier reported in results and where to read it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    pub id: String,
    pub path: PathBuf,
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(Error::missing(path))
}

/// Whitespace-separated noise words, one set for the whole indexing pass.
pub fn load_noise_words<P: AsRef<Path>>(path: P) -> Result<NoiseWords> {
    let path = path.as_ref();
    let text = read(path)?;
    let noise: NoiseWords = tokens(&text).collect();
    if noise.is_empty() {
        warn!(path = %path.display(), "noise-word file is empty");
    }
    Ok(noise)
}

/// Whitespace-separated document names. Relative names resolve against the list's
/// directory; the identifier stays the name as written.
pub fn load_document_list<P: AsRef<Path>>(path: P) -> Result<Vec<DocumentSource>> {
    let path = path.as_ref();
    let text = read(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(tokens(&text)
        .map(|name| DocumentSource { id: name.to_string(), path: base.join(name) })
        .collect())
}

/// Every regular file below `dir`, in file-name order, identified by its relative path.
pub fn list_directory<P: AsRef<Path>>(dir: P) -> Result<Vec<DocumentSource>> {
    let dir = dir.as_ref();
    fs::metadata(dir).map_err(Error::missing(dir))?;
    let mut sources = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(id) = path.strip_prefix(dir).ok().and_then(Path::to_str) else {
            warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        sources.push(DocumentSource { id: id.to_string(), path: path.to_path_buf() });
    }
    Ok(sources)
}

/// Raw whitespace-delimited tokens of one document.
pub fn read_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let text = read(path.as_ref())?;
    Ok(tokens(&text).map(str::to_string).collect())
}

/// Index `sources` in order and freeze the result.
pub fn build<I>(sources: I, noise: NoiseWords) -> Result<KeywordIndex>
where
    I: IntoIterator<Item = DocumentSource>,
{
    let mut builder = IndexBuilder::new(noise);
    for source in sources {
        let tokens = read_tokens(&source.path)?;
        builder.add_document(&source.id, tokens)?;
    }
    Ok(builder.finish())
}

/// Index every document named in `docs_file`.
pub fn build_from_list<P: AsRef<Path>>(docs_file: P, noise: NoiseWords) -> Result<KeywordIndex> {
    let sources = load_document_list(docs_file.as_ref())?;
    info!(documents = sources.len(), list = %docs_file.as_ref().display(), "indexing document list");
    build(sources, noise)
}

/// Index every file below `dir`.
pub fn build_from_dir<P: AsRef<Path>>(dir: P, noise: NoiseWords) -> Result<KeywordIndex> {
    let sources = list_directory(dir.as_ref())?;
    info!(documents = sources.len(), dir = %dir.as_ref().display(), "indexing directory");
    build(sources, noise)
}

/// Build from a document list or, failing that, a directory. Without a noise-word
/// file the built-in English list is used.
pub fn load_index(docs: Option<&Path>, dir: Option<&Path>, noise: Option<&Path>) -> Result<KeywordIndex> {
    let noise = match noise {
        Some(path) => load_noise_words(path)?,
        None => NoiseWords::english(),
    };
    match (docs, dir) {
        (Some(docs), _) => build_from_list(docs, noise),
        (None, Some(dir)) => build_from_dir(dir, noise),
        (None, None) => Err(Error::NoSource),
    }
}
