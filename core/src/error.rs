use std::io;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A document list, document or noise-word file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    MissingSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error("no document list or directory given")]
    NoSource,

    #[error("document {0} is already indexed")]
    DuplicateDocument(String),
}

impl Error {
    pub(crate) fn missing(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
        move |source| Error::MissingSource { path: path.to_path_buf(), source }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
