use serde::Serialize;
use std::fmt;

pub mod error;
pub mod index;
pub mod loader;
pub mod noise;
pub mod query;
pub mod ranked;
pub mod tokenizer;

pub use error::{Error, Result};
pub use index::{index_document, IndexBuilder, KeywordIndex};
pub use noise::NoiseWords;
pub use query::{top_k, TOP_K};
pub use ranked::{insert_last, insert_ranked, is_ranked, Ranked};

/// How many times one keyword appears in one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.document, self.frequency)
    }
}
