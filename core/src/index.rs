use crate::error::{Error, Result};
use crate::noise::NoiseWords;
use crate::ranked::{insert_ranked, is_ranked};
use crate::tokenizer::normalize;
use crate::Occurrence;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Count keyword frequencies within one document.
pub fn index_document<I, S>(document: &str, tokens: I, noise: &NoiseWords) -> HashMap<String, Occurrence>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keywords: HashMap<String, Occurrence> = HashMap::new();
    for token in tokens {
        let Some(keyword) = normalize(token.as_ref(), noise) else { continue };
        keywords
            .entry(keyword)
            .and_modify(|occ| occ.frequency += 1)
            .or_insert_with(|| Occurrence::new(document, 1));
    }
    keywords
}

/// Owns the keyword index while documents are being added.
///
/// Documents are merged one at a time; each keyword's occurrence list is kept in
/// non-increasing frequency order after every merge. Call [`IndexBuilder::finish`]
/// to freeze the result for querying.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    noise: NoiseWords,
    keywords: HashMap<String, Vec<Occurrence>>,
    documents: HashSet<String>,
}

impl IndexBuilder {
    pub fn new(noise: NoiseWords) -> Self {
        Self { noise, ..Self::default() }
    }

    /// Index one document and merge it. Returns the number of distinct keywords found.
    pub fn add_document<I, S>(&mut self, document: &str, tokens: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !self.documents.insert(document.to_string()) {
            return Err(Error::DuplicateDocument(document.to_string()));
        }
        let occurrences = index_document(document, tokens, &self.noise);
        let count = occurrences.len();
        self.merge(occurrences);
        debug!(document, keywords = count, "indexed document");
        Ok(count)
    }

    /// Merge one document's occurrences into the per-keyword ranked lists.
    pub fn merge(&mut self, occurrences: HashMap<String, Occurrence>) {
        for (keyword, occurrence) in occurrences {
            let list = self.keywords.entry(keyword).or_default();
            debug_assert!(
                list.iter().all(|o| o.document != occurrence.document),
                "document {} already has an occurrence in this list",
                occurrence.document
            );
            insert_ranked(list, occurrence);
            debug_assert!(is_ranked(list));
        }
    }

    pub fn finish(self) -> KeywordIndex {
        info!(documents = self.documents.len(), keywords = self.keywords.len(), "index frozen");
        KeywordIndex { keywords: self.keywords, num_documents: self.documents.len() }
    }
}

/// Read-only keyword index: keyword -> occurrences in non-increasing frequency order.
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    keywords: HashMap<String, Vec<Occurrence>>,
    num_documents: usize,
}

impl KeywordIndex {
    /// Occurrences of `keyword`; empty when the keyword was never indexed.
    pub fn occurrences(&self, keyword: &str) -> &[Occurrence] {
        self.keywords.get(keyword).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_keyword(&self, keyword: &str) -> bool { self.keywords.contains_key(keyword) }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.keywords.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn num_keywords(&self) -> usize { self.keywords.len() }
    pub fn num_documents(&self) -> usize { self.num_documents }
}
