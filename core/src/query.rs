use crate::index::KeywordIndex;
use crate::ranked::{insert_ranked, Ranked};
use crate::Occurrence;

/// Result size of [`KeywordIndex::top5`].
pub const TOP_K: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    First,
    Second,
    // Both keywords resolved to the same list.
    Both,
}

impl Origin {
    fn in_first(self) -> bool { matches!(self, Origin::First | Origin::Both) }
    fn in_second(self) -> bool { matches!(self, Origin::Second | Origin::Both) }
}

#[derive(Debug)]
struct Candidate<'a> {
    occurrence: &'a Occurrence,
    origin: Origin,
}

impl Ranked for Candidate<'_> {
    fn frequency(&self) -> u32 { self.occurrence.frequency }
}

fn combine<'a>(first: &'a [Occurrence], second: &'a [Occurrence]) -> Vec<Candidate<'a>> {
    let mut combined = Vec::with_capacity(first.len() + second.len());
    let (first_origin, second_origin) =
        if std::ptr::eq(first, second) { (Origin::Both, Origin::Both) } else { (Origin::First, Origin::Second) };
    let tagged = first
        .iter()
        .map(|occurrence| Candidate { occurrence, origin: first_origin })
        .chain(second.iter().map(|occurrence| Candidate { occurrence, origin: second_origin }));
    for candidate in tagged {
        insert_ranked(&mut combined, candidate);
    }
    prefer_first(&mut combined);
    combined
}

// One left-to-right pass: a second-keyword entry directly ahead of an equally frequent
// first-keyword entry swaps behind it. Longer tied runs are not re-sorted. When both
// keywords share one list every entry counts as both, so every tied pair swaps.
fn prefer_first(candidates: &mut [Candidate<'_>]) {
    for i in 1..candidates.len() {
        let (earlier, later) = (&candidates[i - 1], &candidates[i]);
        if earlier.frequency() == later.frequency() && earlier.origin.in_second() && later.origin.in_first() {
            candidates.swap(i - 1, i);
        }
    }
}

/// Documents matching either occurrence list, most frequent first, at most `k` of them.
///
/// Each document appears once, at its best-ranked position. Ties in frequency favour
/// `first` over `second`.
pub fn top_k<'a>(first: &'a [Occurrence], second: &'a [Occurrence], k: usize) -> Vec<&'a str> {
    let mut documents: Vec<&'a str> = Vec::with_capacity(k.min(first.len() + second.len()));
    if k == 0 {
        return documents;
    }
    for candidate in combine(first, second) {
        let document = candidate.occurrence.document.as_str();
        if documents.contains(&document) {
            continue;
        }
        documents.push(document);
        if documents.len() == k {
            break;
        }
    }
    documents
}

impl KeywordIndex {
    /// Up to five documents containing `kw1` or `kw2`, ranked by frequency.
    /// An empty result means no document matched.
    pub fn top5(&self, kw1: &str, kw2: &str) -> Vec<&str> {
        self.top_k(kw1, kw2, TOP_K)
    }

    pub fn top_k(&self, kw1: &str, kw2: &str, k: usize) -> Vec<&str> {
        top_k(self.occurrences(kw1), self.occurrences(kw2), k)
    }
}
