use crate::Occurrence;
use std::cmp::Ordering;

/// Anything ordered by an occurrence frequency.
pub trait Ranked {
    fn frequency(&self) -> u32;
}

impl Ranked for Occurrence {
    fn frequency(&self) -> u32 { self.frequency }
}

/// True when `list` is in non-increasing frequency order.
pub fn is_ranked<T: Ranked>(list: &[T]) -> bool {
    list.windows(2).all(|w| w[0].frequency() >= w[1].frequency())
}

/// Append `item` and move it to its ranked position. Returns the probed midpoints.
pub fn insert_ranked<T: Ranked>(list: &mut Vec<T>, item: T) -> Vec<usize> {
    list.push(item);
    insert_last(list)
}

/// Move the last element of `list` into place, assuming everything before it is
/// already in non-increasing frequency order.
///
/// The position is found by binary search over the sorted prefix. Every midpoint
/// the search looks at is returned in probe order; a list with fewer than two
/// elements needs no search and yields no probes.
pub fn insert_last<T: Ranked>(list: &mut Vec<T>) -> Vec<usize> {
    let mut probes = Vec::new();
    if list.len() < 2 {
        return probes;
    }
    let Some(newcomer) = list.pop() else { return probes };
    let position = match search(list, newcomer.frequency(), &mut probes) {
        Ok(mid) => mid,
        Err(low) => low,
    };
    list.insert(position, newcomer);
    probes
}

// `Ok(mid)` on an exact frequency match, otherwise `Err(low)` once the window is empty.
// `high` is exclusive; the midpoint matches an inclusive (low + high) / 2 search.
fn search<T: Ranked>(sorted: &[T], frequency: u32, probes: &mut Vec<usize>) -> Result<usize, usize> {
    let (mut low, mut high) = (0, sorted.len());
    while low < high {
        let mid = (low + high - 1) / 2;
        probes.push(mid);
        match sorted[mid].frequency().cmp(&frequency) {
            Ordering::Equal => return Ok(mid),
            Ordering::Less => high = mid,
            Ordering::Greater => low = mid + 1,
        }
    }
    Err(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(freqs: &[u32]) -> Vec<Occurrence> {
        freqs.iter().enumerate().map(|(i, f)| Occurrence::new(format!("d{i}"), *f)).collect()
    }

    fn freqs(list: &[Occurrence]) -> Vec<u32> {
        list.iter().map(|o| o.frequency).collect()
    }

    #[test]
    fn single_element_has_no_probes() {
        let mut l = list(&[4]);
        assert!(insert_last(&mut l).is_empty());
        assert_eq!(freqs(&l), vec![4]);

        let mut empty: Vec<Occurrence> = Vec::new();
        assert!(insert_last(&mut empty).is_empty());
    }

    #[test]
    fn inserts_in_the_middle() {
        let mut l = list(&[12, 8, 7, 5, 3, 2]);
        let probes = insert_ranked(&mut l, Occurrence::new("new", 6));
        assert_eq!(probes, vec![2, 4, 3]);
        assert_eq!(freqs(&l), vec![12, 8, 7, 6, 5, 3, 2]);
        assert_eq!(l[3].document, "new");
    }

    #[test]
    fn inserts_at_front_and_back() {
        let mut l = list(&[12, 8, 7, 5, 3, 2]);
        let probes = insert_ranked(&mut l, Occurrence::new("top", 20));
        assert_eq!(probes, vec![2, 0]);
        assert_eq!(l[0].document, "top");

        let mut l = list(&[12, 8, 7, 5, 3, 2]);
        let probes = insert_ranked(&mut l, Occurrence::new("tail", 1));
        assert_eq!(probes, vec![2, 4, 5]);
        assert_eq!(l.last().map(|o| o.document.as_str()), Some("tail"));
    }

    #[test]
    fn equal_frequency_goes_at_the_probed_midpoint() {
        let mut l = list(&[12, 8, 7, 5, 3, 2]);
        let probes = insert_ranked(&mut l, Occurrence::new("tie", 12));
        assert_eq!(probes, vec![2, 0]);
        assert_eq!(l[0].document, "tie");
        assert_eq!(l[1].document, "d0");

        let mut l = list(&[9, 7, 7, 7, 1]);
        let probes = insert_ranked(&mut l, Occurrence::new("tie", 7));
        assert_eq!(probes, vec![2]);
        assert_eq!(l[2].document, "tie");
        assert!(is_ranked(&l));
    }

    #[test]
    fn stays_ranked_across_many_inserts() {
        let mut l: Vec<Occurrence> = Vec::new();
        for (i, f) in [3u32, 9, 1, 4, 4, 7, 2, 9, 5, 1, 8].iter().enumerate() {
            insert_ranked(&mut l, Occurrence::new(format!("d{i}"), *f));
            assert!(is_ranked(&l), "unranked after inserting {f}: {:?}", freqs(&l));
        }
        assert_eq!(l.len(), 11);
    }
}
