use search_core::{IndexBuilder, KeywordIndex, NoiseWords, Occurrence};
use std::collections::HashSet;

fn corpus() -> Vec<(&'static str, &'static str)> {
    vec![
        ("jungle.txt", "The tiger hunts. A tiger rests, and the deer runs: deer deer!"),
        ("river.txt", "Deer drink from the river. The river is cold."),
        ("forest.txt", "Tiger tiger tiger. Forest forest."),
        ("plains.txt", "Deer graze on the plains; deer everywhere."),
        ("zoo.txt", "A tiger, a deer, a keeper."),
        ("desert.txt", "Sand and heat. No deer, no tiger?"),
        ("city.txt", "Cars and people."),
    ]
}

fn build(order: &[(&str, &str)]) -> KeywordIndex {
    let noise: NoiseWords = ["the", "a", "and", "is", "from", "on", "no"].into_iter().collect();
    let mut builder = IndexBuilder::new(noise);
    for (id, text) in order {
        builder.add_document(id, text.split_whitespace()).unwrap();
    }
    builder.finish()
}

#[test]
fn top5_ranks_by_frequency() {
    let index = build(&corpus());
    let occs: Vec<(&str, u32)> = index.occurrences("tiger").iter().map(|o| (o.document.as_str(), o.frequency)).collect();
    assert_eq!(occs[0], ("forest.txt", 3));
    assert_eq!(occs[1], ("jungle.txt", 2));

    let result = index.top5("tiger", "river");
    assert_eq!(&result[..3], &["forest.txt", "jungle.txt", "river.txt"]);
}

#[test]
fn top5_is_bounded_and_distinct() {
    let index = build(&corpus());
    let result = index.top5("deer", "tiger");
    assert_eq!(result.len(), 5);
    let distinct: HashSet<&str> = result.iter().copied().collect();
    assert_eq!(distinct.len(), result.len());
    assert_eq!(result[0], "jungle.txt");
}

#[test]
fn top5_without_matches_is_empty() {
    let index = build(&corpus());
    assert!(index.top5("zzz1", "zzz2").is_empty());
    assert_eq!(index.top5("cars", "zzz"), vec!["city.txt"]);
}

#[test]
fn document_order_does_not_change_entries() {
    let forward = build(&corpus());
    let mut reversed_corpus = corpus();
    reversed_corpus.reverse();
    let reversed = build(&reversed_corpus);

    assert_eq!(forward.num_keywords(), reversed.num_keywords());
    for (keyword, occs) in forward.iter() {
        let a: HashSet<&Occurrence> = occs.iter().collect();
        let b: HashSet<&Occurrence> = reversed.occurrences(keyword).iter().collect();
        assert_eq!(a, b, "{keyword}");
        let freqs: Vec<u32> = reversed.occurrences(keyword).iter().map(|o| o.frequency).collect();
        assert!(freqs.windows(2).all(|w| w[0] >= w[1]), "{keyword}: {freqs:?}");
    }
}
