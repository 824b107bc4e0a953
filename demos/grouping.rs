//! Greedy document grouping under the three supported linkage policies.

use corral::{GreedyClusterer, Linkage, MemoryCorpus};

fn main() {
    let mut corpus = MemoryCorpus::new();
    // Two farming documents, two music documents, one mixed.
    corpus.add_document(1, &["wheat", "harvest", "field", "wheat"]);
    corpus.add_document(2, &["harvest", "field", "tractor"]);
    corpus.add_document(3, &["opera", "violin", "score"]);
    corpus.add_document(4, &["violin", "score", "concert", "score"]);
    corpus.add_document(5, &["field", "score"]);

    for linkage in [Linkage::Nearest, Linkage::Farthest, Linkage::Average] {
        let engine = GreedyClusterer::new(linkage, 0.6);
        let groups = engine.cluster(&corpus).unwrap();

        println!("=== linkage {} (threshold 0.6) ===", linkage);
        for (i, group) in groups.iter().enumerate() {
            println!("  cluster {i}: {group:?}");
        }
    }

    // The reserved "mean" identifier parses but is not evaluable.
    let err = GreedyClusterer::new(Linkage::Mean, 0.6)
        .cluster(&corpus)
        .unwrap_err();
    println!("\nmean linkage: {err}");
}
