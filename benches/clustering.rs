use corral::{DocId, GreedyClusterer, Linkage, MemoryCorpus};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

/// Synthetic corpus: `n_docs` documents of `doc_len` tokens drawn from a
/// `vocab_size`-term vocabulary, with a mild topic skew so some documents
/// actually cluster together.
fn synthetic_corpus(n_docs: usize, vocab_size: usize, doc_len: usize, seed: u64) -> MemoryCorpus {
    let mut rng = StdRng::seed_from_u64(seed);
    let terms: Vec<String> = (0..vocab_size).map(|i| format!("term{i}")).collect();

    let mut corpus = MemoryCorpus::with_vocabulary(terms.iter().map(String::as_str));
    for doc in 0..n_docs {
        // Each document leans on a contiguous slice of the vocabulary.
        let topic = (doc % 8) * (vocab_size / 8);
        let tokens: Vec<&str> = (0..doc_len)
            .map(|_| {
                let offset = rng.random_range(0..vocab_size / 8);
                terms[(topic + offset) % vocab_size].as_str()
            })
            .collect();
        corpus.add_document(doc as DocId + 1, &tokens);
    }
    corpus
}

fn bench_greedy_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_pass");

    let corpus = synthetic_corpus(500, 256, 40, 42);

    for linkage in [Linkage::Nearest, Linkage::Farthest, Linkage::Average] {
        group.bench_function(format!("n500_v256_{linkage}"), |b| {
            b.iter(|| {
                let engine = GreedyClusterer::new(linkage, 0.4);
                engine.cluster(black_box(&corpus)).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_greedy_pass);
criterion_main!(benches);
