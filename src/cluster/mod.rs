//! Incremental greedy clustering of term-frequency document vectors.
//!
//! ## The algorithm
//!
//! Documents are visited once, in the order the corpus enumerates them. For
//! each document:
//!
//! 1. Build its term-frequency vector over the run's fixed [`Vocabulary`]
//!    (slot 0 holds the document id and is excluded from all distances).
//! 2. Score every existing cluster: cosine distance from the document to each
//!    member, reduced to one cost by the [`Linkage`] policy (minimum, maximum,
//!    or arithmetic mean over members).
//! 3. If some cluster's cost is strictly below the threshold, append the
//!    document to the cheapest such cluster (ties keep the first-created
//!    one). Otherwise the document starts a new singleton cluster.
//!
//! Assignments are irrevocable: clusters only grow, never merge, split, or
//! shed members. The pass is **greedy and order-dependent** — permuting the
//! document order can change the grouping — so callers that need
//! reproducibility must pin both the vocabulary and the document enumeration
//! order.
//!
//! ## Threshold semantics
//!
//! Cosine distance over nonnegative frequency vectors lies in `[0, 1]`.
//! Qualification is a strict `< threshold` comparison, so a threshold of 0
//! produces all singletons and a threshold above 1 merges everything. A
//! zero-norm feature vector on either side of a comparison (for example a
//! document with no terms, or an empty vocabulary) makes the cosine
//! undefined; such pairs are uniformly scored as maximally distant (`1.0`)
//! instead of raising a numeric fault.
//!
//! ## Complexity
//!
//! Per document the cost is `O(existing clusters × average cluster size ×
//! V)`. Over `D` documents the total ranges from `O(D × V)` (every document
//! its own cluster) to `O(D² × V)` (most documents collapse into one
//! cluster).
//!
//! ## Usage
//!
//! ```rust
//! use corral::{GreedyClusterer, Linkage, MemoryCorpus};
//!
//! let mut corpus = MemoryCorpus::new();
//! corpus.add_document(10, &["wheat", "harvest", "wheat"]);
//! corpus.add_document(11, &["wheat", "harvest"]);
//! corpus.add_document(12, &["opera"]);
//!
//! let engine = GreedyClusterer::new(Linkage::Average, 0.4);
//! let groups = engine.cluster(&corpus).unwrap();
//! assert_eq!(groups, vec![vec![10, 11], vec![12]]);
//! ```

mod greedy;
mod linkage;
mod util;
mod vector;
mod vocab;

pub use greedy::{Cluster, GreedyClusterer};
pub use linkage::Linkage;
pub use util::cosine_distance;
pub use vector::DocVector;
pub use vocab::Vocabulary;
