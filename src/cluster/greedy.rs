use tracing::{debug, trace};

use super::linkage::{cluster_cost, Linkage};
use super::vector::DocVector;
use super::vocab::Vocabulary;
use crate::corpus::{Corpus, DocId};
use crate::error::Result;

/// A growing group of document vectors assigned together by the greedy pass.
///
/// A cluster is created with exactly one member and grows only by appending
/// rows; it is never merged with another cluster, never split, and never
/// loses a member. Row order is insertion order.
#[derive(Debug, Clone)]
pub struct Cluster {
    rows: Vec<DocVector>,
}

impl Cluster {
    pub(crate) fn singleton(row: DocVector) -> Self {
        Self { rows: vec![row] }
    }

    pub(crate) fn push(&mut self, row: DocVector) {
        self.rows.push(row);
    }

    /// Member vectors, in the order they were appended.
    pub fn members(&self) -> &[DocVector] {
        &self.rows
    }

    /// Member document ids, in the order they were appended.
    pub fn doc_ids(&self) -> Vec<DocId> {
        self.rows.iter().map(DocVector::doc_id).collect()
    }

    /// Number of member documents (always at least 1).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Ordered store of clusters for one run. New clusters append at the end;
/// existing clusters mutate in place by row append.
#[derive(Debug, Default)]
struct ClusterStore {
    clusters: Vec<Cluster>,
}

impl ClusterStore {
    /// Place one document vector: extend the cheapest qualifying cluster, or
    /// start a new singleton. Returns the index of the receiving cluster.
    ///
    /// A cluster qualifies when its cost is strictly below the threshold.
    /// Ties on cost keep the lowest cluster index (first created wins).
    /// Placement is irrevocable.
    fn assign(&mut self, linkage: Linkage, threshold: f32, row: DocVector) -> Result<usize> {
        let mut best: Option<usize> = None;
        let mut best_cost = f32::INFINITY;

        for (idx, cluster) in self.clusters.iter().enumerate() {
            let cost = cluster_cost(linkage, &row, cluster)?;
            // Both comparisons strict: `< threshold` for qualification,
            // `< best_cost` so an equal later cost never displaces an
            // earlier cluster.
            if cost < threshold && cost < best_cost {
                best_cost = cost;
                best = Some(idx);
            }
        }

        match best {
            Some(idx) => {
                trace!(doc = row.doc_id(), cluster = idx, cost = best_cost, "extending cluster");
                self.clusters[idx].push(row);
                Ok(idx)
            }
            None => {
                let idx = self.clusters.len();
                trace!(doc = row.doc_id(), cluster = idx, "starting new cluster");
                self.clusters.push(Cluster::singleton(row));
                Ok(idx)
            }
        }
    }
}

/// Greedy, order-dependent, single-pass clustering engine.
///
/// Each document is visited exactly once, in the order the collaborator
/// enumerates ids, and is placed immediately: into the existing cluster with
/// the lowest linkage cost strictly below the threshold, or into a new
/// singleton cluster if none qualifies. Documents are never reconsidered or
/// moved, and clusters are never merged, so the iteration order is part of
/// the observable contract — callers needing reproducibility must pin it.
///
/// This is not globally-optimal agglomerative clustering; there is no
/// convergence loop and no dendrogram.
///
/// ```
/// use corral::{GreedyClusterer, Linkage, MemoryCorpus};
///
/// let mut corpus = MemoryCorpus::new();
/// corpus.add_document(1, &["rust", "borrow"]);
/// corpus.add_document(2, &["rust", "borrow", "rust"]);
/// corpus.add_document(3, &["jazz"]);
///
/// let groups = GreedyClusterer::new(Linkage::Nearest, 0.5)
///     .cluster(&corpus)
///     .unwrap();
/// assert_eq!(groups, vec![vec![1, 2], vec![3]]);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyClusterer {
    linkage: Linkage,
    threshold: f32,
    max_docs: Option<usize>,
}

impl GreedyClusterer {
    /// Create an engine with the given linkage policy and distance threshold.
    ///
    /// Only costs strictly below `threshold` qualify a cluster for extension.
    /// A threshold of `0.0` therefore never merges anything (cosine distance
    /// is never negative); values above `1.0` merge even orthogonal
    /// documents. The threshold is not validated: NaN or negative values
    /// simply disqualify every cluster and produce all-singleton output.
    pub fn new(linkage: Linkage, threshold: f32) -> Self {
        Self {
            linkage,
            threshold,
            max_docs: None,
        }
    }

    /// Cap the number of documents processed in one run.
    ///
    /// Documents beyond the cap are simply not visited; the per-document
    /// decision rule is unchanged.
    pub fn with_max_docs(mut self, max_docs: usize) -> Self {
        self.max_docs = Some(max_docs);
        self
    }

    /// The configured linkage policy.
    pub fn linkage(&self) -> Linkage {
        self.linkage
    }

    /// The configured distance threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Run the full pass and return the cluster store.
    ///
    /// Clusters are in creation order; members within a cluster are in
    /// assignment order. Fails fast on a reserved/unknown linkage (before any
    /// document is processed), on a vocabulary/document-index mismatch, or on
    /// any collaborator lookup failure. No partial result is returned.
    pub fn fit<C: Corpus>(&self, corpus: &C) -> Result<Vec<Cluster>> {
        self.linkage.validate()?;

        let vocab = Vocabulary::build(corpus)?;
        let mut ids = corpus.document_ids()?;
        if let Some(cap) = self.max_docs {
            ids.truncate(cap);
        }

        debug!(
            documents = ids.len(),
            vocabulary = vocab.len(),
            linkage = %self.linkage,
            threshold = self.threshold,
            "starting greedy clustering pass"
        );

        let mut store = ClusterStore::default();
        for doc in ids {
            let row = DocVector::build(corpus, &vocab, doc)?;
            store.assign(self.linkage, self.threshold, row)?;
        }

        debug!(clusters = store.clusters.len(), "pass complete");
        Ok(store.clusters)
    }

    /// Run the full pass and flatten the store into document-id groupings.
    pub fn cluster<C: Corpus>(&self, corpus: &C) -> Result<Vec<Vec<DocId>>> {
        Ok(self.fit(corpus)?.into_iter().map(|c| c.doc_ids()).collect())
    }
}
