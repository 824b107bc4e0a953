use thiserror::Error;

use crate::corpus::DocId;

/// Errors returned by the clustering engine in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A document's term list references a term missing from the vocabulary.
    ///
    /// This means the vocabulary and the document index are out of sync; the
    /// run cannot produce a meaningful grouping and is aborted.
    #[error("term {term:?} in document {doc_id} is not in the vocabulary")]
    VocabularyMismatch {
        /// The offending term.
        term: String,
        /// The document whose term list contained it.
        doc_id: DocId,
    },

    /// The requested linkage policy is reserved or unrecognized.
    ///
    /// `"mean"` parses as [`Linkage::Mean`](crate::cluster::Linkage::Mean) but
    /// is intentionally unimplemented; selecting it fails here rather than
    /// silently behaving like `"avg"`.
    #[error("unsupported linkage {0:?}")]
    UnsupportedLinkage(String),

    /// The retrieval collaborator failed to answer a lookup.
    ///
    /// Collaborator failures are never retried; the run is aborted.
    #[error("corpus lookup failed: {0}")]
    Corpus(String),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
