use std::collections::HashMap;

use crate::corpus::Corpus;
use crate::error::Result;

/// Immutable term-to-column mapping for one clustering run.
///
/// Every distinct term of the corpus gets a unique index in `1..=V`, assigned
/// in the collaborator's enumeration order. Index 0 is reserved for the
/// document-id slot of [`DocVector`](super::DocVector), so a vocabulary of
/// size `V` produces vectors of length `V + 1`.
///
/// An empty vocabulary (`V = 0`) is valid: every document vector then
/// degenerates to just the identifier slot.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build the vocabulary from the collaborator's term enumeration.
    pub fn build<C: Corpus>(corpus: &C) -> Result<Self> {
        Ok(Self::from_terms(corpus.vocabulary()?))
    }

    /// Build the vocabulary from an explicit term sequence.
    ///
    /// Terms are indexed starting at 1 in iteration order; duplicates keep
    /// their first index.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = HashMap::new();
        let mut next = 1;
        for term in terms {
            index.entry(term.into()).or_insert_with(|| {
                let i = next;
                next += 1;
                i
            });
        }
        Self { index }
    }

    /// The column index of `term`, or `None` if the term is unknown.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Number of distinct terms (`V`).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the vocabulary has no terms.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Length of a document vector over this vocabulary (`V + 1`, for the
    /// reserved identifier slot).
    pub fn vector_len(&self) -> usize {
        self.index.len() + 1
    }
}
