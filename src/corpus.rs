//! The retrieval-collaborator interface and an in-memory implementation.
//!
//! The clustering engine never owns the text index. It consumes a small
//! capability surface — vocabulary, per-document term lists, term frequencies,
//! and document-id enumeration — through the [`Corpus`] trait, injected at the
//! call site. Any on-disk index layer can sit behind it.
//!
//! Enumeration order matters: the greedy pass visits documents in exactly the
//! order [`Corpus::document_ids`] returns them, and the result can change if
//! that order changes. Implementations that want reproducible groupings must
//! pin both the vocabulary order and the document order.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

/// Identifier of a document in the corpus.
pub type DocId = u32;

/// Capability surface of the text-retrieval layer consumed by the engine.
///
/// Every method is a synchronous, fallible lookup. A failed lookup aborts the
/// clustering run; the engine performs no retries.
pub trait Corpus {
    /// The distinct terms of the corpus, in a stable enumeration order.
    ///
    /// The order does not need to be lexicographic, but it must not change
    /// within a run: vocabulary indices are assigned from it.
    fn vocabulary(&self) -> Result<Vec<String>>;

    /// All document identifiers, in the order the engine should visit them.
    fn document_ids(&self) -> Result<Vec<DocId>>;

    /// The terms occurring in one document (distinct terms suffice; repeats
    /// are harmless since frequencies come from [`term_frequency`]).
    ///
    /// [`term_frequency`]: Corpus::term_frequency
    fn document_terms(&self, doc: DocId) -> Result<Vec<String>>;

    /// Occurrence count of `term` within `doc`.
    fn term_frequency(&self, term: &str, doc: DocId) -> Result<u32>;
}

/// A single stored document: distinct terms in first-seen order plus counts.
#[derive(Debug, Clone)]
struct MemoryDoc {
    id: DocId,
    terms: Vec<String>,
    counts: HashMap<String, u32>,
}

/// An owned, in-memory [`Corpus`] built from tokenized documents.
///
/// Used throughout the test suite and the demo; also handy as a reference for
/// what the engine expects from a real index layer.
///
/// Two vocabulary modes:
/// - [`MemoryCorpus::new`] grows the vocabulary as documents are added, in
///   first-seen term order.
/// - [`MemoryCorpus::with_vocabulary`] fixes the vocabulary up front. Adding a
///   document that uses an unknown term is allowed here, but clustering such a
///   corpus fails with [`Error::VocabularyMismatch`], which is how the
///   integrity check is exercised in tests.
///
/// Document enumeration order is insertion order.
#[derive(Debug, Clone)]
pub struct MemoryCorpus {
    vocabulary: Vec<String>,
    known: HashSet<String>,
    grow_vocabulary: bool,
    docs: Vec<MemoryDoc>,
}

impl MemoryCorpus {
    /// Create an empty corpus whose vocabulary grows with the documents.
    pub fn new() -> Self {
        Self {
            vocabulary: Vec::new(),
            known: HashSet::new(),
            grow_vocabulary: true,
            docs: Vec::new(),
        }
    }

    /// Create an empty corpus with a fixed vocabulary.
    ///
    /// Terms are indexed in iteration order; duplicates are ignored.
    pub fn with_vocabulary<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut corpus = Self {
            grow_vocabulary: false,
            ..Self::new()
        };
        for term in terms {
            let term = term.into();
            if corpus.known.insert(term.clone()) {
                corpus.vocabulary.push(term);
            }
        }
        corpus
    }

    /// Add a tokenized document. Token repeats accumulate into the frequency.
    pub fn add_document(&mut self, id: DocId, tokens: &[&str]) {
        let mut doc = MemoryDoc {
            id,
            terms: Vec::new(),
            counts: HashMap::new(),
        };
        for &token in tokens {
            let entry = doc.counts.entry(token.to_string()).or_insert(0);
            if *entry == 0 {
                doc.terms.push(token.to_string());
            }
            *entry += 1;

            if self.grow_vocabulary && self.known.insert(token.to_string()) {
                self.vocabulary.push(token.to_string());
            }
        }
        self.docs.push(doc);
    }

    /// Number of documents added so far.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    fn doc(&self, id: DocId) -> Result<&MemoryDoc> {
        self.docs
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| Error::Corpus(format!("unknown document {id}")))
    }
}

impl Default for MemoryCorpus {
    fn default() -> Self {
        Self::new()
    }
}

impl Corpus for MemoryCorpus {
    fn vocabulary(&self) -> Result<Vec<String>> {
        Ok(self.vocabulary.clone())
    }

    fn document_ids(&self) -> Result<Vec<DocId>> {
        Ok(self.docs.iter().map(|d| d.id).collect())
    }

    fn document_terms(&self, doc: DocId) -> Result<Vec<String>> {
        Ok(self.doc(doc)?.terms.clone())
    }

    fn term_frequency(&self, term: &str, doc: DocId) -> Result<u32> {
        Ok(self.doc(doc)?.counts.get(term).copied().unwrap_or(0))
    }
}
