use super::vocab::Vocabulary;
use crate::corpus::{Corpus, DocId};
use crate::error::{Error, Result};

/// A document's term-frequency vector over one run's vocabulary.
///
/// Layout: slot 0 carries the document id (informational only — distance
/// computations never read it); slots `1..=V` carry the frequency of each
/// vocabulary term in this document, 0 where the term is absent.
///
/// Vectors are built on demand per document and are not cached; they are
/// valid only against the [`Vocabulary`] in effect when they were built.
#[derive(Debug, Clone, PartialEq)]
pub struct DocVector {
    id: DocId,
    values: Vec<f32>,
}

impl DocVector {
    /// Build the vector for `doc` from the collaborator's term data.
    ///
    /// A document with no terms yields all-zero features, which is valid.
    /// A term missing from the vocabulary is an integrity failure
    /// ([`Error::VocabularyMismatch`]) and aborts the run; it is never
    /// silently skipped.
    pub fn build<C: Corpus>(corpus: &C, vocab: &Vocabulary, doc: DocId) -> Result<Self> {
        let mut values = vec![0.0; vocab.vector_len()];
        // Exact for ids below 2^24; the slot is never read back for results.
        values[0] = doc as f32;

        for term in corpus.document_terms(doc)? {
            let idx = vocab
                .index_of(&term)
                .ok_or_else(|| Error::VocabularyMismatch {
                    term: term.clone(),
                    doc_id: doc,
                })?;
            values[idx] = corpus.term_frequency(&term, doc)? as f32;
        }

        Ok(Self { id: doc, values })
    }

    /// The document this vector was built for.
    pub fn doc_id(&self) -> DocId {
        self.id
    }

    /// The feature slots (`1..=V`), excluding the identifier slot.
    pub fn features(&self) -> &[f32] {
        &self.values[1..]
    }

    /// Full vector length (`V + 1`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no feature slots (empty vocabulary).
    pub fn is_empty(&self) -> bool {
        self.values.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::MemoryCorpus;

    #[test]
    fn test_slot_zero_is_the_doc_id() {
        let mut corpus = MemoryCorpus::new();
        corpus.add_document(9, &["a"]);
        let vocab = Vocabulary::build(&corpus).unwrap();

        let v = DocVector::build(&corpus, &vocab, 9).unwrap();
        assert_eq!(v.doc_id(), 9);
        assert_eq!(v.len(), 2);
        assert_eq!(v.features(), &[1.0]);
    }

    #[test]
    fn test_frequencies_land_on_vocabulary_columns() {
        let mut corpus = MemoryCorpus::new();
        corpus.add_document(1, &["a", "b", "b"]);
        corpus.add_document(2, &["c"]);
        let vocab = Vocabulary::build(&corpus).unwrap();

        // Vocabulary order is a, b, c.
        let v1 = DocVector::build(&corpus, &vocab, 1).unwrap();
        assert_eq!(v1.features(), &[1.0, 2.0, 0.0]);

        let v2 = DocVector::build(&corpus, &vocab, 2).unwrap();
        assert_eq!(v2.features(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_document_without_terms_is_valid() {
        let mut corpus = MemoryCorpus::new();
        corpus.add_document(1, &["a", "b"]);
        corpus.add_document(2, &[]);
        let vocab = Vocabulary::build(&corpus).unwrap();

        let v = DocVector::build(&corpus, &vocab, 2).unwrap();
        assert_eq!(v.features(), &[0.0, 0.0]);
    }

    #[test]
    fn test_unknown_term_is_an_integrity_error() {
        let mut corpus = MemoryCorpus::with_vocabulary(["a"]);
        corpus.add_document(1, &["a", "z"]);
        let vocab = Vocabulary::build(&corpus).unwrap();

        let err = DocVector::build(&corpus, &vocab, 1).unwrap_err();
        match err {
            Error::VocabularyMismatch { term, doc_id } => {
                assert_eq!(term, "z");
                assert_eq!(doc_id, 1);
            }
            other => panic!("expected VocabularyMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_vocabulary_vector_is_identifier_only() {
        let mut corpus = MemoryCorpus::with_vocabulary(Vec::<String>::new());
        corpus.add_document(4, &[]);
        let vocab = Vocabulary::build(&corpus).unwrap();

        let v = DocVector::build(&corpus, &vocab, 4).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.features(), &[] as &[f32]);
    }
}
