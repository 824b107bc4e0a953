//! Incremental document clustering over term-frequency vectors.
//!
//! `corral` groups the documents of a text corpus in a single deterministic
//! greedy pass: each document either extends the most similar existing
//! cluster (under a configurable linkage policy and cosine-distance
//! threshold) or starts a new one.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`GreedyClusterer`] — the single-pass engine
//! - [`Linkage`] — nearest/farthest/average cost aggregation
//! - [`Vocabulary`] and [`DocVector`] — the term-indexing and vectorization
//!   building blocks
//!
//! The text-retrieval layer is injected through the [`Corpus`] trait in
//! [`corpus`]; [`MemoryCorpus`] is a ready-made in-memory implementation.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod corpus;
pub mod error;

pub use cluster::{Cluster, DocVector, GreedyClusterer, Linkage, Vocabulary};
pub use corpus::{Corpus, DocId, MemoryCorpus};
pub use error::{Error, Result};
