use std::fmt;
use std::str::FromStr;

use super::greedy::Cluster;
use super::util::cosine_distance;
use super::vector::DocVector;
use crate::error::{Error, Result};

/// Aggregation rule reducing per-member distances into one cluster cost.
///
/// String identifiers (for [`FromStr`] and [`Display`](fmt::Display)) are
/// `"min"`, `"max"`, `"avg"`, and `"mean"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linkage {
    /// Minimum cosine distance over cluster members (`"min"`).
    Nearest,
    /// Maximum cosine distance over cluster members (`"max"`).
    Farthest,
    /// Arithmetic mean of cosine distances over cluster members (`"avg"`).
    Average,
    /// Reserved identifier (`"mean"`), textually distinct from `"avg"`.
    ///
    /// Intentionally unimplemented: selecting it fails with
    /// [`Error::UnsupportedLinkage`] rather than silently aliasing
    /// [`Linkage::Average`].
    Mean,
}

impl Linkage {
    /// The string identifier of this policy.
    pub fn as_str(self) -> &'static str {
        match self {
            Linkage::Nearest => "min",
            Linkage::Farthest => "max",
            Linkage::Average => "avg",
            Linkage::Mean => "mean",
        }
    }

    /// Fail if this policy cannot be evaluated.
    pub(crate) fn validate(self) -> Result<()> {
        match self {
            Linkage::Mean => Err(Error::UnsupportedLinkage(self.as_str().to_string())),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Linkage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "min" => Ok(Linkage::Nearest),
            "max" => Ok(Linkage::Farthest),
            "avg" => Ok(Linkage::Average),
            "mean" => Ok(Linkage::Mean),
            other => Err(Error::UnsupportedLinkage(other.to_string())),
        }
    }
}

/// Cost of extending `cluster` with `candidate` under `linkage`.
///
/// Computes the cosine distance from the candidate's features to every member
/// row's features (the identifier slot is excluded on both sides) and
/// aggregates per policy. Clusters always hold at least one member, so the
/// aggregate is well defined.
pub(crate) fn cluster_cost(linkage: Linkage, candidate: &DocVector, cluster: &Cluster) -> Result<f32> {
    linkage.validate()?;

    let distances = cluster
        .members()
        .iter()
        .map(|member| cosine_distance(candidate.features(), member.features()));

    let cost = match linkage {
        Linkage::Nearest => distances.fold(f32::INFINITY, f32::min),
        Linkage::Farthest => distances.fold(f32::NEG_INFINITY, f32::max),
        Linkage::Average => {
            let mut sum = 0.0f32;
            let mut n = 0usize;
            for d in distances {
                sum += d;
                n += 1;
            }
            sum / n as f32
        }
        Linkage::Mean => unreachable!("rejected by validate"),
    };

    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::vocab::Vocabulary;
    use crate::corpus::MemoryCorpus;

    fn three_doc_cluster() -> (Cluster, DocVector) {
        // Vocabulary a, b. Members: (1,0), (0,1), (1,1). Candidate: (1,0).
        // Distances: 0, 1, 1 - 1/sqrt(2) ≈ 0.2929.
        let mut corpus = MemoryCorpus::new();
        corpus.add_document(1, &["a"]);
        corpus.add_document(2, &["b"]);
        corpus.add_document(3, &["a", "b"]);
        corpus.add_document(4, &["a"]);
        let vocab = Vocabulary::build(&corpus).unwrap();

        let mut cluster = Cluster::singleton(DocVector::build(&corpus, &vocab, 1).unwrap());
        cluster.push(DocVector::build(&corpus, &vocab, 2).unwrap());
        cluster.push(DocVector::build(&corpus, &vocab, 3).unwrap());

        let candidate = DocVector::build(&corpus, &vocab, 4).unwrap();
        (cluster, candidate)
    }

    #[test]
    fn test_nearest_takes_the_minimum() {
        let (cluster, candidate) = three_doc_cluster();
        let cost = cluster_cost(Linkage::Nearest, &candidate, &cluster).unwrap();
        assert!(cost.abs() < 1e-6);
    }

    #[test]
    fn test_farthest_takes_the_maximum() {
        let (cluster, candidate) = three_doc_cluster();
        let cost = cluster_cost(Linkage::Farthest, &candidate, &cluster).unwrap();
        assert!((cost - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_average_is_the_arithmetic_mean() {
        let (cluster, candidate) = three_doc_cluster();
        let cost = cluster_cost(Linkage::Average, &candidate, &cluster).unwrap();
        let expected = (0.0 + 1.0 + (1.0 - 1.0 / 2.0f32.sqrt())) / 3.0;
        assert!((cost - expected).abs() < 1e-6);
    }

    #[test]
    fn test_mean_is_rejected() {
        let (cluster, candidate) = three_doc_cluster();
        let err = cluster_cost(Linkage::Mean, &candidate, &cluster).unwrap_err();
        assert!(matches!(err, Error::UnsupportedLinkage(ref s) if s == "mean"));
    }

    #[test]
    fn test_identifier_round_trip() {
        for linkage in [
            Linkage::Nearest,
            Linkage::Farthest,
            Linkage::Average,
            Linkage::Mean,
        ] {
            assert_eq!(linkage.as_str().parse::<Linkage>().unwrap(), linkage);
        }
    }

    #[test]
    fn test_unknown_identifier_is_rejected() {
        let err = "centroid".parse::<Linkage>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedLinkage(ref s) if s == "centroid"));
    }
}
