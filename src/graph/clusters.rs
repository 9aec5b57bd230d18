//! Cluster construction over the word-pair list
//!
//! Partitions the document's word pairs into connected components: two
//! pairs belong to the same cluster when they are linked through a chain of
//! shared lemmas. Expansion is a fixed-point scan over a claimed bitset —
//! each cluster seeds from the first unclaimed pair and absorbs every pair
//! sharing a lemma with its member set until a pass adds nothing.

use crate::errors::{CohesionError, Result};
use crate::types::{Cluster, WordPair};
use rustc_hash::FxHashSet;

/// Scan budget floor, so tiny documents never trip the cap.
const MIN_SCAN_BUDGET: usize = 4;

/// Partitions a word-pair list into lemma-connected clusters.
#[derive(Debug, Clone, Default)]
pub struct ClusterBuilder {
    max_scans: Option<usize>,
}

impl ClusterBuilder {
    /// Create a builder with the derived scan budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit budget on fixed-point scans.
    pub fn with_max_scans(mut self, max_scans: usize) -> Self {
        self.max_scans = Some(max_scans);
        self
    }

    /// Partition `pairs` into clusters.
    ///
    /// Single-sentence documents always yield exactly one cluster holding
    /// the full pair list in order, even when the pairs are not transitively
    /// connected — cross-sentence bridging is vacuous there, so the whole
    /// document is declared one cohesion group.
    ///
    /// Otherwise every pair lands in exactly one cluster, pairs enter
    /// clusters in discovery order, and completed clusters share no lemma.
    /// Exceeding the scan budget fails with
    /// [`ResourceExhaustion`](CohesionError::ResourceExhaustion).
    pub fn build(&self, pairs: &[WordPair], num_sentences: usize) -> Result<Vec<Cluster>> {
        if num_sentences == 1 {
            return Ok(vec![pairs.to_vec()]);
        }

        let budget = self
            .max_scans
            .unwrap_or_else(|| (pairs.len() * pairs.len()).max(MIN_SCAN_BUDGET));

        let mut clusters = Vec::new();
        let mut claimed = vec![false; pairs.len()];
        let mut scans = 0usize;

        for seed in 0..pairs.len() {
            if claimed[seed] {
                continue;
            }

            // A pair sharing a lemma with a completed cluster was already
            // absorbed by that cluster's fixed point, so an unclaimed seed
            // is guaranteed disjoint from every previous cluster.
            let mut members = vec![seed];
            claimed[seed] = true;

            let mut lemmas: FxHashSet<&str> = FxHashSet::default();
            lemmas.insert(&pairs[seed].source);
            lemmas.insert(&pairs[seed].target);

            let mut changed = true;
            while changed {
                changed = false;
                scans += 1;
                if scans > budget {
                    return Err(CohesionError::ResourceExhaustion {
                        pair_count: pairs.len(),
                        max_scans: budget,
                    });
                }

                for (i, pair) in pairs.iter().enumerate() {
                    if claimed[i] {
                        continue;
                    }
                    if lemmas.contains(pair.source.as_str())
                        || lemmas.contains(pair.target.as_str())
                    {
                        claimed[i] = true;
                        members.push(i);
                        lemmas.insert(&pair.source);
                        lemmas.insert(&pair.target);
                        changed = true;
                    }
                }
            }

            clusters.push(members.iter().map(|&i| pairs[i].clone()).collect());
        }

        Ok(clusters)
    }
}
