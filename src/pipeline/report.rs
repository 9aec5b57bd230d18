//! Analysis result assembly
//!
//! Builds the exported graph structure from the word-pair list and the
//! cluster partition. The asymmetry between the fields is deliberate and
//! mirrors the visualization contract: `links` keeps every pair including
//! duplicates and self-pairs, `num_relations` collapses duplicates and
//! drops self-pairs, and `num_concepts` collapses duplicates but keeps
//! self-pair lemmas.

use crate::types::{Cluster, GraphNode, WordPair};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Registers lemmas in order of first appearance and hands out stable
/// zero-based indices.
#[derive(Debug, Default)]
struct NodeIndexer {
    index_of: FxHashMap<String, usize>,
    nodes: Vec<GraphNode>,
}

impl NodeIndexer {
    fn observe(&mut self, lemma: &str) {
        if self.index_of.contains_key(lemma) {
            return;
        }

        let index = self.nodes.len();
        self.index_of.insert(lemma.to_string(), index);
        self.nodes.push(GraphNode {
            id: lemma.to_string(),
            index,
        });
    }
}

/// The exported cohesion graph for one document.
///
/// Serializes with the visualization key names (`numRelations`,
/// `numSentences`, `numConcepts`, `numCluster`). Immutable once assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohesionData {
    /// Every extracted word pair, duplicates and self-pairs retained
    pub links: Vec<WordPair>,
    /// One node per distinct lemma, indexed in order of first appearance
    pub nodes: Vec<GraphNode>,
    /// Count of distinct directed pairs with unequal endpoints
    pub num_relations: usize,
    /// Sentence count reported by the facts provider
    pub num_sentences: usize,
    /// Count of distinct lemmas across all pairs
    pub num_concepts: usize,
    /// The cluster partition of `links`
    pub clusters: Vec<Cluster>,
    /// Number of clusters
    pub num_cluster: usize,
}

impl CohesionData {
    /// Assemble the exported structure from already-computed state.
    pub(crate) fn assemble(
        links: Vec<WordPair>,
        clusters: Vec<Cluster>,
        num_sentences: usize,
    ) -> Self {
        let mut indexer = NodeIndexer::default();
        for pair in &links {
            indexer.observe(&pair.source);
            indexer.observe(&pair.target);
        }

        let distinct_relations: FxHashSet<(&str, &str)> = links
            .iter()
            .filter(|p| !p.is_self_pair())
            .map(|p| (p.source.as_str(), p.target.as_str()))
            .collect();

        let num_cluster = clusters.len();
        let num_concepts = indexer.nodes.len();
        let num_relations = distinct_relations.len();

        Self {
            links,
            nodes: indexer.nodes,
            num_relations,
            num_sentences,
            num_concepts,
            clusters,
            num_cluster,
        }
    }

    /// Map each clustered lemma to the position of its cluster.
    ///
    /// Derived from the cluster partition; lemmas outside every cluster do
    /// not appear.
    pub fn word_cluster_index(&self) -> FxHashMap<String, usize> {
        let mut index = FxHashMap::default();
        for (position, cluster) in self.clusters.iter().enumerate() {
            for pair in cluster {
                index.insert(pair.source.clone(), position);
                index.insert(pair.target.clone(), position);
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(source: &str, target: &str) -> WordPair {
        WordPair::new(source, target)
    }

    #[test]
    fn test_links_keep_duplicates_and_self_pairs() {
        let links = vec![pair("a", "b"), pair("a", "b"), pair("c", "c")];
        let data = CohesionData::assemble(links.clone(), vec![links.clone()], 1);
        assert_eq!(data.links, links);
    }

    #[test]
    fn test_num_relations_filters_duplicates_and_self_pairs() {
        let links = vec![
            pair("a", "b"),
            pair("a", "b"),
            pair("b", "a"),
            pair("c", "c"),
        ];
        let data = CohesionData::assemble(links.clone(), vec![links], 1);

        // Duplicates collapse, self-pairs drop, reverse directions count
        // separately.
        assert_eq!(data.num_relations, 2);
    }

    #[test]
    fn test_num_concepts_includes_self_pair_lemmas() {
        let links = vec![pair("a", "b"), pair("c", "c")];
        let data = CohesionData::assemble(links.clone(), vec![links], 1);
        assert_eq!(data.num_concepts, 3);
    }

    #[test]
    fn test_node_indices_follow_first_appearance() {
        let links = vec![pair("b", "a"), pair("a", "c"), pair("b", "c")];
        let data = CohesionData::assemble(links.clone(), vec![links], 1);

        let ids: Vec<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);

        let indices: Vec<usize> = data.nodes.iter().map(|n| n.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_node_indices_are_a_permutation() {
        let links = vec![
            pair("a", "b"),
            pair("b", "c"),
            pair("a", "c"),
            pair("d", "d"),
        ];
        let data = CohesionData::assemble(links.clone(), vec![links], 1);

        let mut indices: Vec<usize> = data.nodes.iter().map(|n| n.index).collect();
        indices.sort_unstable();
        let expected: Vec<usize> = (0..data.num_concepts).collect();
        assert_eq!(indices, expected);
    }

    #[test]
    fn test_counts_for_empty_document() {
        let data = CohesionData::assemble(Vec::new(), Vec::new(), 0);
        assert_eq!(data.num_relations, 0);
        assert_eq!(data.num_concepts, 0);
        assert_eq!(data.num_cluster, 0);
        assert!(data.nodes.is_empty());
    }

    #[test]
    fn test_word_cluster_index_covers_every_clustered_lemma() {
        let clusters = vec![
            vec![pair("a", "b"), pair("b", "c")],
            vec![pair("x", "y")],
        ];
        let links: Vec<WordPair> = clusters.iter().flatten().cloned().collect();
        let data = CohesionData::assemble(links, clusters, 2);

        let index = data.word_cluster_index();
        assert_eq!(index["a"], 0);
        assert_eq!(index["b"], 0);
        assert_eq!(index["c"], 0);
        assert_eq!(index["x"], 1);
        assert_eq!(index["y"], 1);
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn test_serializes_with_visualization_key_names() {
        let links = vec![pair("a", "b")];
        let data = CohesionData::assemble(links.clone(), vec![links], 1);

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["numRelations"], 1);
        assert_eq!(json["numSentences"], 1);
        assert_eq!(json["numConcepts"], 2);
        assert_eq!(json["numCluster"], 1);
        assert_eq!(json["links"][0]["source"], "a");
        assert_eq!(json["nodes"][0]["id"], "a");
        assert_eq!(json["nodes"][0]["index"], 0);
        assert_eq!(json["clusters"][0][0]["target"], "b");
    }
}
