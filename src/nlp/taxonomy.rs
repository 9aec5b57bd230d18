//! Taxonomy lookup backed by an in-memory relation table.
//!
//! [`StaticTaxonomy`] serves as the fixture implementation of
//! [`TaxonomyProvider`](crate::nlp::TaxonomyProvider) and as the adapter
//! target for materialized WordNet exports: each entry maps a lemma to the
//! union of its hypernym and hyponym lemmas across all senses.

use crate::errors::Result;
use crate::nlp::TaxonomyProvider;
use rustc_hash::{FxHashMap, FxHashSet};

/// Normalize a taxonomy lemma for comparison with parser output.
///
/// Multi-word taxonomy entries use underscores between components (WordNet
/// convention); parsers emit spaces.
pub fn normalize_lemma(lemma: &str) -> String {
    lemma.replace('_', " ")
}

/// An in-memory hypernym/hyponym table.
#[derive(Debug, Clone, Default)]
pub struct StaticTaxonomy {
    relations: FxHashMap<String, FxHashSet<String>>,
}

impl StaticTaxonomy {
    /// Create an empty taxonomy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the broader and narrower lemmas of `lemma`, merging with any
    /// previously recorded relations. Both sides are normalized.
    pub fn insert<I, S>(&mut self, lemma: &str, related: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.relations
            .entry(normalize_lemma(lemma))
            .or_default()
            .extend(related.into_iter().map(|r| normalize_lemma(r.as_ref())));
        self
    }

    /// Number of lemmas with recorded relations.
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Check if the taxonomy has no entries.
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

impl TaxonomyProvider for StaticTaxonomy {
    fn broader_and_narrower(&self, lemma: &str) -> Result<FxHashSet<String>> {
        Ok(self
            .relations
            .get(&normalize_lemma(lemma))
            .cloned()
            .unwrap_or_default())
    }
}
