//! Analysis orchestration — parse, extract, cluster, report.
//!
//! [`CohesionAnalyzer`] holds explicitly-injected provider instances and
//! runs the four fixed stages in order, threading each stage's output into
//! the next. Providers are constructed by the caller and reused across
//! documents of the same language; the analyzer itself keeps no state
//! between documents.

use crate::errors::Result;
use crate::graph::{ClusterBuilder, RelationExtractor};
use crate::nlp::{FactsProvider, ProviderRegistry, TaxonomyProvider};
use crate::pipeline::report::CohesionData;
use crate::types::CohesionConfig;

/// Enter a tracing span for an analysis stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates
/// it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("analysis_stage", stage = $name).entered();
    };
}

/// Computes the lexical cohesion graph of a document.
///
/// Generic over the two collaborator seams, so concrete providers are
/// statically dispatched; registries can supply `Arc<dyn FactsProvider>`
/// through the blanket impls.
#[derive(Debug)]
pub struct CohesionAnalyzer<F, T> {
    facts: F,
    taxonomy: T,
    config: CohesionConfig,
}

impl<F, T> CohesionAnalyzer<F, T>
where
    F: FactsProvider,
    T: TaxonomyProvider + Sync,
{
    /// Create an analyzer with the default configuration.
    pub fn new(facts: F, taxonomy: T) -> Self {
        Self {
            facts,
            taxonomy,
            config: CohesionConfig::default(),
        }
    }

    /// Replace the configuration, validating it first.
    pub fn with_config(mut self, config: CohesionConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// The active configuration.
    pub fn config(&self) -> &CohesionConfig {
        &self.config
    }

    /// Analyze a document and return its cohesion graph.
    ///
    /// Stages run in order:
    /// 1. Parse (facts provider)
    /// 2. Extract word-pair relations
    /// 3. Build clusters
    /// 4. Assemble the exported structure
    pub fn analyze(&self, text: &str) -> Result<CohesionData> {
        trace_stage!("parse");
        let sentences = self.facts.parse(text)?;

        trace_stage!("relations");
        let pairs = RelationExtractor::new(&self.taxonomy)
            .with_parallel_threshold(self.config.parallel_threshold)
            .extract(&sentences)?;

        trace_stage!("clusters");
        let mut builder = ClusterBuilder::new();
        if let Some(max_scans) = self.config.max_cluster_scans {
            builder = builder.with_max_scans(max_scans);
        }
        let clusters = builder.build(&pairs, sentences.len())?;

        trace_stage!("report");
        Ok(CohesionData::assemble(pairs, clusters, sentences.len()))
    }
}

/// Resolve the facts provider for `text` by detected language, then analyze.
///
/// Convenience wrapper around [`ProviderRegistry::resolve`] and
/// [`CohesionAnalyzer::analyze`] for callers serving multiple languages.
pub fn analyze_with_registry<T>(
    registry: &ProviderRegistry,
    taxonomy: T,
    text: &str,
    config: CohesionConfig,
) -> Result<CohesionData>
where
    T: TaxonomyProvider + Sync,
{
    let provider = registry.resolve(text)?;
    CohesionAnalyzer::new(provider, taxonomy)
        .with_config(config)?
        .analyze(text)
}
