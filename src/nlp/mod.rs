//! External collaborator seams.
//!
//! The analysis core does not tokenize, parse, or look up taxonomy
//! relations itself — it consumes the output of external NLP and lexical
//! resources through the traits defined here. Each trait represents one
//! collaborator boundary; implementations are statically dispatched, with
//! trait objects available for registries and dynamic composition.

pub mod facts;
pub mod taxonomy;

pub use facts::{JsonFactsProvider, ProviderRegistry};
pub use taxonomy::{normalize_lemma, StaticTaxonomy};

use crate::errors::Result;
use crate::types::Sentence;
use rustc_hash::FxHashSet;
use std::sync::Arc;

// ============================================================================
// FactsProvider — sentence and word facts (language-specific model)
// ============================================================================

/// Syntactic facts about a document, produced by a language-specific model.
///
/// # Contract
///
/// - **Input**: raw document text.
/// - **Output**: sentences in document order, each word carrying its lemma,
///   POS tag, root flag, and left-dependent indices in sentence order.
/// - Providers are constructed once per language model and reused across
///   documents; loading failures surface as
///   [`ProviderUnavailable`](crate::errors::CohesionError::ProviderUnavailable).
pub trait FactsProvider: std::fmt::Debug {
    /// Parse a document into sentences with word-level facts.
    fn parse(&self, text: &str) -> Result<Vec<Sentence>>;
}

// ============================================================================
// TaxonomyProvider — hypernym/hyponym lookup
// ============================================================================

/// Lexical taxonomy lookup (e.g. WordNet).
///
/// # Contract
///
/// - **Input**: a single lemma.
/// - **Output**: the union of broader-term (hypernym) and narrower-term
///   (hyponym) lemmas across every sense of the input, normalized with
///   [`normalize_lemma`]. Unknown lemmas yield the empty set.
pub trait TaxonomyProvider {
    /// Look up all broader and narrower lemmas of `lemma`.
    fn broader_and_narrower(&self, lemma: &str) -> Result<FxHashSet<String>>;
}

// ============================================================================
// LanguageDetector — document language identification
// ============================================================================

/// Document language identification.
///
/// Returns an ISO 639-1 code, or `None` when no language can be determined.
/// Whether a detected code is *supported* is decided by the
/// [`ProviderRegistry`], not the detector.
pub trait LanguageDetector {
    /// Detect the language of `text`.
    fn detect(&self, text: &str) -> Option<String>;
}

// ============================================================================
// Blanket impls — providers behind references and smart pointers
// ============================================================================

impl<P: FactsProvider + ?Sized> FactsProvider for &P {
    fn parse(&self, text: &str) -> Result<Vec<Sentence>> {
        (**self).parse(text)
    }
}

impl<P: FactsProvider + ?Sized> FactsProvider for Box<P> {
    fn parse(&self, text: &str) -> Result<Vec<Sentence>> {
        (**self).parse(text)
    }
}

impl<P: FactsProvider + ?Sized> FactsProvider for Arc<P> {
    fn parse(&self, text: &str) -> Result<Vec<Sentence>> {
        (**self).parse(text)
    }
}

impl<P: TaxonomyProvider + ?Sized> TaxonomyProvider for &P {
    fn broader_and_narrower(&self, lemma: &str) -> Result<FxHashSet<String>> {
        (**self).broader_and_narrower(lemma)
    }
}

impl<P: TaxonomyProvider + ?Sized> TaxonomyProvider for Box<P> {
    fn broader_and_narrower(&self, lemma: &str) -> Result<FxHashSet<String>> {
        (**self).broader_and_narrower(lemma)
    }
}

impl<P: TaxonomyProvider + ?Sized> TaxonomyProvider for Arc<P> {
    fn broader_and_narrower(&self, lemma: &str) -> Result<FxHashSet<String>> {
        (**self).broader_and_narrower(lemma)
    }
}
