//! Facts provider implementations and language dispatch.
//!
//! [`JsonFactsProvider`] consumes pre-parsed documents (spaCy-style JSON
//! exports), which is how fixtures and out-of-process parsers feed the
//! analyzer. [`ProviderRegistry`] maps a detected language to the facts
//! provider registered for it, failing explicitly when no model is
//! available.

use crate::errors::{CohesionError, Result};
use crate::nlp::{FactsProvider, LanguageDetector};
use crate::types::{Language, Sentence};
use rustc_hash::FxHashMap;
use std::sync::Arc;

// ============================================================================
// JsonFactsProvider
// ============================================================================

/// A facts provider backed by a pre-parsed document.
///
/// Holds sentences deserialized from a JSON export (an array of
/// [`Sentence`] records). `parse` ignores the raw text argument and returns
/// the stored document, so the same provider instance always describes one
/// document — construct a new one per parsed input.
#[derive(Debug, Clone)]
pub struct JsonFactsProvider {
    sentences: Vec<Sentence>,
}

impl JsonFactsProvider {
    /// Deserialize a pre-parsed document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let sentences: Vec<Sentence> = serde_json::from_str(json)?;
        Ok(Self { sentences })
    }

    /// Wrap already-constructed sentences.
    pub fn from_sentences(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Number of sentences in the stored document.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the stored document is empty.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl FactsProvider for JsonFactsProvider {
    fn parse(&self, _text: &str) -> Result<Vec<Sentence>> {
        Ok(self.sentences.clone())
    }
}

// ============================================================================
// ProviderRegistry
// ============================================================================

/// Language-keyed facts provider registry.
///
/// Owns a [`LanguageDetector`] and one provider per supported language.
/// Construct once, register the available language models, and reuse across
/// documents. Resolution fails with
/// [`UnsupportedLanguage`](CohesionError::UnsupportedLanguage) when
/// detection produces nothing, the detected code is unrecognized, or no
/// provider is registered for the detected language.
pub struct ProviderRegistry {
    detector: Box<dyn LanguageDetector + Send + Sync>,
    providers: FxHashMap<Language, Arc<dyn FactsProvider + Send + Sync>>,
}

impl ProviderRegistry {
    /// Create a registry with the given detector and no providers.
    pub fn new(detector: impl LanguageDetector + Send + Sync + 'static) -> Self {
        Self {
            detector: Box::new(detector),
            providers: FxHashMap::default(),
        }
    }

    /// Register a facts provider for a language, replacing any previous one.
    pub fn register(
        &mut self,
        language: Language,
        provider: impl FactsProvider + Send + Sync + 'static,
    ) -> &mut Self {
        self.providers.insert(language, Arc::new(provider));
        self
    }

    /// Look up the provider registered for a language.
    pub fn provider(&self, language: Language) -> Result<Arc<dyn FactsProvider + Send + Sync>> {
        self.providers
            .get(&language)
            .cloned()
            .ok_or_else(|| CohesionError::UnsupportedLanguage {
                code: language.as_code().to_string(),
            })
    }

    /// Detect the language of `text` and return its provider.
    pub fn resolve(&self, text: &str) -> Result<Arc<dyn FactsProvider + Send + Sync>> {
        let code = self
            .detector
            .detect(text)
            .ok_or_else(|| CohesionError::UnsupportedLanguage {
                code: "und".to_string(),
            })?;
        let language = Language::from_code(&code)?;
        self.provider(language)
    }
}
