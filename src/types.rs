//! Core types for lexical_cohesion
//!
//! This module defines the fundamental data structures used throughout the
//! library: words and sentences as delivered by a facts provider, the word
//! pairs that form the cohesion graph's edges, exported node records, and
//! the analysis configuration.

use crate::errors::{CohesionError, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Part-of-speech tags
// ============================================================================

/// Part-of-speech tags, following the Universal POS category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Interjection,
    Numeral,
    Particle,
    Punctuation,
    Symbol,
    ProperNoun,
    Other,
}

impl PosTag {
    /// Check if this tag represents a noun (common or proper).
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Parse from a spaCy-style POS tag.
    pub fn from_spacy(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "VERB" => PosTag::Verb,
            "ADJ" => PosTag::Adjective,
            "ADV" => PosTag::Adverb,
            "PRON" => PosTag::Pronoun,
            "DET" => PosTag::Determiner,
            "ADP" => PosTag::Preposition,
            "CCONJ" | "SCONJ" => PosTag::Conjunction,
            "INTJ" => PosTag::Interjection,
            "NUM" => PosTag::Numeral,
            "PART" => PosTag::Particle,
            "PUNCT" => PosTag::Punctuation,
            "SYM" => PosTag::Symbol,
            "PROPN" => PosTag::ProperNoun,
            _ => PosTag::Other,
        }
    }

    /// Get the spaCy-style POS tag string for this enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Preposition => "ADP",
            PosTag::Conjunction => "CCONJ",
            PosTag::Interjection => "INTJ",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::ProperNoun => "PROPN",
            PosTag::Other => "X",
        }
    }
}

// Serialized as the spaCy tag string so pre-parsed documents exported from
// spaCy deserialize directly.
impl Serialize for PosTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PosTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        if tag.is_empty() {
            return Err(D::Error::custom("empty POS tag"));
        }
        Ok(PosTag::from_spacy(&tag))
    }
}

// ============================================================================
// Words and sentences
// ============================================================================

/// A word as delivered by a facts provider.
///
/// `left_deps` holds in-sentence indices of the word's syntactic left
/// dependents, in sentence order. Exactly one word per well-formed sentence
/// carries `is_root`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// The surface form (original text)
    pub text: String,
    /// The lemmatized form (normalized)
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Whether this word is the syntactic root of its sentence
    #[serde(default)]
    pub is_root: bool,
    /// Indices of syntactic left dependents within the sentence
    #[serde(default)]
    pub left_deps: Vec<usize>,
}

impl Word {
    /// Create a new word with no dependency information.
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            is_root: false,
            left_deps: Vec::new(),
        }
    }

    /// Builder method: mark this word as the sentence root.
    pub fn with_root(mut self) -> Self {
        self.is_root = true;
        self
    }

    /// Builder method: set the left-dependent indices.
    pub fn with_left_deps(mut self, left_deps: Vec<usize>) -> Self {
        self.left_deps = left_deps;
        self
    }
}

/// An ordered sequence of words, as produced by a facts provider.
///
/// Read-only to the analysis core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence index within the document
    pub index: usize,
    /// Words in sentence order
    pub words: Vec<Word>,
}

impl Sentence {
    /// Create a new sentence.
    pub fn new(index: usize, words: Vec<Word>) -> Self {
        Self { index, words }
    }

    /// Find the syntactic root, if the parse produced one.
    pub fn root(&self) -> Option<&Word> {
        self.words.iter().find(|w| w.is_root)
    }

    /// Iterate over the common and proper nouns in sentence order.
    pub fn nouns(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| w.pos.is_noun())
    }
}

// ============================================================================
// Word pairs, clusters, nodes
// ============================================================================

/// A directed relation between two lemmas — one edge of the cohesion graph.
///
/// Pairs are not de-duplicated at creation time; duplicates and self-pairs
/// can occur structurally and are filtered only where the exported counts
/// require it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    /// Source lemma
    pub source: String,
    /// Target lemma
    pub target: String,
}

impl WordPair {
    /// Create a new word pair.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Check whether both endpoints are the same lemma.
    pub fn is_self_pair(&self) -> bool {
        self.source == self.target
    }

    /// Check whether `lemma` is one of this pair's endpoints.
    pub fn contains(&self, lemma: &str) -> bool {
        self.source == lemma || self.target == lemma
    }
}

/// A group of word pairs whose lemmas are mutually reachable through shared
/// endpoints. Clusters partition the document's pair list.
pub type Cluster = Vec<WordPair>;

/// An exported graph node: one distinct lemma with its stable index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// The lemma
    pub id: String,
    /// Zero-based index, assigned in order of first appearance
    pub index: usize,
}

// ============================================================================
// Languages
// ============================================================================

/// Languages with syntactic analysis support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    German,
}

impl Language {
    /// Resolve an ISO 639-1 code, failing explicitly for unrecognized codes.
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "en" => Ok(Language::English),
            "de" => Ok(Language::German),
            _ => Err(CohesionError::UnsupportedLanguage {
                code: code.to_string(),
            }),
        }
    }

    /// The ISO 639-1 code for this language.
    pub fn as_code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for cohesion analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohesionConfig {
    /// Maximum fixed-point scans during cluster building. `None` derives the
    /// budget from the pair count (pair count squared, floor of 4).
    #[serde(default)]
    pub max_cluster_scans: Option<usize>,
    /// Minimum sentence count before relation extraction fans out across
    /// worker threads.
    pub parallel_threshold: usize,
}

impl Default for CohesionConfig {
    fn default() -> Self {
        Self {
            max_cluster_scans: None,
            parallel_threshold: 64,
        }
    }
}

impl CohesionConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_cluster_scans == Some(0) {
            return Err(CohesionError::invalid_config(
                "max_cluster_scans must be > 0 when set",
            ));
        }

        if self.parallel_threshold == 0 {
            return Err(CohesionError::invalid_config(
                "parallel_threshold must be > 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set the cluster scan budget.
    pub fn with_max_cluster_scans(mut self, max_scans: usize) -> Self {
        self.max_cluster_scans = Some(max_scans);
        self
    }

    /// Builder method: set the parallel extraction threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
