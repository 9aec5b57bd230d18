//! Lexical cohesion graph analysis.
//!
//! Builds a "lexical cohesion graph" for a document: nouns and proper nouns
//! that are syntactically or taxonomically linked — subject–noun pairs
//! within a sentence, noun combinations where no nominal subject exists,
//! and hypernym/hyponym bridges between consecutive sentences — grouped
//! into connected clusters and exported as a graph structure (nodes, links,
//! clusters, summary counts) for visualization or cohesion scoring.
//!
//! Sentence splitting, lemmatization, POS tagging, dependency parsing, and
//! taxonomy lookup are *not* performed here. They are consumed through the
//! [`FactsProvider`] and [`TaxonomyProvider`] seams in [`nlp`], so any
//! parser export (e.g. spaCy JSON via [`JsonFactsProvider`]) and any
//! taxonomy backend (e.g. a WordNet table via [`StaticTaxonomy`]) plug in
//! without touching the core.
//!
//! # Example
//!
//! ```
//! use lexical_cohesion::{
//!     CohesionAnalyzer, JsonFactsProvider, PosTag, Sentence, StaticTaxonomy, Word,
//! };
//!
//! // One pre-parsed sentence: "John bought a car."
//! let facts = JsonFactsProvider::from_sentences(vec![Sentence::new(
//!     0,
//!     vec![
//!         Word::new("John", "John", PosTag::ProperNoun),
//!         Word::new("bought", "buy", PosTag::Verb)
//!             .with_root()
//!             .with_left_deps(vec![0]),
//!         Word::new("a", "a", PosTag::Determiner),
//!         Word::new("car", "car", PosTag::Noun),
//!     ],
//! )]);
//!
//! let analyzer = CohesionAnalyzer::new(facts, StaticTaxonomy::new());
//! let data = analyzer.analyze("John bought a car.").unwrap();
//!
//! assert_eq!(data.num_sentences, 1);
//! assert_eq!(data.links.len(), 1);
//! assert_eq!(data.links[0].source, "John");
//! assert_eq!(data.links[0].target, "car");
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pipeline;
pub mod types;

pub use errors::{CohesionError, Result};
pub use graph::{ClusterBuilder, RelationExtractor};
pub use nlp::{
    normalize_lemma, FactsProvider, JsonFactsProvider, LanguageDetector, ProviderRegistry,
    StaticTaxonomy, TaxonomyProvider,
};
pub use pipeline::{analyze_with_registry, CohesionAnalyzer, CohesionData};
pub use types::{
    Cluster, CohesionConfig, GraphNode, Language, PosTag, Sentence, Word, WordPair,
};
