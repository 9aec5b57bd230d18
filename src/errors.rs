//! Error types for cohesion analysis.

use thiserror::Error;

/// Result type alias for cohesion analysis operations.
pub type Result<T> = std::result::Result<T, CohesionError>;

/// Errors that can occur while analyzing a document.
#[derive(Error, Debug)]
pub enum CohesionError {
    /// No facts provider is available for the detected language.
    #[error("no facts provider available for language \"{code}\"")]
    UnsupportedLanguage { code: String },

    /// A sentence has no detectable syntactic root. Recovered locally by
    /// skipping the sentence's within-sentence pairs.
    #[error("sentence {index} has no syntactic root")]
    MalformedSentence { index: usize },

    /// A facts or taxonomy provider could not be reached or loaded.
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Cluster expansion exceeded its scan budget.
    #[error("cluster expansion exceeded {max_scans} scans over {pair_count} word pairs")]
    ResourceExhaustion { pair_count: usize, max_scans: usize },

    /// Invalid analysis configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Pre-parsed document input could not be deserialized.
    #[error("malformed facts input: {0}")]
    InvalidFacts(#[from] serde_json::Error),
}

impl CohesionError {
    /// Create an `InvalidConfig` error from any message.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        CohesionError::InvalidConfig(msg.into())
    }

    /// Create a `ProviderUnavailable` error from any message.
    pub fn provider_unavailable(msg: impl Into<String>) -> Self {
        CohesionError::ProviderUnavailable(msg.into())
    }
}
