//! Analysis pipeline
//!
//! Orchestrates the fixed stage sequence (parse, extract relations, build
//! clusters, assemble report) and defines the exported result structure.

pub mod analyzer;
pub mod report;

pub use analyzer::{analyze_with_registry, CohesionAnalyzer};
pub use report::CohesionData;
