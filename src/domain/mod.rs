//! Domain layer for the Java review trainer
//!
//! CDD Principle: Domain Model - taxonomies, selections and problem sets
//! - Independent of file discovery, terminal output and the CLI
//! - Expresses the language of error categories, known problems and reviews

pub mod error;
pub mod params;
pub mod taxonomy;

// Re-export main domain types for convenience
pub use error::*;
pub use params::*;
pub use taxonomy::*;
