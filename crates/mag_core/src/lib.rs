//! mag_core: Core utilities for the Mag front end.
//!
//! Provides text spans and line maps used throughout the pipeline for source
//! location tracking.

pub mod text;

// Re-export commonly used types
pub use text::{LineAndColumn, LineMap, TextRange, TextSpan};
