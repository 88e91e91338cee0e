//! Analysis of generated patterns

/// Tile and vertex counts of a finished generation
pub mod census;
