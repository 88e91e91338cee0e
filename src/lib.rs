//! Growth-based generator for Penrose P2 kite/dart tile patterns
//!
//! Patterns grow tile by tile from a random seed: each iteration picks an
//! open vertex, matches its occupancy against the seven legal vertex
//! configurations and attaches one candidate tile flush against the
//! boundary, rolling back any placement that would seal an unfillable gap.
//! Growth stops once every vertex near the viewport is fully surrounded.

#![forbid(unsafe_code)]

/// Core growth algorithm: matching, scheduling, registration and the engine
pub mod algorithm;
/// Census reporting over generated patterns
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for angles and coordinate quantization
pub mod math;
/// Prototile tables, tile instances, vertices and viewport classification
pub mod spatial;

pub use algorithm::executor::{CancelToken, GenerationSettings, GrowthEngine};
pub use io::error::{Result, TilingError};
