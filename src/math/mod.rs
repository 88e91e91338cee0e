//! Mathematical utilities for the growth engine

/// Degree-based angle conversions and polar coordinates
pub mod angles;
/// Coordinate quantization for stable vertex identity
pub mod quantize;
