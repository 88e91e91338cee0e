//! Coordinate quantization for stable vertex identity
//!
//! Tile corners computed through different rotation/translation chains land
//! on the same geometric point with floating-point jitter (15.49999… vs
//! 15.5). Identity therefore goes through a two-stage rounding: first to two
//! decimals to strip the jitter, then to the nearest grid step. The step is
//! a parameter validated against the target scale range rather than a fixed
//! constant, because the minimum true inter-vertex distance shrinks with the
//! tile scale.

/// Quantize one coordinate to its grid step index
pub fn quantize(value: f64, step: f64) -> i64 {
    let adjusted = (value * 100.0).round() / 100.0;
    (adjusted / step).round() as i64
}

/// Hashable identity of a vertex position on the quantization lattice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexKey([i64; 2]);

/// Derive the lattice key for a point
pub fn vertex_key(point: [f64; 2], step: f64) -> VertexKey {
    VertexKey([quantize(point[0], step), quantize(point[1], step)])
}
