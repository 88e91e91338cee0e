//! Spatial data structures of the tiling
//!
//! This module contains the geometry-carrying types:
//! - Fixed prototile tables (angles, side references, vertex rules)
//! - Concrete tile instances and the builder that positions them
//! - Vertices where tile corners meet
//! - Viewport classification for render decisions

/// Fixed geometry of the two Penrose P2 prototiles
pub mod prototile;
/// Concrete tile instances and the builder that positions them
pub mod tile;
/// Vertex state: occupancy, angle sum, cached classifications
pub mod vertex;
/// Viewport geometry and render classification
pub mod viewport;

pub use prototile::TileKind;
