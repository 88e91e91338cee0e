//! Tile and vertex counts of a finished generation

use std::fmt;

use crate::algorithm::executor::{GrowthEngine, GrowthStats};
use crate::spatial::prototile::TileKind;

/// Aggregate counts describing a generated pattern
///
/// The kite/dart ratio is the standard sanity check: over a growing region
/// of any legal pattern it converges on the golden ratio, so a ratio far
/// from ~1.618 on a large run points at a matching or scheduling defect.
#[derive(Clone, Copy, Debug)]
pub struct PatternCensus {
    /// Kites in the visible output set
    pub kites: usize,
    /// Darts in the visible output set
    pub darts: usize,
    /// Kites per dart, `None` while no dart is visible
    pub kite_dart_ratio: Option<f64>,
    /// Live vertices, open and closed
    pub vertices: usize,
    /// Vertices still accepting tiles
    pub open_vertices: usize,
    /// Closed (fully surrounded) vertices
    pub closed_vertices: usize,
    /// Open vertices in the free-choice pool
    pub in_view_vertices: usize,
    /// Restricted vertices awaiting forced service
    pub restricted_vertices: usize,
    /// Growth counters accumulated by the engine
    pub stats: GrowthStats,
}

impl PatternCensus {
    /// Count the engine's visible tiles and registry pools
    pub fn collect(engine: &GrowthEngine) -> Self {
        let mut kites = 0;
        let mut darts = 0;
        for tile in engine.visible_tiles() {
            match tile.kind {
                TileKind::Kite => kites += 1,
                TileKind::Dart => darts += 1,
            }
        }

        let registry = engine.registry();
        let vertices = registry.vertex_count();
        let open_vertices = registry.open().len();

        Self {
            kites,
            darts,
            kite_dart_ratio: (darts > 0).then(|| kites as f64 / darts as f64),
            vertices,
            open_vertices,
            closed_vertices: vertices.saturating_sub(open_vertices),
            in_view_vertices: registry.in_view_open().len(),
            restricted_vertices: registry.restricted_len(),
            stats: *engine.stats(),
        }
    }
}

impl fmt::Display for PatternCensus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pattern census")?;
        writeln!(f, "  kites:      {}", self.kites)?;
        writeln!(f, "  darts:      {}", self.darts)?;
        match self.kite_dart_ratio {
            Some(ratio) => writeln!(f, "  kite/dart:  {ratio:.4}")?,
            None => writeln!(f, "  kite/dart:  n/a")?,
        }
        writeln!(
            f,
            "  vertices:   {} ({} open, {} closed)",
            self.vertices, self.open_vertices, self.closed_vertices
        )?;
        writeln!(
            f,
            "  pools:      {} in view, {} restricted",
            self.in_view_vertices, self.restricted_vertices
        )?;
        writeln!(
            f,
            "  iterations: {} ({} committed, {} rejected)",
            self.stats.iterations, self.stats.committed_tiles, self.stats.rejected_tiles
        )?;
        write!(
            f,
            "  scheduling: {} forced, {} referee-constrained",
            self.stats.forced_placements, self.stats.referee_constraints
        )
    }
}
