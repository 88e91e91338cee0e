//! Growth loop controller driving scheduler, builder and registry
//!
//! One [`GrowthEngine`] owns everything a single pattern generation needs:
//! the tile arena, the vertex registry, the seeded selector and the
//! statistics. Each iteration schedules a blueprint, builds the tile flush
//! against its target and registers its corners; a gap rejection rolls the
//! attempt back without a trace, a success appends the tile to the visible
//! output when its render signal allows.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::algorithm::registry::{VertexRegistry, Registration};
use crate::algorithm::scheduler::{self, RandomSelector};
use crate::io::configuration::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_QUANTIZATION_STEP, DEFAULT_SEED, DEFAULT_TILE_SCALE,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, MIN_TILE_SCALE,
};
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::prototile::{Corner, Decoration};
use crate::spatial::tile::{self, TileId, TileInstance};
use crate::spatial::vertex::Vertex;
use crate::spatial::viewport::Viewport;

/// Validated inputs of one pattern generation
#[derive(Clone, Copy, Debug)]
pub struct GenerationSettings {
    /// Viewport width in pixels
    pub width: f64,
    /// Viewport height in pixels
    pub height: f64,
    /// Tile edge length in pixels
    pub scale: f64,
    /// Initial rotation in degrees (any integer, normalized)
    pub rotation: i32,
    /// Decoration carried into output records
    pub decoration: Decoration,
    /// Seed for all stochastic choices
    pub seed: u64,
    /// Iteration cap bounding worst-case latency
    pub max_iterations: usize,
    /// Vertex identity grid step in pixels
    pub quantization_step: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
            scale: DEFAULT_TILE_SCALE,
            rotation: 0,
            decoration: Decoration::None,
            seed: DEFAULT_SEED,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            quantization_step: DEFAULT_QUANTIZATION_STEP,
        }
    }
}

impl GenerationSettings {
    fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &"viewport width must be a positive number",
            ));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(invalid_parameter(
                "height",
                &self.height,
                &"viewport height must be a positive number",
            ));
        }
        if !(self.scale.is_finite() && self.scale >= MIN_TILE_SCALE) {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &format!("tile scale must be at least {MIN_TILE_SCALE} pixels"),
            ));
        }
        if !(self.quantization_step.is_finite() && self.quantization_step > 0.0) {
            return Err(invalid_parameter(
                "quantization_step",
                &self.quantization_step,
                &"grid step must be a positive number",
            ));
        }
        // The grid must not merge genuinely distinct vertices: the closest
        // pair in a P2 tiling sits scale/φ² apart.
        let min_vertex_distance = self.scale / (crate::spatial::prototile::PHI.powi(2));
        if self.quantization_step >= min_vertex_distance {
            return Err(invalid_parameter(
                "quantization_step",
                &self.quantization_step,
                &format!(
                    "grid step must stay below the minimum inter-vertex distance {min_vertex_distance:.2} at scale {}",
                    self.scale
                ),
            ));
        }
        if self.max_iterations == 0 {
            return Err(invalid_parameter(
                "max_iterations",
                &self.max_iterations,
                &"iteration cap must be positive",
            ));
        }
        Ok(())
    }
}

/// Cooperative cancellation signal checked once per iteration
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create an unset token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the generation to stop after the current tile
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Counters accumulated across one generation
#[derive(Clone, Copy, Debug, Default)]
pub struct GrowthStats {
    /// Scheduler iterations run (excluding the seed placement)
    pub iterations: usize,
    /// Tiles registered successfully (visible or not)
    pub committed_tiles: usize,
    /// Tiles rejected by the gap watchdog and rolled back
    pub rejected_tiles: usize,
    /// Placements serviced from the restricted queue
    pub forced_placements: usize,
    /// Free choices redirected by the referee's short-side constraint
    pub referee_constraints: usize,
}

/// Why a generation stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// No in-view open vertex remained; the viewport is covered
    Exhausted,
    /// The iteration cap fired first
    Capped,
    /// The cancel token fired first
    Cancelled,
}

/// Result summary of a driven generation
#[derive(Clone, Copy, Debug)]
pub struct GrowthSummary {
    /// Why the run stopped
    pub completion: Completion,
    /// Tiles in the visible output set
    pub visible_tiles: usize,
    /// Accumulated counters
    pub stats: GrowthStats,
}

/// The growth engine for one pattern generation
pub struct GrowthEngine {
    settings: GenerationSettings,
    registry: VertexRegistry,
    tiles: Vec<TileInstance>,
    visible: Vec<TileId>,
    selector: RandomSelector,
    stats: GrowthStats,
}

impl GrowthEngine {
    /// Create an engine and place the seed tile
    ///
    /// The seed prototile is drawn uniformly at random and dropped at a
    /// uniformly random integer position inside the viewport; it joins the
    /// output set unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::InvalidParameter`] when the settings fail
    /// validation.
    pub fn new(settings: GenerationSettings) -> Result<Self> {
        settings.validate()?;

        let viewport = Viewport::new(settings.width, settings.height, settings.scale);
        let registry = VertexRegistry::new(viewport, settings.scale, settings.quantization_step);
        let mut selector = RandomSelector::new(settings.seed);

        let kind = selector.seed_kind();
        let x = selector.index(settings.width as usize + 1) as f64;
        let y = selector.index(settings.height as usize + 1) as f64;

        let mut seed_tile = tile::instantiate(
            kind,
            f64::from(settings.rotation),
            settings.scale,
            settings.decoration,
        );
        seed_tile.translate(x, y);

        let mut engine = Self {
            settings,
            registry,
            tiles: Vec::new(),
            visible: Vec::new(),
            selector,
            stats: GrowthStats::default(),
        };

        let seed_id = TileId::new(0);
        engine.tiles.push(seed_tile);
        if let Some(tile) = engine.tiles.last_mut() {
            // All four seed vertices are brand new; registration cannot gap.
            engine
                .registry
                .register_tile(seed_id, tile, Corner::A, true);
        }
        engine.stats.committed_tiles += 1;
        engine.visible.push(seed_id);

        Ok(engine)
    }

    /// Run one growth iteration
    ///
    /// Returns `Ok(false)` once no in-view open vertex remains. A gap
    /// rejection still returns `Ok(true)`: the attempt was rolled back and
    /// the next iteration proceeds with a different blueprint.
    ///
    /// # Errors
    ///
    /// Returns an error if the scheduler finds no candidates for a
    /// scheduled vertex or a committed vertex exhausts the rule table —
    /// both logic defects, not recoverable conditions.
    pub fn run_iteration(&mut self) -> Result<bool> {
        if self.registry.in_view_open().is_empty() {
            return Ok(false);
        }

        self.stats.iterations += 1;
        let decision =
            scheduler::next_blueprint(&self.registry, &mut self.selector, self.stats.iterations)?;
        if decision.forced {
            self.stats.forced_placements += 1;
        }
        if decision.constrained {
            self.stats.referee_constraints += 1;
        }

        let blueprint = decision.blueprint;
        let target = self
            .tiles
            .get(blueprint.target.index())
            .ok_or_else(|| TilingError::NoCandidates {
                iteration: self.stats.iterations,
                position: [0.0; 2],
            })?;

        let new_tile = tile::place(
            blueprint.kind,
            blueprint.corner,
            target,
            blueprint.target_corner,
            blueprint.clockwise,
            self.settings.decoration,
        );

        let id = TileId::new(self.tiles.len());
        self.tiles.push(new_tile);

        let registration = self.tiles.last_mut().map_or(
            Registration {
                succeeded: false,
                renderable: false,
            },
            |tile| {
                self.registry
                    .register_tile(id, tile, blueprint.corner, blueprint.clockwise)
            },
        );

        if !registration.succeeded {
            if let Some(rejected) = self.tiles.pop() {
                self.registry.release_tile(id, &rejected);
            }
            self.stats.rejected_tiles += 1;
            return Ok(true);
        }

        self.assert_matchable(id)?;

        self.stats.committed_tiles += 1;
        if registration.renderable {
            self.visible.push(id);
        }
        Ok(true)
    }

    /// Drive the loop to completion, cap or cancellation
    ///
    /// # Errors
    ///
    /// Propagates any [`Self::run_iteration`] error.
    pub fn generate(&mut self, cancel: &CancelToken) -> Result<GrowthSummary> {
        let completion = loop {
            if cancel.is_cancelled() {
                break Completion::Cancelled;
            }
            if self.stats.iterations >= self.settings.max_iterations {
                break Completion::Capped;
            }
            if !self.run_iteration()? {
                break Completion::Exhausted;
            }
        };

        Ok(GrowthSummary {
            completion,
            visible_tiles: self.visible.len(),
            stats: self.stats,
        })
    }

    /// Rule-table exhaustion check on a freshly committed tile's vertices
    ///
    /// An open vertex whose occupancy matches no rule window can never be
    /// extended; after a successful registration that is a corrupted
    /// occupancy ordering or a missing rule, never a recoverable state.
    fn assert_matchable(&self, id: TileId) -> Result<()> {
        let Some(tile) = self.tiles.get(id.index()) else {
            return Ok(());
        };
        for corner in Corner::ALL {
            let Some(vertex) = tile.vertex_at(corner).and_then(|v| self.registry.vertex(v))
            else {
                continue;
            };
            if !vertex.is_closed() && vertex.candidates.is_empty() {
                return Err(TilingError::RuleExhaustion {
                    iteration: self.stats.iterations,
                    occupancy: occupancy_text(vertex),
                });
            }
        }
        Ok(())
    }

    /// The settings this engine was created with
    pub const fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// The vertex registry (read access for census and tests)
    pub const fn registry(&self) -> &VertexRegistry {
        &self.registry
    }

    /// Accumulated counters
    pub const fn stats(&self) -> &GrowthStats {
        &self.stats
    }

    /// A committed tile by id
    pub fn tile(&self, id: TileId) -> Option<&TileInstance> {
        self.tiles.get(id.index())
    }

    /// Number of tiles in the visible output set
    pub const fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// The visible output tiles, in placement order
    pub fn visible_tiles(&self) -> impl Iterator<Item = &TileInstance> {
        self.visible
            .iter()
            .filter_map(|id| self.tiles.get(id.index()))
    }
}

fn occupancy_text(vertex: &Vertex) -> String {
    vertex
        .tokens()
        .iter()
        .map(|token| format!("{} {}", token.kind.name(), token.corner.label()))
        .collect::<Vec<_>>()
        .join(", ")
}
