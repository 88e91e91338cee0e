//! Blueprint selection: forced restricted service, then seeded free choice
//!
//! Restricted vertices are always serviced first, front of queue, with
//! their single forced candidate — deferring them multiplies gap failures
//! downstream. Only when no restriction is pending does the scheduler draw
//! a random in-view vertex, consult the geometric referee and pick between
//! the two candidates on the gap side.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::referee::{self, CoffinSetup};
use crate::algorithm::registry::VertexRegistry;
use crate::io::error::{Result, TilingError};
use crate::spatial::prototile::{Corner, TileKind, Token};
use crate::spatial::tile::TileId;
use crate::spatial::vertex::{Occupant, Vertex, VertexId};

/// Seeded random selector for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index into a collection of `len` elements
    pub fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    /// Uniform draw from {0, 1}
    pub fn coin(&mut self) -> usize {
        self.rng.random_range(0..2_usize)
    }

    /// Uniform prototile choice for the seed tile
    pub fn seed_kind(&mut self) -> TileKind {
        if self.coin() == 0 {
            TileKind::Kite
        } else {
            TileKind::Dart
        }
    }
}

/// Everything the builder needs to construct the next tile
#[derive(Clone, Copy, Debug)]
pub struct Blueprint {
    /// Prototile of the new tile
    pub kind: TileKind,
    /// Corner of the new tile touching the scheduled vertex
    pub corner: Corner,
    /// Already-placed tile to attach against
    pub target: TileId,
    /// Corner of the target at the scheduled vertex
    pub target_corner: Corner,
    /// Attachment direction (true = clockwise end of the occupancy deque)
    pub clockwise: bool,
}

/// A blueprint plus how it was arrived at, for statistics
#[derive(Clone, Copy, Debug)]
pub struct Decision {
    /// The chosen blueprint
    pub blueprint: Blueprint,
    /// Serviced from the restricted queue (no randomness involved)
    pub forced: bool,
    /// The referee's short-side constraint redirected the free choice
    pub constrained: bool,
}

/// Select the next tile to attempt
///
/// # Errors
///
/// Returns [`TilingError::NoCandidates`] when the scheduled vertex has no
/// legal continuation on its gap side; for a correctly maintained registry
/// this indicates a logic defect, not a recoverable condition.
pub fn next_blueprint(
    registry: &VertexRegistry,
    selector: &mut RandomSelector,
    iteration: usize,
) -> Result<Decision> {
    if let Some(id) = registry.restricted_front() {
        let blueprint = blueprint_for(registry, id, 0, None, iteration)?;
        return Ok(Decision {
            blueprint,
            forced: true,
            constrained: false,
        });
    }

    let pool = registry.in_view_open();
    let id = pool
        .get(selector.index(pool.len()))
        .copied()
        .ok_or_else(|| TilingError::NoCandidates {
            iteration,
            position: [0.0; 2],
        })?;

    let setup = referee::consult(registry, id);
    let choice = selector.coin();
    let constrained = setup.on_short_side;
    let blueprint = blueprint_for(registry, id, choice, constrained.then_some(setup), iteration)?;

    Ok(Decision {
        blueprint,
        forced: false,
        constrained,
    })
}

/// Whether a short-side constraint redirects a chosen candidate
///
/// The parity is `worm XOR hot-corner XOR same-kind`: star formations
/// invert the pick, a kite target touched at `A` or `B` inverts it again,
/// and so does a candidate matching the target's prototile.
pub fn constraint_flips(setup: CoffinSetup, chosen: Token, target: Occupant) -> bool {
    let hot_corner = matches!(target.corner, Corner::A | Corner::B) && target.kind == TileKind::Kite;
    let same_kind = chosen.kind == target.kind;
    setup.worm ^ hot_corner ^ same_kind
}

/// Build the blueprint for a scheduled vertex and candidate index
///
/// The attachment side is the smaller candidate set (ties clockwise); the
/// target occupant is the deque end on that side. Under a short-side
/// constraint the candidate index flips per [`constraint_flips`].
fn blueprint_for(
    registry: &VertexRegistry,
    id: VertexId,
    choice: usize,
    coffin: Option<CoffinSetup>,
    iteration: usize,
) -> Result<Blueprint> {
    let no_candidates = |vertex: Option<&Vertex>| TilingError::NoCandidates {
        iteration,
        position: vertex.map_or([0.0; 2], Vertex::position),
    };

    let vertex = registry
        .vertex(id)
        .ok_or_else(|| no_candidates(None))?;
    let (tokens, clockwise) = vertex.candidates.gap_side();
    let target = if clockwise {
        vertex.clockwise_occupant()
    } else {
        vertex.counter_clockwise_occupant()
    }
    .ok_or_else(|| no_candidates(Some(vertex)))?;

    let mut choice = choice;
    if let Some(setup) = coffin {
        let chosen = tokens
            .get(choice)
            .ok_or_else(|| no_candidates(Some(vertex)))?;
        if constraint_flips(setup, *chosen, *target) {
            choice = (choice + 1) % 2;
        }
    }

    let token = tokens
        .get(choice)
        .ok_or_else(|| no_candidates(Some(vertex)))?;

    Ok(Blueprint {
        kind: token.kind,
        corner: token.corner,
        target: target.tile,
        target_corner: target.corner,
        clockwise,
    })
}
