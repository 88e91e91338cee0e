//! Vertex registry: arena storage, pools, attachment walk and rollback
//!
//! The registry owns every vertex the pattern has produced. Vertices live in
//! a growable slot table; a hash index maps quantized coordinate keys to
//! slot ids, and three pools hold ids by classification:
//! - `open` — angle sum below 360, a tile can still attach
//! - `in_view` — open and classified renderable, the free-choice pool
//! - `restricted` — open with exactly one candidate on some side, a queue
//!   serviced before any free choice
//!
//! One registry serves exactly one pattern generation; independent
//! generations use independent registries.

use std::collections::{HashMap, VecDeque};

use crate::algorithm::matching;
use crate::math::quantize::{VertexKey, vertex_key};
use crate::spatial::prototile::Corner;
use crate::spatial::tile::{TileId, TileInstance};
use crate::spatial::vertex::{Occupant, Vertex, VertexId};
use crate::spatial::viewport::{RenderSignal, Viewport, Visibility};

/// Outcome of registering one tile's corners
#[derive(Clone, Copy, Debug)]
pub struct Registration {
    /// False when the gap watchdog rejected the placement
    pub succeeded: bool,
    /// Whether the tile joins the visible output set
    pub renderable: bool,
}

/// Chooses the attach direction for each corner of one tile's walk
///
/// The walk alternates direction corner to corner, with two resets: a
/// corner that closes its vertex to 360° forces the next attach clockwise,
/// and a brand-new vertex (angle sum still zero) forces the next existing
/// vertex clockwise.
struct DirectionShifter {
    shift: bool,
}

impl DirectionShifter {
    const fn new(initial_clockwise: bool) -> Self {
        Self {
            shift: !initial_clockwise,
        }
    }

    const fn next(&mut self, corner_angle: u16, angle_sum: u16) -> bool {
        if corner_angle + angle_sum == 360 {
            self.shift = true;
        } else if angle_sum > 0 {
            self.shift = !self.shift;
        } else {
            self.shift = false;
        }
        self.shift
    }
}

/// Owner of all vertex state for one pattern generation
pub struct VertexRegistry {
    slots: Vec<Option<Vertex>>,
    free: Vec<usize>,
    index: HashMap<VertexKey, VertexId>,
    open: Vec<VertexId>,
    in_view: Vec<VertexId>,
    restricted: VecDeque<VertexId>,
    viewport: Viewport,
    scale: f64,
    quantization_step: f64,
}

impl VertexRegistry {
    /// Create an empty registry for a viewport, tile scale and grid step
    pub fn new(viewport: Viewport, scale: f64, quantization_step: f64) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            open: Vec::new(),
            in_view: Vec::new(),
            restricted: VecDeque::new(),
            viewport,
            scale,
            quantization_step,
        }
    }

    /// The vertex stored at an id, if the slot is live
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Ids of all open vertices, in discovery order
    pub fn open(&self) -> &[VertexId] {
        &self.open
    }

    /// Ids of the free-choice pool (open and renderable)
    pub fn in_view_open(&self) -> &[VertexId] {
        &self.in_view
    }

    /// The next restricted vertex to service, if any
    pub fn restricted_front(&self) -> Option<VertexId> {
        self.restricted.front().copied()
    }

    /// Number of restricted vertices awaiting service
    pub fn restricted_len(&self) -> usize {
        self.restricted.len()
    }

    /// Number of live vertices (open and closed)
    pub const fn vertex_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Tile scale this registry was built for
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// The viewport this registry classifies against
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Find the vertex at a point, or create an open one
    pub fn lookup_or_create(&mut self, point: [f64; 2]) -> VertexId {
        let key = vertex_key(point, self.quantization_step);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }

        let slot = self.free.pop().unwrap_or_else(|| {
            self.slots.push(None);
            self.slots.len() - 1
        });
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = Some(Vertex::new(point));
        }

        let id = VertexId::new(slot);
        self.index.insert(key, id);
        self.open.push(id);
        id
    }

    /// Register a tile: resolve, attach and reclassify all four corners
    ///
    /// Walks the corners in prototile order starting at the touch corner,
    /// attaching the first in the blueprint's direction and the rest per the
    /// direction shifter. The gap watchdog counts corners landing on
    /// pre-existing vertices that do not close: a flush attachment along a
    /// continuous boundary produces exactly two; a third means the tile
    /// seals a hole it does not fit, and registration fails mid-walk with
    /// the already-attached corners left for [`Self::release_tile`].
    pub fn register_tile(
        &mut self,
        tile_id: TileId,
        tile: &mut TileInstance,
        touch_corner: Corner,
        clockwise: bool,
    ) -> Registration {
        let mut shifter = DirectionShifter::new(clockwise);
        let mut signal = RenderSignal::new();
        let mut watchdog = 0;
        let mut corner = touch_corner;

        while tile.vertex_at(corner).is_none() {
            let id = self.lookup_or_create(tile.corner(corner));

            let corner_angle = tile.kind.interior_angle(corner);
            let angle_sum = self.vertex(id).map_or(0, Vertex::angle_sum);
            let attach_clockwise = shifter.next(corner_angle, angle_sum);

            if let Some(vertex) = self.vertex_mut(id) {
                vertex.attach(
                    Occupant {
                        tile: tile_id,
                        kind: tile.kind,
                        corner,
                    },
                    attach_clockwise,
                );
            }
            tile.set_vertex(corner, id);
            self.organize(id);

            if let Some(vertex) = self.vertex(id) {
                signal.observe(vertex.visibility.unwrap_or(Visibility::WeakSkip));
                if vertex.occupancy.len() > 1 && !vertex.is_closed() {
                    watchdog += 1;
                    if watchdog > 2 {
                        return Registration {
                            succeeded: false,
                            renderable: false,
                        };
                    }
                }
            }

            corner = corner.next();
        }

        Registration {
            succeeded: true,
            renderable: signal.allows_render(),
        }
    }

    /// Roll back a rejected tile's corners
    ///
    /// Every vertex the tile touched is audited in prototile order: a vertex
    /// whose only occupant is the failed tile is deleted outright; a vertex
    /// closed at 360° re-enters the open pools before its occupant entry is
    /// detached; all surviving vertices are reorganized. The registry ends
    /// in the exact state it had before the registration attempt.
    pub fn release_tile(&mut self, tile_id: TileId, tile: &TileInstance) {
        for corner in Corner::ALL {
            if let Some(id) = tile.vertex_at(corner) {
                self.redefine(id, tile_id);
            }
        }
    }

    fn redefine(&mut self, id: VertexId, tile_id: TileId) {
        let Some((occupants, closed, in_view)) = self.vertex(id).map(|vertex| {
            (
                vertex.occupancy.len(),
                vertex.is_closed(),
                vertex.visibility.is_some_and(Visibility::in_view),
            )
        }) else {
            return;
        };

        if occupants == 1 {
            self.remove_vertex(id);
            return;
        }

        // Detaching from a closed vertex reopens it.
        if closed {
            self.open.push(id);
            if in_view {
                self.in_view.push(id);
            }
        }

        if let Some(vertex) = self.vertex_mut(id) {
            vertex.detach(tile_id);
        }
        self.organize(id);
    }

    fn remove_vertex(&mut self, id: VertexId) {
        let Some(vertex) = self.vertex(id) else {
            return;
        };
        let key = vertex_key(vertex.position(), self.quantization_step);
        let in_view = vertex.visibility.is_some_and(Visibility::in_view);

        self.index.remove(&key);
        self.open.retain(|&entry| entry != id);
        if in_view {
            self.in_view.retain(|&entry| entry != id);
        }
        self.restricted.retain(|&entry| entry != id);

        if let Some(slot) = self.slots.get_mut(id.index()) {
            *slot = None;
            self.free.push(id.index());
        }
    }

    /// Reclassify one vertex after an attach or detach
    ///
    /// Grants visibility (and in-view membership) on first sight, drops the
    /// vertex from the restricted queue, then either retires it when closed
    /// or recomputes its candidates; a vertex whose recomputed candidates
    /// restrict re-enters the queue at the back, so every restricted vertex
    /// is serviced exactly once per cycle.
    pub fn organize(&mut self, id: VertexId) {
        let Some((position, visibility)) = self
            .vertex(id)
            .map(|vertex| (vertex.position(), vertex.visibility))
        else {
            return;
        };

        let visibility = visibility.unwrap_or_else(|| {
            let classified = self.viewport.classify(position);
            if classified.in_view() {
                self.in_view.push(id);
            }
            if let Some(vertex) = self.vertex_mut(id) {
                vertex.visibility = Some(classified);
            }
            classified
        });

        if let Some(queued) = self.restricted.iter().position(|&entry| entry == id) {
            self.restricted.remove(queued);
        }

        let Some(closed) = self.vertex(id).map(Vertex::is_closed) else {
            return;
        };

        if closed {
            self.open.retain(|&entry| entry != id);
            if visibility.in_view() {
                self.in_view.retain(|&entry| entry != id);
            }
            if let Some(vertex) = self.vertex_mut(id) {
                vertex.candidates.clear();
            }
            return;
        }

        let tokens = self.vertex(id).map(Vertex::tokens).unwrap_or_default();
        let candidates = matching::classify(&tokens);
        if candidates.restricts() {
            self.restricted.push_back(id);
        }
        if let Some(vertex) = self.vertex_mut(id) {
            vertex.candidates = candidates;
        }
    }
}
