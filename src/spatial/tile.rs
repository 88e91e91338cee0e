//! Concrete tile instances and the builder that positions them
//!
//! A [`TileInstance`] is a placed copy of a prototile: absolute corner
//! coordinates, rotation and scale, plus per-corner back-references to the
//! vertices that registration assigned. [`instantiate`] produces a tile at
//! the origin; [`place`] aligns a new tile flush against an already-placed
//! target so the two share one corner coordinate exactly.

use crate::math::angles::{normalize_degrees, polar_to_rect};
use crate::spatial::prototile::{Corner, Decoration, TileKind, decor_polar};
use crate::spatial::vertex::VertexId;

/// Stable index of a tile in the controller's arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileId(usize);

impl TileId {
    /// Wrap an arena index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The arena index this id points at
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A placed copy of a prototile with absolute geometry
#[derive(Clone, Debug)]
pub struct TileInstance {
    /// Which prototile this instance copies
    pub kind: TileKind,
    /// Rotation in degrees, normalized into `[0, 360)`
    pub rotation: f64,
    /// Edge-length scale in viewport pixels
    pub scale: f64,
    /// Decoration variant carried into output records
    pub decoration: Decoration,
    corners: [[f64; 2]; 4],
    decor: Option<[[f64; 2]; 4]>,
    vertices: [Option<VertexId>; 4],
}

impl TileInstance {
    /// Absolute coordinates of a corner
    pub const fn corner(&self, corner: Corner) -> [f64; 2] {
        match corner {
            Corner::A => self.corners[0],
            Corner::B => self.corners[1],
            Corner::C => self.corners[2],
            Corner::D => self.corners[3],
        }
    }

    /// The vertex registered at a corner, if registration reached it
    pub const fn vertex_at(&self, corner: Corner) -> Option<VertexId> {
        match corner {
            Corner::A => self.vertices[0],
            Corner::B => self.vertices[1],
            Corner::C => self.vertices[2],
            Corner::D => self.vertices[3],
        }
    }

    /// Record the vertex occupying a corner (set once during registration)
    pub const fn set_vertex(&mut self, corner: Corner, id: VertexId) {
        match corner {
            Corner::A => self.vertices[0] = Some(id),
            Corner::B => self.vertices[1] = Some(id),
            Corner::C => self.vertices[2] = Some(id),
            Corner::D => self.vertices[3] = Some(id),
        }
    }

    /// Absolute decoration anchor coordinates, when decoration is enabled
    pub const fn decor_anchors(&self) -> Option<&[[f64; 2]; 4]> {
        self.decor.as_ref()
    }

    /// Move the tile (and its anchors) by an absolute offset
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for point in &mut self.corners {
            point[0] += dx;
            point[1] += dy;
        }
        if let Some(anchors) = &mut self.decor {
            for point in anchors {
                point[0] += dx;
                point[1] += dy;
            }
        }
    }
}

/// Build a tile at the origin with the given rotation and scale
///
/// Corner coordinates follow the prototile's polar tables: corner `A` sits
/// at the origin, the others at their fixed angular offsets plus `rotation`,
/// radii multiplied by `scale`.
pub fn instantiate(
    kind: TileKind,
    rotation: f64,
    scale: f64,
    decoration: Decoration,
) -> TileInstance {
    let rotation = normalize_degrees(rotation);
    let mut corners = [[0.0; 2]; 4];
    for (slot, corner) in corners.iter_mut().zip(Corner::ALL) {
        let (degrees, radius) = kind.corner_polar(corner);
        *slot = polar_to_rect(degrees + rotation, radius * scale);
    }

    let decor = decor_polar(kind, decoration).map(|anchors| {
        anchors.map(|(degrees, radius)| polar_to_rect(degrees + rotation, radius * scale))
    });

    TileInstance {
        kind,
        rotation,
        scale,
        decoration,
        corners,
        decor,
        vertices: [None; 4],
    }
}

/// Build a tile aligned flush against a corner of an already-placed target
///
/// The contact sides are derived from the touch corners and the attachment
/// direction; rotating the new tile by
/// `target_ref − new_ref + 180 + target.rotation` brings its contact side
/// collinear with and facing the target side, after which the tile is
/// translated so the two touch corners coincide (exact to float epsilon).
pub fn place(
    kind: TileKind,
    corner: Corner,
    target: &TileInstance,
    target_corner: Corner,
    clockwise: bool,
    decoration: Decoration,
) -> TileInstance {
    let target_side = target_corner.contact_side(clockwise);
    let new_side = corner.contact_side(!clockwise);

    let rotation = normalize_degrees(
        target.kind.ref_angle(target_side) - kind.ref_angle(new_side) + 180.0 + target.rotation,
    );

    let mut tile = instantiate(kind, rotation, target.scale, decoration);
    let anchor = target.corner(target_corner);
    let touch = tile.corner(corner);
    tile.translate(anchor[0] - touch[0], anchor[1] - touch[1]);
    tile
}
