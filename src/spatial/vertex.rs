//! Vertex state: occupancy, angle sum, cached classifications
//!
//! A vertex is a point where tile corners meet. Its occupancy is a circular
//! clockwise list with a single discontinuity (the gap where further tiles
//! may still attach), kept as a deque: clockwise attachments push the front,
//! counter-clockwise the back. The angle sum tracks occupation; 360° closes
//! the vertex.

use std::collections::VecDeque;

use crate::spatial::prototile::{Corner, TileKind, Token};
use crate::spatial::tile::TileId;
use crate::spatial::viewport::Visibility;

/// Stable index of a vertex slot in the registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Wrap a slot index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The slot index this id points at
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One tile corner occupying a vertex
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupant {
    /// The occupying tile
    pub tile: TileId,
    /// Its prototile kind (denormalized so matching never needs the arena)
    pub kind: TileKind,
    /// Which of its corners touches the vertex
    pub corner: Corner,
}

impl Occupant {
    /// The occupant as a rule-sequence token
    pub const fn token(&self) -> Token {
        Token {
            kind: self.kind,
            corner: self.corner,
        }
    }
}

/// Legal next tiles on each side of a vertex's gap
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet {
    /// Candidates extending the deque-front (clockwise) end
    pub clockwise: Vec<Token>,
    /// Candidates extending the deque-back (counter-clockwise) end
    pub counter_clockwise: Vec<Token>,
}

impl CandidateSet {
    /// Drop all candidates (vertex closed or rule-exhausted)
    pub fn clear(&mut self) {
        self.clockwise.clear();
        self.counter_clockwise.clear();
    }

    /// True when no tile can legally attach on either side
    pub const fn is_empty(&self) -> bool {
        self.clockwise.is_empty() && self.counter_clockwise.is_empty()
    }

    /// True when either side has exactly one legal continuation
    ///
    /// Such a vertex must be serviced before any free choice: deferring a
    /// forced placement multiplies the odds of topologically inconsistent
    /// placements downstream.
    pub const fn restricts(&self) -> bool {
        self.clockwise.len() == 1 || self.counter_clockwise.len() == 1
    }

    /// The side to attach on: the smaller candidate set, ties clockwise
    ///
    /// Returns the chosen side's candidates and whether it is the clockwise
    /// side.
    pub fn gap_side(&self) -> (&[Token], bool) {
        if self.clockwise.len() > self.counter_clockwise.len() {
            (&self.counter_clockwise, false)
        } else {
            (&self.clockwise, true)
        }
    }
}

/// A point where tile corners meet, with its circular occupancy
#[derive(Clone, Debug)]
pub struct Vertex {
    position: [f64; 2],
    angle_sum: u16,
    /// Occupants in clockwise order, deque front = clockwise end
    pub occupancy: VecDeque<Occupant>,
    /// Render classification, computed once on first organization
    pub visibility: Option<Visibility>,
    /// Currently-legal continuations on each side of the gap
    pub candidates: CandidateSet,
}

impl Vertex {
    /// Create an empty open vertex at a position
    pub fn new(position: [f64; 2]) -> Self {
        Self {
            position,
            angle_sum: 0,
            occupancy: VecDeque::new(),
            visibility: None,
            candidates: CandidateSet::default(),
        }
    }

    /// Absolute position of the vertex
    pub const fn position(&self) -> [f64; 2] {
        self.position
    }

    /// Sum of attached corners' interior angles, in degrees
    pub const fn angle_sum(&self) -> u16 {
        self.angle_sum
    }

    /// True when the vertex is fully surrounded (360°)
    pub const fn is_closed(&self) -> bool {
        self.angle_sum == 360
    }

    /// Insert an occupant at the clockwise (front) or counter-clockwise
    /// (back) end and grow the angle sum
    pub fn attach(&mut self, occupant: Occupant, clockwise: bool) {
        self.angle_sum += occupant.kind.interior_angle(occupant.corner);
        if clockwise {
            self.occupancy.push_front(occupant);
        } else {
            self.occupancy.push_back(occupant);
        }
    }

    /// Remove a tile's occupant entry and shrink the angle sum
    ///
    /// During rollback the entry is always at the deque front or back; the
    /// linear scan is for robustness, not performance.
    pub fn detach(&mut self, tile: TileId) -> Option<Occupant> {
        let index = self.occupancy.iter().position(|entry| entry.tile == tile)?;
        let occupant = self.occupancy.remove(index)?;
        self.angle_sum -= occupant.kind.interior_angle(occupant.corner);
        Some(occupant)
    }

    /// The occupant at the clockwise end of the deque
    pub fn clockwise_occupant(&self) -> Option<&Occupant> {
        self.occupancy.front()
    }

    /// The occupant at the counter-clockwise end of the deque
    pub fn counter_clockwise_occupant(&self) -> Option<&Occupant> {
        self.occupancy.back()
    }

    /// Occupancy serialized front-to-back as rule-sequence tokens
    pub fn tokens(&self) -> Vec<Token> {
        self.occupancy.iter().map(Occupant::token).collect()
    }

    /// True for the two-kite sun/star corner signature
    ///
    /// All occupants kites, the clockwise-end occupant touching with `C` or
    /// `B`, every later occupant with `D`. Together with 72°-sum vertices
    /// these are the corner points of the boundary shapes the geometric
    /// referee classifies.
    pub fn is_sun_star_corner(&self) -> bool {
        !self.occupancy.is_empty()
            && self.occupancy.iter().enumerate().all(|(i, entry)| {
                entry.kind == TileKind::Kite
                    && if i == 0 {
                        matches!(entry.corner, Corner::C | Corner::B)
                    } else {
                        entry.corner == Corner::D
                    }
            })
    }
}
