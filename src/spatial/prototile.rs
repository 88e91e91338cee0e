//! Fixed geometry of the two Penrose P2 prototiles
//!
//! Everything here is immutable data: the kite and dart differ only in their
//! angle tables and one corner radius, so the prototiles are a tagged enum
//! indexing constant tables rather than a trait hierarchy. Corners are
//! labeled `A..D` counter-clockwise, sides `a..d` where side `x` leaves
//! corner `X`; side reference angles are measured against the x axis at
//! rotation zero.

/// The golden ratio, `(1 + √5) / 2`
pub const PHI: f64 = 1.618_033_988_749_895;

/// One corner of a quadrilateral prototile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// The origin corner; every tile is positioned relative to it
    A,
    /// Corner at polar angle 0° from `A`
    B,
    /// Corner at polar angle 36° from `A`
    C,
    /// Corner at polar angle 72° from `A`
    D,
}

impl Corner {
    /// All corners in counter-clockwise prototile order
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// The next corner in prototile order (wraps `D` to `A`)
    pub const fn next(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::C,
            Self::C => Self::D,
            Self::D => Self::A,
        }
    }

    /// The previous corner in prototile order (wraps `A` to `D`)
    pub const fn previous(self) -> Self {
        match self {
            Self::A => Self::D,
            Self::B => Self::A,
            Self::C => Self::B,
            Self::D => Self::C,
        }
    }

    /// The side adjoining this corner in the given attachment direction
    ///
    /// Each corner connects two sides. A clockwise attachment runs along the
    /// side arriving at the corner (the previous corner's letter), a
    /// counter-clockwise attachment along the side leaving it.
    pub const fn contact_side(self, clockwise: bool) -> Side {
        if clockwise {
            self.previous().own_side()
        } else {
            self.own_side()
        }
    }

    /// Uppercase label used in reports and error messages
    pub const fn label(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }

    const fn own_side(self) -> Side {
        match self {
            Self::A => Side::A,
            Self::B => Side::B,
            Self::C => Side::C,
            Self::D => Side::D,
        }
    }
}

/// One side of a quadrilateral prototile; side `x` leaves corner `X`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Side from corner `A` to corner `B`
    A,
    /// Side from corner `B` to corner `C`
    B,
    /// Side from corner `C` to corner `D`
    C,
    /// Side from corner `D` to corner `A`
    D,
}

/// The two golden-ratio prototiles of the P2 tiling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// The convex quadrilateral (interior angles 72/72/144/72)
    Kite,
    /// The concave quadrilateral (interior angles 72/36/216/36)
    Dart,
}

impl TileKind {
    /// Lowercase prototile name as used in occupancy token text
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kite => "kite",
            Self::Dart => "dart",
        }
    }

    /// Interior angle at a corner, in integer degrees
    pub const fn interior_angle(self, corner: Corner) -> u16 {
        match (self, corner) {
            (Self::Kite, Corner::C) => 144,
            (Self::Dart, Corner::B | Corner::D) => 36,
            (Self::Dart, Corner::C) => 216,
            _ => 72,
        }
    }

    /// Reference angle of a side against the x axis at rotation zero
    pub const fn ref_angle(self, side: Side) -> f64 {
        match (self, side) {
            (_, Side::A) => 0.0,
            (Self::Kite, Side::B) => 108.0,
            (Self::Kite, Side::C) => 144.0,
            (Self::Dart, Side::B) => 144.0,
            (Self::Dart, Side::C) => 108.0,
            (_, Side::D) => 252.0,
        }
    }

    /// Polar placement `(degrees, radius)` of a corner relative to corner `A`
    ///
    /// The dart's `C` corner is the only one not on the unit circle; its
    /// radius `1/φ` is what folds the shape concave.
    pub const fn corner_polar(self, corner: Corner) -> (f64, f64) {
        match (self, corner) {
            (_, Corner::A) => (0.0, 0.0),
            (_, Corner::B) => (0.0, 1.0),
            (Self::Kite, Corner::C) => (36.0, 1.0),
            (Self::Dart, Corner::C) => (36.0, 1.0 / PHI),
            (_, Corner::D) => (72.0, 1.0),
        }
    }
}

/// One `(prototile, corner)` entry of a vertex occupancy or rule sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Which prototile touches the vertex
    pub kind: TileKind,
    /// With which of its corners
    pub corner: Corner,
}

const fn tok(kind: TileKind, corner: Corner) -> Token {
    Token { kind, corner }
}

const KA: Token = tok(TileKind::Kite, Corner::A);
const KB: Token = tok(TileKind::Kite, Corner::B);
const KC: Token = tok(TileKind::Kite, Corner::C);
const KD: Token = tok(TileKind::Kite, Corner::D);
const DA: Token = tok(TileKind::Dart, Corner::A);
const DB: Token = tok(TileKind::Dart, Corner::B);
const DC: Token = tok(TileKind::Dart, Corner::C);
const DD: Token = tok(TileKind::Dart, Corner::D);

/// The seven canonical vertex configurations
///
/// These are the only locally-valid ways tiles can fully surround a point in
/// the P2 tiling. Each rule is a circular sequence read clockwise; the
/// interior angles of every rule sum to 360°. Any legally-occupied open
/// vertex must read as a contiguous window of one of these.
pub const VERTEX_RULES: [&[Token]; 7] = [
    &[DA, DA, DA, DA, DA],
    &[DC, KD, KB],
    &[KA, KA, KA, KA, KA],
    &[DA, DA, DA, KB, KD],
    &[KC, DD, KA, KA, DB],
    &[DA, KB, KD, KB, KD],
    &[DB, KC, KC, DD],
];

/// Matching-rule decoration drawn onto finished tiles by the renderer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Decoration {
    /// Bare tiles, no anchor geometry
    #[default]
    None,
    /// Amman bar segments
    Amman,
    /// Matching-rule arcs
    Arcs,
}

impl Decoration {
    /// Name accepted on the command line and written to reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Amman => "amman",
            Self::Arcs => "arcs",
        }
    }
}

const KITE_AMMAN_DEG: f64 = 27.227_644_88;
const KITE_AMMAN_SHORT: f64 = 0.190_983_005_62;
const KITE_AMMAN_LONG: f64 = 0.963_525_491_56;
const DART_AMMAN_DEG: f64 = 5.925_613_93;
const DART_AMMAN_SHORT: f64 = 0.809_016_994_38;
const DART_AMMAN_LONG: f64 = 0.879_800_446_57;
const KITE_ARC_DEG: f64 = 13.613_822_44;
const KITE_ARC_LONG: f64 = 0.953_850_122_53;
const DART_ARC_DEG: f64 = 18.0;
const DART_ARC_LONG: f64 = 0.726_542_528;

/// Polar anchor placements `(degrees, radius)` for a decoration, tile-local
///
/// Anchors follow the same rotation/scale/translation chain as the shape
/// corners; deriving stroke paths from them is the renderer's job.
pub const fn decor_polar(kind: TileKind, decoration: Decoration) -> Option<[(f64, f64); 4]> {
    match (decoration, kind) {
        (Decoration::None, _) => None,
        (Decoration::Amman, TileKind::Kite) => Some([
            (KITE_AMMAN_DEG, KITE_AMMAN_LONG),
            (72.0, KITE_AMMAN_SHORT),
            (0.0, KITE_AMMAN_SHORT),
            (72.0 - KITE_AMMAN_DEG, KITE_AMMAN_LONG),
        ]),
        (Decoration::Amman, TileKind::Dart) => Some([
            (DART_AMMAN_DEG, DART_AMMAN_LONG),
            (0.0, DART_AMMAN_SHORT),
            (72.0, DART_AMMAN_SHORT),
            (72.0 - DART_AMMAN_DEG, DART_AMMAN_LONG),
        ]),
        (Decoration::Arcs, TileKind::Kite) => Some([
            (0.0, PHI - 1.0),
            (72.0, PHI - 1.0),
            (72.0 - KITE_ARC_DEG, KITE_ARC_LONG),
            (KITE_ARC_DEG, KITE_ARC_LONG),
        ]),
        (Decoration::Arcs, TileKind::Dart) => Some([
            (0.0, (PHI - 1.0) * (PHI - 1.0)),
            (72.0, (PHI - 1.0) * (PHI - 1.0)),
            (72.0 - DART_ARC_DEG, DART_ARC_LONG),
            (DART_ARC_DEG, DART_ARC_LONG),
        ]),
    }
}

/// Arc decoration radii `(large, small)` at unit scale
pub const fn arc_radii(kind: TileKind) -> (f64, f64) {
    match kind {
        TileKind::Kite => (PHI - 1.0, (PHI - 1.0) * (PHI - 1.0)),
        TileKind::Dart => ((PHI - 1.0) * (PHI - 1.0), 1.0 / (PHI * (1.0 + PHI))),
    }
}
