//! Tests for vertex occupancy, angle sums and candidate sets

use pentile::spatial::prototile::{Corner, TileKind, Token};
use pentile::spatial::tile::TileId;
use pentile::spatial::vertex::{CandidateSet, Occupant, Vertex};

fn occupant(tile: usize, kind: TileKind, corner: Corner) -> Occupant {
    Occupant {
        tile: TileId::new(tile),
        kind,
        corner,
    }
}

// Tests clockwise attachments land at the deque front
// Verified by swapping push_front/push_back
#[test]
fn test_attach_direction() {
    let mut vertex = Vertex::new([0.0, 0.0]);
    let first = occupant(0, TileKind::Kite, Corner::A);
    let second = occupant(1, TileKind::Kite, Corner::D);
    let third = occupant(2, TileKind::Dart, Corner::B);

    vertex.attach(first, true);
    vertex.attach(second, true);
    vertex.attach(third, false);

    assert_eq!(vertex.clockwise_occupant(), Some(&second));
    assert_eq!(vertex.counter_clockwise_occupant(), Some(&third));
    assert_eq!(vertex.angle_sum(), 72 + 72 + 36);
}

// Tests detach restores the angle sum and removes exactly one entry
#[test]
fn test_detach_reverses_attach() {
    let mut vertex = Vertex::new([0.0, 0.0]);
    vertex.attach(occupant(0, TileKind::Dart, Corner::C), true);
    vertex.attach(occupant(1, TileKind::Kite, Corner::D), false);
    assert_eq!(vertex.angle_sum(), 216 + 72);

    let removed = vertex.detach(TileId::new(1));
    assert_eq!(removed.map(|entry| entry.corner), Some(Corner::D));
    assert_eq!(vertex.angle_sum(), 216);
    assert_eq!(vertex.occupancy.len(), 1);

    assert!(vertex.detach(TileId::new(7)).is_none());
}

// Tests closure at exactly 360 degrees (the sun configuration)
#[test]
fn test_closure_at_full_turn() {
    let mut vertex = Vertex::new([0.0, 0.0]);
    for tile in 0..5 {
        assert!(!vertex.is_closed());
        vertex.attach(occupant(tile, TileKind::Kite, Corner::A), true);
    }
    assert!(vertex.is_closed());
    assert_eq!(vertex.angle_sum(), 360);
}

// Tests tokens serialize front-to-back
#[test]
fn test_tokens_order() {
    let mut vertex = Vertex::new([0.0, 0.0]);
    vertex.attach(occupant(0, TileKind::Kite, Corner::B), false);
    vertex.attach(occupant(1, TileKind::Dart, Corner::C), true);

    let tokens = vertex.tokens();
    assert_eq!(
        tokens,
        vec![
            Token {
                kind: TileKind::Dart,
                corner: Corner::C
            },
            Token {
                kind: TileKind::Kite,
                corner: Corner::B
            },
        ]
    );
}

// Tests gap side selection prefers the smaller candidate set, ties clockwise
// Verified by inverting the comparison
#[test]
fn test_gap_side_selection() {
    let ka = Token {
        kind: TileKind::Kite,
        corner: Corner::A,
    };
    let dd = Token {
        kind: TileKind::Dart,
        corner: Corner::D,
    };

    let mut candidates = CandidateSet::default();
    candidates.clockwise = vec![ka, dd];
    candidates.counter_clockwise = vec![ka];
    let (tokens, clockwise) = candidates.gap_side();
    assert!(!clockwise);
    assert_eq!(tokens, &[ka]);

    candidates.counter_clockwise = vec![ka, dd];
    let (_, tie_clockwise) = candidates.gap_side();
    assert!(tie_clockwise);
}

// Tests the restriction predicate fires on a single candidate either side
#[test]
fn test_restricts() {
    let ka = Token {
        kind: TileKind::Kite,
        corner: Corner::A,
    };

    let mut candidates = CandidateSet::default();
    assert!(!candidates.restricts());
    assert!(candidates.is_empty());

    candidates.clockwise = vec![ka];
    assert!(candidates.restricts());
    candidates.clockwise = vec![ka, ka];
    assert!(!candidates.restricts());

    candidates.clear();
    assert!(candidates.is_empty());
}

// Tests the two-kite sun/star corner signature
// Verified by admitting darts into the signature
#[test]
fn test_sun_star_corner_signature() {
    let mut vertex = Vertex::new([0.0, 0.0]);
    assert!(!vertex.is_sun_star_corner());

    vertex.attach(occupant(0, TileKind::Kite, Corner::C), true);
    assert!(vertex.is_sun_star_corner());

    vertex.attach(occupant(1, TileKind::Kite, Corner::D), false);
    assert!(vertex.is_sun_star_corner());

    vertex.attach(occupant(2, TileKind::Dart, Corner::D), false);
    assert!(!vertex.is_sun_star_corner());

    let mut plain = Vertex::new([0.0, 0.0]);
    plain.attach(occupant(0, TileKind::Kite, Corner::A), true);
    assert!(!plain.is_sun_star_corner());
}
