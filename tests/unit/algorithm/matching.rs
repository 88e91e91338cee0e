//! Tests for circular occupancy matching against the vertex rules

use pentile::algorithm::matching::classify;
use pentile::spatial::prototile::{Corner, TileKind, Token};

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

// Tests a lone kite apex matches the sun rule and the ace neighborhood
// Verified against the rule table by hand: windows in rules 3 and 5
#[test]
fn test_lone_kite_a() {
    let candidates = classify(&[KA]);
    assert_eq!(candidates.clockwise, vec![KA, DD]);
    assert_eq!(candidates.counter_clockwise, vec![KA, DB]);
    assert!(!candidates.restricts());
}

// Tests a lone dart fold is fully forced on both sides
// Verified by hand: the fold appears in exactly one rule
#[test]
fn test_lone_dart_c_is_forced() {
    let candidates = classify(&[DC]);
    assert_eq!(candidates.clockwise, vec![KB]);
    assert_eq!(candidates.counter_clockwise, vec![KD]);
    assert!(candidates.restricts());
}

// Tests four dart apexes force the fifth that closes the star
#[test]
fn test_four_dart_apexes_force_star() {
    let candidates = classify(&[DA, DA, DA, DA]);
    assert_eq!(candidates.clockwise, vec![DA]);
    assert_eq!(candidates.counter_clockwise, vec![DA]);
    assert!(candidates.restricts());
}

// Tests a two-token window collects candidates from multiple rules
#[test]
fn test_two_token_window() {
    let candidates = classify(&[KC, DD]);
    assert_eq!(candidates.clockwise, vec![DB, KC]);
    assert_eq!(candidates.counter_clockwise, vec![KA, DB]);
}

// Tests sequences matching no rule window yield empty sets
// Verified by hand: no rule contains a kite apex next to a dart fold
#[test]
fn test_unmatchable_sequence() {
    let candidates = classify(&[KA, DC]);
    assert!(candidates.is_empty());
}

// Tests occupancies longer than every rule yield empty sets
#[test]
fn test_overlong_occupancy() {
    let candidates = classify(&[KA, KA, KA, KA, KA, KA]);
    assert!(candidates.is_empty());
}

// Tests the empty occupancy yields empty sets
#[test]
fn test_empty_occupancy() {
    assert!(classify(&[]).is_empty());
}

// Tests candidates deduplicate across matching windows
#[test]
fn test_candidates_deduplicate() {
    // The sun rule alone offers five identical windows
    let candidates = classify(&[KA, KA]);
    assert_eq!(candidates.clockwise.iter().filter(|&&t| t == KA).count(), 1);
}
