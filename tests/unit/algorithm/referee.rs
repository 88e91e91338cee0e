//! Tests for boundary-shape classification

use pentile::algorithm::referee::{CoffinSetup, consult};
use pentile::algorithm::registry::VertexRegistry;
use pentile::spatial::prototile::{Corner, Decoration, TileKind};
use pentile::spatial::tile::{TileId, instantiate};
use pentile::spatial::vertex::VertexId;
use pentile::spatial::viewport::Viewport;

const SCALE: f64 = 10.0;

fn registry() -> VertexRegistry {
    VertexRegistry::new(Viewport::new(100.0, 100.0, SCALE), SCALE, 1.0)
}

fn register_centered(reg: &mut VertexRegistry, kind: TileKind) -> pentile::spatial::tile::TileInstance {
    let mut tile = instantiate(kind, 0.0, SCALE, Decoration::None);
    tile.translate(50.0, 50.0);
    reg.register_tile(TileId::new(0), &mut tile, Corner::A, true);
    tile
}

// Tests an empty registry produces no constraint
#[test]
fn test_empty_registry_defaults() {
    let reg = registry();
    assert_eq!(consult(&reg, VertexId::new(0)), CoffinSetup::default());
}

// Tests fewer than two shape corners produces no constraint
// A lone dart exposes only one 72° vertex; its 36° wings don't qualify
#[test]
fn test_single_corner_defaults() {
    let mut reg = registry();
    register_centered(&mut reg, TileKind::Dart);
    let Some(&scheduled) = reg.open().first() else {
        unreachable!("registration must open vertices");
    };
    assert_eq!(consult(&reg, scheduled), CoffinSetup::default());
}

// Tests a lone kite's three 72° corners classify as a constraining shape
// around its own obtuse vertex, with star parity (no C corner leads)
#[test]
fn test_lone_kite_constrains_obtuse_vertex() {
    let mut reg = registry();
    let tile = register_centered(&mut reg, TileKind::Kite);

    let Some(obtuse) = tile.vertex_at(Corner::C) else {
        unreachable!("registration must assign every corner");
    };
    let setup = consult(&reg, obtuse);
    assert!(setup.on_short_side);
    assert!(setup.worm);
}

// Tests a regular pentagon boundary yields no constraint
// Five separated darts expose exactly one 72° vertex each; placing those on
// a regular pentagon makes every boundary side group together
#[test]
fn test_pentagon_boundary_unconstrained() {
    let mut reg = VertexRegistry::new(Viewport::new(200.0, 200.0, SCALE), SCALE, 1.0);
    let mut darts = Vec::new();
    for (index, degrees) in [90.0_f64, 162.0, 234.0, 306.0, 18.0].into_iter().enumerate() {
        let mut dart = instantiate(TileKind::Dart, 0.0, SCALE, Decoration::None);
        let radians = degrees.to_radians();
        dart.translate(100.0 + 40.0 * radians.cos(), 100.0 + 40.0 * radians.sin());
        let outcome = reg.register_tile(TileId::new(index), &mut dart, Corner::A, true);
        assert!(outcome.succeeded);
        darts.push(dart);
    }

    let Some(scheduled) = darts.first().and_then(|dart| dart.vertex_at(Corner::C)) else {
        unreachable!("registration must assign every corner");
    };
    assert_eq!(consult(&reg, scheduled), CoffinSetup::default());
}

// Tests the scheduled vertex is exempt when it is itself a shape corner at
// the far end of every short segment it could fall into
#[test]
fn test_corner_vertices_have_sides() {
    let mut reg = registry();
    let tile = register_centered(&mut reg, TileKind::Kite);

    // The corner vertices themselves may or may not sit inside another
    // pair's band, but consultation must stay total and pure.
    for corner in [Corner::A, Corner::B, Corner::D] {
        let Some(scheduled) = tile.vertex_at(corner) else {
            unreachable!("registration must assign every corner");
        };
        let setup = consult(&reg, scheduled);
        assert!(setup.worm, "a bare kite boundary has no sun corner");
        let again = consult(&reg, scheduled);
        assert_eq!(setup, again, "consultation must be deterministic");
    }
}
