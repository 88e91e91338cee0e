//! Boundary-shape disambiguation for free growth choices
//!
//! Some locally-legal random choices are globally wrong near recurring
//! boundary shapes: rhombus, trapezoid cup, pentagon, coffin/roof and
//! hybrid-roof runs of kite/dart corners. The referee reconstructs the
//! current boundary shape from its corner vertices and reports whether the
//! scheduled vertex sits on a disqualifying short side, plus the worm
//! parity (star vs. sun corner formation) that tells the scheduler which
//! way to flip its candidate choice.

use crate::algorithm::registry::VertexRegistry;
use crate::spatial::prototile::Corner;
use crate::spatial::vertex::{Vertex, VertexId};

/// Referee verdict for one scheduled vertex
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoffinSetup {
    /// The scheduled vertex lies on a short side of the boundary shape
    pub on_short_side: bool,
    /// Corner formation is star (true) rather than sun (false)
    pub worm: bool,
}

/// Ratio of adjoining squared side lengths above which a four-corner shape
/// is a long trapezoid whose short side constrains placement. Empirical:
/// ordinary cup shapes stay well below it.
const SHORT_SIDE_RATIO: f64 = 12.0;

/// Short-side offsets as a fraction of the tile scale, chosen by the corner
/// signature (sun corners sit closer to the side than star corners)
const SUN_OFFSET: f64 = 0.37;
const STAR_OFFSET: f64 = 0.6;

/// Classify the boundary shape around a scheduled vertex
///
/// Corner vertices are the open vertices with angle sum exactly 72° plus
/// those matching the two-kite sun/star corner signature. They are ordered
/// circularly by a sign test against the line through the x-extremes, then
/// classified by acute-corner count and squared side lengths.
pub fn consult(registry: &VertexRegistry, scheduled: VertexId) -> CoffinSetup {
    let mut corners: Vec<VertexId> = registry
        .open()
        .iter()
        .copied()
        .filter(|&id| {
            registry
                .vertex(id)
                .is_some_and(|vertex| vertex.angle_sum() == 72 || vertex.is_sun_star_corner())
        })
        .collect();

    if corners.len() < 2 {
        return CoffinSetup::default();
    }

    let position =
        |id: VertexId| registry.vertex(id).map_or([0.0; 2], Vertex::position);

    corners.sort_by(|&a, &b| {
        position(a)[0]
            .partial_cmp(&position(b)[0])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    order_circularly(&mut corners, &position);

    let acute: Vec<usize> = corners
        .iter()
        .enumerate()
        .filter(|&(_, &id)| {
            registry
                .vertex(id)
                .is_some_and(|vertex| vertex.angle_sum() == 72)
        })
        .map(|(index, _)| index)
        .collect();

    if let [first, second] = acute.as_slice() {
        return classify_four_corner(registry, &corners, *first, *second, scheduled, &position);
    }

    classify_grouped(registry, &corners, scheduled, &position)
}

/// Arrange x-sorted corners into circular order
///
/// The first and last corner span the cut line; corners on its positive
/// side move to the tail in descending-x order, turning the two sorted runs
/// into one loop around the shape.
fn order_circularly(corners: &mut Vec<VertexId>, position: &impl Fn(VertexId) -> [f64; 2]) {
    let Some((&first, &last)) = corners.first().zip(corners.last()) else {
        return;
    };
    let [x1, y1] = position(first);
    let [x2, y2] = position(last);

    let mut lower = Vec::with_capacity(corners.len());
    let mut upper = Vec::new();
    for &id in &*corners {
        let [x, y] = position(id);
        let side = (x - x1) * (y2 - y1) - (y - y1) * (x2 - x1);
        if side > 0.0 {
            upper.push(id);
        } else {
            lower.push(id);
        }
    }
    upper.reverse();
    lower.extend(upper);
    *corners = lower;
}

/// Rhombus / trapezoid / cup handling (exactly two acute corners)
fn classify_four_corner(
    registry: &VertexRegistry,
    corners: &[VertexId],
    first_acute: usize,
    second_acute: usize,
    scheduled: VertexId,
    position: &impl Fn(VertexId) -> [f64; 2],
) -> CoffinSetup {
    // The joint corner (the index before the first acute) must not itself be
    // acute; when the acute corners are the first and last entries, start
    // from the other one.
    let anchor = if first_acute == 0 && second_acute == 3 {
        second_acute as isize
    } else {
        first_acute as isize
    };

    let at = |offset: isize| circular(corners, offset);
    let (Some(joint), Some(tip), Some(far)) = (at(anchor - 1), at(anchor), at(anchor - 2)) else {
        return CoffinSetup::default();
    };

    let side_a = squared_span(position(joint), position(tip));
    let side_b = squared_span(position(far), position(joint));

    // Equal sides: rhombus. Longer side_b: ordinary or isosceles trapezoid.
    // Only the long shapes with a far shorter side_b constrain placement.
    if side_b >= side_a {
        return CoffinSetup::default();
    }

    let ratio = side_a as f64 / side_b as f64;
    let on_short_side =
        ratio > SHORT_SIDE_RATIO && on_short_segment(registry, scheduled, joint, far, position);

    CoffinSetup {
        on_short_side,
        worm: is_star_corner(registry, joint),
    }
}

/// Pentagon / coffin / roof / hybrid-roof handling
///
/// Consecutive corner pairs group by integer-rounded squared side length.
/// One group is a regular pentagon (no constraint); three groups are a
/// coffin or roof whose smallest group carries the short side(s); any other
/// count is a hybrid roof where the two smallest groups do.
fn classify_grouped(
    registry: &VertexRegistry,
    corners: &[VertexId],
    scheduled: VertexId,
    position: &impl Fn(VertexId) -> [f64; 2],
) -> CoffinSetup {
    let mut groups: Vec<(i64, Vec<(VertexId, VertexId)>)> = Vec::new();
    for index in 0..corners.len() {
        let (Some(from), Some(to)) = (
            circular(corners, index as isize - 1),
            circular(corners, index as isize),
        ) else {
            continue;
        };
        let span = squared_span(position(from), position(to));
        match groups.iter_mut().find(|(key, _)| *key == span) {
            Some((_, pairs)) => pairs.push((from, to)),
            None => groups.push((span, vec![(from, to)])),
        }
    }

    if groups.len() == 1 {
        return CoffinSetup::default();
    }

    let mut pairs = take_smallest_group(&mut groups);
    if groups.len() != 2 {
        // Three original groups kept one short length; hybrids merge two.
        pairs.extend(take_smallest_group(&mut groups));
    }

    let on_short_side = pairs
        .iter()
        .any(|&(from, to)| on_short_segment(registry, scheduled, from, to, position));
    let worm = pairs
        .first()
        .is_some_and(|&(from, _)| is_star_corner(registry, from));

    CoffinSetup {
        on_short_side,
        worm,
    }
}

fn take_smallest_group(
    groups: &mut Vec<(i64, Vec<(VertexId, VertexId)>)>,
) -> Vec<(VertexId, VertexId)> {
    let Some(smallest) = groups
        .iter()
        .enumerate()
        .min_by_key(|(_, (key, _))| *key)
        .map(|(index, _)| index)
    else {
        return Vec::new();
    };
    groups.remove(smallest).1
}

/// Whether the scheduled vertex lies inside the offset band of segment
/// `from → to`
///
/// Tiles attach clockwise, so the tile attached at one short-side corner
/// always falls over the far corner — that corner (`to`) itself never
/// counts. Per axis the segment interval widens by the offset away from
/// `to` at the `from` end and past `to` at the other; the vertex must lie
/// strictly inside on both axes.
fn on_short_segment(
    registry: &VertexRegistry,
    scheduled: VertexId,
    from: VertexId,
    to: VertexId,
    position: &impl Fn(VertexId) -> [f64; 2],
) -> bool {
    if scheduled == to {
        return false;
    }

    let offset = if first_corner(registry, from) == Some(Corner::C) {
        SUN_OFFSET
    } else {
        STAR_OFFSET
    } * registry.scale();

    let point = position(scheduled);
    let start = position(from);
    let end = position(to);

    point
        .iter()
        .zip(start.iter().zip(end.iter()))
        .all(|(&p, (&a, &b))| {
            let signed = if b > a { offset } else { -offset };
            let lo = a - signed;
            let hi = b + signed;
            (p - lo) * (p - hi) < 0.0
        })
}

fn circular(corners: &[VertexId], offset: isize) -> Option<VertexId> {
    let len = corners.len() as isize;
    if len == 0 {
        return None;
    }
    corners.get(offset.rem_euclid(len) as usize).copied()
}

fn first_corner(registry: &VertexRegistry, id: VertexId) -> Option<Corner> {
    registry
        .vertex(id)
        .and_then(Vertex::clockwise_occupant)
        .map(|occupant| occupant.corner)
}

/// Star formations put a `B` or `D` corner at the clockwise end; sun
/// formations a `C`
fn is_star_corner(registry: &VertexRegistry, id: VertexId) -> bool {
    first_corner(registry, id) != Some(Corner::C)
}

/// Integer-rounded squared distance between two points
///
/// The double rounding strips float jitter so equal-length sides compare
/// equal as map keys.
fn squared_span(a: [f64; 2], b: [f64; 2]) -> i64 {
    let d2 = (b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2);
    ((d2 * 100.0).round() / 100.0).round() as i64
}
