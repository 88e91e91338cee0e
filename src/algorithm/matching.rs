//! Circular matching of vertex occupancy against the canonical configurations
//!
//! Every legally-occupied open vertex reads as a contiguous window of one of
//! the seven vertex rules. The search walks every rotation of every rule
//! (equivalent to doubling the rule and scanning for the occupancy as a
//! substring); for each matching window the token circularly preceding it
//! can extend the clockwise end and the token following it the
//! counter-clockwise end.

use crate::spatial::prototile::{Token, VERTEX_RULES};
use crate::spatial::vertex::CandidateSet;

/// Compute the legal continuations for an occupancy sequence
///
/// Candidates deduplicate per side across all rules, preserving first-seen
/// order. A sequence matching no rule window yields empty sets on both
/// sides; for a committed open vertex that is a logic defect the caller
/// asserts after registration.
pub fn classify(occupancy: &[Token]) -> CandidateSet {
    let mut candidates = CandidateSet::default();
    if occupancy.is_empty() {
        return candidates;
    }

    for rule in VERTEX_RULES {
        let len = rule.len();
        if occupancy.len() > len {
            continue;
        }

        for offset in 0..len {
            let window_matches = occupancy
                .iter()
                .enumerate()
                .all(|(i, token)| rule.get((offset + i) % len) == Some(token));
            if !window_matches {
                continue;
            }

            if let Some(&before) = rule.get((offset + len - 1) % len) {
                push_unique(&mut candidates.clockwise, before);
            }
            if let Some(&after) = rule.get((offset + occupancy.len()) % len) {
                push_unique(&mut candidates.counter_clockwise, after);
            }
        }
    }

    candidates
}

fn push_unique(side: &mut Vec<Token>, token: Token) {
    if !side.contains(&token) {
        side.push(token);
    }
}
