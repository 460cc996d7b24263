//! Room name resolution with fuzzy matching.

use dq_map::{Mansion, Room};
use strsim::jaro_winkler;

/// Minimum similarity score for fuzzy matching (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// Resolve a room by exact (case-insensitive) or fuzzy name match.
pub fn resolve_room<'m>(mansion: &'m Mansion, input: &str) -> Option<&'m Room> {
    if let Some(room) = mansion.find(input) {
        return Some(room);
    }

    fuzzy_match(mansion, input, FUZZY_THRESHOLD)
        .first()
        .map(|(room, _)| *room)
}

/// Find rooms whose names score at or above `threshold` against the input.
///
/// Returns (room, score) pairs sorted by score descending.
pub fn fuzzy_match<'m>(mansion: &'m Mansion, input: &str, threshold: f64) -> Vec<(&'m Room, f64)> {
    let input_lower = input.to_lowercase();
    let mut matches: Vec<(&Room, f64)> = mansion
        .rooms()
        .into_iter()
        .filter_map(|room| {
            let score = jaro_winkler(&input_lower, &room.name().to_lowercase());
            (score >= threshold).then_some((room, score))
        })
        .collect();

    matches.sort_by(|a, b| b.1.total_cmp(&a.1));
    matches
}
