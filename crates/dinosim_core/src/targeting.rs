use crate::math::{distance_and_angle, Heading};
use dinosim_data::Position;

/// The winning candidate of a [`closest`] search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target<K> {
    /// Caller-supplied key of the candidate (usually an index).
    pub key: K,
    pub position: Position,
    pub heading: Heading,
}

/// Finds the candidate nearest to `from`.
///
/// Candidates are `(key, position)` pairs. On equal distances the first one
/// seen wins. Runs in O(n); the tick calls it once per dino against the live
/// plants, which makes it the hot spot for large worlds.
pub fn closest<K, I>(from: Position, candidates: I) -> Option<Target<K>>
where
    I: IntoIterator<Item = (K, Position)>,
{
    let mut best: Option<Target<K>> = None;
    for (key, position) in candidates {
        let heading = distance_and_angle(from, position);
        let closer = best
            .as_ref()
            .map_or(true, |current| heading.distance < current.heading.distance);
        if closer {
            best = Some(Target {
                key,
                position,
                heading,
            });
        }
    }
    best
}
