//! Interpolation.
//!
//! A slide moves one block along a straight line in the depth/vertical
//! plane. Samples are evenly spaced and include both endpoints.

use slicecast_shared::math::{linspace, Position};

/// `frame_count` evenly spaced positions from `start` to `end` inclusive.
pub fn interpolate_positions(start: Position, end: Position, frame_count: usize) -> Vec<Position> {
    linspace(start.depth, end.depth, frame_count)
        .into_iter()
        .zip(linspace(start.center, end.center, frame_count))
        .map(|(depth, center)| Position::new(depth, center))
        .collect()
}
