//! Math helpers.
//!
//! Everything here is plain `f64` arithmetic with no hidden state, so the same
//! inputs always produce bit-identical frames.

use serde::{Deserialize, Serialize};

/// Position of a block in the depth/vertical plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    /// Distance along the camera's forward axis.
    pub depth: f64,
    /// Vertical center.
    pub center: f64,
}

impl Position {
    pub const fn new(depth: f64, center: f64) -> Self {
        Self { depth, center }
    }

    pub fn lerp(self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.depth + (to.depth - self.depth) * t,
            self.center + (to.center - self.center) * t,
        )
    }
}

impl From<[f64; 2]> for Position {
    fn from([depth, center]: [f64; 2]) -> Self {
        Self::new(depth, center)
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.depth, p.center]
    }
}

/// `count` evenly spaced samples over `[start, end]`, both ends included.
///
/// One sample yields `[start]`; zero samples yield an empty vector. The last
/// sample is exactly `end` rather than an accumulated approximation of it.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_lerp_midpoint() {
        let a = Position::new(1.0, -1.0);
        let b = Position::new(3.0, 1.0);
        assert_eq!(a.lerp(b, 0.5), Position::new(2.0, 0.0));
    }

    #[test]
    fn linspace_hits_both_ends() {
        let s = linspace(1.726, 5.4, 60);
        assert_eq!(s.len(), 60);
        assert_eq!(s[0], 1.726);
        assert_eq!(s[59], 5.4);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.25, 1.0, 1), vec![0.25]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
