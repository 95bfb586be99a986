//! Depth-ordered occlusion compositing.

use tracing::warn;

use crate::color::Rgb;

/// One block's private color column, ready for compositing.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintedBlock {
    pub depth: f64,
    pub color: Rgb,
    /// Bottom-to-top, one entry per partition.
    pub column: Vec<Rgb>,
}

/// Merges per-block columns so the nearest covering block wins each partition.
///
/// Layers are applied far to near; a non-background entry overwrites whatever
/// is below it. Blocks at identical depth keep their input order, so the one
/// listed last is drawn on top.
///
/// The result is top-to-bottom (partition 0 is the bottom of the screen, while
/// image rows start at the top).
pub fn composite(layers: &[PaintedBlock], resolution: usize, background: Rgb) -> Vec<Rgb> {
    let mut ordered: Vec<&PaintedBlock> = layers.iter().collect();
    ordered.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    if ordered.windows(2).any(|w| w[0].depth == w[1].depth) {
        warn!("blocks share a depth; later blocks in the list are drawn on top");
    }

    let mut out = vec![background; resolution];
    for layer in ordered {
        for (dst, src) in out.iter_mut().zip(&layer.column) {
            if *src != background {
                *dst = layer.color;
            }
        }
    }
    out.reverse();
    out
}
