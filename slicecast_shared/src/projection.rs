//! World to screen projection, clipping, normalization and quantization.
//!
//! Pipeline for one block:
//! 1. [`project`] scales the block onto the plane at [`PROJECTION_DEPTH`](crate::camera::PROJECTION_DEPTH).
//! 2. [`ProjectedBlock::clip`] truncates it to the camera's field of view.
//! 3. [`ProjectedBlock::normalize`] maps the visible range onto `[0, 1]`.
//! 4. [`project_onto_screen`] turns the unit-space extent into partition indices.
//! 5. [`paint`] writes the block's private color column.

use std::ops::RangeInclusive;

use tracing::trace;

use crate::{
    block::{check_position, Block},
    camera::ProjectionScreen,
    color::Rgb,
    error::{OutOfRange, RenderError, RenderResult},
};

/// A block scaled onto the projection plane. Its depth no longer matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedBlock {
    pub center: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Scales a block onto the projection plane by similar triangles.
///
/// A point at depth `x` lands on the plane at depth `X0` scaled by `X0 / x`.
/// Blocks at the plane's own depth come back unchanged.
pub fn project(block: &Block, screen: &ProjectionScreen) -> RenderResult<ProjectedBlock> {
    check_position(block.position())?;
    let scale = screen.depth / block.depth();
    Ok(ProjectedBlock {
        center: scale * block.center(),
        top: scale * block.top(),
        bottom: scale * block.bottom(),
    })
}

impl ProjectedBlock {
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Truncates the parts outside the visible range.
    ///
    /// A block entirely outside the view ends up with `top <= bottom` or with
    /// an edge beyond the screen; partition lookup reports that as no coverage.
    pub fn clip(self, screen: &ProjectionScreen) -> Self {
        Self {
            top: self.top.min(screen.top),
            bottom: self.bottom.max(screen.bottom),
            ..self
        }
    }

    pub fn normalize(self, screen: &ProjectionScreen) -> NormalizedBlock {
        NormalizedBlock {
            center: screen.normalize(self.center),
            top: screen.normalize(self.top),
            bottom: screen.normalize(self.bottom),
        }
    }
}

/// A projected block expressed in unit screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedBlock {
    pub center: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Closed interval `[start, stop]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start: f64,
    pub stop: f64,
}

impl Slice {
    pub fn new(start: f64, stop: f64) -> RenderResult<Self> {
        if start.is_nan() || stop.is_nan() || start > stop {
            return Err(RenderError::config(format!(
                "slice start {start} must not exceed stop {stop}"
            )));
        }
        Ok(Self { start, stop })
    }

    pub fn contains(&self, value: f64) -> bool {
        self.start <= value && value <= self.stop
    }

    pub fn width(&self) -> f64 {
        self.stop - self.start
    }
}

/// The unit screen cut into equal, contiguous slices.
#[derive(Debug, Clone, PartialEq)]
pub struct Slices {
    slices: Vec<Slice>,
}

/// Cuts `[0, 1]` into `resolution` slices of width `1 / resolution`.
///
/// Neighbouring slices share their boundary value exactly, so there are no
/// gaps and the last slice ends at exactly `1.0`.
pub fn quantize(resolution: usize) -> RenderResult<Slices> {
    if resolution == 0 {
        return Err(RenderError::config("resolution must be at least 1"));
    }
    let r = resolution as f64;
    let slices = (0..resolution)
        .map(|i| Slice {
            start: i as f64 / r,
            stop: (i + 1) as f64 / r,
        })
        .collect();
    Ok(Slices { slices })
}

impl Slices {
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slice> {
        self.slices.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slice> {
        self.slices.iter()
    }

    /// Index of the lowest slice containing `value`.
    ///
    /// A value on a shared boundary resolves to the lower slice. Slices are
    /// sorted and contiguous, so the first slice whose `stop` reaches `value`
    /// is the one an ascending scan would stop at.
    pub fn find_partition(&self, value: f64) -> Result<usize, OutOfRange> {
        let index = self.slices.partition_point(|s| s.stop < value);
        match self.slices.get(index) {
            Some(slice) if slice.contains(value) => Ok(index),
            _ => Err(OutOfRange { value }),
        }
    }
}

/// Partitions a block occupies on the quantized screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coverage {
    /// Off-screen this frame.
    None,
    /// Contiguous inclusive range, bottom index first.
    Indices(RangeInclusive<usize>),
}

impl Coverage {
    pub fn is_empty(&self) -> bool {
        matches!(self, Coverage::None)
    }

    pub fn len(&self) -> usize {
        match self {
            Coverage::None => 0,
            Coverage::Indices(range) => range.end() - range.start() + 1,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        match self {
            Coverage::None => false,
            Coverage::Indices(range) => range.contains(&index),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let range = match self {
            Coverage::None => None,
            Coverage::Indices(range) => Some(range.clone()),
        };
        range.into_iter().flatten()
    }
}

/// Looks up the partitions under a normalized block's top and bottom.
///
/// An edge outside the unit screen means the block is not visible.
pub fn project_onto_screen(block: &NormalizedBlock, slices: &Slices) -> Coverage {
    let lookup = slices.find_partition(block.top).and_then(|top| {
        slices
            .find_partition(block.bottom)
            .map(|bottom| (top, bottom))
    });
    match lookup {
        Ok((top, bottom)) if bottom <= top => Coverage::Indices(bottom..=top),
        Ok(_) => Coverage::None,
        Err(err) => {
            trace!(%err, "block edge off screen");
            Coverage::None
        }
    }
}

/// A `resolution`-long column, `background` everywhere except the covered partitions.
pub fn paint(coverage: &Coverage, resolution: usize, color: Rgb, background: Rgb) -> Vec<Rgb> {
    let mut column = vec![background; resolution];
    for index in coverage.iter() {
        if let Some(px) = column.get_mut(index) {
            *px = color;
        }
    }
    column
}
