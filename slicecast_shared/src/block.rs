//! World-space depth blocks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    color::Rgb,
    error::{RenderError, RenderResult},
    math::Position,
};

/// Caller-assigned block identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(pub u32);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 1D object: a vertical segment at some depth in front of the camera.
///
/// Depth is kept strictly positive and extent non-negative; both are checked
/// on construction and whenever the position moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    position: Position,
    extent: f64,
    color: Rgb,
    id: Option<BlockId>,
}

impl Block {
    pub fn new(depth: f64, center: f64, extent: f64) -> RenderResult<Self> {
        if !extent.is_finite() || extent < 0.0 {
            return Err(RenderError::DegenerateGeometry {
                depth,
                reason: "extent must be finite and non-negative",
            });
        }
        let position = Position::new(depth, center);
        check_position(position)?;
        Ok(Self {
            position,
            extent,
            color: Rgb::BLACK,
            id: None,
        })
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_id(mut self, id: BlockId) -> Self {
        self.id = Some(id);
        self
    }

    /// Moves the block. The previous position is kept if the new one is invalid.
    pub fn set_position(&mut self, position: Position) -> RenderResult<()> {
        check_position(position)?;
        self.position = position;
        Ok(())
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn depth(&self) -> f64 {
        self.position.depth
    }

    pub fn center(&self) -> f64 {
        self.position.center
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    pub fn top(&self) -> f64 {
        self.position.center + 0.5 * self.extent
    }

    pub fn bottom(&self) -> f64 {
        self.position.center - 0.5 * self.extent
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn id(&self) -> Option<BlockId> {
        self.id
    }
}

/// Rejects positions the pinhole camera cannot project.
pub fn check_position(position: Position) -> RenderResult<()> {
    if !(position.depth.is_finite() && position.depth > 0.0) {
        return Err(RenderError::DegenerateGeometry {
            depth: position.depth,
            reason: "depth must be strictly in front of the camera",
        });
    }
    if !position.center.is_finite() {
        return Err(RenderError::DegenerateGeometry {
            depth: position.depth,
            reason: "vertical center must be finite",
        });
    }
    Ok(())
}
