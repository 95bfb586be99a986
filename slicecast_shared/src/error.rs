//! Error taxonomy for the projection pipeline.
//!
//! Configuration and geometry errors abort a render before any pixel is
//! produced. A coordinate that falls outside the unit screen is not an error
//! at this level: see [`OutOfRange`] and [`crate::projection::Coverage`].

use thiserror::Error;

use crate::block::BlockId;

/// Errors surfaced to callers of the renderer and animator.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Invalid camera, quality or animation settings.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// A block the pinhole camera cannot project (depth <= 0, bad extent).
    #[error("degenerate geometry: {reason} (depth {depth})")]
    DegenerateGeometry { depth: f64, reason: &'static str },
    /// No block carries the requested identity.
    #[error("no block with id {0}")]
    Lookup(BlockId),
    /// Failure reported by an image or video collaborator, forwarded as-is.
    #[error(transparent)]
    External(#[from] anyhow::Error),
}

impl RenderError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        RenderError::Configuration(msg.into())
    }
}

/// A normalized coordinate outside `[0, 1]`.
///
/// Returned by [`crate::projection::Slices::find_partition`]; coverage
/// computation downgrades it to "no coverage".
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("normalized coordinate {value} lies outside the unit screen")]
pub struct OutOfRange {
    pub value: f64,
}

pub type RenderResult<T> = Result<T, RenderError>;
