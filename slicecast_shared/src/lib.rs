//! `slicecast_shared`
//!
//! Projection core shared by the render and animate front ends.
//!
//! A scene is a list of 1D blocks in front of a fixed pinhole camera. Each
//! render projects every block onto a single vertical column of pixels,
//! resolves occlusion by depth, and hands the column to an image backend for
//! upscaling.
//!
//! Design goals:
//! - Deterministic: the same scene always yields the same column.
//! - Synchronous and allocation-light; a `Renderer` is cheap to clone for
//!   parallel frame workers.
//! - Image and video I/O live behind traits.
//! - No `unsafe`.

pub mod assembly;
pub mod block;
pub mod camera;
pub mod color;
pub mod composite;
pub mod config;
pub mod error;
pub mod math;
pub mod projection;
pub mod quality;
pub mod renderer;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::assembly::*;
    pub use crate::block::*;
    pub use crate::camera::*;
    pub use crate::color::*;
    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::math::*;
    pub use crate::quality::*;
    pub use crate::renderer::*;
}
