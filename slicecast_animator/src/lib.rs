//! `slicecast_animator`
//!
//! Animation on top of the projection core:
//! - Linear interpolation of one block's position across frames
//! - Sequential or parallel frame generation
//! - Video encoding boundary (GIF backend)

pub mod animator;
pub mod encoder;
pub mod interp;

pub use animator::{Animator, Slide};
pub use encoder::{GifVideoEncoder, VideoEncoder};
