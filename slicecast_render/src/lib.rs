//! `slicecast_render`
//!
//! Still-image rendering:
//! - Loads a scene document
//! - Projects and composites every block into one column
//! - Upscales the column and writes it as PNG

pub mod session;

pub use session::RenderSession;
