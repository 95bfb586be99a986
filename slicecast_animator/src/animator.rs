//! Animator.
//!
//! Drives the renderer across interpolated positions of one block. Every
//! frame re-renders the whole scene, not just the moving block, and frames
//! are kept in memory until the encoder takes the full sequence.

use std::path::Path;

use rayon::prelude::*;
use slicecast_shared::{
    assembly::{ColumnResizer, ImageAssembler},
    block::{check_position, Block, BlockId},
    camera::Camera,
    config::{AnimationConfig, SceneConfig},
    error::{RenderError, RenderResult},
    math::Position,
    quality::RenderQuality,
    renderer::Renderer,
};
use tracing::{debug, info};

use crate::{encoder::VideoEncoder, interp::interpolate_positions};

pub const DEFAULT_FPS: u32 = 30;
pub const DEFAULT_DESTINATION: &str = "outputs/output.gif";

/// One block moving linearly between two positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub block: BlockId,
    pub start: Position,
    pub end: Position,
    pub frame_count: usize,
}

impl From<&AnimationConfig> for Slide {
    fn from(cfg: &AnimationConfig) -> Self {
        Self {
            block: cfg.block,
            start: cfg.start,
            end: cfg.end,
            frame_count: cfg.frame_count,
        }
    }
}

pub struct Animator {
    renderer: Renderer,
    quality: RenderQuality,
    fps: u32,
}

impl Animator {
    /// Animator over `blocks` with a unit-height projection screen,
    /// [`RenderQuality::Accurate`] and [`DEFAULT_FPS`].
    pub fn new(blocks: Vec<Block>) -> RenderResult<Self> {
        let camera = Camera::with_forced_screen_height(1.0)?;
        Ok(Self::from_renderer(Renderer::new(blocks, camera)?))
    }

    pub fn from_renderer(renderer: Renderer) -> Self {
        Self {
            renderer,
            quality: RenderQuality::Accurate,
            fps: DEFAULT_FPS,
        }
    }

    /// Animator for a scene document.
    ///
    /// A scene without a camera section gets the unit-height screen rather
    /// than the default field of view.
    pub fn from_scene(cfg: &SceneConfig) -> RenderResult<Self> {
        let camera = if cfg.camera.is_unset() {
            Camera::with_forced_screen_height(1.0)?
        } else {
            cfg.camera.build()?
        };
        let renderer = Renderer::new(cfg.build_blocks()?, camera)?.with_background(cfg.background);
        let animator = Self::from_renderer(renderer).with_quality(cfg.quality)?;
        match &cfg.animation {
            Some(anim) => animator.with_fps(anim.fps),
            None => Ok(animator),
        }
    }

    pub fn with_quality(mut self, quality: RenderQuality) -> RenderResult<Self> {
        quality.validate()?;
        self.quality = quality;
        Ok(self)
    }

    pub fn with_fps(mut self, fps: u32) -> RenderResult<Self> {
        if fps == 0 {
            return Err(RenderError::Configuration("fps must be at least 1".into()));
        }
        self.fps = fps;
        Ok(self)
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn quality(&self) -> RenderQuality {
        self.quality
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Checks everything that could fail mid-animation and returns the path.
    fn plan(&self, slide: &Slide) -> RenderResult<Vec<Position>> {
        if slide.frame_count == 0 {
            return Err(RenderError::Configuration(
                "frame_count must be at least 1".into(),
            ));
        }
        self.renderer.block(slide.block)?;
        check_position(slide.start)?;
        check_position(slide.end)?;
        info!(
            block = %slide.block,
            start = ?slide.start,
            end = ?slide.end,
            frames = slide.frame_count,
            quality = %self.quality,
            "Planning slide"
        );
        Ok(interpolate_positions(slide.start, slide.end, slide.frame_count))
    }

    /// Renders every frame of `slide` in order.
    ///
    /// The target block is left at the final position.
    pub fn generate_inbetweens<R: ColumnResizer>(
        &mut self,
        slide: &Slide,
        assembler: &ImageAssembler<R>,
    ) -> RenderResult<Vec<R::Image>> {
        let path = self.plan(slide)?;
        let mut frames = Vec::with_capacity(path.len());
        for (i, position) in path.into_iter().enumerate() {
            self.renderer.block_mut(slide.block)?.set_position(position)?;
            frames.push(self.renderer.render_image(assembler, self.quality)?);
            debug!(frame = i, depth = position.depth, center = position.center, "Rendered frame");
        }
        Ok(frames)
    }

    /// Same frames as [`Animator::generate_inbetweens`], rendered on the rayon
    /// pool. Each frame works on its own clone of the scene.
    pub fn generate_inbetweens_parallel<R>(
        &mut self,
        slide: &Slide,
        assembler: &ImageAssembler<R>,
    ) -> RenderResult<Vec<R::Image>>
    where
        R: ColumnResizer + Sync,
        R::Image: Send,
    {
        let path = self.plan(slide)?;
        let base = &self.renderer;
        let quality = self.quality;
        let frames = path
            .par_iter()
            .map(|&position| {
                let mut scene = base.clone();
                scene.block_mut(slide.block)?.set_position(position)?;
                scene.render_image(assembler, quality)
            })
            .collect::<RenderResult<Vec<_>>>()?;

        if let Some(&last) = path.last() {
            self.renderer.block_mut(slide.block)?.set_position(last)?;
        }
        debug!(frames = frames.len(), "Rendered frames in parallel");
        Ok(frames)
    }

    /// Renders `slide` and hands the frames to `encoder`.
    pub fn slide<R, E>(
        &mut self,
        slide: &Slide,
        assembler: &ImageAssembler<R>,
        encoder: &mut E,
        destination: &Path,
    ) -> RenderResult<()>
    where
        R: ColumnResizer,
        E: VideoEncoder<R::Image>,
    {
        let frames = self.generate_inbetweens(slide, assembler)?;
        self.encode(&frames, encoder, destination)
    }

    /// Parallel counterpart of [`Animator::slide`].
    pub fn slide_parallel<R, E>(
        &mut self,
        slide: &Slide,
        assembler: &ImageAssembler<R>,
        encoder: &mut E,
        destination: &Path,
    ) -> RenderResult<()>
    where
        R: ColumnResizer + Sync,
        R::Image: Send,
        E: VideoEncoder<R::Image>,
    {
        let frames = self.generate_inbetweens_parallel(slide, assembler)?;
        self.encode(&frames, encoder, destination)
    }

    fn encode<F, E: VideoEncoder<F>>(
        &self,
        frames: &[F],
        encoder: &mut E,
        destination: &Path,
    ) -> RenderResult<()> {
        encoder
            .encode(frames, self.fps, destination)
            .map_err(RenderError::External)
    }
}
