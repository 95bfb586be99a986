//! Scene configuration.
//!
//! Scenes are JSON documents. Parsing is lenient about omitted sections
//! (everything but the block list has a default) and strict about unknown
//! keys, so a typo in a field name fails loudly instead of silently using a
//! default.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    block::{Block, BlockId},
    camera::Camera,
    color::Rgb,
    error::{RenderError, RenderResult},
    math::Position,
    quality::RenderQuality,
    renderer::Renderer,
};

/// Root scene document shared by the render and animate binaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub quality: RenderQuality,
    /// Color of partitions no block covers.
    #[serde(default)]
    pub background: Rgb,
    #[serde(default)]
    pub blocks: Vec<BlockConfig>,
    /// Only read by the animator.
    #[serde(default)]
    pub animation: Option<AnimationConfig>,
}

/// At most one of the two fields may be set; neither means the default field of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_screen_height: Option<f64>,
}

impl CameraConfig {
    pub fn is_unset(&self) -> bool {
        self.theta.is_none() && self.forced_screen_height.is_none()
    }

    pub fn build(&self) -> RenderResult<Camera> {
        Camera::new(self.theta, self.forced_screen_height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockConfig {
    pub depth: f64,
    pub center: f64,
    pub extent: f64,
    #[serde(default = "default_block_color")]
    pub color: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BlockId>,
}

fn default_block_color() -> Rgb {
    Rgb::BLACK
}

impl BlockConfig {
    pub fn build(&self) -> RenderResult<Block> {
        let block = Block::new(self.depth, self.center, self.extent)?.with_color(self.color);
        Ok(match self.id {
            Some(id) => block.with_id(id),
            None => block,
        })
    }
}

/// Slide one block linearly between two `[depth, center]` positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    pub block: BlockId,
    pub start: Position,
    pub end: Position,
    pub frame_count: usize,
    #[serde(default = "default_fps")]
    pub fps: u32,
}

fn default_fps() -> u32 {
    30
}

impl SceneConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read scene {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("parse scene {}", path.display()))
    }

    pub fn build_blocks(&self) -> RenderResult<Vec<Block>> {
        self.blocks.iter().map(BlockConfig::build).collect()
    }

    /// Validates the whole scene and builds a renderer for it.
    pub fn build_renderer(&self) -> RenderResult<Renderer> {
        self.quality.validate()?;
        if let Some(anim) = &self.animation {
            if anim.fps == 0 {
                return Err(RenderError::config("animation fps must be at least 1"));
            }
        }
        Ok(Renderer::new(self.build_blocks()?, self.camera.build()?)?
            .with_background(self.background))
    }
}
