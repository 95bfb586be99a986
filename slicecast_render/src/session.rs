//! Render session.
//!
//! A session is one validated scene plus the quality it renders at. Building
//! it checks the camera, the quality and every block, so a bad scene fails
//! before any pixel is produced.

use std::path::Path;

use anyhow::Context;
use image::RgbImage;
use slicecast_shared::{
    assembly::{ImageAssembler, NearestResizer},
    config::SceneConfig,
    error::RenderResult,
    quality::RenderQuality,
    renderer::Renderer,
};
use tracing::info;

pub struct RenderSession {
    renderer: Renderer,
    quality: RenderQuality,
    assembler: ImageAssembler<NearestResizer>,
}

impl RenderSession {
    pub fn new(cfg: &SceneConfig) -> RenderResult<Self> {
        let renderer = cfg.build_renderer()?;
        info!(
            blocks = renderer.blocks().len(),
            slope = renderer.camera().slope(),
            quality = %cfg.quality,
            "Render session ready"
        );
        Ok(Self {
            renderer,
            quality: cfg.quality,
            assembler: ImageAssembler::new(NearestResizer),
        })
    }

    pub fn with_quality(mut self, quality: RenderQuality) -> RenderResult<Self> {
        quality.validate()?;
        self.quality = quality;
        Ok(self)
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn quality(&self) -> RenderQuality {
        self.quality
    }

    pub fn render(&self) -> RenderResult<RgbImage> {
        self.renderer.render_image(&self.assembler, self.quality)
    }

    /// Renders and writes a PNG, creating parent directories as needed.
    pub fn render_to_path(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let img = self.render()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        img.save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), width = img.width(), height = img.height(), "Wrote image");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "camera": { "forced_screen_height": 1.0 },
        "quality": { "custom": { "vector_resolution": 10, "width": 2, "height": 20 } },
        "blocks": [ { "depth": 2.0, "center": 0.3, "extent": 0.16, "color": [255, 0, 0] } ]
    }"#;

    #[test]
    fn renders_scene_at_configured_size() {
        let cfg = SceneConfig::from_json_str(SCENE).unwrap();
        let img = RenderSession::new(&cfg).unwrap().render().unwrap();
        assert_eq!(img.dimensions(), (2, 20));
        // Partitions 7..=8 are red: rows 1..=2 of the column, 2..=5 after 2x upscale.
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(1, 3).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(0, 19).0, [255, 255, 255]);
    }

    #[test]
    fn quality_override_changes_size() {
        let cfg = SceneConfig::from_json_str(SCENE).unwrap();
        let session = RenderSession::new(&cfg)
            .unwrap()
            .with_quality(RenderQuality::Fast)
            .unwrap();
        assert_eq!(session.render().unwrap().dimensions(), (100, 500));
    }

    #[test]
    fn writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("still.png");
        let cfg = SceneConfig::from_json_str(SCENE).unwrap();
        RenderSession::new(&cfg).unwrap().render_to_path(&path).unwrap();
        let back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(back.dimensions(), (2, 20));
    }
}
