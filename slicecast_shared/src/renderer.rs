//! The projection engine: blocks in, composited color column out.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::{
    block::{Block, BlockId},
    camera::{Camera, ProjectionScreen},
    color::Rgb,
    composite::{composite, PaintedBlock},
    error::{RenderError, RenderResult},
    assembly::{ColumnResizer, ImageAssembler},
    projection::{paint, project, project_onto_screen, quantize, Coverage, Slices},
    quality::RenderQuality,
};

/// Owns the scene for a render session.
///
/// The camera and projection screen are fixed at construction. Blocks may be
/// moved between renders through [`Renderer::block_mut`]; each render starts
/// from their current positions.
#[derive(Debug, Clone)]
pub struct Renderer {
    camera: Camera,
    screen: ProjectionScreen,
    blocks: Vec<Block>,
    background: Rgb,
}

impl Renderer {
    /// Fails if two blocks share an identity.
    pub fn new(blocks: Vec<Block>, camera: Camera) -> RenderResult<Self> {
        let mut seen = HashSet::new();
        for id in blocks.iter().filter_map(Block::id) {
            if !seen.insert(id) {
                return Err(RenderError::config(format!("duplicate block id {id}")));
            }
        }
        Ok(Self {
            screen: camera.projection_screen(),
            camera,
            blocks,
            background: Rgb::default(),
        })
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn screen(&self) -> &ProjectionScreen {
        &self.screen
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: BlockId) -> RenderResult<&Block> {
        self.blocks
            .iter()
            .find(|b| b.id() == Some(id))
            .ok_or(RenderError::Lookup(id))
    }

    pub fn block_mut(&mut self, id: BlockId) -> RenderResult<&mut Block> {
        self.blocks
            .iter_mut()
            .find(|b| b.id() == Some(id))
            .ok_or(RenderError::Lookup(id))
    }

    /// Partitions `block` occupies after projection, clipping and normalization.
    pub fn coverage(&self, block: &Block, slices: &Slices) -> RenderResult<Coverage> {
        let normalized = project(block, &self.screen)?
            .clip(&self.screen)
            .normalize(&self.screen);
        let coverage = project_onto_screen(&normalized, slices);
        trace!(
            id = ?block.id(),
            depth = block.depth(),
            top = normalized.top,
            bottom = normalized.bottom,
            partitions = coverage.len(),
            "block projected"
        );
        Ok(coverage)
    }

    pub fn paint_block(&self, block: &Block, slices: &Slices) -> RenderResult<PaintedBlock> {
        let coverage = self.coverage(block, slices)?;
        Ok(PaintedBlock {
            depth: block.depth(),
            color: block.color(),
            column: paint(&coverage, slices.len(), block.color(), self.background),
        })
    }

    /// Composited column for every block, top row first.
    pub fn render_column(&self, resolution: usize) -> RenderResult<Vec<Rgb>> {
        let slices = quantize(resolution)?;
        let layers = self
            .blocks
            .iter()
            .map(|block| self.paint_block(block, &slices))
            .collect::<RenderResult<Vec<_>>>()?;
        let visible = layers
            .iter()
            .filter(|l| l.column.iter().any(|c| *c != self.background))
            .count();
        debug!(
            blocks = self.blocks.len(),
            visible, resolution, "column composited"
        );
        Ok(composite(&layers, resolution, self.background))
    }

    /// Renders the column at `quality` and hands it to `assembler` for upscaling.
    pub fn render_image<R: ColumnResizer>(
        &self,
        assembler: &ImageAssembler<R>,
        quality: RenderQuality,
    ) -> RenderResult<R::Image> {
        quality.validate()?;
        let column = self.render_column(quality.vector_resolution())?;
        assembler.assemble(&column, quality.image_resolution())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::NullResizer;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn unit_camera() -> Camera {
        Camera::with_forced_screen_height(1.0).unwrap()
    }

    #[test]
    fn lookup_by_id() {
        let blocks = vec![
            Block::new(1.0, 0.0, 0.1).unwrap().with_id(BlockId(1)),
            Block::new(2.0, 0.0, 0.1).unwrap().with_id(BlockId(2)),
        ];
        let mut renderer = Renderer::new(blocks, unit_camera()).unwrap();
        assert_eq!(renderer.block(BlockId(2)).unwrap().depth(), 2.0);
        assert!(matches!(
            renderer.block_mut(BlockId(9)),
            Err(RenderError::Lookup(BlockId(9)))
        ));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let blocks = vec![
            Block::new(1.0, 0.0, 0.1).unwrap().with_id(BlockId(1)),
            Block::new(2.0, 0.0, 0.1).unwrap().with_id(BlockId(1)),
        ];
        assert!(matches!(
            Renderer::new(blocks, unit_camera()),
            Err(RenderError::Configuration(_))
        ));
    }

    #[test]
    fn nearer_block_occludes_farther_one() {
        // Both span the middle of the screen; the near one is smaller.
        let far = Block::new(4.0, 0.0, 1.5).unwrap().with_color(BLUE);
        let near = Block::new(2.0, 0.0, 0.16).unwrap().with_color(RED);
        let renderer = Renderer::new(vec![near, far], unit_camera()).unwrap();
        let column = renderer.render_column(10).unwrap();
        assert_eq!(column[0], Rgb::WHITE);
        assert_eq!(column[2], BLUE);
        assert_eq!(column[5], RED);
        assert_eq!(column[9], Rgb::WHITE);
    }

    #[test]
    fn off_screen_block_renders_nothing() {
        let hidden = Block::new(1.0, 45.0, 0.4).unwrap().with_color(RED);
        let renderer = Renderer::new(vec![hidden], unit_camera()).unwrap();
        assert_eq!(renderer.render_column(20).unwrap(), vec![Rgb::WHITE; 20]);
    }

    #[test]
    fn column_is_top_row_first() {
        let upper = Block::new(2.0, 0.3, 0.16).unwrap().with_color(RED);
        let renderer = Renderer::new(vec![upper], unit_camera()).unwrap();
        let column = renderer.render_column(10).unwrap();
        // Normalized [0.72, 0.88] covers partitions 7..=8, i.e. rows 1..=2 from the top.
        assert_eq!(column[0], Rgb::WHITE);
        assert!(column[1..=2].iter().all(|c| *c == RED));
        assert!(column[3..].iter().all(|c| *c == Rgb::WHITE));
    }

    #[test]
    fn render_image_uses_quality_resolution() {
        let renderer = Renderer::new(vec![], Camera::default())
            .unwrap()
            .with_background(BLUE);
        let quality = RenderQuality::Custom {
            vector_resolution: 7,
            width: 3,
            height: 14,
        };
        let column = renderer
            .render_image(&ImageAssembler::new(NullResizer), quality)
            .unwrap();
        assert_eq!(column, vec![BLUE; 7]);
    }
}
