//! Shared fixtures for the integration tests.

use slicecast_shared::{
    block::{Block, BlockId},
    color::Rgb,
    error::RenderResult,
};

pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const CYAN: Rgb = Rgb::new(0, 255, 255);
pub const AMBER: Rgb = Rgb::new(255, 205, 50);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const PERIWINKLE: Rgb = Rgb::new(100, 125, 255);

/// Id of the block [`demo_blocks`] slides.
pub const MOVING: BlockId = BlockId(2);

/// Installs a test-friendly subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

/// Five-block demo scene: two thin bars, a huge backdrop, a block far above
/// the view and a mid-sized block overlapping the upper bar.
pub fn demo_blocks() -> RenderResult<Vec<Block>> {
    Ok(vec![
        Block::new(1.72, 0.3, 0.072)?.with_color(RED).with_id(BlockId(1)),
        Block::new(1.726, -0.22, 0.072)?.with_color(CYAN).with_id(MOVING),
        Block::new(5.0, 0.0, 100.0)?.with_color(AMBER).with_id(BlockId(3)),
        Block::new(1.0, 45.0, 0.4)?.with_color(GREEN).with_id(BlockId(4)),
        Block::new(1.73, 0.25, 0.25)?.with_color(PERIWINKLE).with_id(BlockId(5)),
    ])
}

/// The demo scene as a scene document, sliding block 2 over `frame_count` frames.
pub fn demo_scene_json(frame_count: usize) -> String {
    format!(
        r#"{{
        "camera": {{ "forced_screen_height": 1.0 }},
        "quality": {{ "custom": {{ "vector_resolution": 200, "width": 8, "height": 200 }} }},
        "blocks": [
            {{ "depth": 1.72, "center": 0.3, "extent": 0.072, "color": [255, 0, 0], "id": 1 }},
            {{ "depth": 1.726, "center": -0.22, "extent": 0.072, "color": [0, 255, 255], "id": 2 }},
            {{ "depth": 5.0, "center": 0.0, "extent": 100.0, "color": [255, 205, 50], "id": 3 }},
            {{ "depth": 1.0, "center": 45.0, "extent": 0.4, "color": [0, 255, 0], "id": 4 }},
            {{ "depth": 1.73, "center": 0.25, "extent": 0.25, "color": [100, 125, 255], "id": 5 }}
        ],
        "animation": {{ "block": 2, "start": [1.726, -0.22], "end": [5.4, 0.22], "frame_count": {frame_count}, "fps": 30 }}
    }}"#
    )
}
