//! File outputs of the render and animate paths.

use slicecast_animator::{Animator, GifVideoEncoder, Slide};
use slicecast_render::RenderSession;
use slicecast_shared::{
    assembly::{ImageAssembler, NearestResizer},
    config::SceneConfig,
};
use slicecast_tests::{demo_scene_json, init_tracing};

#[test]
fn still_render_writes_png() -> anyhow::Result<()> {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("still.png");

    let cfg = SceneConfig::from_json_str(&demo_scene_json(3))?;
    RenderSession::new(&cfg)?.render_to_path(&path)?;

    let image = image::open(&path)?.to_rgb8();
    assert_eq!(image.dimensions(), (8, 200));
    // Amber backdrop reaches the top and bottom rows.
    assert_eq!(image.get_pixel(0, 0).0, [255, 205, 50]);
    assert_eq!(image.get_pixel(7, 199).0, [255, 205, 50]);
    Ok(())
}

#[test]
fn animation_writes_gif_and_parallel_is_identical() -> anyhow::Result<()> {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let cfg = SceneConfig::from_json_str(&demo_scene_json(6))?;
    let slide = Slide::from(cfg.animation.as_ref().expect("scene has animation"));
    let assembler = ImageAssembler::new(NearestResizer);

    let sequential = dir.path().join("seq.gif");
    Animator::from_scene(&cfg)?.slide(&slide, &assembler, &mut GifVideoEncoder, &sequential)?;

    let parallel = dir.path().join("par.gif");
    Animator::from_scene(&cfg)?.slide_parallel(
        &slide,
        &assembler,
        &mut GifVideoEncoder,
        &parallel,
    )?;

    assert_eq!(std::fs::read(&sequential)?, std::fs::read(&parallel)?);

    use image::AnimationDecoder;
    let file = std::io::BufReader::new(std::fs::File::open(&sequential)?);
    let frames = image::codecs::gif::GifDecoder::new(file)?
        .into_frames()
        .collect_frames()?;
    assert_eq!(frames.len(), 6);
    assert_eq!(frames[0].buffer().dimensions(), (8, 200));
    Ok(())
}

#[test]
fn bad_scene_fails_before_writing() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("never.png");
    let cfg = SceneConfig::from_json_str(
        r#"{ "camera": { "theta": 0.5, "forced_screen_height": 1 }, "blocks": [] }"#,
    )?;
    assert!(RenderSession::new(&cfg).is_err());
    assert!(!path.exists());
    Ok(())
}
