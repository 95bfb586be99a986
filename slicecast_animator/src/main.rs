//! Standalone animator.
//!
//! Usage:
//!   cargo run -p slicecast_animator -- scene.json [--output outputs/output.gif] [--quality accurate] [--parallel]
//!
//! The scene must carry an `animation` section naming the block to slide.
//! Without a `camera` section the animator uses a unit-height projection
//! screen.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use slicecast_animator::{animator::DEFAULT_DESTINATION, Animator, GifVideoEncoder, Slide};
use slicecast_shared::{
    assembly::{ImageAssembler, NearestResizer},
    config::SceneConfig,
    quality::RenderQuality,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "animate", about = "Slide one depth block across a scene and write a GIF")]
struct Cli {
    /// Scene description (JSON) with an `animation` section.
    scene: PathBuf,

    /// Output animation path.
    #[arg(long, short, default_value = DEFAULT_DESTINATION)]
    output: PathBuf,

    /// Override the scene's quality preset.
    #[arg(long)]
    quality: Option<RenderQuality>,

    /// Render frames on all cores.
    #[arg(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = SceneConfig::from_path(&cli.scene)?;
    let slide = cfg
        .animation
        .as_ref()
        .map(Slide::from)
        .context("scene has no animation section")?;

    let mut animator = Animator::from_scene(&cfg).context("build scene")?;
    if let Some(quality) = cli.quality {
        animator = animator.with_quality(quality)?;
    }
    info!(
        scene = %cli.scene.display(),
        output = %cli.output.display(),
        parallel = cli.parallel,
        "Starting animation"
    );

    let assembler = ImageAssembler::new(NearestResizer);
    let mut encoder = GifVideoEncoder;
    if cli.parallel {
        animator.slide_parallel(&slide, &assembler, &mut encoder, &cli.output)?;
    } else {
        animator.slide(&slide, &assembler, &mut encoder, &cli.output)?;
    }
    Ok(())
}
