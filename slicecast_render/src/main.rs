//! Standalone still renderer.
//!
//! Usage:
//!   cargo run -p slicecast_render -- scene.json [--output outputs/render.png] [--quality fast]
//!
//! `--quality` accepts `fast`, `accurate`, or `RESOLUTION:WIDTHxHEIGHT` and
//! overrides the scene's own quality.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use slicecast_render::RenderSession;
use slicecast_shared::{config::SceneConfig, quality::RenderQuality};
use tracing::info;

#[derive(Parser)]
#[command(name = "render", about = "Render a depth-block scene to a PNG column image")]
struct Cli {
    /// Scene description (JSON).
    scene: PathBuf,

    /// Output image path.
    #[arg(long, short, default_value = "outputs/render.png")]
    output: PathBuf,

    /// Override the scene's quality preset.
    #[arg(long)]
    quality: Option<RenderQuality>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    info!(scene = %cli.scene.display(), output = %cli.output.display(), "Starting render");

    let cfg = SceneConfig::from_path(&cli.scene)?;
    let mut session = RenderSession::new(&cfg).context("build scene")?;
    if let Some(quality) = cli.quality {
        session = session.with_quality(quality)?;
    }
    session.render_to_path(&cli.output)?;
    Ok(())
}
