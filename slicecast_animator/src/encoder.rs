//! Video encoding boundary.

use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{ensure, Context};
use image::{
    codecs::gif::{GifEncoder, Repeat},
    Delay, DynamicImage, Frame, RgbImage,
};
use tracing::info;

/// Writes an ordered frame sequence to `destination` at a fixed frame rate.
pub trait VideoEncoder<F> {
    fn encode(&mut self, frames: &[F], fps: u32, destination: &Path) -> anyhow::Result<()>;
}

/// Looping animated GIF.
#[derive(Debug, Default, Clone, Copy)]
pub struct GifVideoEncoder;

impl VideoEncoder<RgbImage> for GifVideoEncoder {
    fn encode(&mut self, frames: &[RgbImage], fps: u32, destination: &Path) -> anyhow::Result<()> {
        ensure!(!frames.is_empty(), "no frames to encode");
        ensure!(fps > 0, "fps must be at least 1");

        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let file = File::create(destination)
            .with_context(|| format!("create {}", destination.display()))?;

        let mut gif = GifEncoder::new(BufWriter::new(file));
        gif.set_repeat(Repeat::Infinite).context("gif repeat")?;
        let delay = Delay::from_numer_denom_ms(1000, fps);
        for (i, frame) in frames.iter().enumerate() {
            let rgba = DynamicImage::ImageRgb8(frame.clone()).into_rgba8();
            gif.encode_frame(Frame::from_parts(rgba, 0, 0, delay))
                .with_context(|| format!("encode frame {i}"))?;
        }

        info!(path = %destination.display(), frames = frames.len(), fps, "Wrote animation");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use image::AnimationDecoder;

    use super::*;

    #[test]
    fn gif_roundtrip_frame_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("anim.gif");
        let frames: Vec<RgbImage> = [[255u8, 0, 0], [0, 0, 255], [255, 255, 255]]
            .into_iter()
            .map(|px| RgbImage::from_pixel(4, 8, image::Rgb(px)))
            .collect();

        GifVideoEncoder.encode(&frames, 30, &path).unwrap();

        let file = std::io::BufReader::new(File::open(&path).unwrap());
        let decoded = image::codecs::gif::GifDecoder::new(file)
            .unwrap()
            .into_frames()
            .collect_frames()
            .unwrap();
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[0].buffer().dimensions(), (4, 8));
    }

    #[test]
    fn empty_sequence_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = GifVideoEncoder
            .encode(&[], 30, &dir.path().join("x.gif"))
            .unwrap_err();
        assert!(err.to_string().contains("no frames"));
    }
}
