//! Render quality presets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// Partition count plus output image size.
///
/// Presets only scale quantization and the upscaled image; projection math is
/// the same at every quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderQuality {
    /// 1 000 partitions, 100x500 image.
    #[default]
    Fast,
    /// 100 000 partitions, 300x1500 image.
    Accurate,
    Custom {
        vector_resolution: usize,
        width: u32,
        height: u32,
    },
}

impl RenderQuality {
    pub fn vector_resolution(&self) -> usize {
        match *self {
            RenderQuality::Fast => 1_000,
            RenderQuality::Accurate => 100_000,
            RenderQuality::Custom {
                vector_resolution, ..
            } => vector_resolution,
        }
    }

    /// `(width, height)` of the upscaled image.
    pub fn image_resolution(&self) -> (u32, u32) {
        match *self {
            RenderQuality::Fast => (100, 500),
            RenderQuality::Accurate => (300, 1500),
            RenderQuality::Custom { width, height, .. } => (width, height),
        }
    }

    pub fn validate(&self) -> RenderResult<()> {
        let (width, height) = self.image_resolution();
        if self.vector_resolution() == 0 {
            return Err(RenderError::config("vector_resolution must be at least 1"));
        }
        if width == 0 || height == 0 {
            return Err(RenderError::config(format!(
                "image resolution must be non-zero, got {width}x{height}"
            )));
        }
        Ok(())
    }
}

impl fmt::Display for RenderQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderQuality::Fast => f.write_str("fast"),
            RenderQuality::Accurate => f.write_str("accurate"),
            RenderQuality::Custom {
                vector_resolution,
                width,
                height,
            } => write!(f, "{vector_resolution}:{width}x{height}"),
        }
    }
}

/// Parses `fast`, `accurate`, or `RESOLUTION:WIDTHxHEIGHT`.
impl FromStr for RenderQuality {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || RenderError::config(format!("unrecognized quality {s:?}"));
        let quality = match s.trim().to_ascii_lowercase().as_str() {
            "fast" => RenderQuality::Fast,
            "accurate" => RenderQuality::Accurate,
            custom => {
                let (res, size) = custom.split_once(':').ok_or_else(bad)?;
                let (w, h) = size.split_once('x').ok_or_else(bad)?;
                RenderQuality::Custom {
                    vector_resolution: res.parse().map_err(|_| bad())?,
                    width: w.parse().map_err(|_| bad())?,
                    height: h.parse().map_err(|_| bad())?,
                }
            }
        };
        quality.validate()?;
        Ok(quality)
    }
}
