//! Image assembly.
//!
//! The core owns the final color column and the target size; pixel
//! resampling belongs to a [`ColumnResizer`] backend.

use anyhow::{ensure, Context};
use image::{imageops::FilterType, ImageBuffer, RgbImage};

use crate::{
    color::Rgb,
    error::{RenderError, RenderResult},
};

/// Turns a top-to-bottom color column into a `width x height` image.
pub trait ColumnResizer {
    type Image;

    fn resize(&self, column: &[Rgb], width: u32, height: u32) -> anyhow::Result<Self::Image>;
}

/// Returns the column untouched. Useful for headless tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullResizer;

impl ColumnResizer for NullResizer {
    type Image = Vec<Rgb>;

    fn resize(&self, column: &[Rgb], _width: u32, _height: u32) -> anyhow::Result<Vec<Rgb>> {
        Ok(column.to_vec())
    }
}

/// Nearest-neighbour upscaling through the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestResizer;

impl ColumnResizer for NearestResizer {
    type Image = RgbImage;

    fn resize(&self, column: &[Rgb], width: u32, height: u32) -> anyhow::Result<RgbImage> {
        ensure!(!column.is_empty(), "cannot resize an empty column");
        let rows = u32::try_from(column.len()).context("column taller than u32::MAX")?;
        let strip: RgbImage = ImageBuffer::from_fn(1, rows, |_, y| {
            image::Rgb(column[y as usize].to_array())
        });
        Ok(image::imageops::resize(&strip, width, height, FilterType::Nearest))
    }
}

/// Sizes columns into images through a resizer backend.
#[derive(Debug, Default, Clone)]
pub struct ImageAssembler<R> {
    resizer: R,
}

impl<R: ColumnResizer> ImageAssembler<R> {
    pub fn new(resizer: R) -> Self {
        Self { resizer }
    }

    pub fn resizer(&self) -> &R {
        &self.resizer
    }

    pub fn assemble(&self, column: &[Rgb], (width, height): (u32, u32)) -> RenderResult<R::Image> {
        if width == 0 || height == 0 {
            return Err(RenderError::config(format!(
                "image resolution must be non-zero, got {width}x{height}"
            )));
        }
        self.resizer
            .resize(column, width, height)
            .map_err(RenderError::External)
    }
}
