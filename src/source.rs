use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;

use crate::color::Color;
use crate::error::SchemeError;

/// One pixel of a source, with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub x: u32,
    pub y: u32,
    pub color: Color,
}

/// A rectangular grid of colors, scanned row-major.
pub trait PixelSource {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Color at `(x, y)`. Callers stay within `dimensions()`.
    fn color_at(&self, x: u32, y: u32) -> Color;

    fn pixel_count(&self) -> u64 {
        let (w, h) = self.dimensions();
        u64::from(w) * u64::from(h)
    }

    /// All samples, top to bottom, left to right.
    fn samples(&self) -> Samples<'_, Self>
    where
        Self: Sized,
    {
        Samples {
            source: self,
            x: 0,
            y: 0,
        }
    }
}

/// Row-major iterator over a [`PixelSource`].
pub struct Samples<'a, S> {
    source: &'a S,
    x: u32,
    y: u32,
}

impl<S: PixelSource> Iterator for Samples<'_, S> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        let (w, h) = self.source.dimensions();
        if w == 0 || self.y >= h {
            return None;
        }
        let sample = Sample {
            x: self.x,
            y: self.y,
            color: self.source.color_at(self.x, self.y),
        };
        self.x += 1;
        if self.x == w {
            self.x = 0;
            self.y += 1;
        }
        Some(sample)
    }
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbImage::dimensions(self)
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        let p = self.get_pixel(x, y);
        Color::new(p[0], p[1], p[2])
    }
}

/// In-memory pixel grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelGrid {
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A single-row grid holding `pixels` in order.
    ///
    /// The width is a `u32`, so a row holds at most `u32::MAX` pixels.
    pub fn from_row(pixels: Vec<Color>) -> Result<Self, SchemeError> {
        let width = u32::try_from(pixels.len())
            .map_err(|_| SchemeError::RowTooLong { len: pixels.len() })?;
        let height = u32::from(!pixels.is_empty());
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

impl PixelSource for PixelGrid {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// Decode an image file into 8-bit RGB. Alpha is dropped; nothing is resized.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).with_context(|| {
        if !path.exists() {
            format!("file not found: {}", path.display())
        } else {
            format!(
                "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
                path.display()
            )
        }
    })?;
    Ok(img.to_rgb8())
}
