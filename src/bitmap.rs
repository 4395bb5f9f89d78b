//! Indexed pictures and the primitive operations portraits are built from.
//!
//! A [`Picture`] is a grid of palette indices plus the palette they refer to.
//! Index 0 is the transparent index: layers skip it when composited and RGBA
//! export renders it fully transparent.

use image::{Rgb, Rgba, RgbaImage};
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::palette::{Palette, PALETTE_SIZE};
use crate::quantize::{histogram, median_cut};

/// The transparent palette index.
pub const TRANSPARENT_INDEX: u8 = 0;

/// Alpha below this is treated as transparent when importing RGBA artwork.
const ALPHA_CUTOFF: u8 = 128;

/// Error type for picture construction and decoding.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BitmapError {
    /// Embedded image bytes could not be decoded
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    /// Pixel buffer does not match the stated dimensions
    #[error("expected {expected} pixels for {width}x{height}, got {actual}")]
    PixelCount { width: u32, height: u32, expected: usize, actual: usize },
}

/// An indexed-colour image with its own palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    palette: Palette,
}

impl Picture {
    /// Create a blank picture (every pixel transparent).
    pub fn new(width: u32, height: u32, palette: Palette) -> Self {
        Self { width, height, pixels: vec![TRANSPARENT_INDEX; (width * height) as usize], palette }
    }

    /// Wrap an existing index buffer.
    pub fn from_indices(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
        palette: Palette,
    ) -> Result<Self, BitmapError> {
        let expected = (width * height) as usize;
        if pixels.len() != expected {
            return Err(BitmapError::PixelCount { width, height, expected, actual: pixels.len() });
        }
        Ok(Self { width, height, pixels, palette })
    }

    /// Decode embedded image bytes (GIF, PNG, BMP) into an indexed picture.
    pub fn decode(bytes: &[u8]) -> Result<Self, BitmapError> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self::from_rgba(&image.to_rgba8()))
    }

    /// Index an RGBA image.
    ///
    /// Pixels with alpha below 128 become index 0. Opaque colours fill
    /// palette entries from 1 upward, reduced with median cut when there are
    /// more than 255 of them.
    pub fn from_rgba(image: &RgbaImage) -> Self {
        let opaque = image
            .pixels()
            .filter(|p| p[3] >= ALPHA_CUTOFF)
            .map(|p| Rgb([p[0], p[1], p[2]]));
        let colors = median_cut(&histogram(opaque), 255);

        let mut palette = Palette::new();
        for (i, color) in colors.iter().enumerate() {
            palette.set(i as u8 + 1, *color);
        }
        let last = colors.len() as u8;

        let pixels = image
            .pixels()
            .map(|p| {
                if p[3] < ALPHA_CUTOFF || last == 0 {
                    TRANSPARENT_INDEX
                } else {
                    palette.nearest(Rgb([p[0], p[1], p[2]]), 1..=last)
                }
            })
            .collect();

        Self { width: image.width(), height: image.height(), pixels, palette }
    }

    /// Render to RGBA; index 0 becomes fully transparent.
    pub fn to_rgba(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let index = self.pixels[self.offset(x, y)];
            if index == TRANSPARENT_INDEX {
                Rgba([0, 0, 0, 0])
            } else {
                let Rgb([r, g, b]) = self.palette.get(index);
                Rgba([r, g, b, 255])
            }
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Palette index at (x, y), or `None` outside the picture.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.offset(x, y)])
        } else {
            None
        }
    }

    /// Set a pixel; writes outside the picture are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, index: u8) {
        if x < self.width && y < self.height {
            let offset = self.offset(x, y);
            self.pixels[offset] = index;
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Copy a rectangular region into a new picture with the same palette.
    ///
    /// Source pixels outside this picture read as transparent.
    pub fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Picture {
        let mut out = Picture::new(width, height, self.palette.clone());
        for dy in 0..height {
            for dx in 0..width {
                if let Some(index) = self.pixel(x + dx, y + dy) {
                    out.set_pixel(dx, dy, index);
                }
            }
        }
        out
    }

    /// Composite `layer` onto this picture with its top-left corner at (x, y).
    ///
    /// Transparent layer pixels are skipped; anything past the edge is clipped.
    /// The layer's indices are copied as-is, both pictures must share a palette.
    pub fn add_layer(&mut self, layer: &Picture, x: u32, y: u32) {
        for ly in 0..layer.height {
            for lx in 0..layer.width {
                let index = layer.pixels[layer.offset(lx, ly)];
                if index != TRANSPARENT_INDEX {
                    self.set_pixel(x + lx, y + ly, index);
                }
            }
        }
    }

    /// Replace every `from` index with `to` inside the given rectangle.
    pub fn colour_replace(&mut self, from: u8, to: u8, x: u32, y: u32, width: u32, height: u32) {
        let x_end = (x + width).min(self.width);
        let y_end = (y + height).min(self.height);
        for py in y..y_end {
            for px in x..x_end {
                let offset = self.offset(px, py);
                if self.pixels[offset] == from {
                    self.pixels[offset] = to;
                }
            }
        }
    }

    /// Re-index every visible pixel to the nearest colour of `target` among
    /// entries `start..=end`. The result carries `target` as its palette.
    pub fn match_colours(&self, target: &Palette, start: u8, end: u8) -> Picture {
        self.reindex(target.clone(), start..=end)
    }

    /// Rebase this picture into `count` palette slots starting at `start`.
    ///
    /// The visible colours are reduced to at most `count` with median cut and
    /// written into a copy of `base`; pixels are re-indexed into that slot
    /// range. Slots past index 255 are dropped.
    pub fn make_palette(&self, start: u8, count: u8, base: &Palette) -> Picture {
        let slots = (count as usize).min(PALETTE_SIZE - start as usize);
        let visible = self
            .pixels
            .iter()
            .filter(|&&index| index != TRANSPARENT_INDEX)
            .map(|&index| self.palette.get(index));
        let colors = median_cut(&histogram(visible), slots);

        let mut palette = base.clone();
        for (i, color) in colors.iter().enumerate() {
            palette.set(start + i as u8, *color);
        }

        if colors.is_empty() {
            return Picture::new(self.width, self.height, palette);
        }

        let last = start + (colors.len() - 1) as u8;
        self.reindex(palette, start..=last)
    }

    /// Map each visible pixel to the closest entry of `palette` within `range`.
    fn reindex(&self, palette: Palette, range: RangeInclusive<u8>) -> Picture {
        let mut lookup: [Option<u8>; PALETTE_SIZE] = [None; PALETTE_SIZE];
        let pixels = self
            .pixels
            .iter()
            .map(|&index| {
                if index == TRANSPARENT_INDEX {
                    return TRANSPARENT_INDEX;
                }
                *lookup[index as usize].get_or_insert_with(|| {
                    palette.nearest(self.palette.get(index), range.clone())
                })
            })
            .collect();

        Picture { width: self.width, height: self.height, pixels, palette }
    }
}
