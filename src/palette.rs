//! Fixed 256-entry palettes for indexed pictures.
//!
//! The game draws everything through a single 256-colour table. The first
//! sixteen entries are the classic EGA colours so classic-mode artwork stays
//! addressable by the same indices.

use image::Rgb;
use std::ops::RangeInclusive;

/// Number of entries in every palette.
pub const PALETTE_SIZE: usize = 256;

/// Classic 16-colour EGA set, entries 0..16 of the standard palette.
pub const EGA_COLOURS: [[u8; 3]; 16] = [
    [0x00, 0x00, 0x00], // 0: Black
    [0x00, 0x00, 0xAA], // 1: Blue
    [0x00, 0xAA, 0x00], // 2: Green
    [0x00, 0xAA, 0xAA], // 3: Cyan
    [0xAA, 0x00, 0x00], // 4: Red
    [0xAA, 0x00, 0xAA], // 5: Magenta
    [0xAA, 0x55, 0x00], // 6: Brown
    [0xAA, 0xAA, 0xAA], // 7: Light grey
    [0x55, 0x55, 0x55], // 8: Dark grey
    [0x55, 0x55, 0xFF], // 9: Light blue
    [0x55, 0xFF, 0x55], // 10: Light green
    [0x55, 0xFF, 0xFF], // 11: Light cyan
    [0xFF, 0x55, 0x55], // 12: Light red
    [0xFF, 0x55, 0xFF], // 13: Light magenta
    [0xFF, 0xFF, 0x55], // 14: Yellow
    [0xFF, 0xFF, 0xFF], // 15: White
];

/// Channel levels of the 6x6x6 colour cube stored after the EGA block.
const CUBE_LEVELS: [u8; 6] = [0, 51, 102, 153, 204, 255];

/// A 256-colour RGB palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb<u8>; PALETTE_SIZE],
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// Create an all-black palette.
    pub fn new() -> Self {
        Self { colors: [Rgb([0, 0, 0]); PALETTE_SIZE] }
    }

    /// The game's standard palette: EGA block, 6x6x6 cube, then a 24-step grey ramp.
    pub fn standard() -> Self {
        let mut palette = Self::new();
        for (i, rgb) in EGA_COLOURS.iter().enumerate() {
            palette.colors[i] = Rgb(*rgb);
        }

        let mut index = EGA_COLOURS.len();
        for r in CUBE_LEVELS {
            for g in CUBE_LEVELS {
                for b in CUBE_LEVELS {
                    palette.colors[index] = Rgb([r, g, b]);
                    index += 1;
                }
            }
        }

        for step in 0..(PALETTE_SIZE - index) {
            let level = (8 + step * 10) as u8;
            palette.colors[index + step] = Rgb([level, level, level]);
        }

        palette
    }

    /// Build a palette from a list of colours; missing entries stay black and
    /// anything past 256 entries is ignored.
    pub fn from_colors(colors: &[Rgb<u8>]) -> Self {
        let mut palette = Self::new();
        for (slot, color) in palette.colors.iter_mut().zip(colors) {
            *slot = *color;
        }
        palette
    }

    pub fn get(&self, index: u8) -> Rgb<u8> {
        self.colors[index as usize]
    }

    pub fn set(&mut self, index: u8, color: Rgb<u8>) {
        self.colors[index as usize] = color;
    }

    pub fn colors(&self) -> &[Rgb<u8>] {
        &self.colors
    }

    /// Find the entry in `range` closest to `color` by squared RGB distance.
    ///
    /// Ties resolve to the lowest index. An empty range yields index 0.
    pub fn nearest(&self, color: Rgb<u8>, range: RangeInclusive<u8>) -> u8 {
        range.min_by_key(|&i| (distance_sq(color, self.get(i)), i)).unwrap_or(0)
    }
}

/// Squared euclidean distance between two RGB colours.
pub fn distance_sq(a: Rgb<u8>, b: Rgb<u8>) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&x, &y)| {
            let d = x as i32 - y as i32;
            (d * d) as u32
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_palette_starts_with_ega() {
        let palette = Palette::standard();
        assert_eq!(palette.get(0), Rgb([0, 0, 0]));
        assert_eq!(palette.get(4), Rgb([0xAA, 0, 0]));
        assert_eq!(palette.get(15), Rgb([0xFF, 0xFF, 0xFF]));
    }

    #[test]
    fn test_standard_palette_cube_and_greys() {
        let palette = Palette::standard();
        // First cube entry is black, last is white
        assert_eq!(palette.get(16), Rgb([0, 0, 0]));
        assert_eq!(palette.get(16 + 215), Rgb([255, 255, 255]));
        // Grey ramp fills the tail
        assert_eq!(palette.get(232), Rgb([8, 8, 8]));
        assert_eq!(palette.get(255), Rgb([238, 238, 238]));
    }

    #[test]
    fn test_from_colors_pads_with_black() {
        let palette = Palette::from_colors(&[Rgb([1, 2, 3]), Rgb([4, 5, 6])]);
        assert_eq!(palette.get(1), Rgb([4, 5, 6]));
        assert_eq!(palette.get(2), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_nearest_respects_range() {
        let palette = Palette::standard();
        // Pure red is index 4 in the EGA block but excluded here
        let idx = palette.nearest(Rgb([0xAA, 0, 0]), 5..=15);
        assert_ne!(idx, 4);
        assert!((5..=15).contains(&idx));

        assert_eq!(palette.nearest(Rgb([0xAA, 0, 0]), 1..=15), 4);
    }

    #[test]
    fn test_nearest_prefers_lowest_index_on_tie() {
        // Black appears at 0 and 16; restricted to 1..=255 the cube black wins
        let palette = Palette::standard();
        assert_eq!(palette.nearest(Rgb([0, 0, 0]), 1..=255), 16);
        assert_eq!(palette.nearest(Rgb([0, 0, 0]), 0..=255), 0);
    }

    #[test]
    fn test_distance_sq() {
        assert_eq!(distance_sq(Rgb([0, 0, 0]), Rgb([3, 4, 0])), 25);
        assert_eq!(distance_sq(Rgb([9, 9, 9]), Rgb([9, 9, 9])), 0);
    }
}
