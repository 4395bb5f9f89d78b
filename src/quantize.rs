//! Colour reduction using the median cut algorithm.
//!
//! Used when foreign artwork carries more colours than the palette slots it
//! is allowed to occupy.

use image::Rgb;
use std::collections::BTreeMap;

/// Count occurrences of each colour, ordered by RGB value.
pub(crate) fn histogram(colors: impl IntoIterator<Item = Rgb<u8>>) -> Vec<(Rgb<u8>, u32)> {
    let mut counts: BTreeMap<[u8; 3], u32> = BTreeMap::new();
    for color in colors {
        *counts.entry(color.0).or_insert(0) += 1;
    }
    counts.into_iter().map(|(rgb, count)| (Rgb(rgb), count)).collect()
}

/// A box of colors for median cut algorithm.
#[derive(Debug, Clone)]
struct ColorBox {
    colors: Vec<(Rgb<u8>, u32)>, // Color and count
}

#[derive(Debug, Clone, Copy)]
enum Channel {
    Red,
    Green,
    Blue,
}

impl ColorBox {
    fn new(colors: Vec<(Rgb<u8>, u32)>) -> Self {
        Self { colors }
    }

    /// Find which channel has the largest range.
    fn widest_channel(&self) -> Channel {
        let mut min = [255u8; 3];
        let mut max = [0u8; 3];

        for (color, _) in &self.colors {
            for c in 0..3 {
                min[c] = min[c].min(color[c]);
                max[c] = max[c].max(color[c]);
            }
        }

        let range_r = max[0].saturating_sub(min[0]);
        let range_g = max[1].saturating_sub(min[1]);
        let range_b = max[2].saturating_sub(min[2]);

        if range_r >= range_g && range_r >= range_b {
            Channel::Red
        } else if range_g >= range_b {
            Channel::Green
        } else {
            Channel::Blue
        }
    }

    /// Split the box into two along the widest channel.
    fn split(mut self) -> (ColorBox, ColorBox) {
        let channel = self.widest_channel();

        self.colors.sort_by_key(|(color, _)| match channel {
            Channel::Red => color[0],
            Channel::Green => color[1],
            Channel::Blue => color[2],
        });

        // Find median by pixel count
        let total: u32 = self.pixel_count();
        let mut running = 0u32;
        let mut split_idx = self.colors.len() / 2;

        for (i, (_, count)) in self.colors.iter().enumerate() {
            running += count;
            if running >= total / 2 {
                split_idx = (i + 1).min(self.colors.len() - 1);
                break;
            }
        }

        // Never produce an empty box
        split_idx = split_idx.max(1).min(self.colors.len() - 1);

        let right = self.colors.split_off(split_idx);
        (ColorBox::new(self.colors), ColorBox::new(right))
    }

    /// Average color of this box, weighted by pixel count.
    fn average_color(&self) -> Rgb<u8> {
        let total: u64 = self.colors.iter().map(|(_, count)| *count as u64).sum();
        if total == 0 {
            return Rgb([0, 0, 0]);
        }

        let mut sums = [0u64; 3];
        for (color, count) in &self.colors {
            for c in 0..3 {
                sums[c] += color[c] as u64 * *count as u64;
            }
        }

        Rgb([(sums[0] / total) as u8, (sums[1] / total) as u8, (sums[2] / total) as u8])
    }

    fn pixel_count(&self) -> u32 {
        self.colors.iter().map(|(_, count)| count).sum()
    }
}

/// Reduce a colour histogram to at most `max_colors` representative colours.
///
/// When the histogram already fits, its colours are returned unchanged in
/// histogram order. Output is deterministic for a given input order.
pub(crate) fn median_cut(colors: &[(Rgb<u8>, u32)], max_colors: usize) -> Vec<Rgb<u8>> {
    if max_colors == 0 || colors.is_empty() {
        return Vec::new();
    }
    if colors.len() <= max_colors {
        return colors.iter().map(|(c, _)| *c).collect();
    }

    let mut boxes = vec![ColorBox::new(colors.to_vec())];

    while boxes.len() < max_colors {
        // Split the most populated box that can still be split
        let Some((idx, _)) = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.colors.len() > 1)
            .max_by_key(|(_, b)| b.pixel_count())
        else {
            break;
        };

        let box_to_split = boxes.remove(idx);
        let (left, right) = box_to_split.split();
        boxes.push(left);
        boxes.push(right);
    }

    boxes.iter().map(ColorBox::average_color).collect()
}
