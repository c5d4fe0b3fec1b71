//! Disk color assignment.
//!
//! Each disk gets a bright HSL color. Colors are drawn from a seeded
//! `PuzzleRng`, so a given seed always produces the same palette.

use crate::core::{Disk, PuzzleRng};

/// Hue range in degrees.
const HUE: std::ops::Range<u32> = 0..360;
/// Saturation range in percent. High, so disks stand out.
const SATURATION: std::ops::Range<u32> = 70..100;
/// Lightness range in percent.
const LIGHTNESS: std::ops::Range<u32> = 40..70;

/// An HSL color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiskColor {
    /// Hue in degrees, 0..360.
    pub hue: u16,
    /// Saturation in percent.
    pub saturation: u8,
    /// Lightness in percent.
    pub lightness: u8,
}

impl DiskColor {
    /// CSS color string, e.g. `hsl(120, 80%, 50%)`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }

    fn random(rng: &mut PuzzleRng) -> Self {
        Self {
            hue: rng.gen_range(HUE) as u16,
            saturation: rng.gen_range(SATURATION) as u8,
            lightness: rng.gen_range(LIGHTNESS) as u8,
        }
    }
}

/// One color per disk, indexed by disk size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiskPalette {
    colors: Vec<DiskColor>,
}

impl DiskPalette {
    /// Draw a palette for `disk_count` disks from `rng`.
    #[must_use]
    pub fn random(disk_count: u32, rng: &mut PuzzleRng) -> Self {
        Self {
            colors: (0..disk_count).map(|_| DiskColor::random(rng)).collect(),
        }
    }

    /// Draw a palette from a fresh RNG seeded with `seed`.
    #[must_use]
    pub fn seeded(disk_count: u32, seed: u64) -> Self {
        Self::random(disk_count, &mut PuzzleRng::new(seed))
    }

    /// Color of a disk, or `None` for a disk outside the palette.
    #[must_use]
    pub fn color(&self, disk: Disk) -> Option<DiskColor> {
        let index = disk.size().checked_sub(1)?;
        self.colors.get(index as usize).copied()
    }

    /// CSS color strings, smallest disk first.
    #[must_use]
    pub fn css_colors(&self) -> Vec<String> {
        self.colors.iter().map(DiskColor::css).collect()
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the palette is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_size() {
        let palette = DiskPalette::seeded(5, 42);
        assert_eq!(palette.len(), 5);
        assert!(palette.color(Disk(1)).is_some());
        assert!(palette.color(Disk(5)).is_some());
        assert!(palette.color(Disk(0)).is_none());
        assert!(palette.color(Disk(6)).is_none());
    }

    #[test]
    fn test_palette_deterministic() {
        assert_eq!(DiskPalette::seeded(8, 7), DiskPalette::seeded(8, 7));
        assert_ne!(DiskPalette::seeded(8, 7), DiskPalette::seeded(8, 8));
    }

    #[test]
    fn test_color_ranges() {
        let palette = DiskPalette::seeded(64, 1);
        for size in 1..=64 {
            let color = palette.color(Disk(size)).unwrap();
            assert!(color.hue < 360);
            assert!((70..100).contains(&color.saturation));
            assert!((40..70).contains(&color.lightness));
        }
    }

    #[test]
    fn test_css_colors_follow_disk_sizes() {
        let palette = DiskPalette::seeded(4, 3);
        let css = palette.css_colors();

        assert_eq!(css.len(), 4);
        for (size, color) in Disk::largest_first(4).rev().zip(&css) {
            assert_eq!(palette.color(size).map(|c| c.css()).as_ref(), Some(color));
        }
        assert!(DiskPalette::default().css_colors().is_empty());
    }

    #[test]
    fn test_css() {
        let color = DiskColor {
            hue: 120,
            saturation: 80,
            lightness: 50,
        };
        assert_eq!(color.css(), "hsl(120, 80%, 50%)");
    }
}
