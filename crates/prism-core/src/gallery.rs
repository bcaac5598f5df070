//! Selectable list of images shown in the gallery strip.
//!
//! The built-in entries are generated procedurally so the app works without
//! any files on disk. More images can be pushed at runtime.

use palette::{FromColor, Hsv, Srgb};

use crate::error::PrismError;
use crate::image::FilterImage;

/// Size of the generated built-in images.
const BUILTIN_WIDTH: u32 = 640;
const BUILTIN_HEIGHT: u32 = 400;

/// One named gallery image.
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    pub name: String,
    pub image: FilterImage,
}

impl GalleryEntry {
    pub fn new(name: impl Into<String>, image: FilterImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }
}

/// Ordered, never-empty list of images with one selected entry.
#[derive(Debug, Clone)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
    selected: usize,
}

impl Gallery {
    /// Build a gallery selecting the first entry.
    pub fn new(entries: Vec<GalleryEntry>) -> Result<Self, PrismError> {
        if entries.is_empty() {
            return Err(PrismError::EmptyGallery);
        }
        Ok(Self {
            entries,
            selected: 0,
        })
    }

    /// The five generated sample images.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
            selected: 0,
        }
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &GalleryEntry {
        &self.entries[self.selected]
    }

    /// Select entry `index`. Returns `false` (and keeps the selection) when
    /// the index is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            tracing::warn!(
                "gallery index {index} out of range ({} entries)",
                self.entries.len()
            );
            return false;
        }
        self.selected = index;
        true
    }

    /// Move the selection by `offset`, wrapping around both ends.
    pub fn cycle(&mut self, offset: isize) {
        let len = self.entries.len() as isize;
        let next = (self.selected as isize + offset).rem_euclid(len);
        self.selected = next as usize;
    }

    /// Append an entry and return its index.
    pub fn push(&mut self, entry: GalleryEntry) -> usize {
        tracing::info!(
            "gallery: added '{}' ({}x{})",
            entry.name,
            entry.image.width,
            entry.image.height
        );
        self.entries.push(entry);
        self.entries.len() - 1
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_entries() -> Vec<GalleryEntry> {
    let (w, h) = (BUILTIN_WIDTH, BUILTIN_HEIGHT);
    vec![
        GalleryEntry::new("Sunset", sunset(w, h)),
        GalleryEntry::new("Hue Sweep", hue_sweep(w, h)),
        GalleryEntry::new("Color Bars", color_bars(w, h)),
        GalleryEntry::new("Gray Ramp", gray_ramp(w, h)),
        GalleryEntry::new("Glass", glass(w, h)),
    ]
}

fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Warm sky gradient with a sun disc above a dark horizon.
fn sunset(w: u32, h: u32) -> FilterImage {
    const SKY_TOP: [f32; 3] = [0.16, 0.10, 0.38];
    const SKY_HORIZON: [f32; 3] = [0.98, 0.55, 0.22];
    const GROUND: [f32; 3] = [0.08, 0.07, 0.10];
    const SUN: [f32; 3] = [1.0, 0.92, 0.62];

    let horizon = h as f32 * 0.7;
    let (sun_x, sun_y, sun_r) = (w as f32 * 0.62, horizon - h as f32 * 0.12, h as f32 * 0.11);
    FilterImage::from_fn(w, h, |x, y| {
        let (fx, fy) = (x as f32, y as f32);
        let rgb = if fy >= horizon {
            GROUND
        } else if (fx - sun_x).hypot(fy - sun_y) <= sun_r {
            SUN
        } else {
            lerp3(SKY_TOP, SKY_HORIZON, fy / horizon)
        };
        [rgb[0], rgb[1], rgb[2], 1.0]
    })
}

/// Hue across x, value falling along y, full saturation.
fn hue_sweep(w: u32, h: u32) -> FilterImage {
    FilterImage::from_fn(w, h, |x, y| {
        let hue = x as f32 / w as f32 * 360.0;
        let value = 1.0 - y as f32 / h as f32;
        let rgb = Srgb::from_color(Hsv::new(hue, 1.0, value));
        let [r, g, b] = [rgb.red, rgb.green, rgb.blue].map(|c| c.clamp(0.0, 1.0));
        [r, g, b, 1.0]
    })
}

/// Seven vertical bars: white, yellow, cyan, green, magenta, red, blue.
fn color_bars(w: u32, h: u32) -> FilterImage {
    const BARS: [[f32; 3]; 7] = [
        [0.75, 0.75, 0.75],
        [0.75, 0.75, 0.0],
        [0.0, 0.75, 0.75],
        [0.0, 0.75, 0.0],
        [0.75, 0.0, 0.75],
        [0.75, 0.0, 0.0],
        [0.0, 0.0, 0.75],
    ];
    FilterImage::from_fn(w, h, |x, _| {
        let i = ((x as usize * BARS.len()) / w as usize).min(BARS.len() - 1);
        let [r, g, b] = BARS[i];
        [r, g, b, 1.0]
    })
}

/// Horizontal black-to-white ramp.
fn gray_ramp(w: u32, h: u32) -> FilterImage {
    FilterImage::from_fn(w, h, |x, _| {
        let v = x as f32 / (w.max(2) - 1) as f32;
        [v, v, v, 1.0]
    })
}

/// Checkerboard whose alpha fades from opaque (left) to clear (right).
fn glass(w: u32, h: u32) -> FilterImage {
    const CELL: u32 = 40;
    const LIGHT: [f32; 3] = [0.35, 0.65, 0.85];
    const DARK: [f32; 3] = [0.95, 0.35, 0.45];
    FilterImage::from_fn(w, h, |x, y| {
        let rgb = if (x / CELL + y / CELL) % 2 == 0 { LIGHT } else { DARK };
        let alpha = 1.0 - x as f32 / w as f32;
        [rgb[0], rgb[1], rgb[2], alpha]
    })
}
