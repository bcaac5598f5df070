//! The color filter handed to the renderer, and its CPU evaluation.

use serde::{Deserialize, Serialize};

use crate::filters::blend_mode::BlendMode;
use crate::image::FilterImage;
use crate::transform::composite::composite;

/// Matrix offsets are in 8-bit channel units; pixels are in `[0, 1]`.
const OFFSET_SCALE: f32 = 1.0 / 255.0;

/// A fully-resolved color filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColorFilter {
    /// Row-major 4×5 matrix applied to straight-alpha RGBA.
    ColorMatrix([f32; 20]),
    /// `out = in × multiply + add` per RGB channel; alpha untouched.
    Lighting { multiply: [f32; 3], add: [f32; 3] },
    /// Tint color composited over every pixel with `mode`.
    Tint { color: [f32; 4], mode: BlendMode },
}

impl ColorFilter {
    /// Filter a single straight-alpha RGBA pixel. Output is clamped to `[0, 1]`.
    pub fn apply_pixel(&self, rgba: [f32; 4]) -> [f32; 4] {
        match self {
            Self::ColorMatrix(m) => {
                let mut out = [0.0_f32; 4];
                for (row, value) in out.iter_mut().enumerate() {
                    let r = &m[row * 5..row * 5 + 5];
                    let v = r[0] * rgba[0]
                        + r[1] * rgba[1]
                        + r[2] * rgba[2]
                        + r[3] * rgba[3]
                        + r[4] * OFFSET_SCALE;
                    *value = v.clamp(0.0, 1.0);
                }
                out
            }
            Self::Lighting { multiply, add } => [
                (rgba[0] * multiply[0] + add[0]).clamp(0.0, 1.0),
                (rgba[1] * multiply[1] + add[1]).clamp(0.0, 1.0),
                (rgba[2] * multiply[2] + add[2]).clamp(0.0, 1.0),
                rgba[3],
            ],
            Self::Tint { color, mode } => composite(*color, rgba, *mode),
        }
    }

    /// Filter every pixel of `image` into a new image of the same size.
    pub fn apply(&self, image: &FilterImage) -> FilterImage {
        let pixels = image.pixels.iter().map(|p| self.apply_pixel(*p)).collect();
        FilterImage {
            width: image.width,
            height: image.height,
            pixels,
        }
    }

    /// Short description for logs and the status line.
    pub fn summary(&self) -> String {
        match self {
            Self::ColorMatrix(_) => "color matrix".to_string(),
            Self::Lighting { multiply, add } => format!(
                "lighting mul=({:.2}, {:.2}, {:.2}) add=({:.2}, {:.2}, {:.2})",
                multiply[0], multiply[1], multiply[2], add[0], add[1], add[2]
            ),
            Self::Tint { color, mode } => format!(
                "tint ({:.2}, {:.2}, {:.2}, {:.2}) {mode}",
                color[0], color[1], color[2], color[3]
            ),
        }
    }
}
