//! Image representation for the filter preview.

use image::imageops::FilterType;
use image::{DynamicImage, ImageBuffer, Rgba, Rgba32FImage};

use crate::error::PrismError;

/// Internal image representation. Always stored as straight-alpha RGBA f32
/// in display encoding, `[0, 1]` per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Row-major pixel data.
    pub pixels: Vec<[f32; 4]>,
}

impl FilterImage {
    /// Build an image, checking that `pixels` covers `width × height`.
    pub fn new(width: u32, height: u32, pixels: Vec<[f32; 4]>) -> Result<Self, PrismError> {
        if pixels.len() != width as usize * height as usize {
            return Err(PrismError::ImageSize {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image filled with one color.
    pub fn solid(width: u32, height: u32, rgba: [f32; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgba; width as usize * height as usize],
        }
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [f32; 4]) -> Self {
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

    /// Convert a decoded image. Channels are normalized but not linearized.
    pub fn from_dynamic(img: &DynamicImage) -> Self {
        let rgba = img.to_rgba32f();
        let (width, height) = rgba.dimensions();
        let pixels = rgba.pixels().map(|p| p.0).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }

    fn to_rgba32f(&self) -> Rgba32FImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            Rgba(self.pixels[y as usize * self.width as usize + x as usize])
        })
    }

    /// Downscale so that neither side exceeds `max_dim`, keeping aspect.
    /// Images already within bounds are returned unchanged.
    pub fn fit_within(&self, max_dim: u32) -> Self {
        let max_dim = max_dim.max(1);
        if self.width <= max_dim && self.height <= max_dim {
            return self.clone();
        }
        let scale = max_dim as f32 / self.width.max(self.height) as f32;
        let w = ((self.width as f32 * scale).round() as u32).max(1);
        let h = ((self.height as f32 * scale).round() as u32).max(1);
        let resized = image::imageops::resize(&self.to_rgba32f(), w, h, FilterType::Triangle);
        Self {
            width: w,
            height: h,
            pixels: resized.pixels().map(|p| p.0).collect(),
        }
    }

    /// Quantize to tightly packed RGBA8 bytes for upload as an sRGB texture.
    pub fn to_rgba8_bytes(&self) -> Vec<u8> {
        let quantized: Vec<[u8; 4]> = self
            .pixels
            .iter()
            .map(|p| p.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
            .collect();
        bytemuck::cast_slice(&quantized).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_length() {
        assert!(FilterImage::new(2, 2, vec![[0.0; 4]; 3]).is_err());
        assert!(FilterImage::new(2, 2, vec![[0.0; 4]; 4]).is_ok());
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let img = FilterImage::from_fn(3, 2, |x, y| [x as f32, y as f32, 0.0, 1.0]);
        assert_eq!(img.pixel(2, 0), Some([2.0, 0.0, 0.0, 1.0]));
        assert_eq!(img.pixel(0, 1), Some([0.0, 1.0, 0.0, 1.0]));
        assert_eq!(img.pixel(3, 0), None);
    }

    #[test]
    fn test_rgba8_bytes() {
        let img = FilterImage::solid(2, 1, [1.0, 0.0, 0.5, 2.0]);
        assert_eq!(img.to_rgba8_bytes(), vec![255, 0, 128, 255, 255, 0, 128, 255]);
    }

    #[test]
    fn test_fit_within_keeps_aspect() {
        let img = FilterImage::solid(400, 100, [0.5, 0.5, 0.5, 1.0]);
        let small = img.fit_within(100);
        assert_eq!((small.width, small.height), (100, 25));
        assert_eq!(small.pixels.len(), 2500);
        for p in &small.pixels {
            assert!((p[0] - 0.5).abs() < 1e-3);
        }
        assert_eq!(img.fit_within(1000), img);
    }

    #[test]
    fn test_from_dynamic_normalizes() {
        let buf = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 51, 255]));
        let img = FilterImage::from_dynamic(&DynamicImage::ImageRgba8(buf));
        assert_eq!(img.pixels.len(), 4);
        assert_eq!(img.pixels[0][0], 1.0);
        assert!((img.pixels[0][2] - 0.2).abs() < 1e-6);
    }
}
