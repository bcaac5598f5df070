//! Lighting filter parameters: `out = in × multiply + add` per RGB channel.

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::param::{Channel, ParamRange};

/// Identity multiply color.
pub const DEFAULT_MULTIPLY: [f32; 3] = [1.0, 1.0, 1.0];
/// Identity add color.
pub const DEFAULT_ADD: [f32; 3] = [0.0, 0.0, 0.0];

/// Multiply and add colors of the lighting filter.
///
/// Every channel is bounded to `[0, 1]`; writes clamp. Alpha is not part of
/// this filter: reads of [`Channel::Alpha`] return the identity value and
/// writes to it are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredLighting")]
pub struct LightingParams {
    multiply: [f32; 3],
    add: [f32; 3],
}

#[derive(Deserialize)]
struct StoredLighting {
    multiply: [f32; 3],
    add: [f32; 3],
}

impl From<StoredLighting> for LightingParams {
    fn from(stored: StoredLighting) -> Self {
        Self {
            multiply: stored.multiply.map(|v| ParamRange::UNIT.clamp(v)),
            add: stored.add.map(|v| ParamRange::UNIT.clamp(v)),
        }
    }
}

impl Default for LightingParams {
    /// Identity: multiply white, add black.
    fn default() -> Self {
        Self {
            multiply: DEFAULT_MULTIPLY,
            add: DEFAULT_ADD,
        }
    }
}

impl LightingParams {
    pub fn multiply(&self) -> [f32; 3] {
        self.multiply
    }

    pub fn add(&self) -> [f32; 3] {
        self.add
    }

    pub fn multiply_channel(&self, channel: Channel) -> f32 {
        self.multiply.get(channel.index()).copied().unwrap_or(1.0)
    }

    pub fn add_channel(&self, channel: Channel) -> f32 {
        self.add.get(channel.index()).copied().unwrap_or(0.0)
    }

    /// Set one multiply channel, returning the stored (clamped) value.
    pub fn set_multiply_channel(&mut self, channel: Channel, value: f32) -> f32 {
        match self.multiply.get_mut(channel.index()) {
            Some(slot) => {
                *slot = ParamRange::UNIT.clamp(value);
                *slot
            }
            None => 1.0,
        }
    }

    /// Set one add channel, returning the stored (clamped) value.
    pub fn set_add_channel(&mut self, channel: Channel, value: f32) -> f32 {
        match self.add.get_mut(channel.index()) {
            Some(slot) => {
                *slot = ParamRange::UNIT.clamp(value);
                *slot
            }
            None => 0.0,
        }
    }

    pub fn set_multiply(&mut self, r: f32, g: f32, b: f32) {
        self.multiply = [r, g, b].map(|v| ParamRange::UNIT.clamp(v));
    }

    pub fn set_add(&mut self, r: f32, g: f32, b: f32) {
        self.add = [r, g, b].map(|v| ParamRange::UNIT.clamp(v));
    }

    /// Restore the identity multiply/add pair.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_identity(&self) -> bool {
        self.multiply == DEFAULT_MULTIPLY && self.add == DEFAULT_ADD
    }

    /// Multiply color as an sRGB swatch.
    pub fn multiply_color(&self) -> Srgb<f32> {
        let [r, g, b] = self.multiply;
        Srgb::new(r, g, b)
    }

    /// Add color as an sRGB swatch.
    pub fn add_color(&self) -> Srgb<f32> {
        let [r, g, b] = self.add;
        Srgb::new(r, g, b)
    }

    /// Multiply color packed as `0xAARRGGBB` with opaque alpha.
    pub fn multiply_packed(&self) -> u32 {
        pack_opaque(self.multiply_color())
    }

    /// Add color packed as `0xAARRGGBB` with opaque alpha.
    pub fn add_packed(&self) -> u32 {
        pack_opaque(self.add_color())
    }
}

fn pack_opaque(color: Srgb<f32>) -> u32 {
    let rgb: Srgb<u8> = color.into_format();
    0xFF00_0000 | (u32::from(rgb.red) << 16) | (u32::from(rgb.green) << 8) | u32::from(rgb.blue)
}
