//! Blend (tint) filter parameters: one RGBA color plus a blend mode.

use palette::Srgba;
use serde::{Deserialize, Serialize};

use crate::filters::blend_mode::BlendMode;
use crate::param::{Channel, ParamRange};

/// Default tint: fully transparent white.
pub const DEFAULT_TINT: [f32; 4] = [1.0, 1.0, 1.0, 0.0];

/// Tint color and blend mode of the blend filter. Channels are bounded to `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredBlend")]
pub struct BlendParams {
    color: [f32; 4],
    mode: BlendMode,
}

#[derive(Deserialize)]
struct StoredBlend {
    color: [f32; 4],
    mode: BlendMode,
}

impl From<StoredBlend> for BlendParams {
    fn from(stored: StoredBlend) -> Self {
        Self {
            color: stored.color.map(|v| ParamRange::UNIT.clamp(v)),
            mode: stored.mode,
        }
    }
}

impl Default for BlendParams {
    fn default() -> Self {
        Self {
            color: DEFAULT_TINT,
            mode: BlendMode::SrcOver,
        }
    }
}

impl BlendParams {
    /// Straight-alpha RGBA tint.
    pub fn rgba(&self) -> [f32; 4] {
        self.color
    }

    pub fn channel(&self, channel: Channel) -> f32 {
        self.color[channel.index()]
    }

    /// Set one tint channel, returning the stored (clamped) value.
    pub fn set_channel(&mut self, channel: Channel, value: f32) -> f32 {
        let slot = &mut self.color[channel.index()];
        *slot = ParamRange::UNIT.clamp(value);
        *slot
    }

    /// Tint color as an sRGBA swatch.
    pub fn color(&self) -> Srgba<f32> {
        let [r, g, b, a] = self.color;
        Srgba::new(r, g, b, a)
    }

    /// Replace the whole tint, clamping each channel.
    pub fn set_color(&mut self, color: Srgba<f32>) {
        self.color = [color.red, color.green, color.blue, color.alpha]
            .map(|v| ParamRange::UNIT.clamp(v));
    }

    /// Tint packed as `0xAARRGGBB`.
    pub fn packed(&self) -> u32 {
        let c: Srgba<u8> = self.color().into_format();
        (u32::from(c.alpha) << 24)
            | (u32::from(c.red) << 16)
            | (u32::from(c.green) << 8)
            | u32::from(c.blue)
    }

    pub fn mode(&self) -> BlendMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: BlendMode) {
        self.mode = mode;
    }

    /// Restore transparent white with source-over.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_clamps_tint() {
        let json = r#"{"color":[2.0,-1.0,0.5,0.25],"mode":"Screen"}"#;
        let params: BlendParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.rgba(), [1.0, 0.0, 0.5, 0.25]);
        assert_eq!(params.mode(), BlendMode::Screen);
    }

    #[test]
    fn test_default_is_transparent_white_src_over() {
        let params = BlendParams::default();
        assert_eq!(params.rgba(), [1.0, 1.0, 1.0, 0.0]);
        assert_eq!(params.mode(), BlendMode::SrcOver);
        assert_eq!(params.packed(), 0x00FF_FFFF);
    }

    #[test]
    fn test_channel_writes_clamp() {
        let mut params = BlendParams::default();
        assert_eq!(params.set_channel(Channel::Alpha, 1.5), 1.0);
        assert_eq!(params.set_channel(Channel::Green, -0.1), 0.0);
        assert_eq!(params.rgba(), [1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_set_color_clamps() {
        let mut params = BlendParams::default();
        params.set_color(Srgba::new(2.0, 0.25, -1.0, 0.5));
        assert_eq!(params.rgba(), [1.0, 0.25, 0.0, 0.5]);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut params = BlendParams::default();
        params.set_channel(Channel::Red, 0.2);
        params.set_mode(BlendMode::Multiply);
        params.reset();
        assert_eq!(params, BlendParams::default());
    }
}
