//! Blend modes available to the tint filter.
//!
//! The tint color is the *source* and each image pixel the *destination*.
//! Porter-Duff operators work on premultiplied colors; the separable and
//! non-separable modes follow the W3C Compositing and Blending formulas.
//! The math lives in [`crate::transform::composite`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PrismError;

/// Composition mode combining the tint color with each pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlendMode {
    // ── Porter-Duff ─────────────────────────────
    Clear,
    Src,
    Dst,
    #[default]
    SrcOver,
    SrcIn,
    DstIn,
    SrcOut,
    DstOut,
    SrcAtop,
    DstAtop,
    Xor,
    Plus,
    Modulate,

    // ── Separable ───────────────────────────────
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Multiply,

    // ── Non-separable ───────────────────────────
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    /// All blend modes in menu order.
    pub const ALL: [BlendMode; 28] = [
        Self::Color,
        Self::Clear,
        Self::ColorBurn,
        Self::ColorDodge,
        Self::Darken,
        Self::Difference,
        Self::Dst,
        Self::DstAtop,
        Self::DstIn,
        Self::DstOut,
        Self::Exclusion,
        Self::HardLight,
        Self::Hue,
        Self::Lighten,
        Self::Luminosity,
        Self::Modulate,
        Self::Multiply,
        Self::Overlay,
        Self::Plus,
        Self::Saturation,
        Self::Screen,
        Self::SoftLight,
        Self::Src,
        Self::SrcAtop,
        Self::SrcIn,
        Self::SrcOut,
        Self::SrcOver,
        Self::Xor,
    ];

    /// Name shown in the blend-mode menu.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Src => "Src",
            Self::Dst => "Dst",
            Self::SrcOver => "SrcOver",
            Self::SrcIn => "SrcIn",
            Self::DstIn => "DstIn",
            Self::SrcOut => "SrcOut",
            Self::DstOut => "DstOut",
            Self::SrcAtop => "SrcAtop",
            Self::DstAtop => "DstAtop",
            Self::Xor => "Xor",
            Self::Plus => "Plus",
            Self::Modulate => "Modulate",
            Self::Screen => "Screen",
            Self::Overlay => "Overlay",
            Self::Darken => "Darken",
            Self::Lighten => "Lighten",
            Self::ColorDodge => "ColorDodge",
            Self::ColorBurn => "ColorBurn",
            Self::HardLight => "HardLight",
            Self::SoftLight => "SoftLight",
            Self::Difference => "Difference",
            Self::Exclusion => "Exclusion",
            Self::Multiply => "Multiply",
            Self::Hue => "Hue",
            Self::Saturation => "Saturation",
            Self::Color => "Color",
            Self::Luminosity => "Luminosity",
        }
    }

    /// Whether the mode is a Porter-Duff operator rather than a blend function.
    pub const fn is_porter_duff(self) -> bool {
        matches!(
            self,
            Self::Clear
                | Self::Src
                | Self::Dst
                | Self::SrcOver
                | Self::SrcIn
                | Self::DstIn
                | Self::SrcOut
                | Self::DstOut
                | Self::SrcAtop
                | Self::DstAtop
                | Self::Xor
                | Self::Plus
                | Self::Modulate
        )
    }

    /// Whether the mode works on the whole color rather than per channel.
    pub const fn is_non_separable(self) -> bool {
        matches!(
            self,
            Self::Hue | Self::Saturation | Self::Color | Self::Luminosity
        )
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = PrismError;

    /// Accepts menu names case-insensitively, ignoring `-`, `_` and spaces,
    /// and the long spellings `source-*` / `destination-*`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        let key = key
            .replace("source", "src")
            .replace("destination", "dst");
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().to_ascii_lowercase() == key)
            .ok_or_else(|| PrismError::UnknownBlendMode(s.to_string()))
    }
}
