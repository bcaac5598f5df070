//! Filter parameter stores (lighting, color matrix, blend) and the session
//! that selects which one is active.

pub mod blend;
pub mod blend_mode;
pub mod color_matrix;
pub mod lighting;
pub mod session;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PrismError;

/// Which filter the preview currently applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterKind {
    #[default]
    ColorMatrix,
    Lighting,
    Blend,
}

impl FilterKind {
    /// All filter kinds in selector order.
    pub const ALL: [FilterKind; 3] = [Self::ColorMatrix, Self::Lighting, Self::Blend];

    /// Label shown on the filter selector.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ColorMatrix => "Color",
            Self::Lighting => "Lighting",
            Self::Blend => "Blend",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterKind {
    type Err = PrismError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "color" | "colormatrix" | "color-matrix" | "matrix" => Ok(Self::ColorMatrix),
            "lighting" | "light" => Ok(Self::Lighting),
            "blend" | "tint" => Ok(Self::Blend),
            _ => Err(PrismError::UnknownFilterKind(s.to_string())),
        }
    }
}
