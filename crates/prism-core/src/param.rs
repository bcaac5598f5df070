//! Bounded scalar fields shared by every parameter store.
//!
//! A [`ParamField`] addresses one editable value across the lighting,
//! color-matrix and blend stores. Each field knows its [`ParamRange`], its
//! default drag step and how it is displayed.

use serde::{Deserialize, Serialize};

/// Number of drag steps that span a field's full range.
const STEPS_PER_RANGE: f32 = 50.0;

/// Inclusive `[min, max]` bounds of an editable field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
}

impl ParamRange {
    /// Color channels: lighting multiply/add and the blend tint.
    pub const UNIT: Self = Self::new(0.0, 1.0);
    /// Color-matrix coefficients (columns 0..=3).
    pub const MATRIX_COEFFICIENT: Self = Self::new(-1.0, 1.0);
    /// Color-matrix offset column, in 0..255 channel units.
    pub const MATRIX_OFFSET: Self = Self::new(0.0, 255.0);

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the range. NaN maps to `min`.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Step applied per drag event: `(max - min) / 50`.
    pub fn default_step(&self) -> f32 {
        (self.max - self.min) / STEPS_PER_RANGE
    }
}

/// How a field's value is rendered in its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFormat {
    /// Two decimals, e.g. `0.39`.
    Decimal,
    /// Rounded to a whole number, e.g. `255`.
    Integer,
}

impl ValueFormat {
    pub fn format(self, value: f32) -> String {
        match self {
            Self::Decimal => format!("{value:.2}"),
            Self::Integer => format!("{value:.0}"),
        }
    }
}

/// A color channel index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// Channels edited by the lighting filter.
    pub const RGB: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
    /// Channels edited by the blend tint.
    pub const RGBA: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Alpha => 3,
        }
    }

    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Red => "R",
            Self::Green => "G",
            Self::Blue => "B",
            Self::Alpha => "A",
        }
    }
}

/// Address of one editable scalar in a [`FilterSession`](crate::FilterSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamField {
    /// Color-matrix cell. `row` in `0..4`, `col` in `0..5`.
    Matrix { row: usize, col: usize },
    /// Lighting multiply color channel. Alpha is not part of the lighting filter.
    Multiply(Channel),
    /// Lighting add color channel. Alpha is not part of the lighting filter.
    Add(Channel),
    /// Blend tint color channel.
    Tint(Channel),
}

impl ParamField {
    /// Index of the offset column in a color-matrix row.
    pub const MATRIX_OFFSET_COLUMN: usize = 4;

    /// Bounds that writes to this field are clamped to.
    pub fn range(self) -> ParamRange {
        match self {
            Self::Matrix { col, .. } if col == Self::MATRIX_OFFSET_COLUMN => {
                ParamRange::MATRIX_OFFSET
            }
            Self::Matrix { .. } => ParamRange::MATRIX_COEFFICIENT,
            Self::Multiply(_) | Self::Add(_) | Self::Tint(_) => ParamRange::UNIT,
        }
    }

    /// Display format of this field's label.
    pub fn format(self) -> ValueFormat {
        match self {
            Self::Matrix { col, .. } if col == Self::MATRIX_OFFSET_COLUMN => ValueFormat::Integer,
            _ => ValueFormat::Decimal,
        }
    }

    /// Every color-matrix cell, row-major.
    pub fn matrix_cells() -> impl Iterator<Item = ParamField> {
        (0..4).flat_map(|row| (0..5).map(move |col| ParamField::Matrix { row, col }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_is_idempotent() {
        let range = ParamRange::MATRIX_COEFFICIENT;
        for v in [-1e9, -3.5, -1.0, 0.25, 1.0, 7.0, f32::INFINITY, f32::NEG_INFINITY] {
            let once = range.clamp(v);
            assert!(range.contains(once), "{v} clamped to {once}");
            assert_eq!(range.clamp(once), once);
        }
    }

    #[test]
    fn test_clamp_nan_maps_to_min() {
        assert_eq!(ParamRange::MATRIX_OFFSET.clamp(f32::NAN), 0.0);
        assert_eq!(ParamRange::MATRIX_COEFFICIENT.clamp(f32::NAN), -1.0);
    }

    #[test]
    fn test_default_step_is_fiftieth_of_range() {
        assert!((ParamRange::UNIT.default_step() - 0.02).abs() < 1e-7);
        assert!((ParamRange::MATRIX_COEFFICIENT.default_step() - 0.04).abs() < 1e-7);
        assert!((ParamRange::MATRIX_OFFSET.default_step() - 5.1).abs() < 1e-5);
    }

    #[test]
    fn test_offset_column_uses_integer_format() {
        let offset = ParamField::Matrix { row: 2, col: 4 };
        assert_eq!(offset.range(), ParamRange::MATRIX_OFFSET);
        assert_eq!(offset.format().format(254.6), "255");

        let coeff = ParamField::Matrix { row: 2, col: 3 };
        assert_eq!(coeff.range(), ParamRange::MATRIX_COEFFICIENT);
        assert_eq!(coeff.format().format(0.393), "0.39");
    }

    #[test]
    fn test_matrix_cells_cover_grid() {
        let cells: Vec<_> = ParamField::matrix_cells().collect();
        assert_eq!(cells.len(), 20);
        assert_eq!(cells[0], ParamField::Matrix { row: 0, col: 0 });
        assert_eq!(cells[19], ParamField::Matrix { row: 3, col: 4 });
    }
}
