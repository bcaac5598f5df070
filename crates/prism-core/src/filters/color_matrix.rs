//! 4×5 color-matrix filter parameters and the sepia / grayscale / invert presets.
//!
//! Each row computes one output channel from the four input channels plus a
//! constant offset:
//!
//! ```text
//!   R' = m[0][0]·R + m[0][1]·G + m[0][2]·B + m[0][3]·A + m[0][4]
//!   G' = m[1][0]·R + ...                                + m[1][4]
//!   B' = ...
//!   A' = ...
//! ```
//!
//! Coefficients (columns 0..=3) are bounded to `[-1, 1]`. The offset column is
//! expressed in 8-bit channel units and bounded to `[0, 255]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PrismError;
use crate::param::{ParamField, ParamRange};

/// Output channels (rows).
pub const ROWS: usize = 4;
/// Input channels plus offset (columns).
pub const COLUMNS: usize = 5;

/// Identity matrix: ones on the 4×4 diagonal, zero offsets.
pub const IDENTITY: [[f32; COLUMNS]; ROWS] = [
    [1.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
];

/// Sepia weights for the RGB rows' RGB columns.
pub const SEPIA_RGB: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Rec. 601 luminance weights, used by the grayscale preset on every RGB row.
pub const GRAYSCALE_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Offset added by the invert preset to each RGB row.
pub const INVERT_OFFSET: f32 = 255.0;

/// Named matrix presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatrixPreset {
    Sepia,
    Grayscale,
    Invert,
}

impl MatrixPreset {
    /// All presets in button order.
    pub const ALL: [MatrixPreset; 3] = [Self::Sepia, Self::Grayscale, Self::Invert];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sepia => "Sepia",
            Self::Grayscale => "Grayscale",
            Self::Invert => "Inverse",
        }
    }
}

impl fmt::Display for MatrixPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MatrixPreset {
    type Err = PrismError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sepia" => Ok(Self::Sepia),
            "grayscale" | "greyscale" | "gray" | "grey" => Ok(Self::Grayscale),
            "invert" | "inverse" | "negative" => Ok(Self::Invert),
            _ => Err(PrismError::UnknownPreset(s.to_string())),
        }
    }
}

/// Editable 4×5 color matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredMatrix")]
pub struct ColorMatrixParams {
    matrix: [[f32; COLUMNS]; ROWS],
}

#[derive(Deserialize)]
struct StoredMatrix {
    matrix: [[f32; COLUMNS]; ROWS],
}

impl From<StoredMatrix> for ColorMatrixParams {
    fn from(stored: StoredMatrix) -> Self {
        let mut matrix = stored.matrix;
        for row in &mut matrix {
            for (col, cell) in row.iter_mut().enumerate() {
                *cell = Self::column_range(col).clamp(*cell);
            }
        }
        Self { matrix }
    }
}

impl Default for ColorMatrixParams {
    fn default() -> Self {
        Self { matrix: IDENTITY }
    }
}

impl ColorMatrixParams {
    /// Bounds of a column: offsets for the last column, coefficients otherwise.
    pub fn column_range(col: usize) -> ParamRange {
        ParamField::Matrix { row: 0, col }.range()
    }

    /// Cell value. Out-of-grid addresses read as 0.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.matrix
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0.0)
    }

    /// Write one cell, clamped to its column range. Returns the stored value,
    /// or `None` when `(row, col)` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Option<f32> {
        let slot = self.matrix.get_mut(row)?.get_mut(col)?;
        *slot = Self::column_range(col).clamp(value);
        Some(*slot)
    }

    pub fn rows(&self) -> &[[f32; COLUMNS]; ROWS] {
        &self.matrix
    }

    /// Restore the identity matrix.
    pub fn reset(&mut self) {
        self.matrix = IDENTITY;
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == IDENTITY
    }

    /// Reset to identity, then overwrite the preset's cells.
    pub fn apply_preset(&mut self, preset: MatrixPreset) {
        self.reset();
        match preset {
            MatrixPreset::Sepia => {
                for (row, weights) in SEPIA_RGB.iter().enumerate() {
                    self.matrix[row][..3].copy_from_slice(weights);
                }
            }
            MatrixPreset::Grayscale => {
                for row in 0..3 {
                    self.matrix[row][..3].copy_from_slice(&GRAYSCALE_WEIGHTS);
                }
            }
            MatrixPreset::Invert => {
                for row in 0..3 {
                    self.matrix[row][row] = -1.0;
                    self.matrix[row][COLUMNS - 1] = INVERT_OFFSET;
                }
            }
        }
        tracing::debug!("applied color matrix preset {preset}");
    }

    /// Row-major flattened matrix as handed to the renderer.
    pub fn to_array(&self) -> [f32; ROWS * COLUMNS] {
        let mut out = [0.0_f32; ROWS * COLUMNS];
        for (i, value) in self.matrix.iter().flatten().enumerate() {
            out[i] = *value;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_clamps_cells() {
        let mut matrix = IDENTITY;
        matrix[0][0] = 3.0;
        matrix[1][2] = -7.5;
        matrix[2][4] = 900.0;
        matrix[3][4] = -1.0;
        let json = serde_json::json!({ "matrix": matrix }).to_string();
        let params: ColorMatrixParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params.get(0, 0), 1.0);
        assert_eq!(params.get(1, 2), -1.0);
        assert_eq!(params.get(2, 4), 255.0);
        assert_eq!(params.get(3, 4), 0.0);
        assert_eq!(params.get(1, 1), 1.0);
    }

    #[test]
    fn test_default_is_identity() {
        let params = ColorMatrixParams::default();
        assert!(params.is_identity());
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(params.get(row, col), expected, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_writes_clamp_per_column() {
        let mut params = ColorMatrixParams::default();
        assert_eq!(params.set(0, 1, 3.0), Some(1.0));
        assert_eq!(params.set(1, 2, -3.0), Some(-1.0));
        assert_eq!(params.set(2, 4, 400.0), Some(255.0));
        assert_eq!(params.set(3, 4, -10.0), Some(0.0));
        assert_eq!(params.set(4, 0, 0.5), None);
        assert_eq!(params.set(0, 5, 0.5), None);
    }

    #[test]
    fn test_grayscale_preset() {
        let mut params = ColorMatrixParams::default();
        params.set(0, 4, 128.0);
        params.apply_preset(MatrixPreset::Grayscale);
        for row in 0..3 {
            assert_eq!(params.get(row, 0), 0.299);
            assert_eq!(params.get(row, 1), 0.587);
            assert_eq!(params.get(row, 2), 0.114);
            assert_eq!(params.get(row, 3), 0.0);
            assert_eq!(params.get(row, 4), 0.0);
        }
        assert_eq!(params.rows()[3], IDENTITY[3]);
    }

    #[test]
    fn test_invert_preset() {
        let mut params = ColorMatrixParams::default();
        params.apply_preset(MatrixPreset::Invert);
        for row in 0..3 {
            assert_eq!(params.get(row, row), -1.0);
            assert_eq!(params.get(row, 4), 255.0);
        }
        assert_eq!(params.get(3, 3), 1.0);
        assert_eq!(params.get(3, 4), 0.0);
    }

    #[test]
    fn test_sepia_preset_replaces_previous_edits() {
        let mut params = ColorMatrixParams::default();
        params.apply_preset(MatrixPreset::Invert);
        params.apply_preset(MatrixPreset::Sepia);
        assert_eq!(params.get(0, 0), 0.393);
        assert_eq!(params.get(1, 1), 0.686);
        assert_eq!(params.get(2, 2), 0.131);
        for row in 0..ROWS {
            assert_eq!(params.get(row, 4), 0.0);
        }
    }

    #[test]
    fn test_reset_restores_identity() {
        let mut params = ColorMatrixParams::default();
        params.apply_preset(MatrixPreset::Sepia);
        params.set(3, 0, 0.5);
        params.reset();
        assert_eq!(params, ColorMatrixParams::default());
    }

    #[test]
    fn test_to_array_is_row_major() {
        let mut params = ColorMatrixParams::default();
        params.set(1, 4, 17.0);
        let flat = params.to_array();
        assert_eq!(flat[0], 1.0);
        assert_eq!(flat[6], 1.0);
        assert_eq!(flat[9], 17.0);
        assert_eq!(flat[18], 1.0);
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!("Inverse".parse::<MatrixPreset>().unwrap(), MatrixPreset::Invert);
        assert_eq!("grey".parse::<MatrixPreset>().unwrap(), MatrixPreset::Grayscale);
        assert!("vintage".parse::<MatrixPreset>().is_err());
    }
}
