//! Screen-level filter state: the three parameter stores plus the active kind.
//!
//! All UI edits go through [`FilterSession`] addressed by [`ParamField`], so the
//! same drag label code drives every store.

use serde::{Deserialize, Serialize};

use crate::filters::FilterKind;
use crate::filters::blend::BlendParams;
use crate::filters::blend_mode::BlendMode;
use crate::filters::color_matrix::{ColorMatrixParams, MatrixPreset};
use crate::filters::lighting::LightingParams;
use crate::param::ParamField;
use crate::stepper::DragStepper;
use crate::transform::filter::ColorFilter;

/// The three independent filter stores and which one drives the preview.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSession {
    pub active: FilterKind,
    pub lighting: LightingParams,
    pub color_matrix: ColorMatrixParams,
    pub blend: BlendParams,
}

impl FilterSession {
    pub fn new(active: FilterKind) -> Self {
        Self {
            active,
            ..Default::default()
        }
    }

    /// Read one field.
    pub fn get(&self, field: ParamField) -> f32 {
        match field {
            ParamField::Matrix { row, col } => self.color_matrix.get(row, col),
            ParamField::Multiply(ch) => self.lighting.multiply_channel(ch),
            ParamField::Add(ch) => self.lighting.add_channel(ch),
            ParamField::Tint(ch) => self.blend.channel(ch),
        }
    }

    /// Write one field, clamped to its range. Returns the stored value.
    pub fn set(&mut self, field: ParamField, value: f32) -> f32 {
        match field {
            ParamField::Matrix { row, col } => self
                .color_matrix
                .set(row, col, value)
                .unwrap_or_else(|| {
                    tracing::warn!("ignoring write to matrix cell ({row}, {col})");
                    0.0
                }),
            ParamField::Multiply(ch) => self.lighting.set_multiply_channel(ch, value),
            ParamField::Add(ch) => self.lighting.set_add_channel(ch, value),
            ParamField::Tint(ch) => self.blend.set_channel(ch, value),
        }
    }

    /// Apply one drag event to `field` using its default step.
    pub fn nudge(&mut self, field: ParamField, delta_x: f32) -> f32 {
        let stepper = DragStepper::new(field.range());
        let next = stepper.apply(self.get(field), delta_x);
        self.set(field, next)
    }

    pub fn apply_preset(&mut self, preset: MatrixPreset) {
        self.color_matrix.apply_preset(preset);
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend.set_mode(mode);
    }

    /// Reset one store to its defaults.
    pub fn reset(&mut self, kind: FilterKind) {
        match kind {
            FilterKind::ColorMatrix => self.color_matrix.reset(),
            FilterKind::Lighting => self.lighting.reset(),
            FilterKind::Blend => self.blend.reset(),
        }
    }

    /// Reset the store of the active filter.
    pub fn reset_active(&mut self) {
        self.reset(self.active);
    }

    /// The filter handed to the renderer for the active kind.
    pub fn active_filter(&self) -> ColorFilter {
        self.filter_for(self.active)
    }

    pub fn filter_for(&self, kind: FilterKind) -> ColorFilter {
        match kind {
            FilterKind::ColorMatrix => ColorFilter::ColorMatrix(self.color_matrix.to_array()),
            FilterKind::Lighting => ColorFilter::Lighting {
                multiply: self.lighting.multiply(),
                add: self.lighting.add(),
            },
            FilterKind::Blend => ColorFilter::Tint {
                color: self.blend.rgba(),
                mode: self.blend.mode(),
            },
        }
    }
}
