//! Bevy messages for cross-system communication in the preview pipeline.

use bevy::prelude::*;
use prism_core::{BlendMode, ColorFilter, FilterImage, FilterKind, MatrixPreset, ParamField};

/// Inbound edits from the UI and hotkeys.
#[derive(Message, Debug, Clone)]
pub enum FilterCommand {
    /// Make `kind` the filter applied to the preview.
    SelectFilter { kind: FilterKind },
    /// Write one field (clamped to its range).
    SetParam { field: ParamField, value: f32 },
    /// One drag event on a drag label. Only the sign of `delta_x` matters.
    Nudge { field: ParamField, delta_x: f32 },
    /// Overwrite the color matrix with a preset.
    ApplyPreset { preset: MatrixPreset },
    SetBlendMode { mode: BlendMode },
    /// Restore the active filter's defaults.
    ResetActive,
    /// Select gallery entry `index`.
    SelectImage { index: usize },
    /// Move the gallery selection by `offset`, wrapping.
    CycleImage { offset: isize },
    /// Append an image to the gallery and select it.
    AddImage { name: String, image: FilterImage },
}

/// Fired after the preview has been re-rendered into `ViewerData`.
#[derive(Message, Debug, Clone)]
pub struct PreviewUpdatedEvent {
    pub width: u32,
    pub height: u32,
    /// The filter that produced the preview.
    pub filter: ColorFilter,
}
