//! Lighting panel: multiply and add colors, each a swatch plus R/G/B labels.

use bevy::prelude::*;
use prism_core::{Channel, FilterKind, ParamField};

use super::components::{
    ResetButton, SwatchKind, panel_root, row, spawn_caption, spawn_section_header, spawn_swatch,
    spawn_text_button,
};
use super::drag_label::spawn_drag_label;
use super::theme;

const ROW_CAPTION_WIDTH: f32 = 56.0;

/// Spawn the lighting panel.
pub fn spawn_lighting_panel(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn(panel_root(FilterKind::Lighting))
        .with_children(|panel| {
            spawn_section_header(panel, "Lighting");
            spawn_color_row(panel, "Multiply", SwatchKind::LightingMultiply, ParamField::Multiply);
            spawn_color_row(panel, "Add", SwatchKind::LightingAdd, ParamField::Add);
            spawn_text_button(panel, ResetButton, "Reset", 80.0);
        });
}

fn spawn_color_row(
    parent: &mut ChildSpawnerCommands,
    caption: &str,
    swatch: SwatchKind,
    field: fn(Channel) -> ParamField,
) {
    parent.spawn(row()).with_children(|r| {
        spawn_caption(r, caption, ROW_CAPTION_WIDTH);
        spawn_swatch(r, swatch);
        for channel in Channel::RGB {
            spawn_caption(r, channel.short_label(), 10.0);
            spawn_drag_label(r, field(channel), theme::CHANNEL_LABEL_WIDTH);
        }
    });
}
