//! Color-matrix panel: preset buttons, a 4×5 grid of drag labels, Reset.

use bevy::prelude::*;
use prism_bevy::events::FilterCommand;
use prism_core::filters::color_matrix::{COLUMNS, ROWS};
use prism_core::{Channel, FilterKind, MatrixPreset, ParamField};

use super::components::{
    ResetButton, panel_root, row, spawn_caption, spawn_section_header, spawn_text_button,
};
use super::drag_label::spawn_drag_label;
use super::theme;

/// Column headings: the four input channels, then the offset.
const COLUMN_CAPTIONS: [&str; COLUMNS] = ["R", "G", "B", "A", "Offset"];

/// Width (px) of the row-name column on the left of the grid.
const ROW_CAPTION_WIDTH: f32 = 16.0;

/// Marker for a preset button.
#[derive(Component, Debug, Clone, Copy)]
pub struct PresetButton(pub MatrixPreset);

/// Spawn the color-matrix panel.
pub fn spawn_matrix_panel(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn(panel_root(FilterKind::ColorMatrix))
        .with_children(|panel| {
            spawn_section_header(panel, "Color matrix");

            panel.spawn(row()).with_children(|presets| {
                for preset in MatrixPreset::ALL {
                    spawn_text_button(presets, PresetButton(preset), preset.label(), 80.0);
                }
            });

            panel
                .spawn(Node {
                    display: Display::Flex,
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    ..default()
                })
                .with_children(|grid| {
                    grid.spawn(row()).with_children(|header| {
                        spawn_caption(header, "", ROW_CAPTION_WIDTH);
                        for caption in COLUMN_CAPTIONS {
                            spawn_caption(header, caption, theme::MATRIX_CELL_WIDTH);
                        }
                    });
                    for (r, channel) in Channel::RGBA.iter().enumerate().take(ROWS) {
                        grid.spawn(row()).with_children(|cells| {
                            spawn_caption(cells, channel.short_label(), ROW_CAPTION_WIDTH);
                            for col in 0..COLUMNS {
                                spawn_drag_label(
                                    cells,
                                    ParamField::Matrix { row: r, col },
                                    theme::MATRIX_CELL_WIDTH,
                                );
                            }
                        });
                    }
                });

            spawn_text_button(panel, ResetButton, "Reset", 80.0);
        });
}

/// Write `ApplyPreset` when a preset button is pressed.
pub fn handle_preset_buttons(
    buttons: Query<(&Interaction, &PresetButton), (Changed<Interaction>, With<Button>)>,
    mut filter_commands: MessageWriter<FilterCommand>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            filter_commands.write(FilterCommand::ApplyPreset { preset: button.0 });
        }
    }
}
