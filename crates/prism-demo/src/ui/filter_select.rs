//! Radio-style selector choosing which filter drives the preview.

use bevy::prelude::*;
use prism_bevy::events::FilterCommand;
use prism_core::FilterKind;

use super::components::{row, spawn_text_button};

/// One radio option.
#[derive(Component, Debug, Clone, Copy)]
pub struct FilterSelectButton(pub FilterKind);

/// Spawn one button per filter kind.
pub fn spawn_filter_select(parent: &mut ChildSpawnerCommands) {
    parent.spawn(row()).with_children(|radios| {
        for kind in FilterKind::ALL {
            spawn_text_button(radios, FilterSelectButton(kind), kind.label(), 96.0);
        }
    });
}

/// Write `SelectFilter` when an option is pressed.
pub fn handle_filter_select_buttons(
    buttons: Query<(&Interaction, &FilterSelectButton), (Changed<Interaction>, With<Button>)>,
    mut filter_commands: MessageWriter<FilterCommand>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            filter_commands.write(FilterCommand::SelectFilter { kind: button.0 });
        }
    }
}
