//! Keyboard input: global hotkeys translated into `FilterCommand`s.

mod hotkeys;

use bevy::prelude::*;
use prism_bevy::systems::handle_filter_commands;

/// Plugin that registers the hotkey systems.
pub struct HotkeyPlugin;

impl Plugin for HotkeyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (hotkeys::handle_hotkeys, hotkeys::handle_open_image_hotkey)
                .before(handle_filter_commands),
        );
    }
}
