//! Global hotkeys.
//!
//! - Ctrl+O: open an image into the gallery
//! - Left / Right: previous / next gallery image
//! - 1 / 2 / 3: select the color, lighting, or blend filter
//! - Ctrl+R: reset the active filter
//! - Escape: close the blend-mode menu

use bevy::ecs::system::NonSendMarker;
use bevy::prelude::*;
use prism_bevy::events::FilterCommand;
use prism_core::FilterKind;

use crate::config::AppConfig;
use crate::image_loader::{self, SUPPORTED_EXTENSIONS};
use crate::ui::blend_panel::BlendMenuState;

const FILTER_KEYS: [KeyCode; 3] = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3];

fn ctrl_pressed(keys: &ButtonInput<KeyCode>) -> bool {
    keys.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight])
}

/// Gallery navigation, filter selection, and reset.
pub fn handle_hotkeys(
    keys: Res<ButtonInput<KeyCode>>,
    mut menu_state: ResMut<BlendMenuState>,
    mut filter_commands: MessageWriter<FilterCommand>,
) {
    if ctrl_pressed(&keys) {
        if keys.just_pressed(KeyCode::KeyR) {
            filter_commands.write(FilterCommand::ResetActive);
        }
        return;
    }

    if keys.just_pressed(KeyCode::ArrowLeft) {
        filter_commands.write(FilterCommand::CycleImage { offset: -1 });
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        filter_commands.write(FilterCommand::CycleImage { offset: 1 });
    }

    for (key, kind) in FILTER_KEYS.into_iter().zip(FilterKind::ALL) {
        if keys.just_pressed(key) {
            filter_commands.write(FilterCommand::SelectFilter { kind });
        }
    }

    if keys.just_pressed(KeyCode::Escape) && menu_state.open {
        menu_state.open = false;
    }
}

/// Ctrl+O: pick an image with the native file dialog and add it to the
/// gallery. The dialog blocks, so this runs on the main thread.
pub fn handle_open_image_hotkey(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<AppConfig>,
    mut filter_commands: MessageWriter<FilterCommand>,
    _main_thread: NonSendMarker,
) {
    if !(ctrl_pressed(&keys) && keys.just_pressed(KeyCode::KeyO)) {
        return;
    }

    let Some(path) = rfd::FileDialog::new()
        .add_filter("Images", SUPPORTED_EXTENSIONS)
        .pick_file()
    else {
        return;
    };

    match image_loader::load_image(&path, config.preview_max) {
        Ok(image) => {
            tracing::info!(
                "opened {} ({}x{})",
                path.display(),
                image.width,
                image.height
            );
            filter_commands.write(FilterCommand::AddImage {
                name: image_loader::entry_name(&path),
                image,
            });
        }
        Err(e) => tracing::warn!("failed to open {}: {e}", path.display()),
    }
}
