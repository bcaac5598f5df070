//! Prism Demo: interactive color-filter playground.
//!
//! Runs a Bevy window with the Prism plugin, a native Bevy UI for editing
//! the color-matrix, lighting, and blend filters, and a gallery of images.

mod config;
mod image_loader;
mod input;
mod ui;

use bevy::prelude::*;
use prism_bevy::PrismPlugin;
use prism_bevy::resources::{FilterState, GalleryState};

use config::AppConfig;
use input::HotkeyPlugin;
use ui::PrismUiPlugin;

fn main() {
    let config = AppConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.title.clone(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config)
        .add_plugins((PrismPlugin, PrismUiPlugin, HotkeyPlugin))
        .add_systems(Startup, apply_config)
        .run();
}

/// Startup system: select the configured filter and append images from the
/// gallery directory, if any.
fn apply_config(
    config: Res<AppConfig>,
    mut state: ResMut<FilterState>,
    mut gallery: ResMut<GalleryState>,
) {
    tracing::info!("config: {:?}", *config);
    state.session.active = config.initial_filter;
    state.dirty = true;

    let Some(dir) = &config.gallery_dir else {
        return;
    };
    match image_loader::load_gallery_dir(dir, config.preview_max) {
        Ok(entries) => {
            for entry in entries {
                gallery.gallery.push(entry);
            }
        }
        Err(e) => tracing::warn!("gallery directory {}: {e}", dir.display()),
    }
}
