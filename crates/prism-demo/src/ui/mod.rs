//! Native Bevy UI for the Prism filter playground.
//!
//! A preview of the selected gallery image, a parameter panel for the active
//! filter, and a gallery strip. All edits are sent as `FilterCommand`s.

pub mod blend_panel;
pub mod components;
pub mod drag_label;
pub mod filter_select;
pub mod gallery;
pub mod layout;
pub mod lighting_panel;
pub mod matrix_panel;
pub mod systems;
pub mod theme;
pub mod viewer;

use bevy::prelude::*;
use prism_bevy::systems::{handle_filter_commands, render_preview};

/// Camera entity the UI tree renders to.
#[derive(Resource)]
pub struct UiCameraEntity(pub Entity);

fn setup_ui_camera(mut commands: Commands) {
    let camera = commands.spawn(Camera2d).id();
    commands.insert_resource(UiCameraEntity(camera));
}

/// Top-level UI plugin. Spawns the layout and registers widget systems.
pub struct PrismUiPlugin;

impl Plugin for PrismUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<blend_panel::BlendMenuState>()
            .init_resource::<gallery::GalleryThumbnails>()
            .add_plugins(drag_label::DragLabelPlugin)
            .add_systems(
                Startup,
                (
                    setup_ui_camera,
                    viewer::setup_viewer,
                    layout::spawn_root_layout,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    filter_select::handle_filter_select_buttons,
                    matrix_panel::handle_preset_buttons,
                    blend_panel::handle_blend_menu_interactions,
                    systems::handle_reset_buttons,
                    gallery::handle_gallery_clicks,
                )
                    .before(handle_filter_commands),
            )
            .add_systems(Update, systems::highlight_action_buttons)
            .add_systems(
                Update,
                (
                    systems::sync_drag_labels,
                    systems::sync_swatches,
                    systems::sync_filter_panels,
                    blend_panel::sync_blend_menu,
                    gallery::rebuild_gallery_strip,
                    gallery::sync_gallery_selection,
                    viewer::update_viewer_texture,
                    viewer::update_status_text,
                )
                    .after(render_preview),
            );
    }
}
