//! Root layout: preview and parameter panel side by side, gallery strip below.

use bevy::prelude::*;
use bevy::ui::UiTargetCamera;

use super::UiCameraEntity;
use super::viewer::ViewerImageHandle;
use super::{blend_panel, filter_select, gallery, lighting_panel, matrix_panel, theme, viewer};

/// Spawn the root layout.
pub fn spawn_root_layout(
    mut commands: Commands,
    viewer_handle: Res<ViewerImageHandle>,
    ui_camera: Res<UiCameraEntity>,
) {
    commands
        .spawn((
            Node {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            UiTargetCamera(ui_camera.0),
            BackgroundColor(theme::BG_DARK),
        ))
        .with_children(|root| {
            root.spawn(Node {
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                flex_grow: 1.0,
                width: Val::Percent(100.0),
                min_height: Val::Px(0.0),
                ..default()
            })
            .with_children(|main| {
                viewer::spawn_viewer_panel(main, viewer_handle.handle.clone());
                spawn_side_panel(main);
            });
            gallery::spawn_gallery_strip(root);
        });
}

fn spawn_side_panel(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn((
            Node {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(12.0),
                width: Val::Px(theme::SIDE_PANEL_WIDTH),
                padding: UiRect::all(Val::Px(theme::PANEL_PADDING)),
                border: UiRect::left(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(theme::BG_PANEL),
            BorderColor::all(theme::BORDER_SUBTLE),
        ))
        .with_children(|side| {
            filter_select::spawn_filter_select(side);
            matrix_panel::spawn_matrix_panel(side);
            lighting_panel::spawn_lighting_panel(side);
            blend_panel::spawn_blend_panel(side);
        });
}
