//! Preview viewer panel.
//!
//! Displays the filtered image as a Bevy `ImageNode`. The texture is
//! rewritten each frame the `ViewerData` resource changes.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use prism_bevy::events::PreviewUpdatedEvent;
use prism_bevy::resources::{GalleryState, ViewerData};

use super::theme;

/// Handle to the dynamic Bevy `Image` asset used by the viewer.
#[derive(Resource)]
pub struct ViewerImageHandle {
    pub handle: Handle<Image>,
}

/// Marker for the node displaying the preview.
#[derive(Component)]
pub struct PreviewImageNode;

/// Marker for the status line under the preview.
#[derive(Component)]
pub struct StatusText;

/// Wrap tightly packed RGBA8 sRGB bytes in a Bevy `Image`.
pub fn rgba8_image(width: u32, height: u32, bytes: Vec<u8>) -> Image {
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        bytes,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    )
}

/// Create a 1x1 transparent placeholder image and store the handle.
pub fn setup_viewer(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    let handle = images.add(rgba8_image(1, 1, vec![0, 0, 0, 0]));
    commands.insert_resource(ViewerImageHandle { handle });
}

/// Spawn the viewer section inside the given parent.
pub fn spawn_viewer_panel(parent: &mut ChildSpawnerCommands, handle: Handle<Image>) {
    parent
        .spawn((
            Node {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                flex_grow: 1.0,
                min_width: Val::Px(200.0),
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(theme::BG_DARK),
        ))
        .with_children(|viewer| {
            viewer
                .spawn((
                    Node {
                        display: Display::Flex,
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        overflow: Overflow::clip(),
                        flex_grow: 1.0,
                        width: Val::Percent(100.0),
                        border: UiRect::all(Val::Px(1.0)),
                        border_radius: BorderRadius::all(Val::Px(6.0)),
                        ..default()
                    },
                    BackgroundColor(theme::BG_VIEWER),
                    BorderColor::all(theme::BORDER_SUBTLE),
                ))
                .with_children(|frame| {
                    frame.spawn((
                        PreviewImageNode,
                        ImageNode::new(handle).with_mode(NodeImageMode::Stretch),
                        Node {
                            height: Val::Percent(100.0),
                            max_width: Val::Percent(100.0),
                            ..default()
                        },
                    ));
                });

            viewer.spawn((
                StatusText,
                Text::new(""),
                TextFont {
                    font_size: theme::FONT_SIZE_LABEL,
                    ..default()
                },
                TextColor(theme::TEXT_DIM),
            ));
        });
}

/// When `ViewerData` changes, write the pixel bytes into the viewer `Image`
/// asset and keep the node's aspect ratio in sync with the preview.
pub fn update_viewer_texture(
    viewer_data: Res<ViewerData>,
    viewer: Option<Res<ViewerImageHandle>>,
    mut images: ResMut<Assets<Image>>,
    mut nodes: Query<&mut Node, With<PreviewImageNode>>,
) {
    if !viewer_data.is_changed() || viewer_data.width == 0 || viewer_data.height == 0 {
        return;
    }
    let Some(viewer) = viewer else { return };

    let ar = viewer_data.width as f32 / viewer_data.height as f32;
    for mut node in &mut nodes {
        if node.aspect_ratio != Some(ar) {
            node.aspect_ratio = Some(ar);
        }
    }

    if let Some(existing) = images.get_mut(&viewer.handle) {
        let new_size = Extent3d {
            width: viewer_data.width,
            height: viewer_data.height,
            depth_or_array_layers: 1,
        };

        if existing.texture_descriptor.size != new_size {
            *existing = rgba8_image(
                viewer_data.width,
                viewer_data.height,
                viewer_data.pixel_bytes.clone(),
            );
        } else {
            existing.data = Some(viewer_data.pixel_bytes.clone());
        }
    } else {
        tracing::warn!("viewer Image asset not found for handle");
    }
}

/// Show the image name and active filter after each re-render.
pub fn update_status_text(
    mut preview_updated: MessageReader<PreviewUpdatedEvent>,
    gallery: Res<GalleryState>,
    mut texts: Query<&mut Text, With<StatusText>>,
) {
    let Some(event) = preview_updated.read().last() else {
        return;
    };
    let entry = gallery.gallery.selected();
    let status = format!(
        "{} ({}x{}) · {}",
        entry.name,
        event.width,
        event.height,
        event.filter.summary()
    );
    for mut text in &mut texts {
        **text = status.clone();
    }
}
