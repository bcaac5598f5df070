//! Gallery strip: one clickable thumbnail per gallery entry.

use bevy::prelude::*;
use prism_bevy::events::FilterCommand;
use prism_bevy::resources::GalleryState;

use super::theme;
use super::viewer::rgba8_image;

/// Thumbnail textures, one per gallery entry, in gallery order.
#[derive(Resource, Default)]
pub struct GalleryThumbnails {
    pub handles: Vec<Handle<Image>>,
}

/// Marker for the strip container.
#[derive(Component)]
pub struct GalleryStrip;

/// A thumbnail button selecting gallery entry `.0`.
#[derive(Component, Debug, Clone, Copy)]
pub struct GalleryThumb(pub usize);

/// Spawn the (initially empty) gallery strip.
pub fn spawn_gallery_strip(parent: &mut ChildSpawnerCommands) {
    parent.spawn((
        GalleryStrip,
        Node {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(8.0),
            width: Val::Percent(100.0),
            height: Val::Px(theme::GALLERY_STRIP_HEIGHT),
            padding: UiRect::all(Val::Px(theme::PANEL_PADDING)),
            border: UiRect::top(Val::Px(1.0)),
            overflow: Overflow::scroll_x(),
            ..default()
        },
        BackgroundColor(theme::BG_PANEL),
        BorderColor::all(theme::BORDER_SUBTLE),
    ));
}

/// Create thumbnails for new gallery entries and respawn the strip's buttons.
pub fn rebuild_gallery_strip(
    mut commands: Commands,
    gallery: Res<GalleryState>,
    mut thumbnails: ResMut<GalleryThumbnails>,
    mut images: ResMut<Assets<Image>>,
    strips: Query<(Entity, Option<&Children>), With<GalleryStrip>>,
) {
    if thumbnails.handles.len() == gallery.gallery.len() {
        return;
    }

    for entry in &gallery.gallery.entries()[thumbnails.handles.len()..] {
        let thumb = entry.image.fit_within(theme::THUMBNAIL_SIZE);
        let handle = images.add(rgba8_image(
            thumb.width,
            thumb.height,
            thumb.to_rgba8_bytes(),
        ));
        thumbnails.handles.push(handle);
    }

    for (strip, children) in &strips {
        if let Some(children) = children {
            for child in children.iter() {
                commands.entity(child).despawn();
            }
        }

        commands.entity(strip).with_children(|list| {
            for (index, (entry, handle)) in gallery
                .gallery
                .entries()
                .iter()
                .zip(&thumbnails.handles)
                .enumerate()
            {
                list.spawn((
                    GalleryThumb(index),
                    Button,
                    Node {
                        display: Display::Flex,
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        height: Val::Percent(100.0),
                        aspect_ratio: Some(entry.image.aspect_ratio()),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BorderColor::all(theme::BORDER_SUBTLE),
                    children![(
                        ImageNode::new(handle.clone()),
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                    )],
                ));
            }
        });
    }
}

/// Write `SelectImage` when a thumbnail is pressed.
pub fn handle_gallery_clicks(
    thumbs: Query<(&Interaction, &GalleryThumb), (Changed<Interaction>, With<Button>)>,
    mut filter_commands: MessageWriter<FilterCommand>,
) {
    for (interaction, thumb) in &thumbs {
        if *interaction == Interaction::Pressed {
            filter_commands.write(FilterCommand::SelectImage { index: thumb.0 });
        }
    }
}

/// Outline the selected thumbnail.
pub fn sync_gallery_selection(
    gallery: Res<GalleryState>,
    mut thumbs: Query<(Ref<GalleryThumb>, &mut BorderColor)>,
) {
    let selected = gallery.gallery.selected_index();
    for (thumb, mut border) in &mut thumbs {
        if !gallery.is_changed() && !thumb.is_added() {
            continue;
        }
        *border = if thumb.0 == selected {
            BorderColor::all(theme::ACCENT)
        } else {
            BorderColor::all(theme::BORDER_SUBTLE)
        };
    }
}
