//! Headless tests for `PrismPlugin`: commands in, preview out.
//!
//! Run with: `cargo test -p prism-bevy`

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use prism_bevy::PrismPlugin;
use prism_bevy::events::{FilterCommand, PreviewUpdatedEvent};
use prism_bevy::resources::{FilterState, GalleryState, PreviewPerfStats, ViewerData};
use prism_core::{BlendMode, Channel, FilterImage, FilterKind, MatrixPreset, ParamField};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(PrismPlugin);
    app.update();
    app
}

fn send(app: &mut App, cmd: FilterCommand) {
    app.world_mut()
        .resource_mut::<Messages<FilterCommand>>()
        .write(cmd);
}

fn renders(app: &App) -> u64 {
    app.world().resource::<PreviewPerfStats>().renders
}

#[test]
fn test_first_frame_renders_selected_image() {
    let app = test_app();
    let viewer = app.world().resource::<ViewerData>();
    let gallery = app.world().resource::<GalleryState>();
    let image = &gallery.gallery.selected().image;
    assert_eq!((viewer.width, viewer.height), (image.width, image.height));
    assert_eq!(viewer.pixel_bytes.len(), (image.width * image.height * 4) as usize);
    assert_eq!(viewer.pixel_bytes, image.to_rgba8_bytes());
    assert!(!app.world().resource::<FilterState>().dirty);
    assert!(!app.world().resource::<Messages<PreviewUpdatedEvent>>().is_empty());
    assert_eq!(renders(&app), 1);
}

#[test]
fn test_set_param_updates_session_and_rerenders() {
    let mut app = test_app();
    send(
        &mut app,
        FilterCommand::SetParam {
            field: ParamField::Matrix { row: 0, col: 0 },
            value: 5.0,
        },
    );
    app.update();

    let state = app.world().resource::<FilterState>();
    assert_eq!(state.session.color_matrix.get(0, 0), 1.0);
    assert!(!state.dirty);
    assert_eq!(renders(&app), 1);

    send(
        &mut app,
        FilterCommand::SetParam {
            field: ParamField::Matrix { row: 0, col: 0 },
            value: 0.0,
        },
    );
    app.update();
    assert_eq!(app.world().resource::<FilterState>().session.color_matrix.get(0, 0), 0.0);
    assert_eq!(renders(&app), 2);
}

#[test]
fn test_zero_nudge_steps_down() {
    let mut app = test_app();
    send(
        &mut app,
        FilterCommand::Nudge {
            field: ParamField::Multiply(Channel::Green),
            delta_x: 0.0,
        },
    );
    app.update();
    let state = app.world().resource::<FilterState>();
    assert!((state.session.lighting.multiply()[1] - 0.98).abs() < 1e-5);
    assert_eq!(renders(&app), 2);
}

#[test]
fn test_nudge_at_min_does_not_rerender() {
    let mut app = test_app();
    send(
        &mut app,
        FilterCommand::Nudge {
            field: ParamField::Add(Channel::Green),
            delta_x: 0.0,
        },
    );
    app.update();
    let state = app.world().resource::<FilterState>();
    assert_eq!(state.session.lighting.add()[1], 0.0);
    assert_eq!(renders(&app), 1);
}

#[test]
fn test_preset_and_reset_active() {
    let mut app = test_app();
    send(
        &mut app,
        FilterCommand::ApplyPreset {
            preset: MatrixPreset::Invert,
        },
    );
    app.update();
    let viewer = app.world().resource::<ViewerData>();
    let source = app.world().resource::<GalleryState>().gallery.selected().image.clone();
    let first = source.to_rgba8_bytes();
    assert_eq!(viewer.pixel_bytes[3], first[3]);
    assert!(
        (viewer.pixel_bytes[0] as i32 - (255 - first[0] as i32)).abs() <= 1,
        "{} vs {}",
        viewer.pixel_bytes[0],
        first[0]
    );

    send(&mut app, FilterCommand::ResetActive);
    app.update();
    let state = app.world().resource::<FilterState>();
    assert!(state.session.color_matrix.is_identity());
    assert_eq!(app.world().resource::<ViewerData>().pixel_bytes, first);
}

#[test]
fn test_select_filter_and_blend_mode() {
    let mut app = test_app();
    send(
        &mut app,
        FilterCommand::SelectFilter {
            kind: FilterKind::Blend,
        },
    );
    send(
        &mut app,
        FilterCommand::SetBlendMode {
            mode: BlendMode::Clear,
        },
    );
    app.update();

    let state = app.world().resource::<FilterState>();
    assert_eq!(state.session.active, FilterKind::Blend);
    assert_eq!(state.session.blend.mode(), BlendMode::Clear);
    let viewer = app.world().resource::<ViewerData>();
    assert!(viewer.pixel_bytes.iter().all(|b| *b == 0));
}

#[test]
fn test_gallery_commands() {
    let mut app = test_app();
    send(&mut app, FilterCommand::SelectImage { index: 99 });
    app.update();
    assert_eq!(
        app.world().resource::<GalleryState>().gallery.selected_index(),
        0
    );
    assert_eq!(renders(&app), 1);

    send(&mut app, FilterCommand::CycleImage { offset: -1 });
    app.update();
    let gallery = &app.world().resource::<GalleryState>().gallery;
    assert_eq!(gallery.selected_index(), gallery.len() - 1);
    assert_eq!(renders(&app), 2);

    send(
        &mut app,
        FilterCommand::AddImage {
            name: "red".to_string(),
            image: FilterImage::solid(3, 2, [1.0, 0.0, 0.0, 1.0]),
        },
    );
    app.update();
    let gallery = &app.world().resource::<GalleryState>().gallery;
    assert_eq!(gallery.selected().name, "red");
    let viewer = app.world().resource::<ViewerData>();
    assert_eq!((viewer.width, viewer.height), (3, 2));
    assert_eq!(&viewer.pixel_bytes[..4], &[255, 0, 0, 255]);
}
