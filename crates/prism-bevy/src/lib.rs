//! Prism Bevy Plugin: runs the filter session inside Bevy's ECS.
//!
//! Provides `PrismPlugin`, which registers the resources, messages, and
//! systems that turn UI commands into a rendered preview.

pub mod events;
pub mod resources;
pub mod systems;

use bevy::prelude::*;

use events::{FilterCommand, PreviewUpdatedEvent};
use resources::{FilterState, GalleryState, PreviewPerfStats, ViewerData};
use systems::{detect_param_changes, handle_filter_commands, render_preview};

/// Main Bevy plugin for the filter playground.
///
/// Registers resources, messages, and systems for:
/// - Holding the `FilterSession` and the image gallery as resources
/// - Applying inbound `FilterCommand`s
/// - Re-rendering the preview into `ViewerData` whenever state is dirty
pub struct PrismPlugin;

impl Plugin for PrismPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<FilterCommand>()
            .add_message::<PreviewUpdatedEvent>()
            .init_resource::<FilterState>()
            .init_resource::<GalleryState>()
            .init_resource::<ViewerData>()
            .init_resource::<PreviewPerfStats>()
            .add_systems(
                Update,
                (
                    handle_filter_commands,
                    render_preview.after(handle_filter_commands),
                    detect_param_changes,
                ),
            );
    }
}
