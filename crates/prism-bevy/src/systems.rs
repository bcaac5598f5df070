//! Bevy systems for the filter preview pipeline.
//!
//! These systems are the ONLY place filter state changes. The UI sends
//! `FilterCommand`s, Bevy applies them to the session, and the preview is
//! re-rendered into `ViewerData` on frames where something changed.

use bevy::prelude::*;
use std::time::Instant;

use prism_core::GalleryEntry;

use crate::events::{FilterCommand, PreviewUpdatedEvent};
use crate::resources::{FilterState, GalleryState, PreviewPerfStats, ViewerData};

/// Process inbound filter commands from the UI.
///
/// Commands are applied to a copy of the session which is written back only
/// when it differs, so no-op edits (drags against a bound, re-selecting
/// the active filter) neither trigger change detection nor a re-render.
pub fn handle_filter_commands(
    mut commands: MessageReader<FilterCommand>,
    mut state: ResMut<FilterState>,
    mut gallery: ResMut<GalleryState>,
) {
    let mut session = state.session.clone();
    let mut image_changed = false;

    for cmd in commands.read() {
        match cmd {
            FilterCommand::SelectFilter { kind } => {
                if session.active != *kind {
                    tracing::info!("filter: {} -> {}", session.active, kind);
                    session.active = *kind;
                }
            }
            FilterCommand::SetParam { field, value } => {
                let stored = session.set(*field, *value);
                tracing::debug!("set {field:?} = {stored:.3}");
            }
            FilterCommand::Nudge { field, delta_x } => {
                session.nudge(*field, *delta_x);
            }
            FilterCommand::ApplyPreset { preset } => {
                session.apply_preset(*preset);
            }
            FilterCommand::SetBlendMode { mode } => {
                session.set_blend_mode(*mode);
            }
            FilterCommand::ResetActive => {
                session.reset_active();
            }
            FilterCommand::SelectImage { index } => {
                if *index == gallery.gallery.selected_index() {
                    continue;
                }
                if *index < gallery.gallery.len() {
                    gallery.gallery.select(*index);
                    image_changed = true;
                } else {
                    tracing::warn!("SelectImage: no gallery entry {index}");
                }
            }
            FilterCommand::CycleImage { offset } => {
                if *offset != 0 && gallery.gallery.len() > 1 {
                    gallery.gallery.cycle(*offset);
                    image_changed = true;
                }
            }
            FilterCommand::AddImage { name, image } => {
                let index = gallery
                    .gallery
                    .push(GalleryEntry::new(name.clone(), image.clone()));
                gallery.gallery.select(index);
                image_changed = true;
            }
        }
    }

    if session != state.session {
        state.session = session;
        state.dirty = true;
    } else if image_changed {
        state.dirty = true;
    }
}

/// Diagnostic system that logs when `FilterState` is changed.
pub fn detect_param_changes(state: Res<FilterState>) {
    if state.is_changed() && !state.is_added() {
        tracing::debug!(
            "FilterState changed, active={}, dirty={}",
            state.session.active,
            state.dirty
        );
    }
}

/// Re-render the preview when the session or the selected image changed.
///
/// Runs the active filter over the selected gallery image on the CPU and
/// stores the quantized result in `ViewerData`.
pub fn render_preview(
    mut state: ResMut<FilterState>,
    gallery: Res<GalleryState>,
    mut viewer_data: ResMut<ViewerData>,
    mut perf: ResMut<PreviewPerfStats>,
    mut preview_updated: MessageWriter<PreviewUpdatedEvent>,
) {
    if !state.dirty {
        return;
    }

    let render_start = Instant::now();

    let filter = state.session.active_filter();
    let source = &gallery.gallery.selected().image;
    let filtered = filter.apply(source);

    viewer_data.width = filtered.width;
    viewer_data.height = filtered.height;
    viewer_data.pixel_bytes = filtered.to_rgba8_bytes();

    let render_time = render_start.elapsed();
    perf.renders += 1;
    perf.last_render = render_time;

    if render_time >= perf.slow_render_threshold
        || perf.last_log_at.elapsed().as_secs_f32() >= 1.0
    {
        tracing::info!(
            "preview render: {:.2}ms {}x{} {} (render #{})",
            render_time.as_secs_f64() * 1000.0,
            filtered.width,
            filtered.height,
            filter.summary(),
            perf.renders
        );
        perf.last_log_at = Instant::now();
    }

    preview_updated.write(PreviewUpdatedEvent {
        width: filtered.width,
        height: filtered.height,
        filter,
    });

    state.dirty = false;
}
