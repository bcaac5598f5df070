//! Drag labels: numeric readouts edited by dragging horizontally.
//!
//! Every drag event moves the bound field by one step in the direction of
//! the horizontal motion (right increases, left decreases), regardless of
//! how far the pointer moved. Values saturate at the field's range.

use bevy::picking::events::{Cancel, Drag, DragEnd, DragStart, Pointer};
use bevy::prelude::*;
use prism_bevy::events::FilterCommand;
use prism_core::ParamField;

use super::theme;

// ── Components ──────────────────────────────────────────────────────────────

/// Binds a label entity to the session field it edits.
#[derive(Component, Debug, Clone, Copy)]
pub struct DragLabel(pub ParamField);

/// Set while the pointer is dragging this label.
#[derive(Component, Default)]
struct DragLabelActive(bool);

// ── Bundle ──────────────────────────────────────────────────────────────────

/// Spawn a drag label for `field`. The text is filled in by `sync_drag_labels`.
pub fn spawn_drag_label(parent: &mut ChildSpawnerCommands, field: ParamField, width: f32) {
    parent.spawn((
        DragLabel(field),
        DragLabelActive::default(),
        Text::new(field.format().format(0.0)),
        TextFont {
            font_size: theme::FONT_SIZE_VALUE,
            ..default()
        },
        TextColor(theme::TEXT_PRIMARY),
        Node {
            width: Val::Px(width),
            height: Val::Px(theme::CONTROL_HEIGHT),
            padding: UiRect::axes(Val::Px(6.0), Val::Px(4.0)),
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
        BackgroundColor(theme::BG_CONTROL),
        BorderColor::all(theme::BORDER_SUBTLE),
    ));
}

// ── Observers (pointer interaction) ─────────────────────────────────────────

fn on_drag_label_start(
    mut drag_start: On<Pointer<DragStart>>,
    mut q_labels: Query<(&mut DragLabelActive, &mut BorderColor), With<DragLabel>>,
) {
    if let Ok((mut active, mut border)) = q_labels.get_mut(drag_start.entity) {
        drag_start.propagate(false);
        active.0 = true;
        *border = BorderColor::all(theme::ACCENT);
    }
}

fn on_drag_label_drag(
    mut drag: On<Pointer<Drag>>,
    q_labels: Query<(&DragLabel, &DragLabelActive)>,
    mut filter_commands: MessageWriter<FilterCommand>,
) {
    if let Ok((label, active)) = q_labels.get(drag.entity) {
        drag.propagate(false);
        if !active.0 {
            return;
        }
        filter_commands.write(FilterCommand::Nudge {
            field: label.0,
            delta_x: drag.delta.x,
        });
    }
}

fn on_drag_label_end(
    mut drag_end: On<Pointer<DragEnd>>,
    mut q_labels: Query<(&mut DragLabelActive, &mut BorderColor), With<DragLabel>>,
) {
    if let Ok((mut active, mut border)) = q_labels.get_mut(drag_end.entity) {
        drag_end.propagate(false);
        active.0 = false;
        *border = BorderColor::all(theme::BORDER_SUBTLE);
    }
}

fn on_drag_label_cancel(
    cancel: On<Pointer<Cancel>>,
    mut q_labels: Query<(&mut DragLabelActive, &mut BorderColor), With<DragLabel>>,
) {
    if let Ok((mut active, mut border)) = q_labels.get_mut(cancel.entity) {
        active.0 = false;
        *border = BorderColor::all(theme::BORDER_SUBTLE);
    }
}

// ── Plugin ──────────────────────────────────────────────────────────────────

/// Registers the drag-label observers.
pub struct DragLabelPlugin;

impl Plugin for DragLabelPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(on_drag_label_start)
            .add_observer(on_drag_label_drag)
            .add_observer(on_drag_label_end)
            .add_observer(on_drag_label_cancel);
    }
}
