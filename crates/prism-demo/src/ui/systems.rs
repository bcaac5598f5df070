//! ECS systems that keep widgets in sync with `FilterState`.
//!
//! Widgets never write the session directly: drags and clicks send
//! `FilterCommand`s, and these systems redraw labels, swatches, and panel
//! visibility whenever the session changes.

use bevy::prelude::*;
use prism_bevy::events::FilterCommand;
use prism_bevy::resources::FilterState;
use prism_core::FilterSession;

use super::components::{FilterPanel, ResetButton, Swatch, SwatchKind};
use super::drag_label::DragLabel;
use super::filter_select::FilterSelectButton;
use super::matrix_panel::PresetButton;
use super::theme;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn swatch_color(session: &FilterSession, kind: SwatchKind) -> Color {
    match kind {
        SwatchKind::LightingMultiply => {
            let c = session.lighting.multiply_color();
            Color::srgb(c.red, c.green, c.blue)
        }
        SwatchKind::LightingAdd => {
            let c = session.lighting.add_color();
            Color::srgb(c.red, c.green, c.blue)
        }
        SwatchKind::Tint => {
            let c = session.blend.color();
            Color::srgba(c.red, c.green, c.blue, c.alpha)
        }
    }
}

// ── FilterState → widgets ───────────────────────────────────────────────────

/// Redraw drag-label values.
pub fn sync_drag_labels(state: Res<FilterState>, mut labels: Query<(Ref<DragLabel>, &mut Text)>) {
    for (label, mut text) in &mut labels {
        if !state.is_changed() && !label.is_added() {
            continue;
        }
        let field = label.0;
        let formatted = field.format().format(state.session.get(field));
        if text.0 != formatted {
            text.0 = formatted;
        }
    }
}

/// Recolor swatches.
pub fn sync_swatches(
    state: Res<FilterState>,
    mut swatches: Query<(Ref<Swatch>, &mut BackgroundColor)>,
) {
    for (swatch, mut bg) in &mut swatches {
        if !state.is_changed() && !swatch.is_added() {
            continue;
        }
        *bg = BackgroundColor(swatch_color(&state.session, swatch.0));
    }
}

/// Show the active filter's panel and highlight its radio option.
pub fn sync_filter_panels(
    state: Res<FilterState>,
    mut panels: Query<(Ref<FilterPanel>, &mut Node)>,
    mut radios: Query<(&FilterSelectButton, &mut BackgroundColor)>,
) {
    let active = state.session.active;
    let mut any_added = false;
    for (panel, mut node) in &mut panels {
        any_added |= panel.is_added();
        let display = if panel.0 == active {
            Display::Flex
        } else {
            Display::None
        };
        if node.display != display {
            node.display = display;
        }
    }

    if !state.is_changed() && !any_added {
        return;
    }
    for (radio, mut bg) in &mut radios {
        *bg = if radio.0 == active {
            BackgroundColor(theme::BG_TOGGLE_ACTIVE)
        } else {
            BackgroundColor(theme::BG_CONTROL)
        };
    }
}

// ── Buttons → FilterCommand ─────────────────────────────────────────────────

/// Write `ResetActive` when a Reset button is pressed.
pub fn handle_reset_buttons(
    buttons: Query<&Interaction, (Changed<Interaction>, With<ResetButton>)>,
    mut filter_commands: MessageWriter<FilterCommand>,
) {
    for interaction in &buttons {
        if *interaction == Interaction::Pressed {
            filter_commands.write(FilterCommand::ResetActive);
        }
    }
}

/// Hover feedback for the plain action buttons (presets and Reset).
pub fn highlight_action_buttons(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (
            Changed<Interaction>,
            Or<(With<ResetButton>, With<PresetButton>)>,
        ),
    >,
) {
    for (interaction, mut bg) in &mut buttons {
        *bg = match interaction {
            Interaction::Hovered | Interaction::Pressed => {
                BackgroundColor(theme::BG_CONTROL_HOVER)
            }
            Interaction::None => BackgroundColor(theme::BG_CONTROL),
        };
    }
}
