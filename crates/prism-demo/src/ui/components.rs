//! Reusable UI components (buttons, swatches, section headers).

use bevy::prelude::*;
use prism_core::FilterKind;

use super::theme;

/// Root node of a parameter panel. Only the active filter's panel is shown.
#[derive(Component, Debug, Clone, Copy)]
pub struct FilterPanel(pub FilterKind);

/// Marker for a panel's Reset button. Resets the active filter.
#[derive(Component)]
pub struct ResetButton;

/// Which color a swatch previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchKind {
    LightingMultiply,
    LightingAdd,
    Tint,
}

/// A square showing the current color of a lighting or tint store.
#[derive(Component, Debug, Clone, Copy)]
pub struct Swatch(pub SwatchKind);

/// Root node of a parameter panel, hidden until its filter is selected.
pub fn panel_root(kind: FilterKind) -> impl Bundle {
    (
        FilterPanel(kind),
        Node {
            display: Display::None,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(8.0),
            width: Val::Percent(100.0),
            ..default()
        },
    )
}

/// Spawn a heading line.
pub fn spawn_section_header(parent: &mut ChildSpawnerCommands, label: &str) {
    parent.spawn((
        Text::new(label),
        TextFont {
            font_size: theme::FONT_SIZE_HEADING,
            ..default()
        },
        TextColor(theme::TEXT_PRIMARY),
    ));
}

/// Spawn a small dimmed caption, e.g. a row or column name.
pub fn spawn_caption(parent: &mut ChildSpawnerCommands, label: &str, width: f32) {
    parent.spawn((
        Text::new(label),
        TextFont {
            font_size: theme::FONT_SIZE_LABEL,
            ..default()
        },
        TextColor(theme::TEXT_DIM),
        Node {
            width: Val::Px(width),
            ..default()
        },
    ));
}

/// Spawn a text button carrying `marker`.
pub fn spawn_text_button<T: Component>(
    parent: &mut ChildSpawnerCommands,
    marker: T,
    label: &str,
    width: f32,
) {
    parent
        .spawn((
            marker,
            Button,
            Node {
                display: Display::Flex,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                width: Val::Px(width),
                height: Val::Px(theme::CONTROL_HEIGHT),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(theme::BG_CONTROL),
            BorderColor::all(theme::BORDER_SUBTLE),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: theme::FONT_SIZE_LABEL,
                    ..default()
                },
                TextColor(theme::TEXT_PRIMARY),
            ));
        });
}

/// Spawn a color swatch. Its color is kept in sync by `sync_swatches`.
pub fn spawn_swatch(parent: &mut ChildSpawnerCommands, kind: SwatchKind) {
    parent.spawn((
        Swatch(kind),
        Node {
            width: Val::Px(theme::SWATCH_SIZE),
            height: Val::Px(theme::SWATCH_SIZE),
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
        BackgroundColor(Color::BLACK),
        BorderColor::all(theme::BORDER_SUBTLE),
    ));
}

/// Layout for a horizontal row with vertically centered children.
pub fn row() -> Node {
    Node {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        align_items: AlignItems::Center,
        column_gap: Val::Px(6.0),
        ..default()
    }
}
