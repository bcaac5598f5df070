//! Blend panel: tint swatch with R/G/B/A labels and a blend-mode dropdown.

use bevy::prelude::*;
use prism_bevy::events::FilterCommand;
use prism_bevy::resources::FilterState;
use prism_core::{BlendMode, Channel, FilterKind, ParamField};

use super::components::{
    ResetButton, SwatchKind, panel_root, row, spawn_caption, spawn_section_header, spawn_swatch,
    spawn_text_button,
};
use super::drag_label::spawn_drag_label;
use super::theme;

/// Width (px) of the blend-mode dropdown.
const DROPDOWN_WIDTH: f32 = 180.0;

/// Runtime UI state for the blend-mode dropdown.
#[derive(Resource, Default)]
pub struct BlendMenuState {
    pub open: bool,
}

/// Marker for the dropdown button.
#[derive(Component)]
pub struct BlendModeButton;

/// Marker for the dropdown's selected-value label.
#[derive(Component)]
pub struct BlendModeLabel;

/// Marker for the dropdown menu list.
#[derive(Component)]
pub struct BlendModeMenu;

/// One entry of the dropdown menu.
#[derive(Component, Debug, Clone, Copy)]
pub struct BlendModeOption(pub BlendMode);

/// Spawn the blend panel.
pub fn spawn_blend_panel(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn(panel_root(FilterKind::Blend))
        .with_children(|panel| {
            spawn_section_header(panel, "Blend");

            panel.spawn(row()).with_children(|r| {
                spawn_caption(r, "Tint", 32.0);
                spawn_swatch(r, SwatchKind::Tint);
            });
            panel.spawn(row()).with_children(|r| {
                for channel in Channel::RGBA {
                    spawn_caption(r, channel.short_label(), 10.0);
                    spawn_drag_label(r, ParamField::Tint(channel), theme::CHANNEL_LABEL_WIDTH);
                }
            });

            spawn_dropdown(panel);
            spawn_text_button(panel, ResetButton, "Reset", 80.0);
        });
}

fn spawn_dropdown(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn(Node {
            position_type: PositionType::Relative,
            width: Val::Px(DROPDOWN_WIDTH),
            ..default()
        })
        .with_children(|dropdown| {
            dropdown
                .spawn((
                    BlendModeButton,
                    Button,
                    Node {
                        display: Display::Flex,
                        flex_direction: FlexDirection::Row,
                        justify_content: JustifyContent::SpaceBetween,
                        align_items: AlignItems::Center,
                        width: Val::Percent(100.0),
                        height: Val::Px(theme::CONTROL_HEIGHT),
                        padding: UiRect::axes(Val::Px(8.0), Val::Px(0.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BackgroundColor(theme::BG_CONTROL),
                    BorderColor::all(theme::BORDER_SUBTLE),
                ))
                .with_children(|button| {
                    button.spawn((
                        BlendModeLabel,
                        Text::new(format!("Mode: {}", BlendMode::default())),
                        TextFont {
                            font_size: theme::FONT_SIZE_LABEL,
                            ..default()
                        },
                        TextColor(theme::TEXT_PRIMARY),
                    ));
                    button.spawn((
                        Text::new("v"),
                        TextFont {
                            font_size: 10.0,
                            ..default()
                        },
                        TextColor(theme::TEXT_DIM),
                    ));
                });

            dropdown
                .spawn((
                    BlendModeMenu,
                    Node {
                        position_type: PositionType::Absolute,
                        top: Val::Px(theme::CONTROL_HEIGHT),
                        left: Val::Px(0.0),
                        width: Val::Percent(100.0),
                        display: Display::None,
                        flex_direction: FlexDirection::Column,
                        border: UiRect::all(Val::Px(1.0)),
                        max_height: Val::Px(theme::DROPDOWN_MAX_HEIGHT),
                        overflow: Overflow::scroll_y(),
                        ..default()
                    },
                    BackgroundColor(theme::BG_CONTROL),
                    BorderColor::all(theme::BORDER_SUBTLE),
                    GlobalZIndex(200),
                ))
                .with_children(|menu| {
                    for mode in BlendMode::ALL {
                        menu.spawn((
                            BlendModeOption(mode),
                            Button,
                            Node {
                                width: Val::Percent(100.0),
                                padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                                border: UiRect::bottom(Val::Px(1.0)),
                                ..default()
                            },
                            BackgroundColor(theme::BG_CONTROL),
                            BorderColor::all(theme::BORDER_SUBTLE),
                            children![(
                                Text::new(mode.name()),
                                TextFont {
                                    font_size: theme::FONT_SIZE_LABEL,
                                    ..default()
                                },
                                TextColor(theme::TEXT_PRIMARY),
                            )],
                        ));
                    }
                });
        });
}

/// Handle dropdown open/close and mode selection.
#[allow(clippy::type_complexity)]
pub fn handle_blend_menu_interactions(
    button_interactions: Query<&Interaction, (Changed<Interaction>, With<BlendModeButton>)>,
    option_interactions: Query<
        (&Interaction, &BlendModeOption),
        (Changed<Interaction>, With<Button>),
    >,
    mut menu_state: ResMut<BlendMenuState>,
    mut filter_commands: MessageWriter<FilterCommand>,
) {
    for interaction in &button_interactions {
        if *interaction == Interaction::Pressed {
            menu_state.open = !menu_state.open;
        }
    }

    for (interaction, option) in &option_interactions {
        if *interaction != Interaction::Pressed {
            continue;
        }
        filter_commands.write(FilterCommand::SetBlendMode { mode: option.0 });
        menu_state.open = false;
    }
}

/// Keep the selected-mode label, menu visibility, and highlight in sync.
#[allow(clippy::type_complexity)]
pub fn sync_blend_menu(
    menu_state: Res<BlendMenuState>,
    filter_state: Res<FilterState>,
    mut ui_parts: ParamSet<(
        Query<&mut Text, With<BlendModeLabel>>,
        Query<&mut Node, With<BlendModeMenu>>,
        Query<(&BlendModeOption, &mut BackgroundColor)>,
    )>,
) {
    if !(menu_state.is_changed() || filter_state.is_changed()) {
        return;
    }

    let selected = filter_state.session.blend.mode();

    for mut text in &mut ui_parts.p0() {
        **text = format!("Mode: {selected}");
    }

    for mut node in &mut ui_parts.p1() {
        node.display = if menu_state.open {
            Display::Flex
        } else {
            Display::None
        };
    }

    for (option, mut bg) in &mut ui_parts.p2() {
        *bg = if option.0 == selected {
            BackgroundColor(theme::BG_TOGGLE_ACTIVE)
        } else {
            BackgroundColor(theme::BG_CONTROL)
        };
    }
}
