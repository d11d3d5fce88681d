//! UI domain: shared colors, text and flow buttons.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::parse_hex_color;
use crate::core::FlowCommand;
use crate::flow::FlowEvent;

pub const BACKGROUND_COLOR: Color = Color::srgb(0.96, 0.97, 0.99);
pub const PANEL_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const TEXT_COLOR: Color = Color::srgb(0.08, 0.08, 0.1);
pub const MUTED_TEXT_COLOR: Color = Color::srgb(0.42, 0.44, 0.5);
/// App tint (#4A90E2)
pub const TINT_COLOR: Color = Color::srgb(0.29, 0.565, 0.886);
pub const BORDER_COLOR: Color = Color::srgb(0.9, 0.953, 1.0);

/// Button that feeds a flow event when pressed.
#[derive(Component, Debug, Clone)]
pub struct FlowButton {
    pub event: FlowEvent,
}

/// Idle/hover backgrounds for a button
#[derive(Component, Debug, Clone, Copy)]
pub struct ButtonColors {
    pub idle: Color,
    pub hovered: Color,
}

impl ButtonColors {
    pub fn solid(color: Color) -> Self {
        Self {
            idle: color,
            hovered: color.with_alpha(0.8),
        }
    }
}

/// `#RRGGBB` to a display color; unparseable values fall back to the tint.
pub fn hex_color(value: &str) -> Color {
    parse_hex_color(value)
        .map(|[r, g, b]| Color::srgb_u8(r, g, b))
        .unwrap_or(TINT_COLOR)
}

pub fn label(text: impl Into<String>, font_size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
    )
}

/// Plain button body; the caller adds its marker or `FlowButton`.
pub fn button_node(color: Color) -> impl Bundle {
    (
        Button,
        Node {
            padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
            margin: UiRect::top(Val::Px(12.0)),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BackgroundColor(color),
        BorderColor::all(color),
        ButtonColors::solid(color),
    )
}

pub fn spawn_flow_button(
    parent: &mut ChildSpawnerCommands,
    text: impl Into<String>,
    event: FlowEvent,
    color: Color,
) {
    parent
        .spawn((FlowButton { event }, button_node(color)))
        .with_child(label(text, 18.0, Color::WHITE));
}

pub(crate) fn handle_flow_buttons(
    mut button_query: Query<
        (&FlowButton, &Interaction, &ButtonColors, &mut BackgroundColor),
        Changed<Interaction>,
    >,
    mut flow_commands: MessageWriter<FlowCommand>,
) {
    for (button, interaction, colors, mut bg_color) in &mut button_query {
        match interaction {
            Interaction::Pressed => {
                flow_commands.write(FlowCommand(button.event.clone()));
            }
            Interaction::Hovered => {
                *bg_color = BackgroundColor(colors.hovered);
            }
            Interaction::None => {
                *bg_color = BackgroundColor(colors.idle);
            }
        }
    }
}

/// Hover feedback for buttons without a `FlowButton`
pub(crate) fn highlight_plain_buttons(
    mut button_query: Query<
        (&Interaction, &ButtonColors, &mut BackgroundColor),
        (Changed<Interaction>, Without<FlowButton>),
    >,
) {
    for (interaction, colors, mut bg_color) in &mut button_query {
        *bg_color = BackgroundColor(match interaction {
            Interaction::Hovered => colors.hovered,
            _ => colors.idle,
        });
    }
}

/// Digit keys 1-9 as a zero-based index.
pub fn pressed_digit(keyboard: &ButtonInput<KeyCode>) -> Option<usize> {
    const DIGITS: [(KeyCode, KeyCode); 9] = [
        (KeyCode::Digit1, KeyCode::Numpad1),
        (KeyCode::Digit2, KeyCode::Numpad2),
        (KeyCode::Digit3, KeyCode::Numpad3),
        (KeyCode::Digit4, KeyCode::Numpad4),
        (KeyCode::Digit5, KeyCode::Numpad5),
        (KeyCode::Digit6, KeyCode::Numpad6),
        (KeyCode::Digit7, KeyCode::Numpad7),
        (KeyCode::Digit8, KeyCode::Numpad8),
        (KeyCode::Digit9, KeyCode::Numpad9),
    ];
    DIGITS
        .iter()
        .position(|(key, numpad)| keyboard.just_pressed(*key) || keyboard.just_pressed(*numpad))
}

pub fn enter_pressed(keyboard: &ButtonInput<KeyCode>) -> bool {
    keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter)
}
