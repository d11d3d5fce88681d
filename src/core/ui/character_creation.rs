//! Core domain: character creation UI, name entry and the validation modal.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::core::{FlowCommand, ValidationPrompt};
use crate::flow::FlowEvent;
use crate::ui::widgets::{
    BACKGROUND_COLOR, BORDER_COLOR, MUTED_TEXT_COLOR, PANEL_COLOR, TEXT_COLOR, TINT_COLOR,
    button_node, enter_pressed, label,
};

pub const MAX_NAME_LEN: usize = 24;
const NAME_PLACEHOLDER: &str = "Enter your character's name";

/// Text typed into the name field so far
#[derive(Resource, Debug, Default)]
pub struct NameEntry {
    pub text: String,
}

impl NameEntry {
    pub fn push(&mut self, input: &str) {
        for c in input.chars().filter(|c| !c.is_control()) {
            if self.text.chars().count() >= MAX_NAME_LEN {
                break;
            }
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }
}

/// Marker for the character creation UI root
#[derive(Component, Debug)]
pub struct CharacterCreationUI;

/// Text node showing the typed name
#[derive(Component, Debug)]
pub struct NameInputText;

#[derive(Component, Debug)]
pub struct CreateCharacterButton;

/// Marker for the validation modal root
#[derive(Component, Debug)]
pub struct ValidationPromptUI;

#[derive(Component, Debug)]
pub struct PromptDismissButton;

pub(crate) fn spawn_character_creation_ui(mut commands: Commands, entry: Res<NameEntry>) {
    commands
        .spawn((
            CharacterCreationUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
        ))
        .with_children(|parent| {
            parent.spawn((
                label("Unity Challenges", 40.0, TEXT_COLOR),
                Node {
                    margin: UiRect::bottom(Val::Px(6.0)),
                    ..default()
                },
            ));
            parent.spawn((
                label(
                    "Practice empathy through real-world scenarios",
                    16.0,
                    MUTED_TEXT_COLOR,
                ),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            // Creation card
            parent
                .spawn((
                    Node {
                        width: Val::Px(460.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Stretch,
                        padding: UiRect::all(Val::Px(24.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(PANEL_COLOR),
                    BorderColor::all(BORDER_COLOR),
                ))
                .with_children(|card| {
                    card.spawn((
                        label("Create Your Character", 28.0, TEXT_COLOR),
                        Node {
                            margin: UiRect::bottom(Val::Px(8.0)),
                            ..default()
                        },
                    ));
                    card.spawn((
                        label(
                            "Your character will face various scenarios related to inequality and discrimination.",
                            14.0,
                            MUTED_TEXT_COLOR,
                        ),
                        Node {
                            margin: UiRect::bottom(Val::Px(24.0)),
                            ..default()
                        },
                    ));
                    card.spawn(label("Name", 16.0, TEXT_COLOR));

                    // Input box
                    card.spawn((
                        Node {
                            padding: UiRect::all(Val::Px(12.0)),
                            margin: UiRect::vertical(Val::Px(8.0)),
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                        BorderColor::all(TINT_COLOR),
                    ))
                    .with_child((NameInputText, name_display(&entry.text)));

                    card.spawn((CreateCharacterButton, button_node(TINT_COLOR)))
                        .with_child(label("Create Character", 18.0, Color::WHITE));
                });

            parent.spawn((
                label("Type a name, then press ENTER", 14.0, MUTED_TEXT_COLOR),
                Node {
                    margin: UiRect::top(Val::Px(24.0)),
                    ..default()
                },
            ));
        });
}

fn name_display(text: &str) -> impl Bundle {
    if text.is_empty() {
        label(NAME_PLACEHOLDER.to_string(), 18.0, MUTED_TEXT_COLOR)
    } else {
        label(format!("{}|", text), 18.0, TEXT_COLOR)
    }
}

pub(crate) fn cleanup_character_creation_ui(
    mut commands: Commands,
    query: Query<Entity, Or<(With<CharacterCreationUI>, With<ValidationPromptUI>)>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_name_typing(
    mut keys: MessageReader<KeyboardInput>,
    prompt: Res<ValidationPrompt>,
    mut entry: ResMut<NameEntry>,
    mut flow_commands: MessageWriter<FlowCommand>,
) {
    for key in keys.read() {
        if !key.state.is_pressed() || prompt.is_open() {
            continue;
        }

        match &key.logical_key {
            Key::Character(input) => entry.push(input.as_str()),
            Key::Space => entry.push(" "),
            Key::Backspace => entry.backspace(),
            Key::Enter => {
                flow_commands.write(FlowCommand(FlowEvent::SubmitName(entry.text.clone())));
            }
            _ => {}
        }
    }
}

pub(crate) fn handle_create_button(
    button_query: Query<&Interaction, (With<CreateCharacterButton>, Changed<Interaction>)>,
    prompt: Res<ValidationPrompt>,
    entry: Res<NameEntry>,
    mut flow_commands: MessageWriter<FlowCommand>,
) {
    if prompt.is_open() {
        return;
    }

    if button_query
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed)
    {
        flow_commands.write(FlowCommand(FlowEvent::SubmitName(entry.text.clone())));
    }
}

pub(crate) fn handle_prompt_dismiss(
    keyboard: Res<ButtonInput<KeyCode>>,
    button_query: Query<&Interaction, (With<PromptDismissButton>, Changed<Interaction>)>,
    mut prompt: ResMut<ValidationPrompt>,
) {
    if !prompt.is_open() {
        return;
    }

    let dismissed = keyboard.just_pressed(KeyCode::Escape)
        || enter_pressed(&keyboard)
        || button_query
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);

    if dismissed {
        prompt.dismiss();
    }
}

pub(crate) fn update_name_display(
    entry: Res<NameEntry>,
    mut query: Query<(&mut Text, &mut TextColor), With<NameInputText>>,
) {
    if !entry.is_changed() {
        return;
    }

    for (mut text, mut color) in &mut query {
        if entry.text.is_empty() {
            **text = NAME_PLACEHOLDER.to_string();
            *color = TextColor(MUTED_TEXT_COLOR);
        } else {
            **text = format!("{}|", entry.text);
            *color = TextColor(TEXT_COLOR);
        }
    }
}

/// Show or hide the validation modal to match `ValidationPrompt`.
pub(crate) fn sync_validation_prompt(
    mut commands: Commands,
    prompt: Res<ValidationPrompt>,
    existing: Query<Entity, With<ValidationPromptUI>>,
) {
    if !prompt.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let Some(message) = &prompt.message else {
        return;
    };

    commands
        .spawn((
            ValidationPromptUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Px(360.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(24.0)),
                        ..default()
                    },
                    BackgroundColor(PANEL_COLOR),
                ))
                .with_children(|modal| {
                    modal.spawn((
                        label(message.title.clone(), 22.0, TEXT_COLOR),
                        Node {
                            margin: UiRect::bottom(Val::Px(12.0)),
                            ..default()
                        },
                    ));
                    modal.spawn(label(message.body.clone(), 16.0, MUTED_TEXT_COLOR));
                    modal
                        .spawn((PromptDismissButton, button_node(TINT_COLOR)))
                        .with_child(label("OK", 18.0, Color::WHITE));
                });
        });
}
