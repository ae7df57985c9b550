//! Input handling systems
//!
//! Keyboard and Throw-button handling. Both paths funnel into the same
//! `RollRequested` message; the roll controller owns the state check. The
//! button additionally disables itself visually while a roll is in flight,
//! which is the interface-level guard against double triggers.

use bevy::prelude::*;

use crate::systems::setup::{BUTTON_READY_BG, BUTTON_ROLLING_BG};
use crate::types::*;

const BUTTON_HOVER_BG: Color = Color::srgb(0.24, 0.42, 0.24);

/// Handle keyboard input for throwing the die
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: MessageWriter<RollRequested>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        requests.write(RollRequested);
    }
}

/// Handle clicks on the Throw button
pub fn handle_throw_button(
    roll_state: Res<RollState>,
    mut requests: MessageWriter<RollRequested>,
    mut button_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<ThrowButton>),
    >,
) {
    for (interaction, mut background) in button_query.iter_mut() {
        // Disabled while rolling: no hover feedback, clicks dropped here.
        if !roll_state.is_ready() {
            continue;
        }

        match *interaction {
            Interaction::Pressed => {
                requests.write(RollRequested);
            }
            Interaction::Hovered => {
                *background = BackgroundColor(BUTTON_HOVER_BG);
            }
            Interaction::None => {
                *background = BackgroundColor(BUTTON_READY_BG);
            }
        }
    }
}

/// Keep the button's enabled/disabled look in sync with the roll state
pub fn update_throw_button(
    roll_state: Res<RollState>,
    mut button_query: Query<&mut BackgroundColor, With<ThrowButton>>,
    mut label_query: Query<&mut TextColor, With<ThrowButtonLabel>>,
) {
    if !roll_state.is_changed() {
        return;
    }

    let (background, label) = if roll_state.is_ready() {
        (BUTTON_READY_BG, Color::WHITE)
    } else {
        (BUTTON_ROLLING_BG, Color::srgb(0.6, 0.6, 0.6))
    };

    for mut color in button_query.iter_mut() {
        *color = BackgroundColor(background);
    }
    for mut color in label_query.iter_mut() {
        *color = TextColor(label);
    }
}
