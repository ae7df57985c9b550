use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use dicetable::systems::{
    begin_roll, check_die_settled, handle_input, handle_throw_button, load_dice_assets,
    log_viewport_resize, play_roll_cue, report_sound_failure, rotate_camera, setup,
    spawn_die_visual_when_ready, sync_die_visual, update_status_text, update_throw_button,
    AssetStatus,
};
use dicetable::types::{
    RollRequested, RollResult, RollState, TableSettings, ZoomState, SETTINGS_PATH,
};

fn main() {
    let settings = TableSettings::load_or_default(SETTINGS_PATH);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Dice Table".to_string(),
                        resolution: (1280u32, 720u32).into(),
                        ..default()
                    }),
                    ..default()
                })
                // Keep app logs at info, silence wgpu chatter.
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error".to_string(),
                    ..default()
                }),
        )
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .insert_resource(ClearColor(Color::srgb(0.93, 0.93, 0.93)))
        .insert_resource(settings)
        .insert_resource(RollState::default())
        .insert_resource(RollResult::default())
        .insert_resource(ZoomState::default())
        .init_resource::<AssetStatus>()
        .add_message::<RollRequested>()
        .add_systems(Startup, (setup, load_dice_assets))
        .add_systems(
            Update,
            (
                // Trigger paths feed the controller within the same frame.
                handle_input,
                handle_throw_button,
                begin_roll,
                check_die_settled,
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                spawn_die_visual_when_ready,
                report_sound_failure,
                sync_die_visual,
                play_roll_cue,
                update_throw_button,
                update_status_text,
                rotate_camera,
                log_viewport_resize,
            ),
        )
        .run();
}
