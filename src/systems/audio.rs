//! Delayed sound cue
//!
//! Each accepted throw arms a one-shot timer; when it fires, the dice sound
//! plays. A cue that is still playing is stopped first so playback never
//! overlaps.

use bevy::asset::LoadState;
use bevy::audio::{AudioPlayer, PlaybackSettings, Volume};
use bevy::prelude::*;

use crate::systems::assets::{AssetStatus, DiceAssets};
use crate::types::{RollState, TableSettings};

/// Marker for the currently playing cue entity
#[derive(Component)]
pub struct RollCue;

pub fn play_roll_cue(
    mut commands: Commands,
    time: Res<Time>,
    mut roll_state: ResMut<RollState>,
    settings: Res<TableSettings>,
    assets: Res<DiceAssets>,
    status: Res<AssetStatus>,
    asset_server: Res<AssetServer>,
    playing: Query<Entity, With<RollCue>>,
) {
    // The timer is paused between rolls; reading it here does not flag the
    // roll state as changed.
    if roll_state.audio_cue.paused() {
        return;
    }

    roll_state.audio_cue.tick(time.delta());
    if !roll_state.audio_cue.just_finished() {
        return;
    }
    // One shot per roll.
    roll_state.audio_cue.pause();

    if status.sound_failed {
        return;
    }
    if !matches!(asset_server.load_state(&assets.sound), LoadState::Loaded) {
        return;
    }

    // Restart rather than overlap a cue from a fast re-roll.
    for entity in playing.iter() {
        commands.entity(entity).despawn();
    }

    commands.spawn((
        AudioPlayer(assets.sound.clone()),
        PlaybackSettings::DESPAWN.with_volume(Volume::Linear(settings.audio_cue_volume)),
        RollCue,
    ));
}
