//! Async loading of the die model and the sound cue
//!
//! Both assets are requested at startup and polled explicitly through the
//! asset server's load state. A failure is reported once and the consumer
//! side reference simply stays absent: the tray keeps working without a
//! visible die or without sound.

use bevy::asset::LoadState;
use bevy::audio::AudioSource;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::types::{Die, DieVisual};

pub const DIE_MODEL_PATH: &str = "models/dice.glb";
pub const DIE_SOUND_PATH: &str = "sounds/dice.mp3";

/// Scale applied to the loaded model so it matches the 2-unit collider cube.
const DIE_MODEL_SCALE: f32 = 2.0;

#[derive(Resource)]
pub struct DiceAssets {
    pub scene: Handle<Scene>,
    pub sound: Handle<AudioSource>,
}

/// One-shot bookkeeping for asset outcomes
#[derive(Resource, Default)]
pub struct AssetStatus {
    pub visual_spawned: bool,
    pub scene_failed: bool,
    pub sound_failed: bool,
}

pub fn load_dice_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(DIE_MODEL_PATH));
    let sound = asset_server.load(DIE_SOUND_PATH);
    commands.insert_resource(DiceAssets { scene, sound });
}

/// Spawn the visual model once its scene is ready; report failure once.
pub fn spawn_die_visual_when_ready(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    assets: Res<DiceAssets>,
    mut status: ResMut<AssetStatus>,
    body_query: Query<&Transform, With<Die>>,
) {
    if status.visual_spawned || status.scene_failed {
        return;
    }

    match asset_server.load_state(&assets.scene) {
        LoadState::Loaded => {
            let pose = body_query
                .iter()
                .next()
                .copied()
                .unwrap_or_else(|| Transform::from_xyz(0.0, 3.0, 0.0));

            commands.spawn((
                SceneRoot(assets.scene.clone()),
                Transform {
                    scale: Vec3::splat(DIE_MODEL_SCALE),
                    ..pose
                },
                DieVisual,
            ));
            status.visual_spawned = true;
            info!("die model ready");
        }
        LoadState::Failed(err) => {
            error!("failed to load die model {}: {}", DIE_MODEL_PATH, err);
            status.scene_failed = true;
        }
        _ => {}
    }
}

/// Report a failed sound load once; the cue system skips absent audio.
pub fn report_sound_failure(
    asset_server: Res<AssetServer>,
    assets: Res<DiceAssets>,
    mut status: ResMut<AssetStatus>,
) {
    if status.sound_failed {
        return;
    }

    if let LoadState::Failed(err) = asset_server.load_state(&assets.sound) {
        error!("failed to load dice sound {}: {}", DIE_SOUND_PATH, err);
        status.sound_failed = true;
    }
}
