//! Die components and the roll state machine
//!
//! This module contains the `Die` physics-body component, the `DieVisual`
//! marker for the loaded model, and `RollState`, the single-roll state
//! machine that gates triggers and tracks settle detection.

use std::time::Duration;

use bevy::prelude::*;

/// Component attached to the simulated die body.
///
/// Face normals are in the die's local space and map each face to the value
/// printed on it; the face whose world-space normal points most upward once
/// the body settles is the rolled value.
#[derive(Component)]
pub struct Die {
    pub face_normals: Vec<(Vec3, u32)>,
}

impl Die {
    /// Standard d6 numbering: opposite faces sum to 7.
    pub fn d6() -> Self {
        Self {
            face_normals: vec![
                (Vec3::Y, 6),
                (Vec3::NEG_Y, 1),
                (Vec3::X, 3),
                (Vec3::NEG_X, 4),
                (Vec3::Z, 2),
                (Vec3::NEG_Z, 5),
            ],
        }
    }
}

/// Marker for the visual model entity, spawned once the glTF scene finishes
/// loading. Its transform is written only by the pose-sync system.
#[derive(Component)]
pub struct DieVisual;

/// Marker component for the tray floor and wall colliders
#[derive(Component)]
pub struct DiceTray;

/// Request to throw the die, written by the UI button and the keyboard
/// handler and consumed by the roll controller.
#[derive(Message)]
pub struct RollRequested;

/// Phase of the single-roll state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RollPhase {
    #[default]
    Ready,
    Rolling,
}

/// Resource tracking the current roll
#[derive(Resource)]
pub struct RollState {
    pub phase: RollPhase,
    /// Seconds since the throw was accepted (timeout fallback)
    pub rolling_secs: f32,
    /// Seconds the body has stayed below the rest thresholds
    pub rest_secs: f32,
    /// One-shot delay between a throw and its sound cue
    pub audio_cue: Timer,
}

impl Default for RollState {
    fn default() -> Self {
        // The cue timer stays paused until a throw is accepted.
        let mut audio_cue = Timer::from_seconds(0.8, TimerMode::Once);
        audio_cue.pause();

        Self {
            phase: RollPhase::Ready,
            rolling_secs: 0.0,
            rest_secs: 0.0,
            audio_cue,
        }
    }
}

impl RollState {
    pub fn is_ready(&self) -> bool {
        self.phase == RollPhase::Ready
    }

    /// Enter the rolling phase and arm the audio cue.
    pub fn begin_roll(&mut self, cue_delay_secs: f32) {
        self.phase = RollPhase::Rolling;
        self.rolling_secs = 0.0;
        self.rest_secs = 0.0;
        self.audio_cue
            .set_duration(Duration::from_secs_f32(cue_delay_secs));
        self.audio_cue.reset();
        self.audio_cue.unpause();
    }

    /// Return to ready once the die has settled (or timed out).
    pub fn finish_roll(&mut self) {
        self.phase = RollPhase::Ready;
        self.rolling_secs = 0.0;
        self.rest_secs = 0.0;
    }
}

/// Resource storing the face-up value of the last settled roll
#[derive(Resource, Default)]
pub struct RollResult {
    pub value: Option<u32>,
}
